use anyhow::{Context, Result};

use cesium_ion::Asset;
use cesium_ion::browser::{
    ASSET_ITEM_PROVIDER_KEY, DataItemProvider, IonDataItemGuiProvider, IonDataItemProvider,
    MimeUri,
};
use cesium_ion::import::ImportOutcome;
use cesium_ion::project::ProjectFile;

use super::dialogs::ScriptedDialogs;
use crate::cli_commands::layers::{AddArgs, AddByIdArgs, DropArgs, LayersArgs};
use crate::cli_runtime::Session;

fn report_outcome(project: &ProjectFile, outcome: Option<ImportOutcome>) -> Result<()> {
    match outcome {
        Some(ImportOutcome::Added(layer)) => {
            println!(
                "Added layer {} ({}) to {}",
                layer.name,
                layer.provider,
                project.path().display()
            );
            Ok(())
        }
        Some(ImportOutcome::Aborted) => anyhow::bail!("token creation failed; no layer added"),
        None => anyhow::bail!("cancelled; no layer added"),
    }
}

pub(super) fn handle_add(session: &Session, args: AddArgs) -> Result<()> {
    let mut root = IonDataItemProvider
        .create_data_item("")
        .context("ion browser root")?;
    root.populate(&session.client);
    let item = root.find_child(&args.asset_id).with_context(|| {
        format!(
            "asset {} is not among the completed 3D tiles assets",
            args.asset_id
        )
    })?;

    let mut project = ProjectFile::open(&session.project)?;
    let mut dialogs = ScriptedDialogs {
        token: args.token,
        ..Default::default()
    };
    let gui = IonDataItemGuiProvider::new(&session.client);
    let outcome = gui.add_asset(item.asset(), &mut dialogs, &mut project)?;
    report_outcome(&project, outcome)
}

pub(super) fn handle_drop(session: &Session, args: DropArgs) -> Result<()> {
    let uri = MimeUri {
        provider_key: ASSET_ITEM_PROVIDER_KEY.to_string(),
        name: args.name.unwrap_or_else(|| args.asset_id.clone()),
        uri: format!("{}\n{}", args.asset_id, args.asset_type.to_ascii_uppercase()),
    };

    let mut project = ProjectFile::open(&session.project)?;
    let mut dialogs = ScriptedDialogs {
        token: args.token,
        ..Default::default()
    };
    let gui = IonDataItemGuiProvider::new(&session.client);
    if !gui.accepts_drop(&uri) {
        anyhow::bail!("drop payload is not an ion asset");
    }
    let asset = Asset::from_drop_uri(&uri.name, &uri.uri)?;
    let outcome = gui.add_asset(&asset, &mut dialogs, &mut project)?;
    report_outcome(&project, outcome)
}

pub(super) fn handle_add_by_id(session: &Session, args: AddByIdArgs) -> Result<()> {
    let mut project = ProjectFile::open(&session.project)?;
    let mut dialogs = ScriptedDialogs {
        asset_id: Some(args.asset_id),
        access_token: Some(args.token),
        ..Default::default()
    };
    let gui = IonDataItemGuiProvider::new(&session.client);
    let outcome = gui.add_asset_by_id(&mut dialogs, &mut project)?;
    report_outcome(&project, outcome)
}

pub(super) fn handle_layers(session: &Session, args: LayersArgs) -> Result<()> {
    let project = ProjectFile::open(&session.project)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(project.layers()).context("serialize layers json")?
        );
    } else {
        for l in project.layers() {
            println!("{} {} {}", l.provider, l.name, l.uri);
        }
    }
    Ok(())
}
