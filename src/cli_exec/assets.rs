use anyhow::{Context, Result};

use cesium_ion::browser::{DataItemProvider, IonDataItemProvider};

use crate::cli_commands::assets::{AssetsArgs, BrowseArgs};
use crate::cli_runtime::Session;

pub(super) fn handle_assets(session: &Session, args: AssetsArgs) -> Result<()> {
    let assets = session
        .client
        .list_assets(args.page, args.search.as_deref())
        .context("list assets")?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&assets).context("serialize assets json")?
        );
    } else {
        for a in assets {
            let size = a.bytes.map(|b| format!(" {}B", b)).unwrap_or_default();
            println!("{} {} {}{}", a.id, a.asset_type, a.name, size);
        }
    }
    Ok(())
}

pub(super) fn handle_browse(session: &Session, args: BrowseArgs) -> Result<()> {
    let mut root = IonDataItemProvider
        .create_data_item("")
        .context("ion browser root")?;
    let children = root.populate(&session.client);
    if session.failed.get() {
        anyhow::bail!("could not list ion assets");
    }

    if args.json {
        let assets = children.iter().map(|c| c.asset()).collect::<Vec<_>>();
        println!(
            "{}",
            serde_json::to_string_pretty(&assets).context("serialize browse json")?
        );
        return Ok(());
    }

    println!("{}", root.name());
    for child in root.children() {
        println!("  {} {}", child.path(), child.name());
    }
    Ok(())
}
