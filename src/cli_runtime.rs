use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cesium_ion::model::IonConfig;
use cesium_ion::project::DEFAULT_PROJECT_FILE;
use cesium_ion::{ConfigCredentials, IonClient};

use crate::Commands;

#[derive(Parser)]
#[command(name = "cesium-ion")]
#[command(about = "Browse Cesium ion assets and add them to a map project", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to ./cesium-ion.json when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// ion API base url
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Project file layers are added to
    #[arg(long, global = true, value_name = "PATH")]
    project: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) struct Session {
    pub(crate) config: IonConfig,
    pub(crate) client: IonClient,
    pub(crate) project: PathBuf,
    /// Set once the client reported a failure through its error channel.
    pub(crate) failed: Rc<Cell<bool>>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = IonConfig::load_or_default(cli.config.as_deref())?;
    config.apply_env();
    config.apply_overrides(cli.url, None);

    let project = cli
        .project
        .or_else(|| config.project.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_FILE));

    let client = IonClient::new(&config, Box::new(ConfigCredentials::from_config(&config)))?;
    let failed = Rc::new(Cell::new(false));
    {
        let failed = failed.clone();
        client.error_occurred().connect(move |message: &String| {
            eprintln!("ion: {}", message);
            failed.set(true);
        });
    }

    let session = Session {
        config,
        client,
        project,
        failed,
    };
    crate::cli_exec::handle_command(&session, cli.command)
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "cesium_ion=debug"
    } else {
        "cesium_ion=error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
