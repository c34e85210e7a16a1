use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use hypnoctl::{Cli, ConfigLoader, RunSettings, loader, run};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dotenv = loader::load_dotenv()?;
    let (config, source) = ConfigLoader::new()
        .with_explicit_path(cli.config.clone())
        .load()?;

    // Logs go to stderr so JSON output on stdout stays pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    debug!(?source, ?dotenv, "configuration loaded");

    let settings = RunSettings::resolve(&cli, &config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &settings, &mut out)?;
    out.flush()?;
    Ok(())
}
