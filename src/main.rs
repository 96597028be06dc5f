use anyhow::Result;
use clap::Parser;
use photo_check::cli::Cli;
use photo_check::{run_check, CheckSettings};
use std::io::Write;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, the report owns stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::from_default_env().add_directive(cli.log_level().into()))
        .init();

    let mut stdout = std::io::stdout();
    let outcome = run_check(&CheckSettings::default(), &mut stdout).await;
    stdout.flush()?;

    std::process::exit(outcome.exit_code());
}
