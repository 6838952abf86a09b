use langbadge::errors::Result;
use std::process::ExitCode;
use tracing_subscriber::FmtSubscriber;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Generation failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
async fn run() -> Result<()> {
    use clap::Parser;
    use langbadge::cli;

    let cli = cli::Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    cli::run(cli).await.map(|_| ())
}

#[cfg(not(feature = "cli"))]
async fn run() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let config = langbadge::config::Config::load(None);
    langbadge::site::generate(&config)
        .await
        .map(|_| ())
}
