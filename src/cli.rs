//! Command-line interface for langbadge.
//!
//! Without any flags the tool fetches the Linguist manifest and writes
//! `svgs/*.svg` plus `README.md` into the current directory.

use crate::config::{CliOverrides, Config};
use crate::encode::ImageFormat;
use crate::errors::Result;
use crate::readme::LinkStyle;
use crate::site::{self, Summary};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// Command-line arguments for langbadge.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to write the README and badge files into.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How README lines link to each language.
    #[arg(short, long, value_enum)]
    pub style: Option<LinkStyle>,

    /// File format for locally written badges.
    #[arg(short, long, value_enum)]
    pub format: Option<ImageFormat>,

    /// SVG template with {{name}}, {{color}} and {{text_color}} placeholders.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// URL of the Linguist languages.yml manifest.
    #[arg(long, value_name = "URL")]
    pub manifest_url: Option<String>,

    /// Manifest download timeout in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// GitHub token to use for the manifest download.
    #[arg(long)]
    pub token: Option<String>,

    /// Set the logging level.
    #[arg(long, short = 'L', value_name = "LEVEL", default_value_t = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO })]
    pub log_level: Level,
}

impl Cli {
    /// Flags that override the configuration defaults.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            manifest_url: self.manifest_url.clone(),
            timeout: self.timeout.map(Duration::from_secs),
            token: self.token.clone(),
            output: self.output.clone(),
            style: self.style,
            format: self.format,
            template: self.template.clone(),
        }
    }
}

/// Executes a full generation run.
pub async fn run(cli: Cli) -> Result<Summary> {
    let config = Config::load(Some(cli.overrides()));
    let summary = site::generate(&config).await?;

    tracing::info!(
        "Wrote {} badges to {}.",
        summary.badges,
        summary.readme_path.to_string_lossy()
    );

    Ok(summary)
}
