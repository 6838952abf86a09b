//! Configuration management for langbadge.
//!
//! Defaults reproduce the plain "fetch Linguist, write `svgs/` and
//! `README.md` into the working directory" run. CLI overrides win over
//! environment variables.

use crate::colors::DEFAULT_CONTRAST_THRESHOLD;
use crate::encode::ImageFormat;
use crate::manifest::LINGUIST_MANIFEST_URL;
use crate::readme::{LinkStyle, DEFAULT_TITLE};
use std::path::PathBuf;
use std::time::Duration;

/// Host the environment `GITHUB_TOKEN` may be sent to.
pub const GITHUB_RAW_HOST: &str = "raw.githubusercontent.com";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Manifest download configuration
    pub manifest: ManifestConfig,
    /// Output layout configuration
    pub output: OutputConfig,
    /// Rendering configuration
    pub render: RenderConfig,
}

/// Manifest download configuration
#[derive(Debug, Clone)]
pub struct ManifestConfig {
    /// URL of `languages.yml`
    pub url: String,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Bearer token (optional). Taken from `GITHUB_TOKEN` only for the
    /// GitHub raw host; any other host needs an explicit `--token`.
    pub token: Option<String>,
}

/// Output layout configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory receiving the README and the badge directory
    pub root: PathBuf,
    /// Badge directory, relative to `root`
    pub badge_dir: String,
    /// README file name, relative to `root`
    pub readme: String,
    /// README link style
    pub style: LinkStyle,
    /// Badge file format
    pub format: ImageFormat,
    /// External SVG template (optional)
    pub template: Option<PathBuf>,
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Lightness above which badge text is black
    pub contrast_threshold: f64,
    /// README heading
    pub title: String,
}

/// CLI configuration overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub manifest_url: Option<String>,
    pub timeout: Option<Duration>,
    pub token: Option<String>,
    pub output: Option<PathBuf>,
    pub style: Option<LinkStyle>,
    pub format: Option<ImageFormat>,
    pub template: Option<PathBuf>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            url: LINGUIST_MANIFEST_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
            token: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            badge_dir: "svgs".to_string(),
            readme: "README.md".to_string(),
            style: LinkStyle::default(),
            format: ImageFormat::default(),
            template: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with CLI overrides
    pub fn load(cli_overrides: Option<CliOverrides>) -> Self {
        let mut config = Self::default();

        if let Some(overrides) = cli_overrides {
            if let Some(url) = overrides.manifest_url {
                config.manifest.url = url;
            }
            if let Some(timeout) = overrides.timeout {
                config.manifest.timeout = Some(timeout);
            }
            if let Some(token) = overrides.token {
                config.manifest.token = Some(token);
            }
            if let Some(root) = overrides.output {
                config.output.root = root;
            }
            if let Some(style) = overrides.style {
                config.output.style = style;
            }
            if let Some(format) = overrides.format {
                config.output.format = format;
            }
            if let Some(template) = overrides.template {
                config.output.template = Some(template);
            }
        }

        // Environment variables only fill what the CLI left unset
        if config.manifest.url == LINGUIST_MANIFEST_URL {
            if let Ok(url) = std::env::var("LINGUIST_MANIFEST_URL") {
                config.manifest.url = url;
            }
        }

        // An ambient token is only ever sent to GitHub's raw content host
        if config.manifest.token.is_none() && is_github_raw_host(&config.manifest.url) {
            config.manifest.token = std::env::var("GITHUB_TOKEN").ok();
        }

        config
    }

    /// Directory the badge files are written to
    pub fn badge_dir(&self) -> PathBuf {
        self.output.root.join(&self.output.badge_dir)
    }

    /// Full path of the README
    pub fn readme_path(&self) -> PathBuf {
        self.output.root.join(&self.output.readme)
    }
}

/// Whether `url` points at `raw.githubusercontent.com`.
pub fn is_github_raw_host(url: &str) -> bool {
    reqwest::Url::parse(url)
        .map(|url| url.host_str() == Some(GITHUB_RAW_HOST))
        .unwrap_or(false)
}
