//! The Linguist language manifest.
//!
//! Only the `color` of each language is read; every other field in
//! `languages.yml` is ignored.

use crate::config::ManifestConfig;
use crate::errors::{ManifestError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Upstream location of `languages.yml`.
pub const LINGUIST_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/github-linguist/linguist/master/lib/linguist/languages.yml";

/// One language from the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Manifest key, may contain spaces and apostrophes
    pub name: String,
    /// `#RRGGBB` color, absent for languages GitHub does not color
    pub color: Option<String>,
}

impl LanguageEntry {
    pub fn new(name: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            name: name.into(),
            color: color.map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawLanguage {
    #[serde(default)]
    color: Option<serde_yaml::Value>,
}

/// Languages keyed by name, kept in byte-wise name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    languages: BTreeMap<String, Option<String>>,
}

impl Manifest {
    /// Decodes `languages.yml`. A `color` that is not a string counts as
    /// missing.
    pub fn from_yaml(source: &str) -> std::result::Result<Self, ManifestError> {
        let raw: BTreeMap<String, RawLanguage> = serde_yaml::from_str(source)?;

        let languages = raw
            .into_iter()
            .map(|(name, language)| {
                let color = match language.color {
                    Some(serde_yaml::Value::String(color)) => Some(color),
                    Some(serde_yaml::Value::Null) | None => None,
                    Some(other) => {
                        debug!(language = %name, value = ?other, "Ignoring non-string color");
                        None
                    }
                };
                (name, color)
            })
            .collect();

        Ok(Self { languages })
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Number of languages that carry a color.
    pub fn colored_len(&self) -> usize {
        self.languages.values().filter(|c| c.is_some()).count()
    }

    /// All languages sorted by name.
    pub fn into_entries(self) -> Vec<LanguageEntry> {
        self.languages
            .into_iter()
            .map(|(name, color)| LanguageEntry { name, color })
            .collect()
    }
}

impl FromIterator<LanguageEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = LanguageEntry>>(iter: I) -> Self {
        Self {
            languages: iter.into_iter().map(|e| (e.name, e.color)).collect(),
        }
    }
}

/// Downloads and decodes the manifest.
///
/// There is no retry: any transport, status or decode failure is returned
/// to the caller.
#[instrument(skip(config), fields(url = %config.url))]
pub async fn fetch(config: &ManifestConfig) -> Result<Manifest> {
    let mut builder = Client::builder().user_agent(concat!("langbadge/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    let mut request = client.get(&config.url);
    if let Some(token) = config.token.as_deref() {
        request = request.bearer_auth(token);
    }

    let start_time = std::time::Instant::now();
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ManifestError::Status(status.as_u16()).into());
    }

    let body = response.text().await?;
    let manifest = Manifest::from_yaml(&body)?;

    info!(
        languages = manifest.len(),
        colored = manifest.colored_len(),
        duration = ?start_time.elapsed(),
        "Fetched language manifest"
    );

    Ok(manifest)
}
