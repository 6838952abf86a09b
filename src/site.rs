//! The generation pipeline: fetch, render, write.
//!
//! Badge files are written as soon as each badge is rendered; the README is
//! written once, after the last badge.

use crate::config::Config;
use crate::encode::{create_encoder, Encoder};
use crate::errors::{BadgeError, Result};
use crate::manifest::{self, Manifest};
use crate::readme::Readme;
use crate::render::{RenderedBadge, Renderer};
use crate::template::SvgTemplate;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Languages in the manifest
    pub languages: usize,
    /// Badges rendered (one README line each)
    pub badges: usize,
    /// Badge files written to disk
    pub files_written: usize,
    pub readme_path: PathBuf,
}

/// Fetches the manifest and writes the site.
pub async fn generate(config: &Config) -> Result<Summary> {
    let manifest = manifest::fetch(&config.manifest).await?;
    write_site(config, manifest)
}

/// Picks the configured template, validating external ones.
pub fn load_template(config: &Config) -> Result<SvgTemplate> {
    match config.output.template.as_deref() {
        None => Ok(SvgTemplate::Inline),
        Some(path) => {
            let template = SvgTemplate::from_path(path)?;
            template.validate()?;
            Ok(template)
        }
    }
}

/// Renders every colored language in `manifest` and writes the outputs.
#[instrument(skip(config, manifest), fields(root = %config.output.root.display()))]
pub fn write_site(config: &Config, manifest: Manifest) -> Result<Summary> {
    let start_time = std::time::Instant::now();
    let languages = manifest.len();
    let entries = manifest.into_entries();

    let renderer = Renderer::from_config(config, load_template(config)?);
    let encoder = renderer
        .style()
        .writes_files()
        .then(|| create_encoder(config.output.format));

    let badge_dir = config.badge_dir();
    fs::create_dir_all(&config.output.root)
        .map_err(|e| BadgeError::write(&config.output.root, e))?;
    if encoder.is_some() {
        fs::create_dir_all(&badge_dir).map_err(|e| BadgeError::write(&badge_dir, e))?;
    }

    let mut readme = Readme::new(renderer.title());
    let mut files_written = 0;

    for badge in renderer.badges(&entries) {
        let badge = badge?;
        if let Some(encoder) = &encoder {
            let path = badge_dir.join(format!(
                "{}.{}",
                badge.file_stem,
                config.output.format.extension()
            ));
            write_badge(encoder, &badge, &path)?;
            files_written += 1;
        }
        readme.push_line(&badge.link_line);
    }

    let badges = readme.line_count();
    let readme_path = config.readme_path();
    fs::write(&readme_path, readme.finish()).map_err(|e| BadgeError::write(&readme_path, e))?;

    let duration = start_time.elapsed();
    info!(
        languages,
        badges,
        files_written,
        readme = %readme_path.display(),
        duration = ?duration,
        "Site generated"
    );
    if duration.as_millis() > 1000 {
        tracing::warn!(duration = ?duration, "Slow site generation");
    }

    Ok(Summary {
        languages,
        badges,
        files_written,
        readme_path,
    })
}

fn write_badge(encoder: &impl Encoder, badge: &RenderedBadge, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BadgeError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    encoder.encode(&badge.svg, &mut writer)?;
    writer.flush().map_err(|e| BadgeError::write(path, e))
}
