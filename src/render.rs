//! The badge renderer.
//!
//! Turns sorted manifest entries into badge markup and README lines. Nothing
//! here touches the filesystem; see [`crate::site`] for that.

use crate::colors::{self, TextColor, DEFAULT_CONTRAST_THRESHOLD};
use crate::config::Config;
use crate::encode::ImageFormat;
use crate::errors::{BadgeError, ColorError, Result};
use crate::escape;
use crate::manifest::LanguageEntry;
use crate::readme::{BadgeLink, LinkStyle, Readme, DEFAULT_TITLE};
use crate::template::{BadgeFields, SvgTemplate};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A single language's badge. Built, written out, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBadge {
    pub name: String,
    pub color: String,
    pub text_color: TextColor,
    pub lightness: f64,
    /// Sanitized name used for the badge file
    pub file_stem: String,
    pub svg: String,
    /// README line, trailing newline included
    pub link_line: String,
}

/// Everything one pass produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Badge markup keyed by file stem
    pub badges: BTreeMap<String, String>,
    pub readme: String,
}

/// Renders badges in one link style with one template.
#[derive(Debug, Clone)]
pub struct Renderer {
    template: SvgTemplate,
    style: LinkStyle,
    format: ImageFormat,
    badge_dir: String,
    threshold: f64,
    title: String,
}

impl Renderer {
    pub fn new(style: LinkStyle, template: SvgTemplate) -> Self {
        Self {
            template,
            style,
            format: ImageFormat::Svg,
            badge_dir: "svgs".to_string(),
            threshold: DEFAULT_CONTRAST_THRESHOLD,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn from_config(config: &Config, template: SvgTemplate) -> Self {
        Self {
            template,
            style: config.output.style,
            format: config.output.format,
            badge_dir: config.output.badge_dir.clone(),
            threshold: config.render.contrast_threshold,
            title: config.render.title.clone(),
        }
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn style(&self) -> LinkStyle {
        self.style
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders one entry. Entries without a color yield `Ok(None)`.
    pub fn render_entry(
        &self,
        entry: &LanguageEntry,
    ) -> std::result::Result<Option<RenderedBadge>, ColorError> {
        let Some(color) = entry.color.as_deref() else {
            return Ok(None);
        };

        let rgb = colors::parse_color(&entry.name, color)?;
        let lightness = rgb.lightness();
        let text_color = colors::text_color_for_lightness(lightness, self.threshold);

        debug!(
            language = %entry.name,
            color = color.trim_start_matches('#'),
            lightness = %format!("{lightness:.4}"),
            "Rendering badge"
        );

        let file_stem = escape::file_stem(&entry.name);
        let svg = self.template.render(&BadgeFields {
            name: &entry.name,
            color,
            text_color,
        });
        let image_href = format!(
            "./{}/{}.{}",
            self.badge_dir,
            file_stem,
            self.format.extension()
        );
        let link_line = self.style.line(&BadgeLink {
            name: &entry.name,
            color,
            text_color,
            image_href: &image_href,
        });

        Ok(Some(RenderedBadge {
            name: entry.name.clone(),
            color: color.to_string(),
            text_color,
            lightness,
            file_stem,
            svg,
            link_line,
        }))
    }

    /// Lazily renders `entries`, skipping uncolored ones and failing on the
    /// first bad color, or on a file stem collision when the style writes
    /// badge files.
    pub fn badges<'a>(&'a self, entries: &'a [LanguageEntry]) -> Badges<'a> {
        Badges {
            renderer: self,
            entries: entries.iter(),
            seen: HashMap::new(),
        }
    }

    /// Renders every entry into badge markup and README text.
    pub fn render(&self, entries: &[LanguageEntry]) -> Result<RenderOutput> {
        let mut readme = Readme::new(&self.title);
        let mut badges = BTreeMap::new();

        for badge in self.badges(entries) {
            let badge = badge?;
            readme.push_line(&badge.link_line);
            badges.insert(badge.file_stem, badge.svg);
        }

        Ok(RenderOutput {
            badges,
            readme: readme.finish(),
        })
    }
}

/// Iterator returned by [`Renderer::badges`].
#[derive(Debug)]
pub struct Badges<'a> {
    renderer: &'a Renderer,
    entries: std::slice::Iter<'a, LanguageEntry>,
    /// file stem -> language that claimed it
    seen: HashMap<String, String>,
}

impl Iterator for Badges<'_> {
    type Item = Result<RenderedBadge>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            let badge = match self.renderer.render_entry(entry) {
                Ok(Some(badge)) => badge,
                Ok(None) => continue,
                Err(e) => return Some(Err(e.into())),
            };

            // Stems only matter when they become file names.
            if self.renderer.style.writes_files() {
                if let Some(first) = self.seen.get(&badge.file_stem) {
                    return Some(Err(BadgeError::Collision {
                        stem: badge.file_stem,
                        first: first.clone(),
                        second: badge.name,
                    }));
                }
                self.seen.insert(badge.file_stem.clone(), badge.name.clone());
            }

            return Some(Ok(badge));
        }
        None
    }
}
