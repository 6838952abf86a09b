//! README generation.
//!
//! One Markdown line per colored language, in one of three link styles. The
//! style is picked once per run and applied to every line.

use crate::colors::TextColor;
use crate::escape;

/// Default README heading.
pub const DEFAULT_TITLE: &str = "Github Language Colors";

/// Static badge endpoint used by [`LinkStyle::ThirdPartyBadgeUrl`].
pub const SHIELDS_BADGE_URL: &str = "https://img.shields.io/badge/";

/// How each README line presents a language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LinkStyle {
    /// Image link to a badge file written next to the README
    #[default]
    LocalSvgLink,
    /// HTML anchor with the colors inlined, no files written
    InlineStyledAnchor,
    /// Image link to a shields.io static badge
    ThirdPartyBadgeUrl,
}

/// Everything a link line needs to know about one badge.
#[derive(Debug, Clone, Copy)]
pub struct BadgeLink<'a> {
    /// Unescaped language name
    pub name: &'a str,
    /// Manifest color, `#` included
    pub color: &'a str,
    pub text_color: TextColor,
    /// Relative path to the local badge file
    pub image_href: &'a str,
}

impl LinkStyle {
    /// Whether this style needs badge files on disk.
    pub fn writes_files(&self) -> bool {
        matches!(self, LinkStyle::LocalSvgLink)
    }

    /// Renders the README line for `badge`, trailing newline included.
    pub fn line(&self, badge: &BadgeLink<'_>) -> String {
        let url = escape::trending_url(badge.name);
        match self {
            LinkStyle::LocalSvgLink => format!("[![]({})]({})\n", badge.image_href, url),
            LinkStyle::InlineStyledAnchor => format!(
                "<a href=\"{}\" style=\"display: block; padding: 12px; background-color: {}; color: {}; font-family: monospace;\">{}</a>\n",
                url,
                badge.color,
                badge.text_color,
                escape::text(badge.name)
            ),
            LinkStyle::ThirdPartyBadgeUrl => format!(
                "[![]({}{}-{})]({})\n",
                SHIELDS_BADGE_URL,
                shields_label(badge.name),
                badge.color.trim_start_matches('#'),
                url
            ),
        }
    }
}

/// shields.io treats `-` and `_` as separators, so they are doubled before
/// the usual URL escaping. `#` would start the fragment and becomes `%23`.
fn shields_label(name: &str) -> String {
    escape::url(&name.replace('-', "--").replace('_', "__")).replace('#', "%23")
}

/// Accumulates README text until the pass is complete.
#[derive(Debug, Clone)]
pub struct Readme {
    buffer: String,
    lines: usize,
}

impl Readme {
    pub fn new(title: &str) -> Self {
        Self {
            buffer: format!("# {}\n\n", title),
            lines: 0,
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.lines += 1;
    }

    /// Number of badge lines pushed so far.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for Readme {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
