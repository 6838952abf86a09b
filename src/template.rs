//! SVG badge templating.
//!
//! Badges can be produced either from the built-in `format!` template or from
//! an external file using `{{name}}`, `{{color}}` and `{{text_color}}`
//! placeholders. The shipped `badge.svg` renders byte-for-byte the same markup
//! as the inline template.

use crate::colors::TextColor;
use crate::errors::TemplateError;
use crate::escape;
use std::path::Path;
use tracing::instrument;

/// Badge width in pixels.
pub const BADGE_WIDTH: u32 = 600;
/// Badge height in pixels.
pub const BADGE_HEIGHT: u32 = 50;
/// Font stack for the badge label.
pub const FONT_STACK: &str =
    "SFMono-Regular, Consolas, Liberation Mono, Menlo, monospace, sans-serif";

const NAME_PLACEHOLDER: &str = "{{name}}";
const COLOR_PLACEHOLDER: &str = "{{color}}";
const TEXT_COLOR_PLACEHOLDER: &str = "{{text_color}}";

/// Values substituted into a badge template.
#[derive(Debug, Clone, Copy)]
pub struct BadgeFields<'a> {
    /// Unescaped language name
    pub name: &'a str,
    /// Background color as found in the manifest
    pub color: &'a str,
    pub text_color: TextColor,
}

/// Where badge markup comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SvgTemplate {
    /// Built-in `format!` template
    #[default]
    Inline,
    /// Template source text with placeholders
    File(String),
}

impl SvgTemplate {
    /// The `badge.svg` template shipped with the crate.
    pub fn bundled() -> Self {
        SvgTemplate::File(include_str!("../badge.svg").to_string())
    }

    /// Loads an external template and checks its placeholders.
    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(source)
    }

    /// Wraps template text, requiring all three placeholders.
    pub fn from_source(source: String) -> Result<Self, TemplateError> {
        for placeholder in [NAME_PLACEHOLDER, COLOR_PLACEHOLDER, TEXT_COLOR_PLACEHOLDER] {
            if !source.contains(placeholder) {
                return Err(TemplateError::MissingPlaceholder(placeholder));
            }
        }
        Ok(SvgTemplate::File(source))
    }

    /// Renders the badge markup. The name is text-escaped before substitution.
    pub fn render(&self, fields: &BadgeFields<'_>) -> String {
        let label = escape::text(fields.name);
        match self {
            SvgTemplate::Inline => format!(
                concat!(
                    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
                    "  <rect width=\"{w}\" height=\"{h}\" fill=\"{color}\"/>\n",
                    "  <text x=\"{cx}\" y=\"{cy}\" fill=\"{text_color}\" font-family=\"{font}\" font-size=\"20\" text-anchor=\"middle\" dominant-baseline=\"central\">{label}</text>\n",
                    "</svg>\n",
                ),
                w = BADGE_WIDTH,
                h = BADGE_HEIGHT,
                cx = BADGE_WIDTH / 2,
                cy = BADGE_HEIGHT / 2,
                color = fields.color,
                text_color = fields.text_color,
                font = FONT_STACK,
                label = label,
            ),
            // Name goes in last so a label can never introduce a placeholder.
            SvgTemplate::File(source) => source
                .replace(COLOR_PLACEHOLDER, fields.color)
                .replace(TEXT_COLOR_PLACEHOLDER, fields.text_color.hex())
                .replace(NAME_PLACEHOLDER, &label),
        }
    }

    /// Renders a sample badge and parses it, rejecting templates that do not
    /// yield SVG.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let sample = self.render(&BadgeFields {
            name: "Rust",
            color: "#dea584",
            text_color: TextColor::Black,
        });
        usvg::Tree::from_str(&sample, &usvg::Options::default())
            .map(|_| ())
            .map_err(|e| TemplateError::InvalidSvg(e.to_string()))
    }
}
