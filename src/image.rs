//! Rasterization of badge SVGs.

use crate::errors::{BadgeError, ImageError, Result};
use resvg::{tiny_skia, usvg};
use std::sync::Arc;
use tracing::instrument;

/// SVG to pixmap rasterizer backed by the system font database.
#[derive(Debug)]
pub struct Rasterizer {
    font_db: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    #[instrument]
    pub fn new() -> Self {
        let mut font_db = usvg::fontdb::Database::new();
        font_db.load_system_fonts();

        Self {
            font_db: Arc::new(font_db),
        }
    }

    /// Renders at the SVG's own size.
    #[instrument(skip(self, svg_data))]
    pub fn render(&self, svg_data: &str) -> Result<tiny_skia::Pixmap> {
        let start_time = std::time::Instant::now();

        let options = usvg::Options {
            fontdb: Arc::clone(&self.font_db),
            ..Default::default()
        };

        let tree = usvg::Tree::from_str(svg_data, &options)
            .map_err(|e| BadgeError::Image(ImageError::SvgRendering(e.to_string())))?;

        let size = tree.size().to_int_size();
        let (width, height) = (size.width(), size.height());

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            BadgeError::Image(ImageError::PixmapCreation(format!(
                "invalid pixmap size {}x{}",
                width, height
            )))
        })?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        tracing::debug!(
            duration = ?start_time.elapsed(),
            width,
            height,
            "SVG rasterization completed"
        );

        Ok(pixmap)
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
