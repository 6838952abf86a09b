//! Badge file encoding.
//!
//! Badges are written as SVG by default; PNG goes through the rasterizer.

use crate::errors::{BadgeError, ImageError, Result};
use std::io::Write;
use tracing::instrument;

/// Supported badge file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

/// Encoder trait for badge formats.
pub trait Encoder {
    /// Encode the given SVG markup into `writer`.
    fn encode(&self, svg_data: &str, writer: &mut dyn Write) -> Result<()>;
}

/// SVG encoder that writes the markup as-is.
#[derive(Debug, Default)]
pub struct SvgEncoder;

impl Encoder for SvgEncoder {
    fn encode(&self, svg_data: &str, writer: &mut dyn Write) -> Result<()> {
        writer
            .write_all(svg_data.as_bytes())
            .map_err(|e| BadgeError::Image(ImageError::SvgWrite(e.to_string())))
    }
}

/// PNG encoder using resvg and the png crate.
#[derive(Debug, Default)]
pub struct PngEncoder {
    rasterizer: crate::image::Rasterizer,
}

impl PngEncoder {
    pub fn new() -> Self {
        Self {
            rasterizer: crate::image::Rasterizer::new(),
        }
    }
}

impl Encoder for PngEncoder {
    #[instrument(skip(self, svg_data, writer))]
    fn encode(&self, svg_data: &str, writer: &mut dyn Write) -> Result<()> {
        let pixmap = self.rasterizer.render(svg_data)?;

        let mut png_encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
        png_encoder.set_color(png::ColorType::Rgba);
        png_encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = png_encoder
            .write_header()
            .map_err(|e| BadgeError::Image(ImageError::PngWrite(e.to_string())))?;

        png_writer
            .write_image_data(pixmap.data())
            .map_err(|e| BadgeError::Image(ImageError::PngWrite(e.to_string())))?;

        png_writer
            .finish()
            .map_err(|e| BadgeError::Image(ImageError::PngWrite(e.to_string())))
    }
}

/// Enum to hold the encoder picked for a run.
#[derive(Debug)]
pub enum EncoderType {
    Svg(SvgEncoder),
    Png(PngEncoder),
}

impl Encoder for EncoderType {
    fn encode(&self, svg_data: &str, writer: &mut dyn Write) -> Result<()> {
        match self {
            EncoderType::Svg(encoder) => encoder.encode(svg_data, writer),
            EncoderType::Png(encoder) => encoder.encode(svg_data, writer),
        }
    }
}

/// Factory function to create an encoder for the specified format.
pub fn create_encoder(format: ImageFormat) -> EncoderType {
    match format {
        ImageFormat::Svg => EncoderType::Svg(SvgEncoder),
        ImageFormat::Png => EncoderType::Png(PngEncoder::new()),
    }
}
