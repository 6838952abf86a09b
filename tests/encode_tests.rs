use langbadge::colors::TextColor;
use langbadge::encode::{create_encoder, Encoder, ImageFormat, PngEncoder, SvgEncoder};
use langbadge::image::Rasterizer;
use langbadge::template::{BadgeFields, SvgTemplate, BADGE_HEIGHT, BADGE_WIDTH};
use std::io::Cursor;

fn go_badge() -> String {
    SvgTemplate::Inline.render(&BadgeFields {
        name: "Go",
        color: "#00ADD8",
        text_color: TextColor::White,
    })
}

#[test]
fn test_image_format_extensions() {
    assert_eq!(ImageFormat::Svg.extension(), "svg");
    assert_eq!(ImageFormat::Png.extension(), "png");
}

#[test]
fn test_svg_encoder_is_passthrough() {
    let mut output = Cursor::new(Vec::new());
    let svg = go_badge();

    SvgEncoder.encode(&svg, &mut output).unwrap();
    assert_eq!(output.into_inner(), svg.as_bytes());
}

#[test]
fn test_png_encoder_rejects_invalid_svg() {
    let encoder = PngEncoder::new();
    let mut cursor = Cursor::new(Vec::new());
    assert!(encoder
        .encode("<invalid>svg</invalid>", &mut cursor)
        .is_err());
}

#[test]
fn test_png_encoder_output() {
    let encoder = create_encoder(ImageFormat::Png);
    let mut output = Cursor::new(Vec::new());

    encoder.encode(&go_badge(), &mut output).unwrap();
    let data = output.into_inner();
    assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_rasterizer_uses_badge_size() {
    let rasterizer = Rasterizer::new();

    let pixmap = rasterizer.render(&go_badge()).unwrap();
    assert_eq!(pixmap.width(), BADGE_WIDTH);
    assert_eq!(pixmap.height(), BADGE_HEIGHT);
}

#[test]
fn test_rasterizer_fills_background() {
    let pixmap = Rasterizer::new().render(&go_badge()).unwrap();

    // Top-left corner is plain background
    let pixel = pixmap.pixel(0, 0).unwrap();
    assert_eq!(
        (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()),
        (0x00, 0xAD, 0xD8, 0xFF)
    );
}
