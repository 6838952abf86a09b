use langbadge::colors::{
    parse_color, text_color_for_lightness, Rgb, TextColor, DEFAULT_CONTRAST_THRESHOLD,
};
use langbadge::errors::ColorError;

#[test]
fn test_parse_long_hex() {
    assert_eq!(
        Rgb::from_hex("#00ADD8"),
        Some(Rgb {
            r: 0x00,
            g: 0xAD,
            b: 0xD8
        })
    );
    assert_eq!(Rgb::from_hex("#dea584"), Rgb::from_hex("#DEA584"));
}

#[test]
fn test_parse_short_hex() {
    assert_eq!(
        Rgb::from_hex("#fa0"),
        Some(Rgb {
            r: 0xff,
            g: 0xaa,
            b: 0x00
        })
    );
}

#[test]
fn test_parse_rejects_malformed() {
    for value in ["00ADD8", "#00ADD", "#00ADD8F", "#GGGGGG", "", "#", "#ééé"] {
        assert_eq!(Rgb::from_hex(value), None, "accepted {:?}", value);
    }
}

#[test]
fn test_parse_color_names_language() {
    let err = parse_color("Go", "teal").unwrap_err();
    assert_eq!(
        err,
        ColorError::InvalidHex {
            language: "Go".to_string(),
            value: "teal".to_string()
        }
    );
    assert!(err.to_string().contains("Go"));
}

#[test]
fn test_lightness_bounds() {
    let black = Rgb::from_hex("#000000").unwrap().lightness();
    let white = Rgb::from_hex("#FFFFFF").unwrap().lightness();
    assert!(black.abs() < 0.01, "black lightness {}", black);
    assert!((white - 1.0).abs() < 0.01, "white lightness {}", white);
}

#[test]
fn test_known_language_text_colors() {
    let cases = [
        ("#00ADD8", TextColor::White), // Go
        ("#3572A5", TextColor::White), // Python
        ("#f1e05a", TextColor::Black), // JavaScript
        ("#000080", TextColor::White),
        ("#FFFFFF", TextColor::Black),
        ("#000000", TextColor::White),
    ];

    for (hex, expected) in cases {
        let rgb = Rgb::from_hex(hex).unwrap();
        assert_eq!(
            rgb.text_color(DEFAULT_CONTRAST_THRESHOLD),
            expected,
            "{} (lightness {})",
            hex,
            rgb.lightness()
        );
    }
}

#[test]
fn test_go_is_comfortably_dark() {
    let lightness = Rgb::from_hex("#00ADD8").unwrap().lightness();
    assert!(lightness < 0.68, "Go lightness {}", lightness);
}

#[test]
fn test_lightness_just_below_threshold() {
    // CIE L* of #06c1a1 is 69.99931, a hair under the cut-off
    let rgb = Rgb::from_hex("#06c1a1").unwrap();
    let lightness = rgb.lightness();
    assert!((lightness - 0.6999931).abs() < 1e-6, "lightness {}", lightness);
    assert_eq!(rgb.text_color(DEFAULT_CONTRAST_THRESHOLD), TextColor::White);
}

#[test]
fn test_threshold_is_strict() {
    assert_eq!(text_color_for_lightness(0.7, 0.7), TextColor::White);
    assert_eq!(text_color_for_lightness(0.7001, 0.7), TextColor::Black);
    assert_eq!(text_color_for_lightness(0.0, 0.7), TextColor::White);
    assert_eq!(text_color_for_lightness(1.0, 0.7), TextColor::Black);
}

#[test]
fn test_gray_ramp_is_monotonic() {
    let mut previous = -1.0f64;
    let mut flips = 0;
    let mut last = TextColor::White;

    for v in 0..=255u8 {
        let rgb = Rgb { r: v, g: v, b: v };
        let lightness = rgb.lightness();
        assert!(lightness >= previous, "lightness dropped at {}", v);
        previous = lightness;

        let text = rgb.text_color(DEFAULT_CONTRAST_THRESHOLD);
        if text != last {
            flips += 1;
            last = text;
        }
    }

    assert_eq!(flips, 1);
    assert_eq!(last, TextColor::Black);
}

#[test]
fn test_text_color_hex() {
    assert_eq!(TextColor::White.hex(), "#FFF");
    assert_eq!(TextColor::Black.hex(), "#000");
    assert_eq!(TextColor::Black.to_string(), "#000");
}
