use langbadge::colors::TextColor;
use langbadge::errors::TemplateError;
use langbadge::template::{BadgeFields, SvgTemplate};
use std::io::Write;

fn fields<'a>(name: &'a str, color: &'a str, text_color: TextColor) -> BadgeFields<'a> {
    BadgeFields {
        name,
        color,
        text_color,
    }
}

#[test]
fn test_inline_matches_bundled_template() {
    let bundled = SvgTemplate::bundled();
    let cases = [
        fields("Go", "#00ADD8", TextColor::White),
        fields("JavaScript", "#f1e05a", TextColor::Black),
        fields("C O'BOL", "#123456", TextColor::White),
    ];

    for case in cases {
        assert_eq!(SvgTemplate::Inline.render(&case), bundled.render(&case));
    }
}

#[test]
fn test_inline_markup() {
    let svg = SvgTemplate::Inline.render(&fields("Go", "#00ADD8", TextColor::White));

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"50\""));
    assert!(svg.contains("<rect width=\"600\" height=\"50\" fill=\"#00ADD8\"/>"));
    assert!(svg.contains("fill=\"#FFF\""));
    assert!(svg.contains("text-anchor=\"middle\""));
    assert!(svg.contains("monospace, sans-serif"));
    assert!(svg.contains(">Go</text>"));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn test_label_escapes_apostrophe_only() {
    let svg = SvgTemplate::Inline.render(&fields("C O'BOL", "#123456", TextColor::White));
    assert!(svg.contains(">C O&apos;BOL</text>"));
}

#[test]
fn test_inline_is_valid_svg() {
    assert!(SvgTemplate::Inline.validate().is_ok());
    assert!(SvgTemplate::bundled().validate().is_ok());
}

#[test]
fn test_custom_template_substitution() {
    let template = SvgTemplate::from_source(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\"><rect width=\"10\" height=\"10\" fill=\"{{color}}\" stroke=\"{{text_color}}\"/><desc>{{name}}</desc></svg>"
            .to_string(),
    )
    .unwrap();

    let svg = template.render(&fields("Ren'Py", "#ff7f7f", TextColor::Black));
    assert_eq!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\"><rect width=\"10\" height=\"10\" fill=\"#ff7f7f\" stroke=\"#000\"/><desc>Ren&apos;Py</desc></svg>"
    );
    assert!(template.validate().is_ok());
}

#[test]
fn test_missing_placeholder_is_rejected() {
    let result = SvgTemplate::from_source("<svg>{{name}} {{color}}</svg>".to_string());
    assert!(matches!(
        result,
        Err(TemplateError::MissingPlaceholder("{{text_color}}"))
    ));
}

#[test]
fn test_non_svg_template_fails_validation() {
    let template =
        SvgTemplate::from_source("{{name}} on {{color}} in {{text_color}}".to_string()).unwrap();
    assert!(matches!(
        template.validate(),
        Err(TemplateError::InvalidSvg(_))
    ));
}

#[test]
fn test_template_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(include_bytes!("../badge.svg")).unwrap();

    let template = SvgTemplate::from_path(file.path()).unwrap();
    assert_eq!(template, SvgTemplate::bundled());
}

#[test]
fn test_template_from_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let result = SvgTemplate::from_path(&dir.path().join("nope.svg"));
    assert!(matches!(result, Err(TemplateError::Read { .. })));
}
