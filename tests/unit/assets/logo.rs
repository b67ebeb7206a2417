use base64::Engine as _;

use super::*;
use crate::assets::decode::svg_fontdb;
use crate::test_support::{find_test_font, png_bytes, serve};

fn b64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Family name of the test font, if the system font database also knows it.
fn system_test_family() -> Option<String> {
    let path = find_test_font()?;
    let mut db = usvg::fontdb::Database::new();
    db.load_font_file(&path).ok()?;
    let family = db.faces().next()?.families.first()?.0.clone();
    svg_fontdb()
        .faces()
        .any(|f| f.families.iter().any(|(n, _)| *n == family))
        .then_some(family)
}

#[test]
fn parse_classifies_references() {
    assert_eq!(LogoSource::parse(""), None);
    assert_eq!(
        LogoSource::parse("https://example.com/logo.png"),
        Some(LogoSource::Url("https://example.com/logo.png".to_string()))
    );
    assert_eq!(
        LogoSource::parse("data:image/svg+xml;base64,PHN2Zz4="),
        Some(LogoSource::Svg("PHN2Zz4=".to_string()))
    );
    assert_eq!(
        LogoSource::parse("data:image/png;base64,iVBOR"),
        Some(LogoSource::Raster("iVBOR".to_string()))
    );
}

#[test]
fn parse_data_uri_without_comma_has_empty_payload() {
    assert_eq!(
        LogoSource::parse("data:image/png;base64"),
        Some(LogoSource::Raster(String::new()))
    );
}

#[test]
fn raster_data_uri_resolves_to_logo_size() {
    let uri = format!(
        "data:image/png;base64,{}",
        b64(&png_bytes(10, 4, [0, 200, 0, 255]))
    );
    let logo = resolve_logo(&LogoSource::parse(&uri).unwrap()).unwrap();
    assert_eq!(logo.dimensions(), (LOGO_SIZE, LOGO_SIZE));
    assert_eq!(logo.get_pixel(75, 75).0, [0, 200, 0, 255]);
}

#[test]
fn svg_data_uri_resolves_to_logo_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32">
        <circle cx="16" cy="16" r="16" fill="#0000ff"/>
    </svg>"##;
    let uri = format!("data:image/svg+xml;base64,{}", b64(svg));
    let logo = resolve_logo(&LogoSource::parse(&uri).unwrap()).unwrap();
    assert_eq!(logo.dimensions(), (LOGO_SIZE, LOGO_SIZE));
    assert_eq!(logo.get_pixel(75, 75).0, [0, 0, 255, 255]);
    assert_eq!(logo.get_pixel(0, 0).0[3], 0);
}

#[test]
fn invalid_base64_is_a_decode_error() {
    let src = LogoSource::Raster("!!!not-base64!!!".to_string());
    assert!(matches!(resolve_logo(&src), Err(OgError::Decode(_))));
}

#[test]
fn malformed_svg_is_a_decode_error() {
    let src = LogoSource::Svg(b64(b"<svg"));
    assert!(matches!(resolve_logo(&src), Err(OgError::Decode(_))));
}

#[test]
fn non_utf8_svg_is_a_decode_error() {
    let src = LogoSource::Svg(b64(&[0xff, 0xfe, 0x00]));
    assert!(matches!(resolve_logo(&src), Err(OgError::Decode(_))));
}

#[test]
fn unreachable_logo_url_is_a_fetch_error() {
    let src = LogoSource::Url("http://127.0.0.1:9/logo.png".to_string());
    assert!(matches!(resolve_logo(&src), Err(OgError::Fetch(_))));
}

#[test]
fn svg_text_is_drawn_with_system_fonts() {
    let Some(family) = system_test_family() else {
        eprintln!("skipping: test font is not a system font");
        return;
    };
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="80">
            <text x="10" y="65" font-family="{family}" font-size="60" fill="#ff0000">JUG</text>
        </svg>"##
    );
    let logo = resolve_logo(&LogoSource::Svg(b64(svg.as_bytes()))).unwrap();
    assert_eq!(logo.dimensions(), (LOGO_SIZE, LOGO_SIZE));
    let inked = logo.pixels().filter(|p| p.0[3] > 128).count();
    assert!(inked > 100, "only {inked} inked pixels");
}

#[test]
fn logo_url_is_fetched_and_resized() {
    let base = serve("200 OK", "image/png", png_bytes(30, 20, [200, 30, 40, 255]));
    let logo = resolve_logo(&LogoSource::Url(format!("{base}/logo.png"))).unwrap();
    assert_eq!(logo.dimensions(), (LOGO_SIZE, LOGO_SIZE));
    assert_eq!(logo.get_pixel(75, 75).0, [200, 30, 40, 255]);
}

#[test]
fn logo_url_with_error_status_is_a_fetch_error() {
    // A decodable body must still be rejected when the status is not 2xx.
    let base = serve("404 Not Found", "image/png", png_bytes(4, 4, [0, 0, 0, 255]));
    let src = LogoSource::Url(format!("{base}/missing.png"));
    assert!(matches!(resolve_logo(&src), Err(OgError::Fetch(_))));
}
