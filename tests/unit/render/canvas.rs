use super::*;
use crate::test_support::test_font_bytes;
use crate::text::{FontSet, TextLayoutEngine};

#[test]
fn ellipse_is_inscribed_in_box() {
    let img = fill_ellipse(40, 20, [10, 20, 30, 255]).unwrap();
    assert_eq!(img.dimensions(), (40, 20));
    assert_eq!(img.get_pixel(20, 10).0, [10, 20, 30, 255]);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(39, 19).0[3], 0);
    // Horizontal extremes of the ellipse reach the box edges on the center row.
    assert!(img.get_pixel(1, 10).0[3] > 0);
    assert!(img.get_pixel(38, 10).0[3] > 0);
}

#[test]
fn ellipse_rejects_empty_box() {
    assert!(fill_ellipse(0, 10, [0, 0, 0, 255]).is_err());
}

#[test]
fn paste_clips_out_of_bounds() {
    let mut canvas = image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]));
    let layer = image::RgbaImage::from_pixel(3, 3, image::Rgba([255, 255, 255, 255]));
    paste(&mut canvas, &layer, 2, -1);
    assert_eq!(canvas.get_pixel(3, 0).0, [255, 255, 255, 255]);
    assert_eq!(canvas.get_pixel(3, 1).0, [255, 255, 255, 255]);
    assert_eq!(canvas.get_pixel(3, 2).0, [0, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(1, 0).0, [0, 0, 0, 255]);
}

#[test]
fn ink_bounds_cover_opaque_pixels_only() {
    let mut img = image::RgbaImage::new(10, 8);
    assert_eq!(ink_bounds(&img), None);
    img.put_pixel(2, 3, image::Rgba([0, 0, 0, 1]));
    img.put_pixel(6, 5, image::Rgba([0, 0, 0, 255]));
    assert_eq!(ink_bounds(&img), Some((2, 3, 7, 6)));
}

#[test]
fn rasterized_text_has_ink_in_brush_color() {
    let Some(bytes) = test_font_bytes() else {
        eprintln!("skipping: no system font found");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let fonts = FontSet::from_bytes(&mut engine, bytes.clone(), bytes).unwrap();
    let layout = engine.layout_plain("Hello", &fonts.name, TextBrushRgba8::opaque([255, 0, 0]));
    let (img, offset) = rasterize_layout(&layout, &fonts.name.font, u32::MAX, u32::MAX).unwrap();
    assert!(offset < 0);
    let inked: Vec<_> = img.pixels().filter(|p| p.0[3] == 255).collect();
    assert!(!inked.is_empty());
    assert!(inked.iter().all(|p| p.0[..3] == [255, 0, 0]));
}

#[test]
fn glyphs_advance_across_the_measured_width() {
    let Some(bytes) = test_font_bytes() else {
        eprintln!("skipping: no system font found");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let fonts = FontSet::from_bytes(&mut engine, bytes.clone(), bytes).unwrap();
    let text = "Hello World Wide";
    let measured = engine.measure(text, &fonts.title);
    let layout = engine.layout_plain(text, &fonts.title, TextBrushRgba8::opaque([255, 255, 255]));
    let (img, _) = rasterize_layout(&layout, &fonts.title.font, u32::MAX, u32::MAX).unwrap();

    let (x0, y0, x1, _) = ink_bounds(&img).unwrap();
    let ink_width = (x1 - x0) as f32;
    assert!(ink_width >= measured * 0.8, "ink {ink_width} vs advance {measured}");
    assert!(x1 as f32 <= measured + (TEXT_PAD_PX * 2) as f32);
    // Glyphs hang below the layout origin, never above it.
    assert!(y0 >= TEXT_PAD_PX, "ink starts at {y0}");
}

#[test]
fn very_long_line_is_clipped_to_the_given_room() {
    let Some(bytes) = test_font_bytes() else {
        eprintln!("skipping: no system font found");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let fonts = FontSet::from_bytes(&mut engine, bytes.clone(), bytes).unwrap();
    let text = "W".repeat(1500);
    assert!(engine.measure(&text, &fonts.title) > f32::from(u16::MAX));
    let layout = engine.layout_plain(&text, &fonts.title, TextBrushRgba8::opaque([255, 255, 255]));
    let (img, _) = rasterize_layout(&layout, &fonts.title.font, 1000, 300).unwrap();
    assert_eq!(img.width(), 1000 + TEXT_PAD_PX * 2);
    assert!(img.height() <= 300 + TEXT_PAD_PX * 2);
    assert!(ink_bounds(&img).is_some());
}
