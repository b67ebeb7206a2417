use super::*;

fn photo(w: u32, h: u32) -> image::RgbaImage {
    image::RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255])
    })
}

#[test]
fn badge_size_is_inner_plus_two_borders() {
    let style = AvatarStyle {
        width: 120,
        height: 120,
        ..AvatarStyle::default()
    };
    for (w, h) in [(400, 300), (37, 512), (120, 120), (1, 1)] {
        let badge = prepare_avatar(&photo(w, h), &style).unwrap();
        assert_eq!(badge.dimensions(), (128, 128), "source {w}x{h}");
    }
}

#[test]
fn default_style_is_150_with_4px_white_ring() {
    let style = AvatarStyle::default();
    assert_eq!(style.badge_size(), (158, 158));
    assert_eq!(style.border_rgba, [255, 255, 255, 255]);
}

#[test]
fn badge_is_opaque_at_center_and_transparent_at_corners() {
    for size in [8u32, 16, 64, 120] {
        let style = AvatarStyle {
            width: size,
            height: size,
            ..AvatarStyle::default()
        };
        let badge = prepare_avatar(&photo(200, 200), &style).unwrap();
        let (w, h) = badge.dimensions();
        assert_eq!(badge.get_pixel(w / 2, h / 2).0[3], 255, "size {size}");
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(badge.get_pixel(x, y).0[3], 0, "size {size} corner {x},{y}");
        }
    }
}

#[test]
fn ring_uses_border_color() {
    let style = AvatarStyle {
        width: 60,
        height: 60,
        border: 6,
        border_rgba: [255, 0, 0, 255],
    };
    let src = image::RgbaImage::from_pixel(60, 60, image::Rgba([0, 0, 255, 255]));
    let badge = prepare_avatar(&src, &style).unwrap();
    // Middle of the left ring segment, well inside the outer disk and outside the photo circle.
    let ring = badge.get_pixel(2, 36).0;
    assert_eq!(ring, [255, 0, 0, 255]);
    let center = badge.get_pixel(36, 36).0;
    assert_eq!(center, [0, 0, 255, 255]);
}
