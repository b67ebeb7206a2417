use crate::assets::decode::resize_exact;
use crate::assets::fetch::fetch_image;
use crate::foundation::error::OgResult;
use crate::render::canvas::fill_ellipse;

/// Geometry and color of an avatar badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvatarStyle {
    /// Inner (photo) width in pixels.
    pub width: u32,
    /// Inner (photo) height in pixels.
    pub height: u32,
    /// Ring thickness around the photo.
    pub border: u32,
    /// Straight-alpha RGBA ring color.
    pub border_rgba: [u8; 4],
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            width: 150,
            height: 150,
            border: 4,
            border_rgba: [255, 255, 255, 255],
        }
    }
}

impl AvatarStyle {
    /// Final badge dimensions: the photo plus the ring on every side.
    pub fn badge_size(&self) -> (u32, u32) {
        (
            self.width + self.border * 2,
            self.height + self.border * 2,
        )
    }
}

/// Download an avatar. Errors propagate: a bad avatar URL is fatal for the speaker.
pub fn download_avatar(url: &str) -> OgResult<image::RgbaImage> {
    fetch_image(url, false)
}

/// Turn an arbitrary photo into a circular badge with a solid ring.
///
/// The photo is resized (aspect ratio ignored) to the style's inner size, its alpha replaced
/// by an inscribed-ellipse mask, and pasted centered onto a filled disk of the ring color.
/// The result is always [`AvatarStyle::badge_size`].
pub fn prepare_avatar(src: &image::RgbaImage, style: &AvatarStyle) -> OgResult<image::RgbaImage> {
    let mut photo = resize_exact(src, style.width, style.height);

    let mask = fill_ellipse(style.width, style.height, [255, 255, 255, 255])?;
    for (px, m) in photo.pixels_mut().zip(mask.pixels()) {
        px.0[3] = m.0[3];
    }

    let (bw, bh) = style.badge_size();
    let mut badge = fill_ellipse(bw, bh, style.border_rgba)?;
    image::imageops::overlay(
        &mut badge,
        &photo,
        i64::from(style.border),
        i64::from(style.border),
    );
    Ok(badge)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/avatar.rs"]
mod tests;
