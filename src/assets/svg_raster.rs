use crate::foundation::error::{OgError, OgResult};
use crate::foundation::pixel::rgba_image_from_premul;

// Avoid pathological allocations from hostile inputs.
const MAX_DIM: u32 = 16_384;

/// Rasterize `tree` into exactly `width`x`height`, stretching the SVG viewport to fill it.
pub(crate) fn rasterize_svg(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> OgResult<image::RgbaImage> {
    let size = tree.size();
    if !size.width().is_finite()
        || !size.height().is_finite()
        || size.width() <= 0.0
        || size.height() <= 0.0
    {
        return Err(OgError::render("svg has invalid width/height"));
    }
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(OgError::render(format!(
            "svg raster size out of range: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| OgError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    rgba_image_from_premul(pixmap.data().to_vec(), width, height)
}
