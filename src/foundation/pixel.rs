use crate::foundation::error::{OgError, OgResult};

/// Convert premultiplied RGBA8 bytes back to straight alpha, in place.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Build a straight-alpha [`image::RgbaImage`] from premultiplied RGBA8 bytes.
pub(crate) fn rgba_image_from_premul(
    mut bytes: Vec<u8>,
    width: u32,
    height: u32,
) -> OgResult<image::RgbaImage> {
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(OgError::render("pixmap byte len mismatch"));
    }
    unpremultiply_rgba8_in_place(&mut bytes);
    image::RgbaImage::from_raw(width, height, bytes)
        .ok_or_else(|| OgError::render("failed to wrap pixmap bytes as rgba image"))
}

/// Read a `vello_cpu` render target back into a straight-alpha image.
pub(crate) fn pixmap_to_rgba_image(pixmap: &vello_cpu::Pixmap) -> OgResult<image::RgbaImage> {
    rgba_image_from_premul(
        pixmap.data_as_u8_slice().to_vec(),
        u32::from(pixmap.width()),
        u32::from(pixmap.height()),
    )
}

/// Checked conversion of a raster dimension to the `u16` range `vello_cpu` accepts.
pub(crate) fn dim_u16(v: u32, what: &str) -> OgResult<u16> {
    if v == 0 {
        return Err(OgError::render(format!("{what} must be > 0")));
    }
    v.try_into()
        .map_err(|_| OgError::render(format!("{what} exceeds u16: {v}")))
}
