use std::sync::{Arc, OnceLock};

use anyhow::Context;

use crate::foundation::error::{OgError, OgResult};

/// Decode any format `image` understands into straight-alpha RGBA8.
pub(crate) fn decode_image(bytes: &[u8]) -> OgResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| OgError::decode(format!("{e:#}")))?;
    Ok(dyn_img.to_rgba8())
}

/// System fonts for SVG `<text>`, loaded once per process.
pub(crate) fn svg_fontdb() -> Arc<usvg::fontdb::Database> {
    static FONTDB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTDB
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts for svg text");
            Arc::new(db)
        })
        .clone()
}

pub(crate) fn parse_svg(bytes: &[u8]) -> OgResult<usvg::Tree> {
    let opts = usvg::Options {
        fontdb: svg_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(bytes, &opts)
        .context("parse svg tree")
        .map_err(|e| OgError::decode(format!("{e:#}")))?;
    Ok(tree)
}

/// Resize to exactly `width`x`height` with Lanczos3, ignoring aspect ratio.
pub(crate) fn resize_exact(src: &image::RgbaImage, width: u32, height: u32) -> image::RgbaImage {
    if src.dimensions() == (width, height) {
        return src.clone();
    }
    image::imageops::resize(src, width, height, image::imageops::FilterType::Lanczos3)
}
