use base64::Engine as _;

use crate::assets::decode::{decode_image, parse_svg, resize_exact};
use crate::assets::fetch::fetch_image;
use crate::assets::svg_raster::rasterize_svg;
use crate::foundation::error::{OgError, OgResult};

/// Edge length of the square logo layer.
pub const LOGO_SIZE: u32 = 150;

const SVG_DATA_PREFIX: &str = "data:image/svg+xml;base64,";
const IMAGE_DATA_PREFIX: &str = "data:image/";

/// A classified logo reference from the input document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoSource {
    /// Plain `http(s)` URL (anything that is not an image data URI).
    Url(String),
    /// Base64 payload of a `data:image/svg+xml;base64,` URI.
    Svg(String),
    /// Base64 payload of any other `data:image/...` URI.
    Raster(String),
}

impl LogoSource {
    /// Classify a logo reference. The empty string means "no logo".
    pub fn parse(reference: &str) -> Option<Self> {
        if reference.is_empty() {
            return None;
        }
        let payload = || {
            reference
                .split_once(',')
                .map(|(_, p)| p)
                .unwrap_or_default()
                .to_string()
        };
        Some(if reference.starts_with(SVG_DATA_PREFIX) {
            Self::Svg(payload())
        } else if reference.starts_with(IMAGE_DATA_PREFIX) {
            Self::Raster(payload())
        } else {
            Self::Url(reference.to_string())
        })
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Svg(_) => "svg",
            Self::Raster(_) => "raster",
        }
    }
}

fn decode_base64(payload: &str) -> OgResult<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| OgError::decode(format!("base64 payload: {e}")))
}

/// Produce the [`LOGO_SIZE`]-square RGBA logo for `source`.
///
/// Callers decide what a failure means; the compositor treats any error as "no logo".
pub fn resolve_logo(source: &LogoSource) -> OgResult<image::RgbaImage> {
    tracing::debug!(kind = source.kind(), "resolving logo");
    match source {
        LogoSource::Svg(payload) => {
            let bytes = decode_base64(payload)?;
            let text = String::from_utf8(bytes)
                .map_err(|e| OgError::decode(format!("svg payload is not utf-8: {e}")))?;
            let tree = parse_svg(text.as_bytes())?;
            rasterize_svg(&tree, LOGO_SIZE, LOGO_SIZE)
        }
        LogoSource::Raster(payload) => {
            let bytes = decode_base64(payload)?;
            let img = decode_image(&bytes)?;
            Ok(resize_exact(&img, LOGO_SIZE, LOGO_SIZE))
        }
        LogoSource::Url(url) => {
            let img = fetch_image(url, true)?;
            Ok(resize_exact(&img, LOGO_SIZE, LOGO_SIZE))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/logo.rs"]
mod tests;
