//! Image inputs for the compositor: remote fetches, decoding, SVG rasterization, and the two
//! derived layers (avatar badge and logo).

/// Circular bordered avatar badge.
pub mod avatar;
pub(crate) mod decode;
pub(crate) mod fetch;
/// Logo reference classification and resolution.
pub mod logo;
pub(crate) mod svg_raster;
