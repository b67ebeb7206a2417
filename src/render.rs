//! Card rendering: raster primitives on top of `vello_cpu`, and the per-speaker compositor.

pub(crate) mod canvas;
/// Template layout, run configuration, and the [`compose::Compositor`].
pub mod compose;
