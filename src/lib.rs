//! speaker-og renders OpenGraph share images for a conference speaker lineup.
//!
//! Each speaker in a JSON document becomes one PNG: a fixed template with the wrapped talk
//! title, a circular avatar badge, the speaker's name and job title, and the venue logo.
//!
//! - Load a [`ConferenceDocument`]
//! - Build a [`Compositor`] from a [`RenderConfig`]
//! - Call [`generate_all`] or [`Compositor::render_speaker`]
#![forbid(unsafe_code)]

mod foundation;

/// Avatar, logo, and image decoding.
pub mod assets;
/// Input document model and loader.
pub mod document;
pub mod pipeline;
/// Card rendering.
pub mod render;
/// Fonts, measurement, and word wrapping.
pub mod text;

#[cfg(test)]
#[path = "../tests/support/mod.rs"]
pub(crate) mod test_support;

pub use crate::assets::avatar::{AvatarStyle, prepare_avatar};
pub use crate::assets::logo::{LOGO_SIZE, LogoSource, resolve_logo};
pub use crate::document::{ConferenceDocument, SpeakerRecord, load_document, parse_document};
pub use crate::foundation::error::{OgError, OgResult};
pub use crate::pipeline::generate_all;
pub use crate::render::compose::{Compositor, RenderConfig, TemplateLayout};
pub use crate::text::{FontFace, FontFamily, FontSet, TextLayoutEngine, wrap_words};
