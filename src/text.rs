//! Font loading, measurement, and greedy word wrapping.
//!
//! Measurement uses the same Parley layout that rendering uses, so a line that measures within
//! the budget also renders within it.

use std::path::Path;

use crate::foundation::error::{OgError, OgResult};

/// Pixel sizes of the three text roles on the card.
pub const TITLE_SIZE_PX: f32 = 90.0;
pub const NAME_SIZE_PX: f32 = 48.0;
pub const JOB_SIZE_PX: f32 = 36.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl TextBrushRgba8 {
    pub(crate) fn opaque(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: 255,
        }
    }
}

/// Bundled font families, each shipping `regular.ttf` and `bold.ttf`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontFamily {
    #[default]
    Geist,
    Roboto,
}

impl FontFamily {
    /// Directory name under the fonts root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Geist => "geist",
            Self::Roboto => "roboto",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Weight {
    Regular,
    Bold,
}

impl Weight {
    fn parley(self) -> parley::style::FontWeight {
        match self {
            Self::Regular => parley::style::FontWeight::NORMAL,
            Self::Bold => parley::style::FontWeight::BOLD,
        }
    }
}

/// A registered font at a fixed pixel size.
#[derive(Clone)]
pub struct FontFace {
    family_name: String,
    weight: Weight,
    size_px: f32,
    pub(crate) font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family_name", &self.family_name)
            .field("weight", &self.weight)
            .field("size_px", &self.size_px)
            .finish_non_exhaustive()
    }
}

impl FontFace {
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

/// The three faces the card uses. Loaded once per run and shared by every speaker.
#[derive(Clone, Debug)]
pub struct FontSet {
    pub title: FontFace,
    pub name: FontFace,
    pub job: FontFace,
}

impl FontSet {
    /// Load `<fonts_dir>/<family>/{regular,bold}.ttf`.
    pub fn load(
        engine: &mut TextLayoutEngine,
        fonts_dir: &Path,
        family: FontFamily,
    ) -> OgResult<Self> {
        let dir = fonts_dir.join(family.dir_name());
        let regular = read_font(&dir.join("regular.ttf"))?;
        let bold = read_font(&dir.join("bold.ttf"))?;
        Self::from_bytes(engine, regular, bold)
    }

    pub fn from_bytes(
        engine: &mut TextLayoutEngine,
        regular: Vec<u8>,
        bold: Vec<u8>,
    ) -> OgResult<Self> {
        Ok(Self {
            title: engine.load_face(regular.clone(), TITLE_SIZE_PX, Weight::Regular)?,
            name: engine.load_face(bold, NAME_SIZE_PX, Weight::Bold)?,
            job: engine.load_face(regular, JOB_SIZE_PX, Weight::Regular)?,
        })
    }
}

fn read_font(path: &Path) -> OgResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| OgError::font(format!("failed to read font '{}': {e}", path.display())))
}

/// Stateful helper for building Parley text layouts.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    pub(crate) fn load_face(
        &mut self,
        font_bytes: Vec<u8>,
        size_px: f32,
        weight: Weight,
    ) -> OgResult<FontFace> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(OgError::font("text size_px must be finite and > 0"));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| OgError::font("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| OgError::font("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(FontFace {
            family_name,
            weight,
            size_px,
            font,
        })
    }

    /// Shape and lay out `text` on a single unbounded line.
    pub(crate) fn layout_plain(
        &mut self,
        text: &str,
        face: &FontFace,
        brush: TextBrushRgba8,
    ) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(face.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(face.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(face.weight.parley()));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        layout
    }

    /// Rendered advance width of `text` in pixels.
    pub fn measure(&mut self, text: &str, face: &FontFace) -> f32 {
        self.layout_plain(text, face, TextBrushRgba8::default())
            .width()
    }

    /// [`wrap_words`] measured with `face`.
    pub fn wrap(&mut self, text: &str, face: &FontFace, max_width_px: f32) -> Vec<String> {
        wrap_words(text, max_width_px, |line| self.measure(line, face))
    }
}

/// Greedy word wrap against a pixel budget.
///
/// Words are whitespace-separated and never split. A word is appended to the current line when
/// the joined line measures within `max_width_px`; otherwise the current line is flushed and the
/// word starts a new one. A word wider than the budget ends up alone on its own line.
pub fn wrap_words<F>(text: &str, max_width_px: f32, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        let mut candidate = current.join(" ");
        if !candidate.is_empty() {
            candidate.push(' ');
        }
        candidate.push_str(word);

        if measure(&candidate) <= max_width_px {
            current.push(word);
        } else {
            if !current.is_empty() {
                lines.push(current.join(" "));
            }
            current = vec![word];
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

#[cfg(test)]
#[path = "../tests/unit/text.rs"]
mod tests;
