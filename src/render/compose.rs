use std::path::PathBuf;

use anyhow::Context as _;

use crate::assets::avatar::{AvatarStyle, download_avatar, prepare_avatar};
use crate::assets::logo::{LOGO_SIZE, LogoSource, resolve_logo};
use crate::document::SpeakerRecord;
use crate::foundation::error::OgResult;
use crate::render::canvas::{ink_bounds, paste, rasterize_layout};
use crate::text::{FontFamily, FontFace, FontSet, TextBrushRgba8, TextLayoutEngine};

/// Fixed pixel placement of every layer on the card.
///
/// Defaults match the 1920x1061 template.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateLayout {
    /// Left margin of the title and avatar; the title budget is `width - 2 * margin`.
    pub content_margin: u32,
    pub title_y: u32,
    pub title_line_height: u32,
    pub max_title_lines: usize,
    pub title_rgb: [u8; 3],
    pub bottom_section_y: u32,
    pub avatar: AvatarStyle,
    /// Horizontal gap between the avatar photo and the name column.
    pub name_gap: u32,
    pub name_rgb: [u8; 3],
    /// Vertical gap below the name's ink height before the job title.
    pub job_gap: u32,
    pub job_rgb: [u8; 3],
    /// Logo distance from the right edge.
    pub logo_right: u32,
    pub logo_top: u32,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            content_margin: 220,
            title_y: 275,
            title_line_height: 100,
            max_title_lines: 4,
            title_rgb: [255, 255, 255],
            bottom_section_y: 800,
            avatar: AvatarStyle {
                width: 120,
                height: 120,
                border: 4,
                border_rgba: [255, 255, 255, 255],
            },
            name_gap: 40,
            name_rgb: [255, 255, 255],
            job_gap: 20,
            job_rgb: [180, 180, 180],
            logo_right: 50,
            logo_top: 50,
        }
    }
}

impl TemplateLayout {
    pub fn title_width(&self, canvas_width: u32) -> f32 {
        canvas_width.saturating_sub(self.content_margin * 2) as f32
    }

    pub fn name_x(&self) -> u32 {
        self.content_margin + self.avatar.width + self.name_gap
    }

    pub fn logo_origin(&self, canvas_width: u32) -> (i64, i64) {
        (
            i64::from(canvas_width) - i64::from(LOGO_SIZE) - i64::from(self.logo_right),
            i64::from(self.logo_top),
        )
    }
}

/// Paths and font choice for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub template_path: PathBuf,
    pub fonts_dir: PathBuf,
    pub out_dir: PathBuf,
    pub font_family: FontFamily,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("templates/template.png"),
            fonts_dir: PathBuf::from("fonts"),
            out_dir: PathBuf::from("output"),
            font_family: FontFamily::Geist,
        }
    }
}

/// Renders speaker cards onto copies of one template.
///
/// Holds the template, the shared [`FontSet`] and the text engine. A fresh canvas is made for
/// every speaker; nothing else carries over between calls.
pub struct Compositor {
    template: image::RgbaImage,
    fonts: FontSet,
    engine: TextLayoutEngine,
    layout: TemplateLayout,
    out_dir: PathBuf,
}

impl Compositor {
    pub fn new(
        template: image::RgbaImage,
        fonts: FontSet,
        engine: TextLayoutEngine,
        layout: TemplateLayout,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template,
            fonts,
            engine,
            layout,
            out_dir: out_dir.into(),
        }
    }

    /// Load the template and fonts named by `config`.
    pub fn from_config(config: &RenderConfig) -> OgResult<Self> {
        let template = image::open(&config.template_path)
            .with_context(|| format!("open template '{}'", config.template_path.display()))?
            .to_rgba8();
        let mut engine = TextLayoutEngine::new();
        let fonts = FontSet::load(&mut engine, &config.fonts_dir, config.font_family)?;
        Ok(Self::new(
            template,
            fonts,
            engine,
            TemplateLayout::default(),
            config.out_dir.clone(),
        ))
    }

    /// Render one speaker card and write it as PNG. Returns the written path.
    ///
    /// Avatar failures propagate and nothing is written. Logo failures are logged and the card
    /// is rendered without a logo.
    #[tracing::instrument(skip_all, fields(speaker = %speaker.name))]
    pub fn render_speaker(
        &mut self,
        speaker: &SpeakerRecord,
        logo: Option<&LogoSource>,
    ) -> OgResult<PathBuf> {
        let mut canvas = self.template.clone();
        let canvas_width = canvas.width();
        let l = self.layout.clone();

        let title_budget = l.title_width(canvas_width);
        let lines = self
            .engine
            .wrap(&speaker.talk_title, &self.fonts.title, title_budget);
        if lines.len() > l.max_title_lines {
            tracing::debug!(
                lines = lines.len(),
                max = l.max_title_lines,
                "dropping title overflow"
            );
        }
        for (i, line) in lines.iter().take(l.max_title_lines).enumerate() {
            let y = i64::from(l.title_y) + (i as i64) * i64::from(l.title_line_height);
            draw_text(
                &mut self.engine,
                &mut canvas,
                line,
                &self.fonts.title,
                l.title_rgb,
                i64::from(l.content_margin),
                y,
            )?;
        }

        if let Some(url) = speaker.avatar() {
            let photo = download_avatar(url)?;
            let badge = prepare_avatar(&photo, &l.avatar)?;
            paste(
                &mut canvas,
                &badge,
                i64::from(l.content_margin),
                i64::from(l.bottom_section_y),
            );
        }

        let name_x = i64::from(l.name_x());
        let name_y = i64::from(l.bottom_section_y);
        let name_height = draw_text(
            &mut self.engine,
            &mut canvas,
            &speaker.name,
            &self.fonts.name,
            l.name_rgb,
            name_x,
            name_y,
        )?;
        let job_y = name_y + name_height + i64::from(l.job_gap);
        draw_text(
            &mut self.engine,
            &mut canvas,
            &speaker.job_title,
            &self.fonts.job,
            l.job_rgb,
            name_x,
            job_y,
        )?;

        if let Some(source) = logo {
            match resolve_logo(source) {
                Ok(img) => {
                    let (x, y) = l.logo_origin(canvas_width);
                    paste(&mut canvas, &img, x, y);
                }
                Err(e) => tracing::warn!("failed to load logo: {e}"),
            }
        }

        self.save(&canvas, speaker)
    }

    fn save(&self, canvas: &image::RgbaImage, speaker: &SpeakerRecord) -> OgResult<PathBuf> {
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("create output dir '{}'", self.out_dir.display()))?;
        let path = self.out_dir.join(speaker.output_file_name());
        canvas
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "wrote card");
        Ok(path)
    }
}

/// Draw `text` with its layout origin at `(x, y)` and return the height of the painted ink.
///
/// Ink past the right or bottom canvas edge is never rasterized.
fn draw_text(
    engine: &mut TextLayoutEngine,
    canvas: &mut image::RgbaImage,
    text: &str,
    face: &FontFace,
    rgb: [u8; 3],
    x: i64,
    y: i64,
) -> OgResult<i64> {
    if text.trim().is_empty() {
        return Ok(0);
    }
    let room_w = (i64::from(canvas.width()) - x).clamp(0, i64::from(u32::MAX)) as u32;
    let room_h = (i64::from(canvas.height()) - y).clamp(0, i64::from(u32::MAX)) as u32;
    let layout = engine.layout_plain(text, face, TextBrushRgba8::opaque(rgb));
    let (img, offset) = rasterize_layout(&layout, &face.font, room_w, room_h)?;
    paste(canvas, &img, x + offset, y + offset);
    Ok(ink_bounds(&img).map_or(0, |(_, top, _, bottom)| i64::from(bottom - top)))
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
