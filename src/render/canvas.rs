use kurbo::Shape;

use crate::foundation::error::OgResult;
use crate::foundation::pixel::{dim_u16, pixmap_to_rgba_image};
use crate::text::TextBrushRgba8;

// Room around a text layout for glyph ink that overhangs its advance box.
const TEXT_PAD_PX: u32 = 16;

/// Rasterize an ellipse inscribed in the full `width`x`height` box, filled with a straight-alpha
/// color, on a transparent background.
pub(crate) fn fill_ellipse(width: u32, height: u32, rgba: [u8; 4]) -> OgResult<image::RgbaImage> {
    let w = dim_u16(width, "ellipse width")?;
    let h = dim_u16(height, "ellipse height")?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        rgba[0], rgba[1], rgba[2], rgba[3],
    ));

    let rx = f64::from(width) / 2.0;
    let ry = f64::from(height) / 2.0;
    let e = kurbo::Ellipse::new((rx, ry), (rx, ry), 0.0);
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in e.path_elements(0.1) {
        p.push(el);
    }
    ctx.fill_path(&p);

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    pixmap_to_rgba_image(&pixmap)
}

/// Rasterize a laid-out text block into its own transparent image.
///
/// The image is at most `max_width`x`max_height` plus padding; ink beyond that is clipped, which
/// callers use to stop at the canvas edge. The returned offset is where the image's origin sits
/// relative to the layout origin.
pub(crate) fn rasterize_layout(
    layout: &parley::Layout<TextBrushRgba8>,
    font: &vello_cpu::peniko::FontData,
    max_width: u32,
    max_height: u32,
) -> OgResult<(image::RgbaImage, i64)> {
    let width = (layout.width().ceil().max(1.0) as u32)
        .min(max_width.max(1))
        .saturating_add(TEXT_PAD_PX * 2);
    let height = (layout.height().ceil().max(1.0) as u32)
        .min(max_height.max(1))
        .saturating_add(TEXT_PAD_PX * 2);
    let w = dim_u16(width, "text width")?;
    let h = dim_u16(height, "text height")?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    let pad = f64::from(TEXT_PAD_PX);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((pad, pad)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    Ok((pixmap_to_rgba_image(&pixmap)?, -i64::from(TEXT_PAD_PX)))
}

/// Bounding box `(x0, y0, x1, y1)`, end-exclusive, of all pixels with non-zero alpha.
pub(crate) fn ink_bounds(img: &image::RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if px.0[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x + 1, y + 1),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
        });
    }
    bounds
}

/// Alpha-composite `layer` onto `canvas` with its top-left at `(x, y)`. Out-of-bounds parts are
/// clipped.
pub(crate) fn paste(canvas: &mut image::RgbaImage, layer: &image::RgbaImage, x: i64, y: i64) {
    image::imageops::overlay(canvas, layer, x, y);
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
