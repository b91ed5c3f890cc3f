use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use anyhow::Context;

use crate::{
    foundation::{
        core::Canvas,
        error::{StudioError, StudioResult},
    },
    state::overlay::TextOverlay,
};

const FILL: &str = "#FFFFFF";
const STROKE: &str = "#000000";

/// Where the overlay lines go for a given canvas and font size.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    pub font_size: f32,
    pub stroke_width: f32,
    pub center_x: f32,
    /// Baseline of the top line, when it has text.
    pub top_baseline: Option<f32>,
    /// Baseline of the bottom line, when it has text.
    pub bottom_baseline: Option<f32>,
}

/// Place the overlay lines. `None` when both lines are empty: nothing is drawn.
pub fn layout_overlay(canvas: Canvas, overlay: &TextOverlay) -> Option<OverlayLayout> {
    if !overlay.has_text() {
        return None;
    }
    let size = overlay.font_size.max(1) as f32;
    let top_margin = (size * 0.6).max(15.0);
    let bottom_margin = (size * 0.4).max(15.0);

    Some(OverlayLayout {
        font_size: size,
        stroke_width: (size / 20.0).max(2.0),
        center_x: canvas.width as f32 / 2.0,
        top_baseline: (!overlay.top.is_empty()).then_some(top_margin + size * 0.8),
        bottom_baseline: (!overlay.bottom.is_empty())
            .then_some(canvas.height as f32 - bottom_margin),
    })
}

/// SVG document drawing the overlay: bold, center-aligned, dark stroke under a light fill.
pub fn overlay_svg(canvas: Canvas, overlay: &TextOverlay, layout: &OverlayLayout) -> String {
    let family = xml_escape(&overlay.font_preset().font_family_css());
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    );
    let _ = write!(
        svg,
        r#"<g font-family="{family}" font-size="{size}" font-weight="bold" text-anchor="middle" fill="{FILL}" stroke="{STROKE}" stroke-width="{sw}" stroke-linejoin="round" paint-order="stroke">"#,
        size = layout.font_size,
        sw = layout.stroke_width,
    );
    let lines = [
        (layout.top_baseline, overlay.top.as_str()),
        (layout.bottom_baseline, overlay.bottom.as_str()),
    ];
    for (baseline, text) in lines {
        if let Some(y) = baseline {
            let _ = write!(
                svg,
                r#"<text x="{x}" y="{y}" xml:space="preserve">{t}</text>"#,
                x = layout.center_x,
                t = xml_escape(text),
            );
        }
    }
    svg.push_str("</g></svg>");
    svg
}

/// Escape markup and replace characters XML 1.0 cannot carry with a space.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\t' | '\n' | '\r' => out.push(c),
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => out.push(' '),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Rasterizes overlay SVG with `resvg`. The font database is built on first use.
#[derive(Default)]
pub struct TextRasterizer {
    font_dirs: Vec<PathBuf>,
    fontdb: OnceLock<Arc<usvg::fontdb::Database>>,
}

impl std::fmt::Debug for TextRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRasterizer")
            .field("font_dirs", &self.font_dirs)
            .field("fontdb_loaded", &self.fontdb.get().is_some())
            .finish()
    }
}

impl TextRasterizer {
    /// System fonts plus any `.ttf`/`.otf`/`.ttc` files found directly in `font_dirs`.
    pub fn new(font_dirs: Vec<PathBuf>) -> Self {
        Self {
            font_dirs,
            fontdb: OnceLock::new(),
        }
    }

    fn fontdb(&self) -> Arc<usvg::fontdb::Database> {
        self.fontdb
            .get_or_init(|| {
                let mut db = usvg::fontdb::Database::new();
                db.load_system_fonts();
                for dir in &self.font_dirs {
                    load_fonts_from_dir(&mut db, dir);
                }
                tracing::debug!(faces = db.len(), "overlay font database ready");
                Arc::new(db)
            })
            .clone()
    }

    /// Draw the overlay for `canvas` into a premultiplied RGBA8 buffer of the same size.
    ///
    /// Returns `None` when there is no text to draw.
    pub fn rasterize(&self, canvas: Canvas, overlay: &TextOverlay) -> StudioResult<Option<Vec<u8>>> {
        let Some(layout) = layout_overlay(canvas, overlay) else {
            return Ok(None);
        };
        let svg = overlay_svg(canvas, overlay, &layout);

        let opts = usvg::Options {
            fontdb: self.fontdb(),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse overlay svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| StudioError::render("failed to allocate overlay pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(Some(pixmap.take()))
    }
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), %err, "skipping unreadable font");
        }
    }
}

/// Walk the preset's family list, then generic families, then any face at all.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);
            families.push(usvg::fontdb::Family::Serif);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
