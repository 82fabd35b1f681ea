//! Plain-text flows: AI-generated resume text and cover letters.
//!
//! Both are single-column, single-font documents. Lines are wrapped, blank lines become
//! vertical gaps, and the flow opens new pages as needed.

use crate::layout::display::{LaidOutDocument, PageSize, Rgb};
use crate::layout::font_metrics::FontFace;
use crate::layout::normalize::normalize;
use crate::layout::page_flow::PageFlow;
use crate::layout::wrap::{wrap, wrap_hard};
use crate::render::pdf_writer::{write_pdf, DocumentMeta, RenderedPdf};
use crate::render::RenderError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainTextProfile {
    pub page_size: PageSize,
    pub face: FontFace,
    pub size: f32,
    pub margin: f32,
    /// Baseline-to-baseline distance.
    pub line_height: f32,
    /// Gap for a blank input line, in multiples of `line_height`.
    pub blank_line_factor: f32,
    /// Split words wider than the column instead of letting them overflow.
    pub hard_split: bool,
}

impl PlainTextProfile {
    pub const GENERATED_RESUME: PlainTextProfile = PlainTextProfile {
        page_size: PageSize::A4,
        face: FontFace::Helvetica,
        size: 11.0,
        margin: 50.0,
        line_height: 11.0 * 1.2,
        blank_line_factor: 1.0,
        hard_split: false,
    };

    pub const COVER_LETTER: PlainTextProfile = PlainTextProfile {
        page_size: PageSize::LETTER,
        face: FontFace::TimesRoman,
        size: 12.0,
        margin: 54.0,
        line_height: 12.0 * 1.35,
        blank_line_factor: 0.6,
        hard_split: true,
    };
}

pub fn layout_plain_text(text: &str, profile: &PlainTextProfile) -> LaidOutDocument {
    let mut flow = PageFlow::new(profile.page_size, profile.margin);
    let width = flow.content_width();
    let lh = profile.line_height;

    for raw in text.replace("\r\n", "\n").split('\n') {
        let line = normalize(raw);
        if line.is_empty() {
            flow.advance(lh * profile.blank_line_factor);
            continue;
        }
        let wrapped = if profile.hard_split {
            wrap_hard(&line, profile.face, profile.size, width)
        } else {
            wrap(&line, profile.face, profile.size, width)
        };
        for l in wrapped {
            flow.ensure_space(lh);
            let x = flow.margin();
            flow.draw_text(x, &l, profile.face, profile.size, Rgb::BLACK);
            flow.advance(lh);
        }
    }
    flow.finish()
}

/// Renders `text` with `profile`. Whitespace-only input is rejected.
pub fn render_plain_text_pdf(
    text: &str,
    profile: &PlainTextProfile,
    meta: &DocumentMeta,
) -> Result<RenderedPdf, RenderError> {
    if text.trim().is_empty() {
        return Err(RenderError::EmptyText);
    }
    write_pdf(&layout_plain_text(text, profile), meta)
}
