//! Display list: the positioned output of layout, consumed by the PDF writer.
//!
//! Coordinates are PDF user space: origin bottom-left, `y` is the text baseline.

use crate::layout::font_metrics::FontFace;

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const MUTED: Rgb = Rgb::new(0.35, 0.35, 0.35);
    pub const BLUE: Rgb = Rgb::new(0.12, 0.35, 0.85);
    pub const RULE_GREY: Rgb = Rgb::new(0.75, 0.75, 0.75);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }
}

/// Width × height of a page in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub face: FontFace,
    pub size: f32,
    pub color: Rgb,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        color: Rgb,
        thickness: f32,
    },
    /// Clickable URI area, `[x1, y1, x2, y2]`.
    Link { rect: [f32; 4], uri: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub ops: Vec<DrawOp>,
}

impl LaidOutPage {
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }
}

/// All pages of one render, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub page_size: PageSize,
    pub pages: Vec<LaidOutPage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every text run in drawing order, across pages.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(|p| p.text_runs())
    }
}
