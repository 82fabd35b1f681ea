//! Page flow: the vertical write cursor and page-break decisions for one render.
//!
//! Drawing primitives never break pages. Callers reserve space with
//! [`PageFlow::ensure_space`] first, which keeps every baseline on the page: overflow
//! always opens a new page and nothing is clipped.

use tracing::debug;

use crate::layout::display::{DrawOp, LaidOutDocument, LaidOutPage, PageSize, Rgb, TextRun};
use crate::layout::font_metrics::FontFace;

/// Cursor state for a single render call. Created fresh per document, never shared.
#[derive(Debug)]
pub struct PageFlow {
    page_size: PageSize,
    margin: f32,
    /// Baseline of the next line, measured from the bottom edge.
    y: f32,
    pages: Vec<LaidOutPage>,
}

impl PageFlow {
    /// Opens the first page with the cursor at the top margin.
    pub fn new(page_size: PageSize, margin: f32) -> Self {
        PageFlow {
            page_size,
            margin,
            y: page_size.height - margin,
            pages: vec![LaidOutPage::default()],
        }
    }

    pub fn page_width(&self) -> f32 {
        self.page_size.width
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Page width minus both horizontal margins.
    pub fn content_width(&self) -> f32 {
        self.page_size.width - 2.0 * self.margin
    }

    /// Right edge of the content area.
    pub fn right_edge(&self) -> f32 {
        self.page_size.width - self.margin
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Starts a new page if fewer than `needed` points remain above the bottom margin.
    /// Returns whether a page break happened.
    pub fn ensure_space(&mut self, needed: f32) -> bool {
        if self.y - needed < self.margin {
            self.page_break();
            true
        } else {
            false
        }
    }

    /// Closes the current page and opens the next one with the cursor reset.
    pub fn page_break(&mut self) {
        self.pages.push(LaidOutPage::default());
        self.y = self.page_size.height - self.margin;
        debug!("page break, now on page {}", self.pages.len());
    }

    /// Moves the cursor down by `height` points.
    pub fn advance(&mut self, height: f32) {
        self.y -= height;
    }

    /// Draws `text` with its baseline at the cursor. Empty strings draw nothing.
    pub fn draw_text(&mut self, x: f32, text: &str, face: FontFace, size: f32, color: Rgb) {
        let y = self.y;
        self.draw_text_at(x, y, text, face, size, color);
    }

    /// Draws `text` at an explicit baseline on the current page.
    pub fn draw_text_at(&mut self, x: f32, y: f32, text: &str, face: FontFace, size: f32, color: Rgb) {
        if text.is_empty() {
            return;
        }
        self.push(DrawOp::Text(TextRun {
            x,
            y,
            face,
            size,
            color,
            text: text.to_string(),
        }));
    }

    /// Draws a horizontal rule at the cursor.
    pub fn draw_rule(&mut self, x1: f32, x2: f32, color: Rgb, thickness: f32) {
        let y = self.y;
        self.push(DrawOp::Rule {
            x1,
            x2,
            y,
            color,
            thickness,
        });
    }

    /// Marks a clickable URI area on the current page.
    pub fn add_link(&mut self, rect: [f32; 4], uri: &str) {
        self.push(DrawOp::Link {
            rect,
            uri: uri.to_string(),
        });
    }

    pub fn finish(self) -> LaidOutDocument {
        LaidOutDocument {
            page_size: self.page_size,
            pages: self.pages,
        }
    }

    fn push(&mut self, op: DrawOp) {
        // `pages` is never empty: `new` opens one and nothing removes pages.
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> PageFlow {
        PageFlow::new(PageSize::A4, 48.0)
    }

    #[test]
    fn test_new_flow_starts_at_top_margin() {
        let f = flow();
        assert_eq!(f.page_count(), 1);
        assert!((f.y() - (841.89 - 48.0)).abs() < 1e-3);
        assert!((f.content_width() - (595.28 - 96.0)).abs() < 1e-3);
    }

    #[test]
    fn test_ensure_space_without_break() {
        let mut f = flow();
        assert!(!f.ensure_space(100.0));
        assert_eq!(f.page_count(), 1);
    }

    #[test]
    fn test_ensure_space_breaks_when_insufficient() {
        let mut f = flow();
        f.advance(700.0);
        // 841.89 - 48 - 700 = 93.89 left above bottom margin at 48 → 45.89 usable
        assert!(f.ensure_space(50.0));
        assert_eq!(f.page_count(), 2);
        assert!((f.y() - (841.89 - 48.0)).abs() < 1e-3);
    }

    #[test]
    fn test_near_exact_fit_does_not_break() {
        let mut f = flow();
        let usable = f.y() - f.margin();
        assert!(!f.ensure_space(usable - 0.5));
        assert!(f.ensure_space(usable + 0.5));
    }

    #[test]
    fn test_cursor_within_margins_after_ensure() {
        let mut f = flow();
        for _ in 0..500 {
            f.ensure_space(15.0);
            assert!(f.y() >= f.margin() && f.y() <= 841.89 - f.margin());
            f.draw_text(48.0, "line", FontFace::Helvetica, 11.0, Rgb::BLACK);
            f.advance(15.0);
        }
        assert!(f.page_count() > 1);
    }

    #[test]
    fn test_draw_primitives_never_break_pages() {
        let mut f = flow();
        f.advance(10_000.0);
        f.draw_text(48.0, "x", FontFace::Helvetica, 11.0, Rgb::BLACK);
        f.draw_rule(48.0, 100.0, Rgb::BLACK, 1.0);
        assert_eq!(f.page_count(), 1);
    }

    #[test]
    fn test_empty_text_is_not_drawn() {
        let mut f = flow();
        f.draw_text(48.0, "", FontFace::Helvetica, 11.0, Rgb::BLACK);
        assert!(f.finish().pages[0].ops.is_empty());
    }

    #[test]
    fn test_ops_land_on_current_page() {
        let mut f = flow();
        f.draw_text(48.0, "first", FontFace::Helvetica, 11.0, Rgb::BLACK);
        f.page_break();
        f.draw_rule(48.0, 547.28, Rgb::RULE_GREY, 0.8);
        f.add_link([48.0, 700.0, 120.0, 712.0], "https://example.com");
        let doc = f.finish();
        assert_eq!(doc.pages[0].ops.len(), 1);
        assert_eq!(doc.pages[1].ops.len(), 2);
    }
}
