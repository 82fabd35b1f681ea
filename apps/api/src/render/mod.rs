// Render pipeline: section renderers, document assembly, the plain-text fallbacks and
// PDF serialization. Layout runs to a display list first; lopdf only sees positioned
// draw operations.

pub mod document;
pub mod handlers;
pub mod pdf_writer;
pub mod plain_text;
pub mod sections;

use thiserror::Error;

pub use document::render_resume_pdf;
pub use pdf_writer::{DocumentMeta, RenderedPdf};
pub use plain_text::{render_plain_text_pdf, PlainTextProfile};

/// Failures while producing PDF bytes. Layout itself cannot fail.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF serialization failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error while writing PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("text to render is empty")]
    EmptyText,
}
