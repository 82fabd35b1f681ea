// Layout: text measurement, line wrapping, template styles and the page-flow cursor.
// Everything here is synchronous and CPU-bound; handlers call it inside
// tokio::task::spawn_blocking.

pub mod display;
pub mod font_metrics;
pub mod normalize;
pub mod page_flow;
pub mod style;
pub mod wrap;

pub use style::TemplateId;
