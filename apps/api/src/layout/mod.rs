// Page layout: font metrics, word-wrap and pagination.
// Pure geometry; knows nothing about PDF syntax.

pub mod font_metrics;
pub mod wrap;

// Re-export the public API consumed by the renderer.
pub use font_metrics::{default_page_config, PageConfig, PT_PER_MM};
pub use wrap::{paginate, PageLayout};
