// Layout engine: font metrics, paragraph styles, word wrap and pagination.
// Pure CPU work; handlers run it inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod page_fill;
pub mod paginate;
pub mod styles;
pub mod wrap;

pub use font_metrics::{default_page_config, FontFamily, PageConfig};
pub use page_fill::{analyze_page_fill, PageFillAnalysis, PageFillVerdict};
pub use paginate::{layout_composition, Page, PlacedItem};
