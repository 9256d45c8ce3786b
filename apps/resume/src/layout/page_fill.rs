//! Page fill summary for a finished layout.
//!
//! A resume is meant to fit one page. The render handlers log this summary and expose the
//! page count to clients so an overflowing record is noticed without opening the PDF.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::PageConfig;
use crate::layout::paginate::PageLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFillVerdict {
    FitsOnePage,
    /// Content continues past the first page.
    Spills,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFillAnalysis {
    pub page_count: usize,
    /// Used fraction of the last page's text area, 0.0..=1.0.
    pub last_page_fill: f32,
    pub verdict: PageFillVerdict,
}

pub fn analyze_page_fill(layout: &PageLayout, config: &PageConfig) -> PageFillAnalysis {
    let available = config.text_height_pt();
    let last_page_fill = if available > 0.0 {
        (layout.last_page_used_pt / available).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let verdict = if layout.page_count() > 1 {
        PageFillVerdict::Spills
    } else {
        PageFillVerdict::FitsOnePage
    };

    PageFillAnalysis {
        page_count: layout.page_count(),
        last_page_fill,
        verdict,
    }
}
