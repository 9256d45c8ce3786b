use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageConfig;
use crate::storage::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable record store. Default: JsonFileStore at RESUME_DATA_FILE.
    pub store: Arc<dyn RecordStore>,
    /// Page geometry and font family used by the PDF renderer.
    pub page_config: PageConfig,
}
