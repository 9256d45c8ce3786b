//! Record persistence.
//!
//! The store is a trait so handlers stay independent of where records live. The default
//! backend is a single pretty-printed JSON file.

pub mod json_file;
pub mod migration;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

pub use json_file::JsonFileStore;

/// Loads and saves the single resume record.
///
/// Carried in `AppState` as `Arc<dyn RecordStore>`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns the stored record, or the default record when nothing has been saved yet.
    async fn load(&self) -> Result<ResumeRecord, AppError>;

    async fn save(&self, record: &ResumeRecord) -> Result<(), AppError>;
}
