//! Axum route handlers for the Resume API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info, warn};

use crate::compose::{compose, Composition};
use crate::errors::AppError;
use crate::form::{collect, populate, FormState};
use crate::layout::{PageConfig, PageFillVerdict};
use crate::models::resume::ResumeRecord;
use crate::models::sample::sample_resume;
use crate::render::{render_pdf, RenderedPdf};
use crate::state::AppState;

const PAGE_COUNT_HEADER: HeaderName = HeaderName::from_static("x-page-count");
const PDF_FILENAME: &str = "resume.pdf";

/// Unwraps a JSON body, reporting malformed input in the API's error format.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// Fallback for unknown paths.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {uri}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Record
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
///
/// Returns the stored record, or the empty record when nothing has been saved.
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeRecord>, AppError> {
    Ok(Json(state.store.load().await?))
}

/// PUT /api/v1/resume
pub async fn handle_put_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeRecord>, JsonRejection>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = json_body(payload)?;
    save(&state, &record).await?;
    Ok(Json(record))
}

async fn save(state: &AppState, record: &ResumeRecord) -> Result<(), AppError> {
    state.store.save(record).await?;
    info!(
        "Record stored ({} experience, {} education, {} projects) in {}",
        record.experience.len(),
        record.education.len(),
        record.projects.len(),
        state.config.data_file.display()
    );
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Composition & rendering
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/compose
///
/// Returns the block sequence for a record without rendering it.
pub async fn handle_compose(
    payload: Result<Json<ResumeRecord>, JsonRejection>,
) -> Result<Json<Composition>, AppError> {
    let record = json_body(payload)?;
    let composition = compose(&record);
    debug!(
        "Composed {} sections, {} blocks",
        composition.sections.len(),
        composition.block_count()
    );
    Ok(Json(composition))
}

/// POST /api/v1/resume/render
///
/// Renders the posted record to `application/pdf`.
pub async fn handle_render(
    State(state): State<AppState>,
    payload: Result<Json<ResumeRecord>, JsonRejection>,
) -> Result<Response, AppError> {
    let record = json_body(payload)?;
    let pdf = render_record(record, state.page_config.clone()).await?;
    Ok(pdf_response(pdf))
}

/// GET /api/v1/resume/pdf
///
/// Renders the stored record.
pub async fn handle_get_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let record = state.store.load().await?;
    let pdf = render_record(record, state.page_config.clone()).await?;
    Ok(pdf_response(pdf))
}

/// Composition, layout and PDF writing are CPU-bound and run on the blocking pool.
async fn render_record(record: ResumeRecord, config: PageConfig) -> Result<RenderedPdf, AppError> {
    let pdf = tokio::task::spawn_blocking(move || {
        render_pdf(&compose(&record), &config, &record.personal_info.name)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed rendering PDF: {e}")))??;

    match pdf.fill.verdict {
        PageFillVerdict::FitsOnePage => info!(
            "PDF generated: 1 page, {:.0}% filled, {} bytes",
            pdf.fill.last_page_fill * 100.0,
            pdf.bytes.len()
        ),
        PageFillVerdict::Spills => warn!(
            "PDF generated: {} pages, last page {:.0}% filled",
            pdf.fill.page_count,
            pdf.fill.last_page_fill * 100.0
        ),
    }
    Ok(pdf)
}

fn pdf_response(pdf: RenderedPdf) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{PDF_FILENAME}\""),
            ),
            (PAGE_COUNT_HEADER, pdf.fill.page_count.to_string()),
        ],
        pdf.bytes,
    )
        .into_response()
}

// ────────────────────────────────────────────────────────────────────────────
// Form
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume/form
pub async fn handle_get_form(State(state): State<AppState>) -> Result<Json<FormState>, AppError> {
    let record = state.store.load().await?;
    Ok(Json(populate(&record)))
}

/// POST /api/v1/resume/form
///
/// Collects the form into a fresh record, stores it and returns it.
pub async fn handle_post_form(
    State(state): State<AppState>,
    payload: Result<Json<FormState>, JsonRejection>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = collect(&json_body(payload)?);
    save(&state, &record).await?;
    Ok(Json(record))
}

// ────────────────────────────────────────────────────────────────────────────
// Sample
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume/sample
pub async fn handle_get_sample() -> Json<ResumeRecord> {
    Json(sample_resume())
}

/// POST /api/v1/resume/sample
///
/// Replaces the stored record with the sample.
pub async fn handle_post_sample(
    State(state): State<AppState>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = sample_resume();
    save(&state, &record).await?;
    Ok(Json(record))
}
