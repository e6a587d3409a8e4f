use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::{ExportRequest, PdfFont};
use crate::models::profile::Profile;
use crate::profile::resolve_profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportLetterRequest {
    /// Letter text as shown to the user, edits included.
    pub letter: String,
    /// Defaults to `DEFAULT_PDF_FONT`.
    #[serde(default)]
    pub font: Option<PdfFont>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("cover-letter-{}.pdf", date.format("%Y-%m-%d"))
}

/// POST /api/v1/letters/export
///
/// Returns the letter as a PDF attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportLetterRequest>,
) -> Result<Response, AppError> {
    let profile = resolve_profile(state.profile_store.as_ref(), request.profile)
        .await?
        .unwrap_or_default();
    let date = state.clock.today();

    let bytes = state.exporter.export(&ExportRequest {
        letter: &request.letter,
        profile: &profile,
        font: request.font.unwrap_or(state.config.default_pdf_font),
        date,
    })?;

    let disposition = format!("attachment; filename=\"{}\"", export_filename(date));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
