//! Axum route handlers for the Letters API.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::composer::{LetterAnalysis, LetterComposer};
use crate::models::profile::Profile;
use crate::profile::resolve_profile;
use crate::profile::validation::generation_blockers;
use crate::state::AppState;

pub const INCOMPLETE_INPUT_MESSAGE: &str =
    "Please fill out your profile and add a job description first.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LetterRequest {
    pub job_description: String,
    /// Falls back to the stored profile when omitted.
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub letter: String,
    pub job_title: String,
    pub matching_skills: Vec<String>,
    pub generated_on: NaiveDate,
}

fn composer(state: &AppState) -> LetterComposer<'_> {
    LetterComposer::new(
        &state.vocabulary,
        state.position_extractor.as_ref(),
        state.clock.as_ref(),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/letters/analyze
///
/// Keywords, skill matches and position details, without writing a letter.
/// Works without a profile; nothing will match in that case.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<LetterAnalysis>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let profile = resolve_profile(state.profile_store.as_ref(), request.profile)
        .await?
        .unwrap_or_default();

    Ok(Json(composer(&state).analyze(&profile, &request.job_description)))
}

/// POST /api/v1/letters/generate
///
/// Writes a full letter. Full name, skills, experience and the job description
/// must all be present.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let profile = resolve_profile(state.profile_store.as_ref(), request.profile).await?;

    let missing = generation_blockers(profile.as_ref(), &request.job_description);
    let Some(profile) = profile.filter(|_| missing.is_empty()) else {
        let labels: Vec<&str> = missing.iter().map(|m| m.label()).collect();
        warn!("Letter generation blocked, missing: {}", labels.join(", "));
        return Err(AppError::Validation(INCOMPLETE_INPUT_MESSAGE.to_string()));
    };

    let composer = composer(&state);
    let analysis = composer.analyze(&profile, &request.job_description);
    let letter = composer.write(&profile, &analysis, &mut StdRng::from_entropy());
    info!(
        "Generated cover letter for '{}' ({} matching skills)",
        analysis.position.job_title,
        analysis.matching_skills.len()
    );

    Ok(Json(GenerateResponse {
        letter,
        job_title: analysis.position.job_title,
        matching_skills: analysis.matching_skills,
        generated_on: state.clock.today(),
    }))
}
