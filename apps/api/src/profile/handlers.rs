use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::profile::validation::profile_warnings;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    pub profile: Profile,
    /// Advisory only; the profile is saved regardless.
    pub warnings: Vec<String>,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    let profile = state
        .profile_store
        .load()
        .await?
        .ok_or_else(|| AppError::NotFound("No profile has been saved yet".to_string()))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
///
/// Replaces the whole stored record.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<SaveProfileResponse>, AppError> {
    let warnings = profile_warnings(&profile);
    for warning in &warnings {
        warn!("Saving profile with warning: {warning}");
    }

    state.profile_store.save(&profile).await?;

    Ok(Json(SaveProfileResponse { profile, warnings }))
}
