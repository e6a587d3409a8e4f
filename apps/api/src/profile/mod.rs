// The single local user profile: persistence, validation and its HTTP handlers.

pub mod handlers;
pub mod store;
pub mod validation;

use crate::models::profile::Profile;
use store::{ProfileStore, StoreError};

/// The profile sent with a request wins; otherwise the stored one, if any.
pub async fn resolve_profile(
    store: &dyn ProfileStore,
    supplied: Option<Profile>,
) -> Result<Option<Profile>, StoreError> {
    match supplied {
        Some(profile) => Ok(Some(profile)),
        None => store.load().await,
    }
}
