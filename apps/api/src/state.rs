use std::sync::Arc;

use crate::config::Config;
use crate::export::DocumentExporter;
use crate::generation::clock::Clock;
use crate::generation::position::PositionExtractor;
use crate::generation::vocabulary::Vocabulary;
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where the single user profile lives. Default: JSON key-value file.
    pub profile_store: Arc<dyn ProfileStore>,
    /// Pluggable exporter. Default: PdfExporter.
    pub exporter: Arc<dyn DocumentExporter>,
    /// Source of "today" for the letter date and export filename.
    pub clock: Arc<dyn Clock>,
    /// Job title and requirements extraction. Default: RegexPositionExtractor.
    pub position_extractor: Arc<dyn PositionExtractor>,
    /// Built-in terms plus `EXTRA_KEYWORDS`.
    pub vocabulary: Arc<Vocabulary>,
}
