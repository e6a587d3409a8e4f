// Printable export of a finished (possibly hand-edited) cover letter.
// Layout is computed from static font metrics, then rendered to PDF.

pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod pdf;

use thiserror::Error;

pub use font_metrics::PdfFont;
pub use pdf::{DocumentExporter, ExportRequest, PdfExporter};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("There is no letter to export")]
    EmptyLetter,

    #[error("Unknown font '{0}', expected times, helvetica or courier")]
    UnknownFont(String),

    #[error("PDF rendering failed: {0}")]
    Render(String),
}
