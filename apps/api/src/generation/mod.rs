// Cover letter generation: keyword matching against a fixed vocabulary,
// regex position extraction, and template-based composition.
// No network calls; everything runs on the inputs given.

pub mod clock;
pub mod composer;
pub mod handlers;
pub mod keywords;
pub mod position;
pub mod templates;
pub mod vocabulary;
