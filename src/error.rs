use thiserror::Error;

/// Input rejected before any processing runs.
///
/// The messages are shown to users verbatim by clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("No JSON data provided")]
    MissingBody,

    #[error("No text provided")]
    EmptyText,

    #[error("Text too long. Maximum {max} characters allowed.")]
    TextTooLong { max: usize },
}
