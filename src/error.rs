use thiserror::Error;

pub type HelperResult<T> = Result<T, HelperError>;

/// Validation failures surfaced to the template author.
///
/// Both variants are synchronous, non-retryable input errors: builders
/// validate before emitting anything, so a failed call never leaves a
/// partial fragment in the sink.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HelperError {
    #[error("Builder '{builder}' requires a body")]
    MissingBody { builder: &'static str },

    #[error("Invalid list item: {reason}")]
    InvalidListItem { reason: String },
}
