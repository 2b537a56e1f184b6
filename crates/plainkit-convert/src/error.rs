//! Conversion errors.

/// Errors that can occur during conversion.
///
/// Conversion is deterministic, so none of these are worth retrying with the
/// same input.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to parse HTML: {0}")]
    Parse(String),

    #[error("no html element found")]
    NoRootFound,

    #[error("no fragments found")]
    NoFragmentsFound,

    #[error("no convertible content found")]
    NoConvertibleContent,
}
