use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy for the data layer
// ---------------------------------------------------------------------------

/// Everything that can go wrong between the source file and a rendered plan.
///
/// Only [`DataError::Unavailable`] is an expected runtime failure (missing or
/// malformed source file). The other two variants are contract violations:
/// the UI populates its widgets from the dataset itself, so they indicate a
/// bug rather than bad user input.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// The source file is missing or could not be parsed. Fatal to the
    /// session: nothing can render without a dataset.
    #[error("dataset unavailable: {0}")]
    Unavailable(String),

    /// An indicator name that is not in the dataset's indicator list.
    #[error("unknown indicator '{0}'")]
    UnknownIndicator(String),

    /// The chosen indicator is absent from the dataset's column schema.
    #[error("indicator column '{0}' missing from the dataset")]
    MissingIndicatorColumn(String),
}
