use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("Invalid input dataset: {0}")]
    InvalidInput(#[from] CoreError),

    #[error("Ambiguous ratio: the denominator of '{0}' is zero")]
    AmbiguousRatio(String),
}
