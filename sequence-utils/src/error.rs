use thiserror::Error;

/// Errors returned by the sequence operations.
///
/// The typed functions in this crate never produce [`SequenceError::NotSequence`]
/// or the nil-callback variants; those only surface at the dynamic
/// [`value`](crate::value) boundary where shapes are checked at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The input was not sequence-shaped.
    #[error("collection value is not a sequence")]
    NotSequence,

    /// `map` was called without a map function.
    #[error("map function is nil")]
    NilMapFunction,

    /// `select` was called without a predicate.
    #[error("select function is nil")]
    NilSelectFunction,

    /// The scanned sequence does not contain the target.
    ///
    /// This is an expected outcome of a membership test, not a bug signal.
    #[error("element not found")]
    ElementNotFound,
}

pub type Result<T> = core::result::Result<T, SequenceError>;
