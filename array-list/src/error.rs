use thiserror::Error;

/// Errors returned by [`ArrayList`](crate::ArrayList) operations.
///
/// The messages embed the offending operands verbatim; callers may match on
/// them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArrayListError {
    /// `position` is outside the range accepted by the operation.
    #[error("Index {position} is out of range from a list size of {size}")]
    IndexOutOfRange { position: usize, size: usize },

    /// No element equals the target. Holds the target's `Debug` rendering.
    #[error("{0} element was not found in this list.")]
    ElementNotFound(String),
}

pub type Result<T> = core::result::Result<T, ArrayListError>;
