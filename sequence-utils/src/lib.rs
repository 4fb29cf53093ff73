//! # Sequence Utilities
//!
//! Free functions over ordered, finite sequences:
//!
//! - **[`combination`]** – Cartesian product of several sequences, in odometer order
//! - **[`compact`]** – drop absent (`None`) elements
//! - **[`is_included`]** – membership test by structural equality
//! - **[`map`]** – transform every element
//! - **[`select`]** – keep the elements matching a predicate
//!
//! Everything is generic over the element type and over the container through
//! the [`Sequence`] trait, so shape mismatches are compile errors. The
//! [`value`] module (feature `json`, enabled by default) provides the same
//! operations for `serde_json::Value` data whose shape is only known at
//! runtime, reporting [`SequenceError::NotSequence`] and the missing-callback
//! errors there.
//!
//! ## Quick Examples
//!
//! ```rust
//! use sequence_utils::{combination, compact, is_included, map, select, SequenceError};
//!
//! let pairs: Vec<Vec<u8>> = combination(&[vec![1, 2], vec![3]]);
//! assert_eq!(pairs, vec![vec![1, 3], vec![2, 3]]);
//!
//! let present: Vec<u8> = compact(&[Some(1), None, Some(3)]);
//! assert_eq!(present, vec![1, 3]);
//!
//! assert_eq!(is_included(&[1, 2, 3], &2), Ok(()));
//! assert_eq!(is_included(&[1, 2, 3], &9), Err(SequenceError::ElementNotFound));
//!
//! assert_eq!(map(&[1, 2, 3], |x: &i32| x * 2), vec![2, 4, 6]);
//! assert_eq!(select(&[1, 2, 3, 4], |x: &i32| x % 2 == 0), vec![2, 4]);
//! ```

pub mod combination;
pub mod error;
pub mod ops;
pub mod sequence;
#[cfg(feature = "json")]
pub mod value;

pub use combination::combination;
pub use error::{Result, SequenceError};
pub use ops::{compact, is_included, map, select};
pub use sequence::Sequence;
