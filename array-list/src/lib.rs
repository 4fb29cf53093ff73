//! # Array List
//!
//! A growable, ordered, index-addressable list with insertion and removal at
//! arbitrary positions.
//!
//! - **[`ArrayList<T>`]** – `Vec`-backed list with `add`/`add_at`/`remove`/`remove_at`
//!   and lookup by value or position
//! - **[`ArrayListError`]** – out-of-range positions and missing elements, with
//!   the operands embedded in the message
//!
//! Lookups by value use structural equality (`PartialEq`). Every fallible
//! operation checks its arguments first and leaves the list untouched on
//! error.
//!
//! With the `serde` feature (enabled by default) a list serializes as a plain
//! sequence of its elements.
//!
//! ## Quick Example
//!
//! ```rust
//! use array_list::{ArrayList, ArrayListError};
//!
//! let mut list = ArrayList::new();
//! list.add([1, 2, 3]);
//! assert_eq!(list.size(), 3);
//! assert_eq!(list.get(0), Ok(&1));
//!
//! list.add_at(1, [99]).unwrap();
//! assert_eq!(list.as_slice(), &[1, 99, 2, 3]);
//!
//! assert_eq!(
//!     list.get(5),
//!     Err(ArrayListError::IndexOutOfRange { position: 5, size: 4 })
//! );
//! ```
//!
//! [`ArrayList<T>`]: list::ArrayList

pub mod error;
pub mod list;

pub use error::{ArrayListError, Result};
pub use list::ArrayList;
