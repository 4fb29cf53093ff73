//! The [`Sequence`] abstraction shared by every operation in this crate.

/// An ordered, finite collection that can be viewed as a contiguous slice.
///
/// Implemented for the standard contiguous containers and for references to
/// any sequence, so callers can pass `Vec<T>`, arrays, boxed slices or
/// borrowed slices interchangeably.
///
/// # Examples
///
/// ```rust
/// use sequence_utils::Sequence;
///
/// fn first<T, S: Sequence<T> + ?Sized>(sequence: &S) -> Option<&T> {
///     sequence.as_slice().first()
/// }
///
/// assert_eq!(first(&vec![1, 2]), Some(&1));
/// assert_eq!(first(&[3, 4]), Some(&3));
/// assert_eq!(first::<u8, [u8]>(&[]), None);
/// ```
pub trait Sequence<T> {
    /// Returns the elements in order.
    fn as_slice(&self) -> &[T];

    /// Number of elements in the sequence.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> Sequence<T> for [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence<T> for [T; N] {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Sequence<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Sequence<T> for Box<[T]> {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, S: Sequence<T> + ?Sized> Sequence<T> for &S {
    fn as_slice(&self) -> &[T] {
        (**self).as_slice()
    }
}

impl<T, S: Sequence<T> + ?Sized> Sequence<T> for &mut S {
    fn as_slice(&self) -> &[T] {
        (**self).as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total<S: Sequence<u32> + ?Sized>(sequence: &S) -> u32 {
        sequence.as_slice().iter().sum()
    }

    #[test]
    fn test_vec_and_array() {
        assert_eq!(total(&vec![1, 2, 3]), 6);
        assert_eq!(total(&[4, 5]), 9);
    }

    #[test]
    fn test_slices_and_references() {
        let data = vec![1, 2, 3];
        let slice: &[u32] = &data;
        assert_eq!(total(slice), 6);
        assert_eq!(total(&slice), 6);

        let mut owned = vec![7];
        let borrowed = &mut owned;
        assert_eq!(total(&borrowed), 7);
    }

    #[test]
    fn test_boxed_slice() {
        let boxed: Box<[u32]> = vec![10, 20].into_boxed_slice();
        assert_eq!(total(&boxed), 30);
        assert_eq!(Sequence::len(&boxed), 2);
        assert!(!Sequence::is_empty(&boxed));
    }

    #[test]
    fn test_empty() {
        let empty: Vec<u32> = Vec::new();
        assert!(Sequence::is_empty(&empty));
        assert_eq!(Sequence::len(&empty), 0);
    }
}
