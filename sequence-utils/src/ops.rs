//! Compaction, membership, mapping and selection over a single sequence.

use crate::error::{Result, SequenceError};
use crate::sequence::Sequence;

/// Returns a copy of `sequence` with every absent (`None`) element removed.
///
/// # Examples
///
/// ```rust
/// use sequence_utils::compact;
///
/// let compacted: Vec<u32> = compact(&[Some(1), None, Some(2), None, Some(3)]);
/// assert_eq!(compacted, vec![1, 2, 3]);
/// ```
pub fn compact<T, S>(sequence: &S) -> Vec<T>
where
    T: Clone,
    S: Sequence<Option<T>> + ?Sized,
{
    sequence.as_slice().iter().flatten().cloned().collect()
}

/// Checks whether `target` is present in `sequence` using structural equality.
///
/// # Errors
///
/// Returns [`SequenceError::ElementNotFound`] when the whole sequence was scanned
/// without a match.
///
/// # Examples
///
/// ```rust
/// use sequence_utils::{is_included, SequenceError};
///
/// assert_eq!(is_included(&[1, 2, 3], &2), Ok(()));
/// assert_eq!(is_included(&[1, 2, 3], &9), Err(SequenceError::ElementNotFound));
/// ```
pub fn is_included<T, S>(sequence: &S, target: &T) -> Result<()>
where
    T: PartialEq,
    S: Sequence<T> + ?Sized,
{
    if sequence.as_slice().iter().any(|item| item == target) {
        Ok(())
    } else {
        tracing::debug!(len = sequence.as_slice().len(), "element not found in sequence");
        Err(SequenceError::ElementNotFound)
    }
}

/// Applies `map_fn` to each element in order and collects the results.
///
/// The output always has the same length as the input. `map_fn` is expected
/// to be free of side effects; nothing enforces it.
///
/// # Examples
///
/// ```rust
/// use sequence_utils::map;
///
/// let doubled = map(&vec![1, 2, 3], |x: &i32| x * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<T, U, S, F>(sequence: &S, map_fn: F) -> Vec<U>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> U,
{
    sequence.as_slice().iter().map(map_fn).collect()
}

/// Returns the elements of `sequence` for which `predicate` holds, in order.
///
/// # Examples
///
/// ```rust
/// use sequence_utils::select;
///
/// let even = select(&[1, 2, 3, 4], |x: &i32| x % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// ```
pub fn select<T, S, F>(sequence: &S, mut predicate: F) -> Vec<T>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> bool,
{
    sequence
        .as_slice()
        .iter()
        .filter(|item| predicate(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compact_removes_none() {
        let compacted: Vec<i32> = compact(&vec![Some(1), None, Some(2), None, Some(3)]);
        assert_eq!(compacted, vec![1, 2, 3]);
    }

    #[test]
    fn test_compact_all_none() {
        let compacted: Vec<String> = compact(&[None, None]);
        assert!(compacted.is_empty());
    }

    #[test]
    fn test_compact_empty() {
        let empty: Vec<Option<u8>> = Vec::new();
        assert!(compact(&empty).is_empty());
    }

    #[test]
    fn test_is_included_found() {
        assert_eq!(is_included(&[1, 2, 3], &2), Ok(()));
    }

    #[test]
    fn test_is_included_not_found() {
        assert_eq!(
            is_included(&[1, 2, 3], &9),
            Err(SequenceError::ElementNotFound)
        );
    }

    #[test]
    fn test_is_included_structural_equality() {
        let nested = vec![vec!["a".to_string()], vec!["b".to_string(), "c".to_string()]];
        let probe = vec!["b".to_string(), "c".to_string()];
        assert_eq!(is_included(&nested, &probe), Ok(()));
    }

    #[test]
    fn test_is_included_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(is_included(&empty, &0), Err(SequenceError::ElementNotFound));
    }

    #[test]
    fn test_map_doubles() {
        assert_eq!(map(&[1, 2, 3], |x: &i32| x * 2), vec![2, 4, 6]);
    }

    #[test]
    fn test_map_changes_type() {
        let rendered = map(&vec![1u8, 20], |x: &u8| format!("#{x}"));
        assert_eq!(rendered, vec!["#1".to_string(), "#20".to_string()]);
    }

    #[test]
    fn test_select_even() {
        assert_eq!(select(&[1, 2, 3, 4], |x: &i32| x % 2 == 0), vec![2, 4]);
    }

    #[test]
    fn test_select_none_match() {
        assert!(select(&[1, 3, 5], |x: &i32| x % 2 == 0).is_empty());
    }

    proptest! {
        #[test]
        fn test_map_preserves_length_and_order(
            values in proptest::collection::vec(any::<i32>(), 0..32),
        ) {
            let mapped = map(&values, |x: &i32| i64::from(*x) + 1);
            prop_assert_eq!(mapped.len(), values.len());
            for (original, mapped) in values.iter().zip(&mapped) {
                prop_assert_eq!(i64::from(*original) + 1, *mapped);
            }
        }

        #[test]
        fn test_select_keeps_matching_subsequence(
            values in proptest::collection::vec(any::<u16>(), 0..32),
        ) {
            let selected = select(&values, |x: &u16| x % 3 == 0);
            let expected: Vec<u16> = values.iter().copied().filter(|x| x % 3 == 0).collect();
            prop_assert_eq!(selected, expected);
        }
    }
}
