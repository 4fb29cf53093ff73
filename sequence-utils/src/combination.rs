//! Cartesian product of several sequences.

use crate::sequence::Sequence;

/// Upper bound on the number of combinations reserved up front.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Returns every combination that takes one element from each sequence.
///
/// Each combination has one position per input sequence; position `i` is drawn
/// from `sequences[i]`. Combinations come out in odometer order: the first
/// sequence varies slowest and the last one varies fastest.
///
/// An empty `sequences` slice, or any empty sequence among them, yields no
/// combinations.
///
/// # Examples
///
/// ```rust
/// use sequence_utils::combination;
///
/// let combinations: Vec<Vec<char>> = combination(&[vec!['a', 'b'], vec!['x', 'y']]);
/// assert_eq!(
///     combinations,
///     vec![
///         vec!['a', 'x'],
///         vec!['a', 'y'],
///         vec!['b', 'x'],
///         vec!['b', 'y'],
///     ]
/// );
/// ```
pub fn combination<T, S>(sequences: &[S]) -> Vec<Vec<T>>
where
    T: Clone,
    S: Sequence<T>,
{
    if sequences.is_empty() {
        tracing::trace!("combination called without sequences");
        return Vec::new();
    }

    // One empty sequence empties the whole product; skip the walk over the others.
    if let Some(position) = sequences.iter().position(|s| s.as_slice().is_empty()) {
        tracing::trace!(position, "combination input contains an empty sequence");
        return Vec::new();
    }

    let mut combinations = Vec::with_capacity(preallocation::<T, S>(sequences));

    let mut buffer = Vec::with_capacity(sequences.len());
    combine(sequences, 0, &mut buffer, &mut combinations);

    tracing::trace!(
        sequences = sequences.len(),
        combinations = combinations.len(),
        "generated combinations"
    );

    combinations
}

/// Depth-first walk over `sequences[depth..]`.
///
/// `buffer` holds exactly `depth` borrowed elements on entry and on return.
fn combine<'a, T, S>(
    sequences: &'a [S],
    depth: usize,
    buffer: &mut Vec<&'a T>,
    combinations: &mut Vec<Vec<T>>,
) where
    T: Clone,
    S: Sequence<T>,
{
    let next = depth + 1;

    for item in sequences[depth].as_slice() {
        buffer.push(item);

        if next < sequences.len() {
            combine(sequences, next, buffer, combinations);
        } else {
            // The buffer is reused for the next tuple, so store an owned copy.
            combinations.push(buffer.iter().map(|&item| item.clone()).collect());
        }

        buffer.pop();
    }
}

fn preallocation<T, S: Sequence<T>>(sequences: &[S]) -> usize {
    product_len::<T, S>(sequences).min(MAX_PREALLOCATED)
}

/// Expected number of combinations, or 0 when it does not fit in `usize`.
fn product_len<T, S: Sequence<T>>(sequences: &[S]) -> usize {
    if sequences.is_empty() {
        return 0;
    }

    sequences
        .iter()
        .try_fold(1usize, |acc, sequence| acc.checked_mul(sequence.as_slice().len()))
        .unwrap_or(0)
}
