//! Runtime-checked sequence operations over JSON values.
//!
//! These mirror the typed functions at the crate root for data whose shape is
//! only known at runtime. A sequence here is a [`Value::Array`]; anything else
//! is rejected with [`SequenceError::NotSequence`]. Absent elements are
//! [`Value::Null`]. Callbacks are optional so that a missing one can be
//! reported as [`SequenceError::NilMapFunction`] or
//! [`SequenceError::NilSelectFunction`].
//!
//! Every function validates its inputs before producing output, so an error
//! never comes with a partial result.

use serde_json::Value;

use crate::error::{Result, SequenceError};

/// Callback applied to each element by [`map`].
pub type MapFn<'a> = &'a dyn Fn(&Value) -> Value;

/// Predicate applied to each element by [`select`].
pub type SelectFn<'a> = &'a dyn Fn(&Value) -> bool;

/// Cartesian product of the arrays held by `sequences`.
///
/// `sequences` must be an array whose every item is itself an array. Each
/// combination is returned as a [`Value::Array`] with one position per input
/// array, in odometer order. An empty outer array yields no combinations.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use sequence_utils::value;
///
/// let combinations = value::combination(&json!([[1, 2], ["a"]])).unwrap();
/// assert_eq!(combinations, vec![json!([1, "a"]), json!([2, "a"])]);
///
/// assert!(value::combination(&json!([[1], 2])).is_err());
/// ```
pub fn combination(sequences: &Value) -> Result<Vec<Value>> {
    let sequences = as_sequence(sequences)?
        .iter()
        .map(as_sequence)
        .collect::<Result<Vec<&[Value]>>>()?;

    let combinations: Vec<Vec<Value>> = crate::combination(&sequences);
    Ok(combinations.into_iter().map(Value::Array).collect())
}

/// Copy of `collection` without its `null` elements.
pub fn compact(collection: &Value) -> Result<Vec<Value>> {
    let items = as_sequence(collection)?;
    Ok(items.iter().filter(|item| !item.is_null()).cloned().collect())
}

/// Returns `Ok(true)` if `target` equals one of the elements of `collection`.
///
/// # Errors
///
/// - [`SequenceError::NotSequence`] if `collection` is not an array.
/// - [`SequenceError::ElementNotFound`] if no element equals `target`.
pub fn is_included(collection: &Value, target: &Value) -> Result<bool> {
    let items = as_sequence(collection)?;
    crate::is_included(items, target).map(|()| true)
}

/// Applies `map_fn` to each element of `collection`.
///
/// The collection is checked before the callback, so a non-array input reports
/// [`SequenceError::NotSequence`] even when `map_fn` is also missing.
///
/// # Examples
///
/// ```rust
/// use serde_json::{json, Value};
/// use sequence_utils::{value, SequenceError};
///
/// let double = |v: &Value| json!(v.as_i64().unwrap_or_default() * 2);
/// assert_eq!(
///     value::map(&json!([1, 2, 3]), Some(&double)).unwrap(),
///     vec![json!(2), json!(4), json!(6)]
/// );
/// assert_eq!(
///     value::map(&json!([1]), None),
///     Err(SequenceError::NilMapFunction)
/// );
/// ```
pub fn map(collection: &Value, map_fn: Option<MapFn<'_>>) -> Result<Vec<Value>> {
    let items = as_sequence(collection)?;
    let map_fn = map_fn.ok_or_else(|| {
        tracing::debug!("map called without a map function");
        SequenceError::NilMapFunction
    })?;

    Ok(crate::map(items, map_fn))
}

/// Elements of `collection` for which `select_fn` returns `true`.
///
/// Input checks happen in the same order as [`map`].
pub fn select(collection: &Value, select_fn: Option<SelectFn<'_>>) -> Result<Vec<Value>> {
    let items = as_sequence(collection)?;
    let select_fn = select_fn.ok_or_else(|| {
        tracing::debug!("select called without a select function");
        SequenceError::NilSelectFunction
    })?;

    Ok(crate::select(items, select_fn))
}

fn as_sequence(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => {
            tracing::debug!(kind = kind_of(other), "value is not a sequence");
            Err(SequenceError::NotSequence)
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_combination_pairs() {
        let result = combination(&json!([[1, 2], [3, 4]])).unwrap();
        assert_eq!(
            result,
            vec![json!([1, 3]), json!([1, 4]), json!([2, 3]), json!([2, 4])]
        );
    }

    #[test]
    fn test_combination_mixed_element_types() {
        let result = combination(&json!([[null, true], [{"k": 1}]])).unwrap();
        assert_eq!(result, vec![json!([null, {"k": 1}]), json!([true, {"k": 1}])]);
    }

    #[test]
    fn test_combination_no_sequences() {
        assert_eq!(combination(&json!([])), Ok(vec![]));
    }

    #[test]
    fn test_combination_with_empty_sequence() {
        assert_eq!(combination(&json!([[1, 2], []])), Ok(vec![]));
    }

    #[test]
    fn test_combination_outer_not_sequence() {
        assert_eq!(
            combination(&json!({"a": [1]})),
            Err(SequenceError::NotSequence)
        );
    }

    #[test]
    fn test_combination_inner_not_sequence() {
        // A bad sequence is rejected even when an earlier one is empty.
        assert_eq!(
            combination(&json!([[], "nope"])),
            Err(SequenceError::NotSequence)
        );
    }

    #[test]
    fn test_compact_removes_nulls() {
        assert_eq!(
            compact(&json!([1, null, 2, null, 3])),
            Ok(vec![json!(1), json!(2), json!(3)])
        );
    }

    #[test]
    fn test_compact_keeps_falsy_values() {
        assert_eq!(
            compact(&json!([0, "", false, [], null])),
            Ok(vec![json!(0), json!(""), json!(false), json!([])])
        );
    }

    #[test]
    fn test_compact_not_sequence() {
        assert_eq!(compact(&json!("abc")), Err(SequenceError::NotSequence));
    }

    #[test]
    fn test_is_included() {
        assert_eq!(is_included(&json!([1, 2, 3]), &json!(2)), Ok(true));
        assert_eq!(
            is_included(&json!([1, 2, 3]), &json!(9)),
            Err(SequenceError::ElementNotFound)
        );
        assert_eq!(
            is_included(&json!(42), &json!(42)),
            Err(SequenceError::NotSequence)
        );
    }

    #[test]
    fn test_is_included_deep_equality() {
        let collection = json!([{"id": 1, "tags": ["x"]}, {"id": 2}]);
        assert_eq!(
            is_included(&collection, &json!({"tags": ["x"], "id": 1})),
            Ok(true)
        );
    }

    #[test]
    fn test_map() {
        let double = |v: &Value| json!(v.as_i64().unwrap_or_default() * 2);
        assert_eq!(
            map(&json!([1, 2, 3]), Some(&double)),
            Ok(vec![json!(2), json!(4), json!(6)])
        );
    }

    #[test]
    fn test_map_errors() {
        let identity = |v: &Value| v.clone();
        assert_eq!(map(&json!([1]), None), Err(SequenceError::NilMapFunction));
        assert_eq!(
            map(&json!(null), Some(&identity)),
            Err(SequenceError::NotSequence)
        );
        assert_eq!(map(&json!(null), None), Err(SequenceError::NotSequence));
    }

    #[test]
    fn test_select() {
        let is_even = |v: &Value| v.as_i64().is_some_and(|n| n % 2 == 0);
        assert_eq!(
            select(&json!([1, 2, 3, 4]), Some(&is_even)),
            Ok(vec![json!(2), json!(4)])
        );
    }

    #[test]
    fn test_select_errors() {
        let always = |_: &Value| true;
        assert_eq!(
            select(&json!([1]), None),
            Err(SequenceError::NilSelectFunction)
        );
        assert_eq!(
            select(&json!(1.5), Some(&always)),
            Err(SequenceError::NotSequence)
        );
    }
}
