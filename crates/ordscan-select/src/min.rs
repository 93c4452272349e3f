// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Minimum Finder
//!
//! Single-pass lookup of the position of the smallest element in a slice,
//! either over the whole slice or restricted to an [`IndexSpan`].
//!
//! The comparison is strict (`<`), so among equal minima the earliest
//! position wins. Both entry points validate the non-empty precondition
//! once and return [`EmptySequenceError`] when it is violated; the scan
//! itself runs without per-element bounds checks.

use crate::error::EmptySequenceError;
use ordscan_core::math::span::IndexSpan;

/// Scans `[start, end)` of `values` and returns the position of the first
/// occurrence of the smallest element.
///
/// # Invariants
///
/// - `start < end`
/// - `end <= values.len()`
#[inline(always)]
pub(crate) fn smallest_in_unchecked<T>(values: &[T], start: usize, end: usize) -> usize
where
    T: Ord,
{
    debug_assert!(
        start < end,
        "called `smallest_in_unchecked` with an empty scan range"
    );
    debug_assert!(
        end <= values.len(),
        "called `smallest_in_unchecked` with a range past the end of the slice"
    );

    let mut smallest = start;
    for candidate in (start + 1)..end {
        // SAFETY: candidate and smallest are in bounds because
        // start <= smallest < candidate < end <= values.len()
        let challenger = unsafe { values.get_unchecked(candidate) };
        let incumbent = unsafe { values.get_unchecked(smallest) };
        // Strict comparison: ties keep the earliest position.
        if challenger < incumbent {
            smallest = candidate;
        }
    }
    smallest
}

/// Returns the index of the first occurrence of the smallest element
/// within the given span of `values`.
///
/// The returned index is a position into `values` itself, not an offset
/// into the span. Runs in O(k) for a span of length k.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] if `span` is empty.
///
/// # Panics
///
/// Panics if `span` extends past the end of `values`.
///
/// # Examples
///
/// ```rust
/// # use ordscan_core::math::span::IndexSpan;
/// # use ordscan_select::min::find_smallest_in;
///
/// let values = [4, 8, 0, 5];
/// assert_eq!(find_smallest_in(&values, IndexSpan::new(0, 2)), Ok(0));
/// assert_eq!(find_smallest_in(&values, IndexSpan::new(1, 4)), Ok(2));
/// assert!(find_smallest_in(&values, IndexSpan::new(3, 3)).is_err());
/// ```
#[inline]
pub fn find_smallest_in<T>(values: &[T], span: IndexSpan) -> Result<usize, EmptySequenceError>
where
    T: Ord,
{
    if span.is_empty() {
        return Err(EmptySequenceError);
    }
    assert!(
        span.end() <= values.len(),
        "span {} extends past the end of a slice of length {}",
        span,
        values.len()
    );
    Ok(smallest_in_unchecked(values, span.start(), span.end()))
}

/// Returns the index of the first occurrence of the smallest element in
/// `values`.
///
/// Runs in O(n); the slice is read but never mutated.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] if `values` is empty.
///
/// # Examples
///
/// ```rust
/// # use ordscan_select::min::find_smallest_index;
///
/// assert_eq!(find_smallest_index(&[4, 8, 0, 5]), Ok(2));
///
/// let empty: [i32; 0] = [];
/// assert!(find_smallest_index(&empty).is_err());
/// ```
#[inline]
pub fn find_smallest_index<T>(values: &[T]) -> Result<usize, EmptySequenceError>
where
    T: Ord,
{
    if values.is_empty() {
        return Err(EmptySequenceError);
    }
    Ok(smallest_in_unchecked(values, 0, values.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_smallest_index_basic() {
        assert_eq!(find_smallest_index(&[4, 8, 0, 5]), Ok(2));
    }

    #[test]
    fn test_find_smallest_index_single() {
        assert_eq!(find_smallest_index(&[99]), Ok(0));
    }

    #[test]
    fn test_find_smallest_index_first_position() {
        assert_eq!(find_smallest_index(&[1, 2, 3, 4]), Ok(0));
    }

    #[test]
    fn test_find_smallest_index_last_position() {
        assert_eq!(find_smallest_index(&[4, 3, 2, 1]), Ok(3));
    }

    #[test]
    fn test_find_smallest_index_ties_pick_earliest() {
        assert_eq!(find_smallest_index(&[3, 3, 1, 1]), Ok(2));
        assert_eq!(find_smallest_index(&[5, 5, 5, 5]), Ok(0));
    }

    #[test]
    fn test_find_smallest_index_empty() {
        let values: [i32; 0] = [];
        assert_eq!(find_smallest_index(&values), Err(EmptySequenceError));
    }

    #[test]
    fn test_find_smallest_index_strings() {
        assert_eq!(find_smallest_index(&["rust", "python", "java", "c++"]), Ok(3));
    }

    #[test]
    fn test_find_smallest_in_subspan() {
        let values = [4, 8, 0, 5];
        // The minimum of the suffix [3, 4) is the 5 at index 3.
        assert_eq!(find_smallest_in(&values, IndexSpan::new(3, 4)), Ok(3));
    }

    #[test]
    fn test_find_smallest_in_full_span() {
        let values = [4, 8, 0, 5];
        let full = IndexSpan::new(0, values.len());
        assert_eq!(find_smallest_in(&values, full), Ok(2));
    }

    #[test]
    fn test_find_smallest_in_empty_span() {
        let values = [4, 8, 0, 5];
        assert_eq!(
            find_smallest_in(&values, IndexSpan::new(2, 2)),
            Err(EmptySequenceError)
        );
    }

    #[test]
    #[should_panic]
    fn test_find_smallest_in_out_of_bounds_span() {
        let values = [4, 8, 0, 5];
        let _ = find_smallest_in(&values, IndexSpan::new(2, 9));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest!(
            #![proptest_config(ProptestConfig::with_cases(512))]

            #[test]
            fn finds_a_true_minimum(values in proptest::collection::vec(-1000..1000i32, 1..200)) {
                let index = find_smallest_index(&values).unwrap();
                prop_assert!(values.iter().all(|v| values[index] <= *v));
            }

            #[test]
            fn ties_resolve_to_earliest_index(values in proptest::collection::vec(0..8i32, 1..200)) {
                let index = find_smallest_index(&values).unwrap();
                let mut expected = 0;
                for (i, v) in values.iter().enumerate() {
                    if *v < values[expected] {
                        expected = i;
                    }
                }
                prop_assert_eq!(index, expected);
            }
        );
    }
}
