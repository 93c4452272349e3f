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

use crate::min::smallest_in_unchecked;

/// Sorts `values` in place in non-decreasing order by repeated minimum
/// selection, and returns the same slice for convenience.
///
/// Each outer step selects the smallest element of the unsorted suffix
/// `[i, n)` and swaps it into position `i`; the swap is skipped when the
/// element is already in place. After step `i`, the prefix `[0, i]` holds
/// the `i + 1` smallest elements in their final order, and the suffix is a
/// permutation of the rest.
///
/// Slices of length zero or one are returned unchanged. Uses O(1) extra
/// space and O(n²) comparisons; at most n - 1 swaps are performed.
///
/// # Examples
///
/// ```rust
/// # use ordscan_select::sort::selection_sort;
///
/// let mut values = [4, 8, 0, 5];
/// selection_sort(&mut values);
/// assert_eq!(values, [0, 4, 5, 8]);
/// ```
pub fn selection_sort<T>(values: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    let n = values.len();
    if n < 2 {
        return values;
    }
    for i in 0..(n - 1) {
        // The suffix [i, n) is non-empty because i < n - 1 < n.
        let smallest = smallest_in_unchecked(values, i, n);
        if smallest != i {
            values.swap(i, smallest);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut values = [4, 8, 0, 5];
        selection_sort(&mut values);
        assert_eq!(values, [0, 4, 5, 8]);
    }

    #[test]
    fn test_two_elements() {
        let mut values = [2, 1];
        selection_sort(&mut values);
        assert_eq!(values, [1, 2]);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut values = [6, 5, 4, 3, 2, 1];
        selection_sort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_with_duplicates() {
        let mut values = [3, 1, 2, 1, 3, 0];
        selection_sort(&mut values);
        assert_eq!(values, [0, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_empty() {
        let mut values: [i32; 0] = [];
        selection_sort(&mut values);
        assert_eq!(values, []);
    }

    #[test]
    fn test_single_element() {
        let mut values = [1];
        selection_sort(&mut values);
        assert_eq!(values, [1]);
    }

    #[test]
    fn test_already_sorted() {
        let mut values = [1, 2, 3, 4, 5];
        selection_sort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_all_same_elements() {
        let mut values = [5, 5, 5, 5];
        selection_sort(&mut values);
        assert_eq!(values, [5, 5, 5, 5]);
    }

    #[test]
    fn test_chars() {
        let mut values = ['z', 'a', 'm', 'b', 'y'];
        selection_sort(&mut values);
        assert_eq!(values, ['a', 'b', 'm', 'y', 'z']);
    }

    #[test]
    fn test_strings() {
        let mut values = ["rust", "python", "java", "c++"];
        selection_sort(&mut values);
        assert_eq!(values, ["c++", "java", "python", "rust"]);
    }

    #[test]
    fn test_returns_the_sorted_slice() {
        let mut values = [3, 1, 2];
        assert_eq!(selection_sort(&mut values), &mut [1, 2, 3]);
    }

    #[test]
    fn test_idempotent() {
        let mut once = [9, 7, 8, 7];
        selection_sort(&mut once);
        let mut twice = once;
        selection_sort(&mut twice);
        assert_eq!(once, twice);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest!(
            #![proptest_config(ProptestConfig::with_cases(512))]

            #[test]
            fn matches_std_sort(mut values in proptest::collection::vec(any::<i16>(), 0..300)) {
                let mut expected = values.clone();
                expected.sort();
                selection_sort(values.as_mut_slice());
                prop_assert_eq!(values, expected);
            }

            #[test]
            fn sorting_twice_changes_nothing(mut values in proptest::collection::vec(-500..500i32, 0..200)) {
                selection_sort(values.as_mut_slice());
                let first_pass = values.clone();
                selection_sort(values.as_mut_slice());
                prop_assert_eq!(values, first_pass);
            }
        );
    }
}
