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

/// Checks whether the given slice is sorted in non-decreasing order.
///
/// Returns `true` if every adjacent pair is non-decreasing, `false` otherwise.
#[inline(always)]
pub fn is_sorted_ascending<T>(values: &[T]) -> bool
where
    T: Ord,
{
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Lower bound search for the first position whose element is >= key.
///
/// Returns `values.len()` if every element is smaller than `key`.
///
/// # Panics
///
/// In debug builds, this function will panic if `values` is not sorted
/// in non-decreasing order.
///
/// # Invariants
///
/// - `values` must be sorted in non-decreasing order.
#[inline(always)]
pub fn lower_bound<T>(values: &[T], key: &T) -> usize
where
    T: Ord,
{
    debug_assert!(
        is_sorted_ascending(values),
        "called `lower_bound` with a slice that is not sorted"
    );

    let mut lo: usize = 0;
    let mut hi: usize = values.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        debug_assert!(
            mid < values.len(),
            "`lower_bound` computed mid index out of bounds"
        );
        // SAFETY: mid is always in bounds because lo < hi <= values.len(),
        // therefore mid < values.len()
        if unsafe { values.get_unchecked(mid) } < key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Binary search for `key` in a sorted slice.
///
/// Returns the index of the first occurrence of `key`, or `None` if the
/// slice does not contain it. Duplicates resolve to the leftmost match,
/// consistent with the first-occurrence rule used by the selection scans.
///
/// # Panics
///
/// In debug builds, this function will panic if `values` is not sorted
/// in non-decreasing order.
///
/// # Invariants
///
/// - `values` must be sorted in non-decreasing order.
///
/// # Examples
///
/// ```rust
/// # use ordscan_core::algorithm::binary_search;
///
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&values, &3), Some(1));
/// assert_eq!(binary_search(&values, &-1), None);
/// ```
#[inline]
pub fn binary_search<T>(values: &[T], key: &T) -> Option<usize>
where
    T: Ord,
{
    let index = lower_bound(values, key);
    if index == values.len() {
        return None;
    }
    // SAFETY: index < values.len() was checked above
    if unsafe { values.get_unchecked(index) } == key {
        Some(index)
    } else {
        None
    }
}
