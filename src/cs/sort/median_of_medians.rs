use std::cmp::Ordering;

use super::check_rank;
use super::partition::partition;
use crate::error::{Error, Result};

/// Windows of at most this many elements are answered by sorting a copy directly.
///
/// Any small constant of at least 2 keeps the linear bound; 10 keeps the recursion on the
/// medians list shallow without paying for many tiny partitions.
pub const BASE_CASE_LEN: usize = 10;

/// Number of elements per group when computing the median of medians.
pub const GROUP_LEN: usize = 5;

/// Returns the element of rank `rank` (one-based) in `arr`, as if `arr` were sorted.
///
/// The input is copied, so `arr` is left exactly as it was. The pivot for every partition step is
/// the median of the medians of groups of five, which guarantees each step discards a constant
/// fraction of the remaining window.
///
/// # Arguments
/// * `arr` - The elements to select from
/// * `rank` - One-based rank, `1` for the minimum and `arr.len()` for the maximum
///
/// # Returns
/// * `Ok(element)` - A clone of the selected element
/// * `Err(Error::OutOfRange)` - If `rank` is `0` or greater than `arr.len()`
///
/// # Examples
/// ```
/// use linselect::linear_select;
///
/// let data = [7, 2, 9, 4, 4, 1];
/// assert_eq!(linear_select(&data, 3), Ok(4));
/// assert_eq!(data, [7, 2, 9, 4, 4, 1]);
/// ```
///
/// # Complexity
/// * Time: O(n) worst case
/// * Space: O(n)
pub fn linear_select<T: Ord + Clone>(arr: &[T], rank: usize) -> Result<T> {
    check_rank(rank, arr.len())?;
    log::debug!("linear_select: rank {} of {} elements", rank, arr.len());

    let mut scratch = arr.to_vec();
    let right = scratch.len() - 1;
    select_kth(&mut scratch, 0, right, rank - 1)
}

/// Like [`linear_select`], but works directly on `arr` instead of a copy.
///
/// `arr` is reordered but keeps the same multiset of elements.
///
/// # Examples
/// ```
/// use linselect::linear_select_in_place;
///
/// let mut data = vec![3, 3, 3, 3];
/// assert_eq!(linear_select_in_place(&mut data, 2), Ok(3));
/// ```
pub fn linear_select_in_place<T: Ord + Clone>(arr: &mut [T], rank: usize) -> Result<T> {
    check_rank(rank, arr.len())?;
    log::debug!("linear_select_in_place: rank {} of {} elements", rank, arr.len());

    let right = arr.len() - 1;
    select_kth(arr, 0, right, rank - 1)
}

/// Returns the element at zero-based offset `k` of the window `arr[left..=right]` if that window
/// were sorted. Elements inside the window may be reordered; elements outside it are not touched.
///
/// # Returns
/// * `Ok(element)` - A clone of the selected element
/// * `Err(Error::OutOfRange)` - If the window does not lie inside `arr` or `k` does not address
///   an element of the window
pub fn select_in_range<T: Ord + Clone>(
    arr: &mut [T],
    left: usize,
    right: usize,
    k: usize,
) -> Result<T> {
    if left > right || right >= arr.len() {
        return Err(Error::out_of_range(right, arr.len()));
    }
    let n = right - left + 1;
    if k >= n {
        return Err(Error::out_of_range(k, n));
    }
    select_kth(arr, left, right, k)
}

/// Returns the lower median of `arr`, the element of rank `(len + 1) / 2`.
///
/// # Examples
/// ```
/// use linselect::lower_median;
///
/// assert_eq!(lower_median(&[4, 1, 3, 2]), Ok(2));
/// assert!(lower_median::<i32>(&[]).is_err());
/// ```
pub fn lower_median<T: Ord + Clone>(arr: &[T]) -> Result<T> {
    linear_select(arr, (arr.len() + 1) / 2)
}

fn select_kth<T: Ord + Clone>(
    arr: &mut [T],
    mut left: usize,
    mut right: usize,
    mut k: usize,
) -> Result<T> {
    loop {
        let n = right - left + 1;
        // Callers validate k; reaching this means the window bookkeeping is broken.
        debug_assert!(k < n, "k = {} escaped window of {} elements", k, n);
        if k >= n {
            return Err(Error::out_of_range(k, n));
        }

        if n <= BASE_CASE_LEN {
            let mut window = arr[left..=right].to_vec();
            window.sort_unstable();
            return Ok(window.swap_remove(k));
        }

        let mut medians = group_medians(&arr[left..=right]);
        let last = medians.len() - 1;
        let middle = medians.len() / 2;
        let pivot = select_kth(&mut medians, 0, last, middle)?;

        let pivot_index = partition(arr, left, right, &pivot);
        let rank = pivot_index - left;
        log::trace!(
            "select window [{}, {}] k {}: pivot landed at rank {}",
            left,
            right,
            k,
            rank
        );

        match k.cmp(&rank) {
            Ordering::Equal => return Ok(arr[pivot_index].clone()),
            Ordering::Less => right = pivot_index - 1,
            Ordering::Greater => {
                k -= rank + 1;
                left = pivot_index + 1;
            }
        }
    }
}

/// Sorts each consecutive run of `GROUP_LEN` elements (the last run may be shorter) and collects
/// its lower-middle element.
fn group_medians<T: Ord + Clone>(window: &[T]) -> Vec<T> {
    window
        .chunks(GROUP_LEN)
        .map(|group| {
            let mut group = group.to_vec();
            group.sort_unstable();
            let middle = group.len() / 2;
            group.swap_remove(middle)
        })
        .collect()
}
