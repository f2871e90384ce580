use super::check_rank;
use crate::error::Result;

/// Sorts `arr` in place with bubble sort, stopping early once a pass makes no swaps.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut unsorted = arr.len();
    while unsorted > 1 {
        let mut last_swap = 0;
        for j in 1..unsorted {
            if arr[j] < arr[j - 1] {
                arr.swap(j - 1, j);
                last_swap = j;
            }
        }
        unsorted = last_swap;
    }
}

/// Returns the element of rank `rank` (one-based) by bubble sorting a copy of `arr`.
///
/// O(n^2) time. Only useful as a baseline and as an oracle that shares no code with
/// the partition-based selectors.
pub fn sort_select<T: Ord + Clone>(arr: &[T], rank: usize) -> Result<T> {
    check_rank(rank, arr.len())?;
    let mut sorted = arr.to_vec();
    bubble_sort(&mut sorted);
    Ok(sorted.swap_remove(rank - 1))
}
