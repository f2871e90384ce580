use std::cmp::Ordering;

use rand::Rng;

use super::check_rank;
use super::partition::partition;
use crate::error::Result;

/// Returns the element of rank `rank` (one-based) in `arr` using a uniformly random pivot.
///
/// Expected O(n), but an unlucky pivot sequence degrades it to O(n^2). Kept as a comparison
/// baseline for [`linear_select`](super::linear_select), which bounds the worst case.
pub fn randomized_quickselect<T: Ord + Clone>(arr: &[T], rank: usize) -> Result<T> {
    randomized_quickselect_with_rng(arr, rank, &mut rand::thread_rng())
}

/// [`randomized_quickselect`] drawing pivots from `rng`, so runs can be reproduced.
pub fn randomized_quickselect_with_rng<T, R>(arr: &[T], rank: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    check_rank(rank, arr.len())?;
    let mut arr = arr.to_vec();
    let mut left = 0;
    let mut right = arr.len() - 1;
    let mut k = rank - 1;
    loop {
        if left == right {
            return Ok(arr[left].clone());
        }
        let pivot = arr[rng.gen_range(left..=right)].clone();
        let pivot_index = partition(&mut arr, left, right, &pivot);
        let i = pivot_index - left;
        match k.cmp(&i) {
            Ordering::Equal => return Ok(arr[pivot_index].clone()),
            Ordering::Less => right = pivot_index - 1,
            Ordering::Greater => {
                k -= i + 1;
                left = pivot_index + 1;
            }
        }
    }
}
