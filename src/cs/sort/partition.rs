/// Partitions `arr[left..=right]` around `pivot` and returns the pivot's final index.
///
/// The first element equal to `pivot` is staged at `right`, then a single scan moves every
/// element strictly less than `pivot` in front of a store boundary. The staged pivot is finally
/// swapped onto that boundary.
///
/// After the call, every element before the returned index is strictly less than `pivot` and
/// every element after it is greater than or equal to `pivot`. Other copies of the pivot value
/// may land anywhere on the right-hand side; ties are not kept in a stable order.
///
/// `pivot` must occur within `arr[left..=right]`. Callers always draw it from that range, so this
/// is only checked in debug builds.
///
/// # Complexity
/// * Time: O(right - left + 1)
/// * Space: O(1)
pub fn partition<T: Ord>(arr: &mut [T], left: usize, right: usize, pivot: &T) -> usize {
    debug_assert!(left <= right && right < arr.len(), "partition range out of bounds");

    let staged = arr[left..=right].iter().position(|x| x == pivot);
    debug_assert!(staged.is_some(), "pivot must occur within the partition range");
    if let Some(offset) = staged {
        arr.swap(left + offset, right);
    }

    let mut store = left;
    for i in left..right {
        if arr[i] < *pivot {
            arr.swap(store, i);
            store += 1;
        }
    }
    arr.swap(store, right);
    store
}
