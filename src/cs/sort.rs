//! Order-statistic selection.
//!
//! [`linear_select`] is the deterministic median-of-medians selector with a worst-case linear
//! bound. [`sort_select`] and [`randomized_quickselect`] share its contract and exist as
//! comparison baselines.

use crate::error::{Error, Result};

pub mod median_of_medians;
pub mod partition;
pub mod randomized_quickselect;
pub mod sort_select;

pub use median_of_medians::{
    linear_select, linear_select_in_place, lower_median, select_in_range, BASE_CASE_LEN,
    GROUP_LEN,
};
pub use partition::partition;
pub use randomized_quickselect::{randomized_quickselect, randomized_quickselect_with_rng};
pub use sort_select::{bubble_sort, sort_select};

/// Checks that a one-based `rank` addresses one of `len` elements.
pub(crate) fn check_rank(rank: usize, len: usize) -> Result<()> {
    if rank == 0 || rank > len {
        return Err(Error::out_of_range(rank, len));
    }
    Ok(())
}
