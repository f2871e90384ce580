pub mod cs;
pub mod error;

pub use cs::sort;
pub use error::{Error, Result};
pub use sort::{
    linear_select, linear_select_in_place, lower_median, randomized_quickselect, select_in_range,
    sort_select,
};
