//! src/host/dataset.rs
//!
//! Random dataset generation.

use rand::Rng;

use crate::chart::DataPoint;

/// `size + 1` points with `x = 0..=size` and `y` uniform in `[1, max_value]`.
///
/// `max_value` below 1 is treated as 1.
pub fn generate_random_data_points<R: Rng>(
    size: usize,
    max_value: i32,
    rng: &mut R,
) -> Vec<DataPoint> {
    let hi = max_value.max(1);
    (0..=size)
        .map(|i| {
            let x = i32::try_from(i).unwrap_or(i32::MAX);
            DataPoint::new(x, rng.random_range(1..=hi))
        })
        .collect()
}
