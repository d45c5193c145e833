//! src/chart/downsample.rs
//!
//! Bucket averaging for datasets larger than the chart's point cap.

use super::config::DownsamplePolicy;
use super::point::DataPoint;

/// Size of each averaging bucket, or `None` when `len` should be drawn as-is.
///
/// Only inputs strictly longer than `max_points` are reduced, and never
/// with a bucket size of zero.
pub fn group_size(len: usize, max_points: usize, policy: DownsamplePolicy) -> Option<usize> {
    if max_points == 0 || len <= max_points {
        return None;
    }
    let group = match policy {
        DownsamplePolicy::FloorGroups => len / max_points,
        DownsamplePolicy::CappedGroups => len.div_ceil(max_points),
    };
    (group >= 1).then_some(group)
}

/// Replace each run of `group` consecutive points with one synthetic point.
///
/// Synthetic `x` values count buckets from 1; `y` is the bucket mean
/// truncated toward zero. The last bucket may be shorter than `group`.
pub fn bucket_average(points: &[DataPoint], group: usize) -> Vec<DataPoint> {
    if group == 0 {
        return points.to_vec();
    }
    points
        .chunks(group)
        .enumerate()
        .map(|(i, chunk)| {
            let sum: i64 = chunk.iter().map(|p| i64::from(p.y)).sum();
            // mean of i32 values always fits back into i32
            let mean = (sum / chunk.len() as i64) as i32;
            let x = i32::try_from(i + 1).unwrap_or(i32::MAX);
            DataPoint::new(x, mean)
        })
        .collect()
}

/// Apply the policy: reduce when oversized, otherwise copy through unchanged.
pub fn downsample(points: &[DataPoint], max_points: usize, policy: DownsamplePolicy) -> Vec<DataPoint> {
    match group_size(points.len(), max_points, policy) {
        Some(group) => {
            let reduced = bucket_average(points, group);
            tracing::debug!(
                input = points.len(),
                group,
                output = reduced.len(),
                ?policy,
                "downsampled dataset"
            );
            reduced
        }
        None => points.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ys(values: &[i32]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &y)| DataPoint::new(i as i32, y))
            .collect()
    }

    #[test]
    fn no_group_at_or_below_cap() {
        assert_eq!(group_size(0, 100, DownsamplePolicy::FloorGroups), None);
        assert_eq!(group_size(100, 100, DownsamplePolicy::FloorGroups), None);
        assert_eq!(group_size(100, 100, DownsamplePolicy::CappedGroups), None);
    }

    #[test]
    fn group_sizes_per_policy() {
        assert_eq!(group_size(1000, 100, DownsamplePolicy::FloorGroups), Some(10));
        assert_eq!(group_size(1000, 100, DownsamplePolicy::CappedGroups), Some(10));
        assert_eq!(group_size(150, 100, DownsamplePolicy::FloorGroups), Some(1));
        assert_eq!(group_size(150, 100, DownsamplePolicy::CappedGroups), Some(2));
        assert_eq!(group_size(1001, 100, DownsamplePolicy::FloorGroups), Some(10));
        assert_eq!(group_size(1001, 100, DownsamplePolicy::CappedGroups), Some(11));
    }

    #[test]
    fn averages_truncate_toward_zero() {
        assert_eq!(bucket_average(&ys(&[2, 4, 6]), 3), vec![DataPoint::new(1, 4)]);
        assert_eq!(bucket_average(&ys(&[1, 2]), 2), vec![DataPoint::new(1, 1)]);
        assert_eq!(bucket_average(&ys(&[-1, -2]), 2), vec![DataPoint::new(1, -1)]);
    }

    #[test]
    fn short_last_bucket_is_averaged_alone() {
        let out = bucket_average(&ys(&[10, 20, 30, 40, 7]), 2);
        assert_eq!(
            out,
            vec![
                DataPoint::new(1, 15),
                DataPoint::new(2, 35),
                DataPoint::new(3, 7),
            ]
        );
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let out = bucket_average(&ys(&[i32::MAX, i32::MAX, i32::MAX]), 3);
        assert_eq!(out[0].y, i32::MAX);
    }

    #[test]
    fn floor_policy_overshoots_cap_just_above_threshold() {
        let points = ys(&[5; 150]);
        let out = downsample(&points, 100, DownsamplePolicy::FloorGroups);
        assert_eq!(out.len(), 150);
        assert_eq!(out[0].x, 1);
        assert_eq!(out[149].x, 150);

        let capped = downsample(&points, 100, DownsamplePolicy::CappedGroups);
        assert_eq!(capped.len(), 75);
    }
}
