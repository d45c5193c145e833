//! src/chart/state.rs
//!
//! Immutable chart snapshot: the points to draw and their bounds.

use super::config::ChartConfig;
use super::downsample::downsample;
use super::point::DataPoint;

/// Min/max of x and y over a point set. All zero for an empty set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Bounds {
    /// Single pass over `points`.
    pub fn of(points: &[DataPoint]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let mut b = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for p in &points[1..] {
            b.x_min = b.x_min.min(p.x);
            b.x_max = b.x_max.max(p.x);
            b.y_min = b.y_min.min(p.y);
            b.y_max = b.y_max.max(p.y);
        }
        b
    }

    pub fn x_range(&self) -> i64 {
        i64::from(self.x_max) - i64::from(self.x_min)
    }

    pub fn y_range(&self) -> i64 {
        i64::from(self.y_max) - i64::from(self.y_min)
    }

    pub fn contains(&self, p: DataPoint) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }
}

/// What the renderer currently shows. Replaced whole on every update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartState {
    points: Vec<DataPoint>,
    bounds: Bounds,
}

impl ChartState {
    /// Downsample `raw` per `config` and compute bounds over the result.
    pub fn from_points(raw: &[DataPoint], config: &ChartConfig) -> Self {
        let points = downsample(raw, config.max_points_on_chart, config.downsample);
        let bounds = Bounds::of(&points);
        Self { points, bounds }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
