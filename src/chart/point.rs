//! src/chart/point.rs
//!
//! Integer samples fed to the chart.

/// One `(x, y)` sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DataPoint {
    pub x: i32,
    pub y: i32,
}

impl DataPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for DataPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
