//! src/host/slider.rs
//!
//! Dataset size slider: integer progress in `[0, 100]` plus drag tracking.

pub const MAX_PROGRESS: u8 = 100;

/// `min_data_set + floor(progress / 100 * max_data_set)`.
///
/// Computed in integers so the floor is exact for every progress value.
pub fn data_size_for_progress(progress: u8, min_data_set: usize, max_data_set: usize) -> usize {
    let p = usize::from(progress.min(MAX_PROGRESS));
    min_data_set + max_data_set / 100 * p + (max_data_set % 100) * p / 100
}

/// Map a column inside a track of `width` cells starting at `start` to progress.
///
/// Columns left of the track give 0, columns past its end give 100.
pub fn progress_at_column(column: u16, start: u16, width: u16) -> u8 {
    if width <= 1 {
        return if column > start { MAX_PROGRESS } else { 0 };
    }
    let offset = u32::from(column.saturating_sub(start)).min(u32::from(width - 1));
    let last = u32::from(width - 1);
    // round to nearest
    ((offset * u32::from(MAX_PROGRESS) + last / 2) / last) as u8
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeSlider {
    progress: u8,
    dragging: bool,
}

impl SizeSlider {
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.progress) / f64::from(MAX_PROGRESS)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Set progress (clamped) and return the stored value.
    pub fn set_progress(&mut self, progress: u8) -> u8 {
        self.progress = progress.min(MAX_PROGRESS);
        self.progress
    }

    /// Move by `delta`, saturating at both ends.
    pub fn step(&mut self, delta: i16) -> u8 {
        let next = (i16::from(self.progress) + delta).clamp(0, i16::from(MAX_PROGRESS));
        self.set_progress(next as u8)
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// End a drag. Returns whether one was in progress.
    pub fn end_drag(&mut self) -> bool {
        std::mem::take(&mut self.dragging)
    }
}
