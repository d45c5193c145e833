//! src/host/controller.rs
//!
//! Wires the size slider and the regenerate action to the chart renderer.
//!
//! Every handler runs synchronously: it regenerates data, hands it to the
//! renderer and, where the action ends an interaction, shows the renderer's
//! y bounds as a notification. Time is passed in so tests can drive expiry.

use std::time::Instant;

use rand::Rng;
use rand::rngs::ThreadRng;

use super::config::HostConfig;
use super::dataset::generate_random_data_points;
use super::notification::Notification;
use super::slider::{MAX_PROGRESS, SizeSlider, data_size_for_progress};
use crate::chart::{ChartConfig, ChartRenderer};
use crate::error::ChartResult;

pub struct ChartController<R = ThreadRng> {
    renderer: ChartRenderer,
    config: HostConfig,
    slider: SizeSlider,
    data_size: usize,
    notification: Option<Notification>,
    notification_dirty: bool,
    rng: R,
}

impl ChartController<ThreadRng> {
    /// Controller backed by the thread-local, unseeded generator.
    pub fn with_thread_rng(chart: ChartConfig, host: HostConfig) -> ChartResult<Self> {
        Self::new(chart, host, rand::rng())
    }
}

impl<R: Rng> ChartController<R> {
    /// Build the renderer and show an initial dataset of `min_data_set`.
    pub fn new(chart: ChartConfig, host: HostConfig, rng: R) -> ChartResult<Self> {
        host.validate()?;
        let renderer = ChartRenderer::new(chart)?;
        let data_size = data_size_for_progress(0, host.min_data_set, host.max_data_set);
        let mut controller = Self {
            renderer,
            config: host,
            slider: SizeSlider::default(),
            data_size,
            notification: None,
            notification_dirty: false,
            rng,
        };
        controller.regenerate();
        Ok(controller)
    }

    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    pub fn slider(&self) -> &SizeSlider {
        &self.slider
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn data_size(&self) -> usize {
        self.data_size
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Slider moved: resize and regenerate immediately.
    pub fn on_slider_change(&mut self, progress: u8) {
        let progress = self.slider.set_progress(progress);
        self.data_size =
            data_size_for_progress(progress, self.config.min_data_set, self.config.max_data_set);
        self.regenerate();
    }

    /// Slider let go: surface the current bounds.
    pub fn on_slider_released(&mut self, now: Instant) {
        self.slider.end_drag();
        self.notify_bounds(now);
    }

    /// Pointer grabbed the slider at `progress`.
    pub fn on_slider_pressed(&mut self, progress: u8) {
        self.slider.begin_drag();
        self.on_slider_dragged(progress);
    }

    /// Pointer moved while holding the slider. Only a new value is a change.
    pub fn on_slider_dragged(&mut self, progress: u8) {
        if progress.min(MAX_PROGRESS) != self.slider.progress() {
            self.on_slider_change(progress);
        }
    }

    /// Discrete move (keyboard): one change followed by a release.
    pub fn step_slider(&mut self, delta: i16, now: Instant) {
        let mut next = self.slider;
        self.on_slider_change(next.step(delta));
        self.on_slider_released(now);
    }

    /// Regenerate button: fresh data at the current size, then bounds.
    pub fn on_regenerate(&mut self, now: Instant) {
        self.regenerate();
        self.notify_bounds(now);
    }

    /// Drop an expired notification.
    pub fn tick(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
            self.notification_dirty = true;
        }
    }

    pub fn request_redraw(&mut self) {
        self.renderer.request_redraw();
    }

    /// Whether anything visible changed since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        let chart = self.renderer.take_redraw_request();
        let toast = std::mem::take(&mut self.notification_dirty);
        chart || toast
    }

    fn regenerate(&mut self) {
        let points =
            generate_random_data_points(self.data_size, self.config.max_value, &mut self.rng);
        self.renderer.set_data(&points);
    }

    fn notify_bounds(&mut self, now: Instant) {
        let n = Notification::bounds(
            self.renderer.y_min(),
            self.renderer.y_max(),
            now,
            self.config.notification_duration,
        );
        tracing::info!(text = %n.message, data_size = self.data_size, "bounds notification");
        self.notification = Some(n);
        self.notification_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn controller() -> ChartController<StdRng> {
        ChartController::new(
            ChartConfig::default(),
            HostConfig::default(),
            StdRng::seed_from_u64(42),
        )
        .unwrap()
    }

    #[test]
    fn starts_with_minimum_dataset() {
        let mut c = controller();
        assert_eq!(c.data_size(), 20);
        assert_eq!(c.renderer().state().len(), 21);
        assert!(c.notification().is_none());
        assert!(c.take_redraw_request());
        assert!(!c.take_redraw_request());
    }

    #[test]
    fn slider_change_regenerates_without_notifying() {
        let mut c = controller();
        c.take_redraw_request();
        c.on_slider_change(50);
        assert_eq!(c.data_size(), 50_020);
        assert_eq!(c.renderer().state().len(), 100);
        assert!(c.notification().is_none());
        assert!(c.take_redraw_request());
    }

    #[test]
    fn release_reports_renderer_bounds() {
        let mut c = controller();
        c.on_slider_pressed(10);
        assert!(c.slider().is_dragging());
        c.on_slider_change(12);
        let now = Instant::now();
        c.on_slider_released(now);
        assert!(!c.slider().is_dragging());
        let expected = format!("Min: {} | Max: {}", c.renderer().y_min(), c.renderer().y_max());
        assert_eq!(c.notification().unwrap().message, expected);
        assert_eq!(c.data_size(), 12_020);
    }

    #[test]
    fn drag_to_same_value_is_not_a_change() {
        let mut c = controller();
        c.on_slider_pressed(0);
        assert!(c.slider().is_dragging());
        c.take_redraw_request();
        c.on_slider_dragged(0);
        assert!(!c.take_redraw_request());
        c.on_slider_dragged(3);
        assert!(c.take_redraw_request());
        assert_eq!(c.data_size(), 3_020);
    }

    #[test]
    fn regenerate_keeps_size_and_notifies() {
        let mut c = controller();
        c.on_slider_change(1);
        let now = Instant::now();
        c.on_regenerate(now);
        assert_eq!(c.data_size(), 1_020);
        assert!(c.notification().is_some());
    }

    #[test]
    fn keyboard_step_is_change_then_release() {
        let mut c = controller();
        let now = Instant::now();
        c.step_slider(-1, now);
        assert_eq!(c.slider().progress(), 0);
        assert!(c.notification().is_some());
        c.step_slider(10, now);
        assert_eq!(c.slider().progress(), 10);
        assert_eq!(c.data_size(), 10_020);
    }

    #[test]
    fn notification_expires_and_requests_redraw() {
        let mut c = controller();
        let t0 = Instant::now();
        c.on_regenerate(t0);
        c.take_redraw_request();

        c.tick(t0 + Duration::from_millis(100));
        assert!(c.notification().is_some());
        assert!(!c.take_redraw_request());

        c.tick(t0 + Duration::from_secs(3));
        assert!(c.notification().is_none());
        assert!(c.take_redraw_request());
    }

    #[test]
    fn rejects_invalid_host_config() {
        let host = HostConfig {
            slider_step: 0,
            ..HostConfig::default()
        };
        let result = ChartController::new(ChartConfig::default(), host, StdRng::seed_from_u64(0));
        assert!(result.is_err());
    }
}
