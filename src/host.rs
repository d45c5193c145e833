//! src/host.rs
//!
//! Controller side of the demo: dataset generation, the size slider,
//! the regenerate action and the transient bounds notification.

pub mod config;
pub mod controller;
pub mod dataset;
pub mod notification;
pub mod slider;

pub use config::HostConfig;
pub use controller::ChartController;
pub use dataset::generate_random_data_points;
pub use notification::Notification;
pub use slider::SizeSlider;
