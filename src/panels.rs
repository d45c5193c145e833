//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod button;
pub mod chart;
pub mod header;
pub mod help;
pub mod slider;
pub mod toast;

pub use button::ButtonPanel;
pub use chart::ChartPanel;
pub use header::HeaderPanel;
pub use help::HelpPanel;
pub use slider::SliderPanel;
pub use toast::ToastPanel;
