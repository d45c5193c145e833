//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

use line_chart_demo::{app, telemetry};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    telemetry::init_from_env()?;
    app::run()
}
