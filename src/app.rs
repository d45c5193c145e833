//! src/app.rs
//!
//! Random-data line chart demo for the terminal.
//!
//! # Top-Level Application (`app.rs`)
//!
//! Builds the chart controller, lays the panels out each frame, and runs the
//! single-threaded event loop that feeds keyboard and mouse input to the
//! controller.
//!
//! ## Overview
//! The application:
//! - Generates a random dataset (`y` in `[1, 1000]`) and draws it as a line
//!   chart with dot markers and arrow-capped axes.
//! - Lets the dataset size be changed with a slider (20 to 100 020 points).
//!   Large datasets are bucket-averaged down to at most 100 drawn points.
//! - Regenerates data on demand and briefly shows the y bounds.
//!
//! # Building and Running
//!
//! ```text
//! cargo run --release
//! ```
//!
//! Set `LINE_CHART_LOG=/tmp/line-chart.log` to write logs to a file
//! (`RUST_LOG=debug` for downsampling details).
//!
//! # Controls
//!
//! - **← / →**: move the slider by one percent.
//! - **PgUp / PgDn**: move the slider by ten percent.
//! - **Home / End**: jump to the smallest / largest dataset.
//! - **r / Enter / Space**: regenerate data at the current size.
//! - **Mouse**: press and drag the slider (data updates live while dragging,
//!   bounds are shown on release); click the button to regenerate.
//! - **q / Esc / Ctrl-C**: quit and restore the terminal.
//!
//! Every keyboard slider move counts as a change followed by a release, so
//! it regenerates the data and shows the bounds.
//!
//! # Redraws
//!
//! The screen is only redrawn when the chart data changed, the notification
//! appeared or expired, the button changed state, or the terminal was
//! resized. Between events the loop blocks in `poll` for at most the
//! configured interval, or until the notification is due to expire.

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction},
};
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::chart::ChartConfig;
use crate::host::slider::progress_at_column;
use crate::host::{ChartController, HostConfig};
use crate::panels::slider::slider_track;
use crate::panels::{ButtonPanel, ChartPanel, HeaderPanel, HelpPanel, SliderPanel, ToastPanel};
use crate::ui::{HitMap, HitTarget, Panel, group, interactive, leaf};

pub const TITLE: &str = "Line Chart Demo";
pub const BUTTON_LABEL: &str = "Change set";

pub struct App<R = ThreadRng> {
    controller: ChartController<R>,
    hits: HitMap,
    button_pressed: bool,
    dirty: bool,
    running: bool,
}

impl<R: Rng> App<R> {
    pub fn new(controller: ChartController<R>) -> Self {
        Self {
            controller,
            hits: HitMap::default(),
            button_pressed: false,
            dirty: true,
            running: true,
        }
    }

    pub fn controller(&self) -> &ChartController<R> {
        &self.controller
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Lay out and draw one frame, remembering where the controls are.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        self.hits.clear();
        let renderer = self.controller.renderer();
        let slider = self.controller.slider();
        let data_size = self.controller.data_size();

        let root = group(
            Direction::Vertical,
            vec![
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(3),
            ],
            vec![
                leaf(HeaderPanel::new(TITLE, renderer.state(), data_size)),
                leaf(ChartPanel::new(renderer, "Chart")),
                group(
                    Direction::Horizontal,
                    vec![Constraint::Min(20), Constraint::Length(18)],
                    vec![
                        interactive(HitTarget::Slider, SliderPanel::new(slider, data_size)),
                        interactive(
                            HitTarget::Button,
                            ButtonPanel::new(BUTTON_LABEL, self.button_pressed),
                        ),
                    ],
                ),
                leaf(HelpPanel::default()),
            ],
        );
        root.draw(f, f.area(), &mut self.hits);

        if let Some(n) = self.controller.notification() {
            ToastPanel::new(n).draw(f, f.area());
        }
    }

    /// Whether the next loop iteration has to draw a frame.
    pub fn take_redraw_request(&mut self) -> bool {
        let app = std::mem::take(&mut self.dirty);
        let controller = self.controller.take_redraw_request();
        app | controller
    }

    /// How long `poll` may block before something on screen goes stale.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let idle = self.controller.config().poll_interval;
        match self.controller.notification() {
            Some(n) => n.remaining(now).min(idle),
            None => idle,
        }
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::Resize(..) => self.controller.request_redraw(),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let step = i16::from(self.controller.config().slider_step);
        let page = i16::from(self.controller.config().slider_page_step);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Left => self.controller.step_slider(-step, now),
            KeyCode::Right => self.controller.step_slider(step, now),
            KeyCode::PageDown => self.controller.step_slider(-page, now),
            KeyCode::PageUp => self.controller.step_slider(page, now),
            KeyCode::Home => self.controller.step_slider(-100, now),
            KeyCode::End => self.controller.step_slider(100, now),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.on_regenerate(now)
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let target = self.hits.target_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(HitTarget::Slider) => {
                    if let Some(p) = self.slider_progress_at(mouse.column) {
                        self.controller.on_slider_pressed(p);
                    }
                }
                Some(HitTarget::Button) => {
                    self.button_pressed = true;
                    self.dirty = true;
                }
                None => {}
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.controller.slider().is_dragging() {
                    if let Some(p) = self.slider_progress_at(mouse.column) {
                        self.controller.on_slider_dragged(p);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.controller.slider().is_dragging() {
                    self.controller.on_slider_released(now);
                }
                if std::mem::take(&mut self.button_pressed) {
                    self.dirty = true;
                    if target == Some(HitTarget::Button) {
                        self.controller.on_regenerate(now);
                    }
                }
            }
            _ => {}
        }
    }

    fn slider_progress_at(&self, column: u16) -> Option<u8> {
        let track = slider_track(self.hits.area_of(HitTarget::Slider)?);
        Some(progress_at_column(column, track.x, track.width))
    }

    /// Poll, dispatch and redraw until the user quits.
    pub fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            let now = Instant::now();
            self.controller.tick(now);
            if self.take_redraw_request() {
                terminal.draw(|f| self.draw(f))?;
            }

            if event::poll(self.poll_timeout(now))? {
                let ev = event::read()?;
                self.handle_event(ev, Instant::now());
            }
        }
        Ok(())
    }
}

pub fn run() -> color_eyre::Result<()> {
    let controller = ChartController::with_thread_rng(ChartConfig::default(), HostConfig::default())?;
    tracing::info!(
        data_size = controller.data_size(),
        "starting line chart demo"
    );
    let mut app = App::new(controller);

    let mut terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|()| app.run_loop(&mut terminal));

    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        tracing::warn!(error = %e, "failed to disable mouse capture");
    }
    ratatui::restore();
    tracing::info!("terminal restored");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn app() -> App<StdRng> {
        let controller = ChartController::new(
            ChartConfig::default(),
            HostConfig::default(),
            StdRng::seed_from_u64(9),
        )
        .unwrap();
        App::new(controller)
    }

    fn draw(app: &mut App<StdRng>) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn first_frame_shows_all_panels() {
        let mut app = app();
        assert!(app.take_redraw_request());
        let screen = text(&draw(&mut app));
        assert!(screen.contains(TITLE));
        assert!(screen.contains(BUTTON_LABEL));
        assert!(screen.contains("20 points (0%)"));
        assert!(screen.contains("Controls"));
        assert!(app.hits().area_of(HitTarget::Slider).is_some());
        assert!(app.hits().area_of(HitTarget::Button).is_some());
    }

    #[test]
    fn regenerate_key_shows_bounds_toast() {
        let mut app = app();
        draw(&mut app);
        app.handle_event(key(KeyCode::Char('r')), Instant::now());
        let msg = app.controller().notification().unwrap().message.clone();
        assert!(text(&draw(&mut app)).contains(&msg));
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut app = app();
        app.handle_event(key(KeyCode::Esc), Instant::now());
        assert!(!app.is_running());

        let mut app = self::app();
        app.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Instant::now(),
        );
        assert!(!app.is_running());
    }

    #[test]
    fn arrow_keys_step_the_slider() {
        let mut app = app();
        let now = Instant::now();
        app.handle_event(key(KeyCode::Right), now);
        app.handle_event(key(KeyCode::PageUp), now);
        assert_eq!(app.controller().slider().progress(), 11);
        assert_eq!(app.controller().data_size(), 11_020);
        app.handle_event(key(KeyCode::End), now);
        assert_eq!(app.controller().data_size(), 100_020);
        app.handle_event(key(KeyCode::Home), now);
        assert_eq!(app.controller().data_size(), 20);
    }

    #[test]
    fn dragging_slider_updates_live_and_notifies_on_release() {
        let mut app = app();
        draw(&mut app);
        let track = slider_track(app.hits().area_of(HitTarget::Slider).unwrap());
        let now = Instant::now();

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), track.x, track.y), now);
        assert!(app.controller().slider().is_dragging());
        assert_eq!(app.controller().slider().progress(), 0);

        let end = track.x + track.width - 1;
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), end, track.y), now);
        assert_eq!(app.controller().slider().progress(), 100);
        assert_eq!(app.controller().data_size(), 100_020);
        assert!(app.controller().notification().is_none());

        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), end, track.y), now);
        assert!(!app.controller().slider().is_dragging());
        assert!(app.controller().notification().is_some());
    }

    #[test]
    fn button_click_regenerates_only_when_released_inside() {
        let mut app = app();
        draw(&mut app);
        let button = app.hits().area_of(HitTarget::Button).unwrap();
        let (col, row) = (button.x + 1, button.y + 1);
        let now = Instant::now();

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row), now);
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0), now);
        assert!(app.controller().notification().is_none());

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row), now);
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), col, row), now);
        assert!(app.controller().notification().is_some());
    }

    #[test]
    fn poll_timeout_shrinks_while_toast_is_visible() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.poll_timeout(now), Duration::from_millis(100));
        app.handle_event(key(KeyCode::Enter), now);
        let later = now + Duration::from_millis(1950);
        assert_eq!(app.poll_timeout(later), Duration::from_millis(50));
    }

    #[test]
    fn resize_forces_redraw() {
        let mut app = app();
        while app.take_redraw_request() {}
        app.handle_event(Event::Resize(100, 40), Instant::now());
        assert!(app.take_redraw_request());
    }
}
