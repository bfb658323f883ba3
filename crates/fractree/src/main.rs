mod canvas_surface;
mod logging;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fractree_config::Config;
use fractree_growth::{Animation, Phase};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::Canvas,
};

use crate::canvas_surface::{CanvasSurface, dot_size};

/// Poll timeout while the tree is still growing (about 60 frames a second).
const FRAME_POLL: Duration = Duration::from_millis(16);

/// Poll timeout once the reveal is complete; only input and resizes matter.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();
    log::info!("fractree {} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config();
    let app = App::new(config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// Load the user config, falling back to defaults when it is unusable.
fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("failed to load config, using defaults: {err}");
            Config::default()
        }
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    animation: Animation,
    /// Origin of the timestamps handed to the animation.
    started: Instant,
    /// One-off message shown in the help line.
    notice: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let animation = Animation::new(config.tree, config.frame_interval_ms)?
            .with_trunk(config.trunk_ratio, config.trunk_width);
        Ok(Self {
            running: false,
            config,
            animation,
            started: Instant::now(),
            notice: None,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Split the terminal into the tree canvas and the optional help line.
    fn layout(&self, area: Rect) -> (Rect, Option<Rect>) {
        if self.config.show_help {
            let [canvas_area, help_area] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
            (canvas_area, Some(help_area))
        } else {
            (area, None)
        }
    }

    /// Regrow the tree for the canvas part of a terminal area.
    fn restart(&mut self, area: Rect) {
        let (canvas_area, _) = self.layout(area);
        let (width, height) = dot_size(canvas_area);
        log::info!(
            "growing tree for {}x{} cells",
            canvas_area.width,
            canvas_area.height
        );
        self.animation.restart(width, height);
    }

    /// Advance the reveal and draw one frame.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let (canvas_area, help_area) = self.layout(area);
        let (width, height) = dot_size(canvas_area);
        if self.animation.phase() == Phase::Idle || self.animation.size() != (width, height) {
            self.restart(area);
        }
        self.animation.advance(self.now_ms());

        let animation = &self.animation;
        let color = self.config.color_theme.color();
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                let mut surface = CanvasSurface::new(ctx, width, height);
                animation.paint(&mut surface, color);
            });
        frame.render_widget(canvas, canvas_area);

        if let Some(help_area) = help_area {
            frame.render_widget(self.help_line(), help_area);
        }
    }

    fn help_line(&self) -> Line<'static> {
        let color = self.config.color_theme.color();
        let status = match &self.notice {
            Some(notice) => notice.clone(),
            None => format!(
                "depth {}/{}  {} branches  {}",
                self.animation.threshold(),
                self.animation.max_depth(),
                self.animation.visible_count(),
                self.config.color_theme.name()
            ),
        };
        Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "r".bold().fg(color),
            " replay  ".dark_gray(),
            "c".bold().fg(color),
            " cycle color  ".dark_gray(),
            "s".bold().fg(color),
            " save  ".dark_gray(),
            "h".bold().fg(color),
            " hide help   ".dark_gray(),
            Span::from(status).fg(color),
        ])
        .centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls quickly while the tree grows and slowly once it is complete.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = if self.animation.phase() == Phase::Revealing {
            FRAME_POLL
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.restart(Rect::new(0, 0, cols, rows)),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        self.notice = None;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('r')) => self.replay(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('h')) => self.toggle_help(),
            (_, KeyCode::Char('s')) => self.save_config(),
            _ => {}
        }
    }

    /// Grow the tree again from the trunk at the current size.
    fn replay(&mut self) {
        let (width, height) = self.animation.size();
        self.animation.restart(width, height);
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.config.color_theme = self.config.color_theme.next();
    }

    fn toggle_help(&mut self) {
        self.config.show_help = !self.config.show_help;
    }

    /// Persist the current settings.
    fn save_config(&mut self) {
        self.notice = Some(match self.config.save() {
            Ok(path) => format!("saved {}", path.display()),
            Err(err) => {
                log::warn!("failed to save config: {err}");
                format!("save failed: {err}")
            }
        });
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
