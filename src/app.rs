use std::io;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::camera::Camera;
use crate::config::LifeConfig;
use crate::events::AppEvent;
use crate::events::CameraEvent;
use crate::events::EngineEvent;
use crate::events::Event;
use crate::grid::Grid;
use crate::render::Frame;

/// Host state: the board, its frame, and the terminal view onto it.
pub struct App {
    config: LifeConfig,
    rng: StdRng,
    grid: Grid,
    frame: Frame,
    cam: Camera,
    paused: bool,
}

impl App {
    /// Seed a board from `config` and fit the view to a `cols` by `rows` terminal.
    ///
    /// The last terminal row is kept for the status line.
    ///
    /// # Panics
    ///
    /// If `config` has a zero dimension. [`LifeConfig::validate`] rules that out.
    pub fn new(config: LifeConfig, cols: u16, rows: u16) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let grid = Grid::new(config.width, config.height, config.initial_live, &mut rng);
        let frame = Frame::new(&grid);

        info!(?grid, "Starting");

        Self {
            config,
            rng,
            grid,
            frame,
            cam: Camera::new(cols, rows.saturating_sub(1)),
            paused: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time between generations
    pub fn frametime(&self) -> Duration {
        Duration::from_secs_f64(1f64 / self.config.tick_rate as f64)
    }

    /// Advance the board once, unless paused
    pub fn tick(&mut self) {
        if !self.paused {
            self.grid.step();
        }
    }

    /// Returns false once the app should exit
    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::AppEvent(AppEvent::Exit) => return false,
            Event::AppEvent(AppEvent::TogglePause) => {
                self.paused = !self.paused;
                info!(paused = self.paused, "Toggled pause");
            }
            Event::AppEvent(AppEvent::CameraEvent(event)) => match event {
                CameraEvent::Move { dx, dy } => {
                    self.cam
                        .pan(dx, dy, self.frame.width(), self.frame.height());
                }
                CameraEvent::Reset => self.cam.reset_view(),
                CameraEvent::Resize { cols, rows } => {
                    self.cam.resize(
                        cols,
                        rows.saturating_sub(1),
                        self.frame.width(),
                        self.frame.height(),
                    );
                }
            },

            // a tick already steps a running board
            Event::EngineEvent(EngineEvent::Step) => {
                if self.paused {
                    self.grid.step();
                }
            }
            Event::EngineEvent(EngineEvent::Reseed) => {
                self.grid.reseed(self.config.initial_live, &mut self.rng);
            }
        }

        true
    }

    /// Render the board and the status line to `out`
    pub fn draw(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.frame.draw(&self.grid);

        self.cam.reset();
        self.cam
            .draw_rgba(self.frame.pixels(), self.frame.width(), self.frame.height());

        queue!(out, cursor::MoveTo(0, 0))?;

        for line in self.cam.render().lines() {
            queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        queue!(
            out,
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(self.status())
        )?;

        out.flush()
    }

    fn status(&self) -> String {
        format!(
            "gen {} | {} alive | {}",
            self.grid.generation(),
            self.grid.live_count(),
            if self.paused { "paused" } else { "running" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::config::LifeConfig;
    use crate::events::AppEvent;
    use crate::events::EngineEvent;
    use crate::events::Event;

    const STEP: Event = Event::EngineEvent(EngineEvent::Step);
    const RESEED: Event = Event::EngineEvent(EngineEvent::Reseed);
    const PAUSE: Event = Event::AppEvent(AppEvent::TogglePause);
    const EXIT: Event = Event::AppEvent(AppEvent::Exit);

    fn app() -> App {
        let config = LifeConfig {
            width: 16,
            height: 12,
            initial_live: 40,
            tick_rate: 10,
            seed: Some(5),
        };

        App::new(config, 8, 4)
    }

    #[test]
    fn step_is_ignored_while_running() {
        let mut app = app();

        assert!(app.handle(STEP));
        assert_eq!(app.grid().generation(), 0);

        app.tick();
        assert_eq!(app.grid().generation(), 1);
    }

    #[test]
    fn step_while_paused() {
        let mut app = app();

        assert!(app.handle(PAUSE));
        assert!(app.is_paused());

        app.tick();
        assert_eq!(app.grid().generation(), 0);

        assert!(app.handle(STEP));
        assert!(app.handle(STEP));
        assert_eq!(app.grid().generation(), 2);

        assert!(app.handle(PAUSE));
        assert!(!app.is_paused());
    }

    #[test]
    fn reseed_resets_generation() {
        let mut app = app();

        app.tick();
        app.tick();
        assert_eq!(app.grid().generation(), 2);

        assert!(app.handle(RESEED));
        assert_eq!(app.grid().generation(), 0);
        assert!(app.grid().live_count() <= 40);
    }

    #[test]
    fn exit() {
        let mut app = app();

        assert!(app.handle(PAUSE));
        assert!(!app.handle(EXIT));
    }

    #[test]
    fn frametime() {
        assert_eq!(app().frametime().as_millis(), 100);
    }

    #[test]
    fn draws_status_line() {
        let mut app = app();
        let mut out = Vec::new();

        app.draw(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with("running"), "{out:?}");
        assert!(out.contains(&format!("{} alive", app.grid().live_count())));
    }
}
