mod banner;
mod cli;
mod logging;

use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glyphrain_config::Config;
use glyphrain_core::{BannerLayout, Viewport};
use glyphrain_rain::RainRenderer;
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::banner::Banner;
use crate::cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let (mut config, source) = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let log_path = logging::init(&config.log_level)?;
    info!(?source, ?log_path, "starting glyphrain");

    let (cols, rows) = crossterm::terminal::size()?;
    let app = App::new(&config, Viewport::from_terminal(cols, rows), StdRng::from_entropy());

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    info!("exiting glyphrain");
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Rain surface and drop state.
    renderer: RainRenderer,
    /// Randomness for the rain.
    rng: StdRng,
    /// Banner sizing for the current viewport.
    banner: BannerLayout,
    /// Banner text.
    banner_text: String,
    /// Is the banner drawn?
    show_banner: bool,
    /// When the next render step is due.
    next_tick: Instant,
}

impl App {
    /// Construct a new instance of [`App`] covering `viewport`.
    pub fn new(config: &Config, viewport: Viewport, mut rng: StdRng) -> Self {
        let renderer = RainRenderer::new(viewport, config.rain_settings(), &mut rng);
        info!(
            width = viewport.width,
            height = viewport.height,
            columns = renderer.columns(),
            "rain initialized"
        );

        Self {
            running: false,
            renderer,
            rng,
            banner: BannerLayout::fit(viewport),
            banner_text: config.banner_text.clone(),
            show_banner: config.show_banner,
            next_tick: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            if Instant::now() >= self.next_tick {
                self.on_tick();
            }
        }
        Ok(())
    }

    fn tick(&self) -> Duration {
        self.renderer.settings().tick
    }

    /// Advance the rain by one step and schedule the next.
    ///
    /// The next step is scheduled from now, so ticks missed under load are
    /// dropped rather than replayed.
    fn on_tick(&mut self) {
        self.renderer.step(&mut self.rng);
        self.next_tick = Instant::now() + self.tick();
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(self.renderer.surface(), area);

        if self.show_banner {
            frame.render_widget(Banner::new(&self.banner_text, self.banner), area);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most until the next render step is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('b')) => self.toggle_banner(),
            _ => {}
        }
    }

    /// Adapt to a new terminal size.
    ///
    /// Resizes the surface, refits the banner, then restarts the drops for the
    /// new column count.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        let viewport = Viewport::from_terminal(cols, rows);
        self.renderer.resize_surface(viewport);
        self.banner = BannerLayout::fit(viewport);
        self.renderer.restart_drops(&mut self.rng);

        info!(
            cols,
            rows,
            columns = self.renderer.columns(),
            font_px = self.banner.font_px,
            "viewport resized"
        );
    }

    /// Show or hide the banner.
    fn toggle_banner(&mut self) {
        self.show_banner = !self.show_banner;
        debug!(show_banner = self.show_banner, "banner toggled");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
