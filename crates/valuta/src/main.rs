use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Size},
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, canvas::Canvas},
};
use valuta_config::Config;
use valuta_core::Theme;
use valuta_engine::{Engine, Surface};

mod search;

use search::{POPULAR_SYMBOLS, SearchBox};

/// Delay between simulation ticks. The backdrop advances one simulated
/// time unit per tick, so this is also what sets its apparent speed.
const TICK: Duration = Duration::from_millis(33);

/// Inner width of the centered search card, in cells.
const CARD_WIDTH: u16 = 52;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let size = terminal.size().unwrap_or_default();
    let result = App::new(Config::load(), size).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the page state and the backdrop
/// engine.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current color theme, handed to the backdrop on every frame.
    theme: Theme,
    /// Persisted settings; written back when the theme toggles.
    config: Config,
    /// The animated backdrop.
    engine: Engine,
    /// The stub search box.
    search: SearchBox,
}

impl App {
    /// Construct the app from persisted settings and the current
    /// terminal size.
    pub fn new(config: Config, size: Size) -> Self {
        let engine = Engine::new(
            config.simulation.clone(),
            Surface::from_cells(size.width, size.height),
            None,
        );
        Self {
            running: false,
            theme: config.theme,
            config,
            engine,
            search: SearchBox::default(),
        }
    }

    /// Run the application's main loop: draw, advance the backdrop one
    /// tick per `TICK` interval, and poll events in between.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut last_tick = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let timeout = TICK.saturating_sub(last_tick.elapsed());
            self.handle_crossterm_events(timeout)?;
            if last_tick.elapsed() >= TICK {
                self.engine.tick();
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    /// Renders the page: the animated backdrop across the whole frame,
    /// with the search card floating on top of it.
    fn render(&mut self, frame: &mut Frame) {
        let theme = self.theme;
        let palette = theme.palette();
        let area = frame.area();

        frame.render_widget(
            Block::new().style(Style::new().bg(palette.backdrop.color())),
            area,
        );

        let surface = self.engine.surface();
        let backdrop = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, surface.width()])
            .y_bounds([0.0, surface.height()])
            .paint(|ctx| self.engine.render(ctx, theme));
        frame.render_widget(backdrop, area);

        let accent = palette.glyph.color();
        let text = text_color(theme);
        let muted = muted_color(theme);

        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1), // title
            Constraint::Length(1), // tagline
            Constraint::Length(1), // spacing
            Constraint::Length(3), // search box
            Constraint::Length(1), // popular symbols
            Constraint::Length(1), // status
            Constraint::Fill(1),
            Constraint::Length(1), // help
        ])
        .split(area);

        let columns = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(CARD_WIDTH),
            Constraint::Fill(1),
        ]);

        let title = Paragraph::new(Line::from("valuta".bold().fg(accent)))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let tagline = Paragraph::new(Line::from("Search stocks, indices and currencies").fg(muted))
            .alignment(Alignment::Center);
        frame.render_widget(tagline, chunks[2]);

        let input_area = columns.split(chunks[4])[1];
        let border = if self.search.focused { accent } else { muted };
        let shown = if self.search.focused {
            format!("{}█", self.search.input)
        } else {
            self.search.input.clone()
        };
        let input = Paragraph::new(Line::from(shown).fg(text)).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::new().fg(border))
                .title(" Search "),
        );
        frame.render_widget(input, input_area);

        let mut spans: Vec<Span> = vec!["Popular: ".fg(muted)];
        for (i, &symbol) in POPULAR_SYMBOLS.iter().enumerate() {
            if i > 0 {
                spans.push("  ".into());
            }
            if self.search.selected() == Some(i) {
                spans.push(symbol.bold().fg(accent));
            } else {
                spans.push(symbol.fg(text));
            }
        }
        let popular = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(popular, columns.split(chunks[5])[1]);

        if let Some(status) = &self.search.status {
            let status = Paragraph::new(Line::from(status.as_str().fg(muted)).italic())
                .alignment(Alignment::Center);
            frame.render_widget(status, chunks[6]);
        }

        let help = Line::from(vec![
            "/".bold().fg(accent),
            " search  ".fg(muted),
            "tab".bold().fg(accent),
            " tickers  ".fg(muted),
            "t".bold().fg(accent),
            " theme  ".fg(muted),
            "q".bold().fg(accent),
            " quit".fg(muted),
        ])
        .centered();
        frame.render_widget(help, chunks[8]);
    }

    /// Poll crossterm events until the next tick is due and update the
    /// state of [`App`].
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.engine.resize_cells(cols, rows),
                Event::Mouse(_) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if self.search.focused {
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
                (_, KeyCode::Esc) => self.search.focused = false,
                (_, KeyCode::Enter) => {
                    self.search.submit();
                }
                (_, KeyCode::Backspace) => self.search.backspace(),
                (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => self.search.push(c),
                _ => {}
            }
            return;
        }
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char('/')) => self.search.focused = true,
            (_, KeyCode::Tab) => self.search.cycle_popular(),
            (_, KeyCode::Enter) => {
                self.search.submit();
            }
            _ => {}
        }
    }

    /// Flip between light and dark and persist the choice.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.config.theme = self.theme;
        self.config.save().ok();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Page text color per theme; the backdrop palette only covers the
/// animated entities.
fn text_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Rgb(226, 232, 240),
        Theme::Light => Color::Rgb(30, 41, 59),
    }
}

fn muted_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Rgb(148, 163, 184),
        Theme::Light => Color::Rgb(71, 85, 105),
    }
}
