use crate::app::{mode::AppMode, App};
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::reader::view::{render_command_deck, render_reader};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

const RENDER_TICK: Duration = Duration::from_millis(1000 / 60);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Runs until the app reaches [`AppMode::Quit`].
    ///
    /// Playback advances on its own thread; this loop only forwards keys and
    /// redraws from whatever the render sink has published.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            app.drain_playback_events();
            if app.mode() == AppMode::Quit {
                return Ok(());
            }
            self.render_frame(app)?;

            if event::poll(RENDER_TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        handle_key(app, key);
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let theme = Theme::named(&render_state.theme);

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(theme.background)),
                area,
            );

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(3)])
                .split(area);

            if render_state.mode.shows_reader() {
                render_reader(frame, layout[0], &render_state, &theme);
            }
            render_command_deck(frame, layout[1], &render_state, &theme);
        })?;

        Ok(())
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.handle_event(crate::app::AppEvent::Quit);
        return;
    }

    if app.mode().shows_reader() {
        match key.code {
            KeyCode::Char(c) => app.handle_keypress(c),
            KeyCode::Esc => app.stop_reading(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) => app.push_input(c),
        KeyCode::Backspace => app.pop_input(),
        KeyCode::Esc => {
            app.take_input();
        }
        KeyCode::Enter => {
            let input = app.take_input();
            let event = command_to_app_event(parse_command(&input));
            app.handle_event(event);
        }
        _ => {}
    }
}
