pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use cubetime::{
    app_dirs::AppDirs,
    clock::SystemClock,
    config::{Config, ConfigStore, FileConfigStore},
    display::Board,
    input::{command_for, Command},
    logging,
    runtime::{AppEvent, EventQueue, Runner},
    scheduler::ChannelScheduler,
    scramble::PlaceholderScramble,
    session::Session,
    timer::{Timer, Transition},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use tracing::{info, Level};

const POLL_INTERVAL_MS: u64 = 100;

/// speedcubing stopwatch tui with live session statistics
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal stopwatch for speedcubing. Space starts and stops the timer; every solve is recorded with its scramble and the session's best, worst, mean and median update as you go."
)]
pub struct Cli {
    /// redraw interval of the running timer in milliseconds
    #[clap(short = 'r', long)]
    refresh_ms: Option<u64>,

    /// placeholder scramble text shown before each solve
    #[clap(short = 's', long)]
    scramble: Option<String>,

    /// number of recent solves listed under the timer
    #[clap(long)]
    history_rows: Option<usize>,

    /// log verbosity (trace, debug, info, warn, error)
    #[clap(long, default_value_t = Level::INFO)]
    log_level: Level,

    /// log file location (defaults to the user state directory)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// write the effective settings back to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line values take precedence over the stored config
    fn apply(&self, mut config: Config) -> Config {
        if let Some(ms) = self.refresh_ms {
            config.refresh_interval_ms = ms;
        }
        if let Some(ref scramble) = self.scramble {
            config.scramble = scramble.clone();
        }
        if let Some(rows) = self.history_rows {
            config.history_rows = rows;
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Timer,
    History,
}

#[derive(Debug, Default)]
pub struct HistoryState {
    pub scroll_offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What the event loop does after handling one event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Redraw,
    Skip,
    Quit,
}

pub type LiveSession = Session<SystemClock, ChannelScheduler, PlaceholderScramble>;

pub struct App {
    pub config: Config,
    pub session: LiveSession,
    pub board: Board,
    pub state: AppState,
    pub history_state: HistoryState,
    scheduler: ChannelScheduler,
}

impl App {
    pub fn new(config: Config, scheduler: ChannelScheduler) -> Self {
        let mut board = Board::new();
        let session = Self::start_session(&config, &scheduler, &mut board);

        Self {
            config,
            session,
            board,
            state: AppState::Timer,
            history_state: HistoryState::default(),
            scheduler,
        }
    }

    fn start_session(config: &Config, scheduler: &ChannelScheduler, board: &mut Board) -> LiveSession {
        let timer = Timer::new(
            SystemClock::new(),
            scheduler.clone(),
            config.refresh_interval(),
        );
        Session::new(timer, PlaceholderScramble::new(config.scramble.clone()), board)
    }

    /// Throw away the current session and its display. Refused mid-solve.
    pub fn new_session(&mut self) -> bool {
        if self.session.is_running() {
            return false;
        }
        self.board = Board::new();
        self.session = Self::start_session(&self.config, &self.scheduler, &mut self.board);
        self.history_state = HistoryState::default();
        true
    }

    pub fn on_refresh(&mut self) -> bool {
        if !self.session.is_running() {
            return false;
        }
        self.session.refresh(&mut self.board);
        true
    }

    pub fn on_event(&mut self, event: AppEvent) -> Step {
        match event {
            // a refresh queued just before the stop arrives while idle; nothing to draw
            AppEvent::Refresh if !self.on_refresh() => Step::Skip,
            AppEvent::Refresh | AppEvent::Resize => Step::Redraw,
            AppEvent::Key(key) => match self.handle_key(key) {
                Flow::Quit => Step::Quit,
                Flow::Continue => Step::Redraw,
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match command_for(key, self.session.is_running()) {
            Command::Quit => return Flow::Quit,
            Command::Toggle => {
                if let Transition::Started = self.session.toggle(&mut self.board) {
                    self.state = AppState::Timer;
                }
            }
            Command::History => self.state = AppState::History,
            Command::Back => self.state = AppState::Timer,
            Command::NewSession => {
                if self.new_session() {
                    info!("new session requested");
                }
            }
            Command::ScrollUp => {
                self.history_state.scroll_offset = self.history_state.scroll_offset.saturating_sub(1);
            }
            // Will check max scroll in render function
            Command::ScrollDown => self.history_state.scroll_offset += 1,
            Command::PageUp => {
                self.history_state.scroll_offset =
                    self.history_state.scroll_offset.saturating_sub(10);
            }
            Command::PageDown => self.history_state.scroll_offset += 10,
            Command::ScrollHome => self.history_state.scroll_offset = 0,
            Command::Ignore => {}
        }
        Flow::Continue
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let log_path = cli.log_file.clone().unwrap_or_else(AppDirs::log_path);
    logging::init(&log_path, cli.log_level)?;

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    if cli.save_config {
        store.save(&config)?;
        info!(path = %store.path().display(), "config saved");
    }
    info!(?config, "starting");

    let queue = EventQueue::new().with_terminal_input();
    let mut app = App::new(config, ChannelScheduler::new(queue.sender()));
    let runner = Runner::new(queue, Duration::from_millis(POLL_INTERVAL_MS));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    info!(solves = app.session.stats().len(), "exiting");
    result
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<EventQueue>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    loop {
        let Some(event) = runner.step() else {
            continue;
        };

        match app.on_event(event) {
            Step::Redraw => {
                terminal.draw(|f| ui(app, f))?;
            }
            Step::Skip => {}
            Step::Quit => break,
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    let screen = ui::screen::current_screen(&app.state);
    screen.render(app, f);
}


#[cfg(test)]
mod tests {
    use super::test_support::{idle_app, solve, space};
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use cubetime::display::Slot;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["cubetime"]);

        assert_eq!(cli.refresh_ms, None);
        assert_eq!(cli.scramble, None);
        assert_eq!(cli.history_rows, None);
        assert_eq!(cli.log_level, Level::INFO);
        assert_eq!(cli.log_file, None);
        assert!(!cli.save_config);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "cubetime",
            "-r",
            "25",
            "--scramble",
            "F2 U2",
            "--history-rows",
            "8",
            "--log-level",
            "debug",
            "--save-config",
        ]);
        assert_eq!(cli.refresh_ms, Some(25));
        assert_eq!(cli.scramble.as_deref(), Some("F2 U2"));
        assert_eq!(cli.history_rows, Some(8));
        assert_eq!(cli.log_level, Level::DEBUG);
        assert!(cli.save_config);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["cubetime", "--refresh-ms", "40", "-s", "L2"]);
        let config = cli.apply(Config::default());

        assert_eq!(config.refresh_interval_ms, 40);
        assert_eq!(config.scramble, "L2");
        assert_eq!(config.history_rows, Config::default().history_rows);
    }

    #[test]
    fn test_app_new_starts_idle_session() {
        let (app, _queue) = idle_app();

        assert_eq!(app.state, AppState::Timer);
        assert!(!app.session.is_running());
        assert!(app.session.stats().is_empty());
        assert_eq!(app.board.text(Slot::Scramble), Some("R U R' U'"));
    }

    #[test]
    fn test_space_toggles_and_records() {
        let (mut app, _queue) = idle_app();

        assert_eq!(app.handle_key(space()), Flow::Continue);
        assert!(app.session.is_running());

        assert_eq!(app.handle_key(space()), Flow::Continue);
        assert!(!app.session.is_running());
        assert_eq!(app.session.stats().len(), 1);
        assert_eq!(app.board.rows().len(), 1);
    }

    #[test]
    fn test_any_key_stops_running_timer() {
        let (mut app, _queue) = idle_app();
        app.handle_key(space());

        app.handle_key(key(KeyCode::Char('x')));
        assert!(!app.session.is_running());
        assert_eq!(app.session.stats().len(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _queue) = idle_app();
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Flow::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );

        app.handle_key(space());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Quit);
    }

    #[test]
    fn test_refresh_only_when_running() {
        let (mut app, _queue) = idle_app();
        assert!(!app.on_refresh());

        app.handle_key(space());
        assert!(app.on_refresh());

        app.handle_key(space());
        assert!(!app.on_refresh());
    }

    #[test]
    fn test_history_navigation() {
        let (mut app, _queue) = idle_app();

        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.state, AppState::History);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.history_state.scroll_offset, 11);
        app.handle_key(key(KeyCode::PageUp));
        assert_eq!(app.history_state.scroll_offset, 1);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.history_state.scroll_offset, 0);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.history_state.scroll_offset, 0);

        app.handle_key(key(KeyCode::Char('b')));
        assert_eq!(app.state, AppState::Timer);
    }

    #[test]
    fn test_starting_a_solve_from_history_returns_to_timer() {
        let (mut app, _queue) = idle_app();
        app.state = AppState::History;

        app.handle_key(space());
        assert_eq!(app.state, AppState::Timer);
        assert!(app.session.is_running());
    }

    #[test]
    fn test_new_session_clears_history_only_when_idle() {
        let (mut app, _queue) = idle_app();
        solve(&mut app);
        solve(&mut app);
        assert_eq!(app.session.stats().len(), 2);

        app.handle_key(space());
        assert!(!app.new_session());
        app.handle_key(space());
        assert_eq!(app.session.stats().len(), 3);

        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.session.stats().is_empty());
        assert!(app.board.rows().is_empty());
        assert_eq!(app.board.text(Slot::Best), None);
    }

    #[test]
    fn test_ui_function_timer_state() {
        let (mut app, _queue) = idle_app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| ui(&mut app, f)).unwrap();

        let content = test_support::buffer_text(terminal.backend().buffer());
        assert!(content.contains("0.000"));
    }

    #[test]
    fn test_ui_function_history_state() {
        let (mut app, _queue) = idle_app();
        solve(&mut app);
        app.state = AppState::History;
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        terminal.draw(|f| ui(&mut app, f)).unwrap();

        let content = test_support::buffer_text(terminal.backend().buffer());
        assert!(content.contains("History"));
    }

    #[test]
    fn test_refresh_event_redraws_only_while_running() {
        let (mut app, _queue) = idle_app();
        assert_eq!(app.on_event(AppEvent::Refresh), Step::Skip);

        app.on_event(AppEvent::Key(space()));
        assert!(app.session.is_running());
        assert_eq!(app.on_event(AppEvent::Refresh), Step::Redraw);

        app.on_event(AppEvent::Key(space()));
        assert_eq!(app.on_event(AppEvent::Refresh), Step::Skip);
        assert_eq!(app.session.stats().len(), 1);
    }

    #[test]
    fn test_resize_and_key_events_redraw() {
        let (mut app, _queue) = idle_app();
        assert_eq!(app.on_event(AppEvent::Resize), Step::Redraw);
        assert_eq!(app.on_event(AppEvent::Key(key(KeyCode::Char('h')))), Step::Redraw);
        assert_eq!(app.state, AppState::History);

        assert_eq!(app.on_event(AppEvent::Key(key(KeyCode::Esc))), Step::Quit);
    }

    #[test]
    fn test_event_loop_quits_on_escape() {
        let (mut app, queue) = idle_app();
        let tx = queue.sender();
        tx.send(AppEvent::Resize).unwrap();
        tx.send(AppEvent::Refresh).unwrap();
        tx.send(AppEvent::Key(key(KeyCode::Esc))).unwrap();
        let runner = Runner::new(queue, Duration::from_millis(POLL_INTERVAL_MS));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        start_tui(&mut terminal, &mut app, &runner).unwrap();

        let content = test_support::buffer_text(terminal.backend().buffer());
        assert!(content.contains("0.000"));
    }
}
