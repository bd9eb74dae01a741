use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const LEGACY_SPACE_CODE: u32 = 32;

/// Raw key identification as different environments report it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySignal<'a> {
    /// Numeric key code, as older input layers deliver it
    Legacy(u32),
    /// Named key identifier
    Named(&'a str),
}

impl KeySignal<'_> {
    pub fn is_space(&self) -> bool {
        match self {
            KeySignal::Legacy(code) => *code == LEGACY_SPACE_CODE,
            KeySignal::Named(name) => {
                *name == " "
                    || name.eq_ignore_ascii_case("space")
                    || name.eq_ignore_ascii_case("spacebar")
            }
        }
    }
}

/// What the app should do in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Quit,
    History,
    Back,
    NewSession,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollHome,
    Ignore,
}

impl From<KeySignal<'_>> for Command {
    fn from(signal: KeySignal<'_>) -> Self {
        if signal.is_space() {
            Command::Toggle
        } else {
            Command::Ignore
        }
    }
}

impl From<KeyEvent> for Command {
    fn from(key: KeyEvent) -> Self {
        // releases and auto-repeat must not re-trigger the timer
        if key.kind != KeyEventKind::Press {
            return Command::Ignore;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Quit;
        }

        match key.code {
            KeyCode::Char(' ') => Command::Toggle,
            KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
            KeyCode::Char('h') => Command::History,
            KeyCode::Char('b') | KeyCode::Backspace => Command::Back,
            KeyCode::Char('n') => Command::NewSession,
            KeyCode::Up => Command::ScrollUp,
            KeyCode::Down => Command::ScrollDown,
            KeyCode::PageUp => Command::PageUp,
            KeyCode::PageDown => Command::PageDown,
            KeyCode::Home => Command::ScrollHome,
            _ => Command::Ignore,
        }
    }
}

/// Normalize a key press given the timer state. While a solve is running any
/// press other than quit stops it.
pub fn command_for(key: KeyEvent, running: bool) -> Command {
    match Command::from(key) {
        Command::Quit => Command::Quit,
        Command::Ignore if key.kind != KeyEventKind::Press => Command::Ignore,
        _ if running => Command::Toggle,
        other => other,
    }
}
