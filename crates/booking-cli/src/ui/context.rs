//! Terminal facts and display preferences shared by every renderer.

use std::io::IsTerminal;

use chrono_tz::Tz;

use super::mode::OutputMode;

const DEFAULT_WIDTH: usize = 80;

/// What the environment says about stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    /// `TERM=dumb`: no escapes, no unicode
    pub dumb: bool,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var_os("TERM").is_some_and(|term| term == "dumb"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiContext {
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    /// Columns available for tables
    pub width: usize,
    pub mode: OutputMode,
    /// Zone booking dates are shown in; UTC when unset
    pub timezone: Option<Tz>,
}

impl UiContext {
    /// Build the context for one command from its output flags.
    ///
    /// Color is only used for pretty output and is turned off by
    /// `--no-color` or a `NO_COLOR` variable of any value.
    pub fn from_env(json: bool, format: Option<&str>, no_color: bool) -> Self {
        let term = Terminal::detect();
        let mode = OutputMode::resolve(json, format, term);
        Self {
            is_tty: term.stdout_tty,
            color: mode.is_pretty() && !no_color && std::env::var_os("NO_COLOR").is_none(),
            unicode: !term.dumb,
            width: columns().unwrap_or(DEFAULT_WIDTH),
            mode,
            timezone: None,
        }
    }

    pub fn with_timezone(mut self, timezone: Option<Tz>) -> Self {
        self.timezone = timezone;
        self
    }

    /// Prompts need a person on both ends.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }

    pub fn allows_animation(&self) -> bool {
        self.is_tty && self.mode.is_pretty()
    }
}

fn columns() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
        .or_else(window_columns)
}

#[cfg(unix)]
fn window_columns() -> Option<usize> {
    let mut size = std::mem::MaybeUninit::<libc::winsize>::zeroed();
    // SAFETY: TIOCGWINSZ only writes into the winsize we hand it.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: zero-initialized, then filled by the successful ioctl.
    let size = unsafe { size.assume_init() };
    (size.ws_col > 0).then_some(usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn window_columns() -> Option<usize> {
    None
}
