//! Which of the three renderings a command produces.

use super::context::Terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document on stdout, nothing else
    Json,
    /// `key=value` lines and tab-separated rows for scripts
    #[default]
    Plain,
    /// Colored tables and receipts for a person at a terminal
    Pretty,
}

impl OutputMode {
    /// `--json` wins, then an explicit `--format`. Without either, a real
    /// terminal gets tables and pipes get plain lines.
    pub fn resolve(json: bool, format: Option<&str>, term: Terminal) -> Self {
        if json {
            return Self::Json;
        }
        let format = format.map(str::to_ascii_lowercase);
        match format.as_deref() {
            Some("json") => Self::Json,
            Some("plain") => Self::Plain,
            _ if term.stdout_tty && !term.dumb => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
