//! Progress indicators for long-running operations.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::context::UiContext;
use super::render::badge;
use super::theme::{spinner_frames, Badge};

/// A spinner for indeterminate waits such as Gemini calls.
///
/// Animates only on a pretty TTY; otherwise it stays silent so plain and
/// JSON output remain clean.
pub struct Spinner<'a> {
    ctx: &'a UiContext,
    bar: Option<ProgressBar>,
}

impl<'a> Spinner<'a> {
    /// Start a spinner with the given message.
    pub fn start(ctx: &'a UiContext, message: &str) -> Self {
        if !ctx.allows_animation() {
            return Self { ctx, bar: None };
        }
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}...")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&tick_strings(ctx.unicode));
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self {
            ctx,
            bar: Some(bar),
        }
    }

    fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Stop the spinner without printing anything.
    pub fn stop(&self) {
        self.clear();
    }

    /// Finish spinner with a success badge (pretty mode only).
    pub fn finish(&self, message: &str) {
        self.clear();
        if self.ctx.mode.is_pretty() {
            println!("{}", badge(self.ctx, Badge::Ok, message));
        }
    }

    /// Finish spinner with a warning badge on stderr.
    pub fn finish_warn(&self, message: &str) {
        self.clear();
        if !self.ctx.mode.is_json() {
            eprintln!("{}", badge(self.ctx, Badge::Warn, message));
        }
    }
}

impl Drop for Spinner<'_> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Spinner frames plus the trailing "done" frame indicatif expects.
fn tick_strings(unicode: bool) -> Vec<&'static str> {
    let mut frames = spinner_frames(unicode).to_vec();
    frames.push(if unicode { "\u{2713}" } else { "*" });
    frames
}
