//! Input and parsing helper functions for the CLI.
//!
//! - Prompting for missing booking fields and confirmations (`input`)
//! - Datetime, timezone and export format parsing (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, prompt_required};
pub use parsing::{parse_datetime, parse_export_format, parse_timezone, ExportFormat};
