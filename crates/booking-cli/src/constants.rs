//! Process exit codes and CLI defaults.

/// Exit statuses. 0 is success and 2 is left to clap for usage errors.
pub mod exit_codes {
    /// Anything without a more specific code (I/O, corrupt config).
    pub const FAILURE: i32 = 1;

    /// No config, no store directory, or no booking with that id.
    pub const NOT_FOUND: i32 = 3;

    /// A flag or field failed validation.
    pub const INVALID_INPUT: i32 = 4;

    /// All booking slots are taken.
    pub const CAPACITY_EXCEEDED: i32 = 5;

    /// Gemini is unreachable, unconfigured or returned garbage.
    pub const EXTERNAL_SERVICE: i32 = 6;
}

/// Rows shown by `list` when no limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Environment variables read by the logging setup, in priority order.
pub const LOG_ENV_VARS: [&str; 2] = ["BOOKINGS_LOG", "RUST_LOG"];
