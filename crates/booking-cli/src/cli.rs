use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use booking_core::VERSION;

/// Bookings - ticket bookings, payments and headcount for a single event
#[derive(Parser)]
#[command(name = "bookings")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the booking store
    #[arg(short, long, global = true, env = "BOOKINGS_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory where the booking store will be created
    #[arg(value_name = "DIR")]
    pub path: Option<String>,

    /// Install the demo bookings into an empty store (stores start empty otherwise)
    #[arg(long)]
    pub seed: bool,

    /// Display timezone (IANA name, e.g. Asia/Kolkata)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Gemini model for insights and scans
    #[arg(long)]
    pub model: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Guest name
    #[arg(long)]
    pub name: Option<String>,

    /// Contact number
    #[arg(long)]
    pub phone: Option<String>,

    /// Stag tickets (1 pax each)
    #[arg(long, default_value_t = 0)]
    pub stag: u32,

    /// Couple tickets (2 pax each)
    #[arg(long, default_value_t = 0)]
    pub couple: u32,

    /// Angels tickets (2 pax each)
    #[arg(long, default_value_t = 0)]
    pub angels: u32,

    /// Amount paid up front (at most 9223372036854775807)
    #[arg(long, default_value_t = 0)]
    pub paid: u64,

    /// Set custom booking date/time (ISO-8601 or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results (most recent first)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Show every booking
    #[arg(long, conflicts_with = "limit")]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Name or phone fragment
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output format (table, plain, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Booking ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Booking ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format (csv, json)
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Arguments for the `insights` command
#[derive(Args)]
pub struct InsightsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `scan` command
#[derive(Args)]
pub struct ScanArgs {
    /// Photo of a guest sheet (png, jpg, webp, gif)
    #[arg(value_name = "IMAGE")]
    pub image: String,

    /// Show extracted bookings without saving them
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and an empty booking store (see --seed for demo data)
    Init(InitArgs),

    /// Record a new booking
    Add(AddArgs),

    /// List bookings, most recent first
    List(ListArgs),

    /// Search bookings by name or phone
    Search(SearchArgs),

    /// Show a booking by ID
    Show(ShowArgs),

    /// Delete a booking
    Remove(RemoveArgs),

    /// Delete every booking
    Clear(ClearArgs),

    /// Payment totals, headcount and capacity
    Stats(StatsArgs),

    /// Export bookings (portable formats, you own your data)
    Export(ExportArgs),

    /// Ask Gemini for a short sales analysis
    Insights(InsightsArgs),

    /// Import bookings from a photographed guest sheet
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
