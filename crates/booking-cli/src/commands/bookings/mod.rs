//! Booking commands: add, list, search, show, remove, clear, export.

mod add;
mod clear;
mod export;
mod list;
mod remove;
mod search;
mod show;

pub use add::handle_add;
pub use clear::handle_clear;
pub use export::handle_export;
pub use list::handle_list;
pub use remove::handle_remove;
pub use search::handle_search;
pub use show::handle_show;
