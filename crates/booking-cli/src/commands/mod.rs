//! Command handlers, one module per area.

pub mod ai;
pub mod bookings;
pub mod init;
pub mod misc;
pub mod stats;
