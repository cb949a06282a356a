//! Uptime and countdown widget.
//!
//! The [`format`] and [`uptime`] modules are pure helpers that never fail:
//! they turn seconds into display strings and pull uptime seconds out of
//! monitoring snapshots or `/proc/uptime` text. The rest of the crate is
//! the terminal widget built on top of them.

pub mod app;
pub mod cli;
pub mod config;
pub mod countdown;
pub mod display;
pub mod errors;
pub mod format;
pub mod screen_factory;
pub mod screen_manager;
pub mod screens;
pub mod system_info;
pub mod telemetry;
pub mod uptime;

pub use format::{format_countdown, format_uptime};
pub use uptime::{extract_uptime, parse_proc_uptime, Scalar, Snapshot, UptimeValue};
