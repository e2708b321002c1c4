//! Core library for the maxdemo program.
//! Holds the maximum helpers and the report the CLI prints.

pub mod demo;
pub mod logging;
pub mod max;
pub mod report;

pub use demo::{demo_report, FIRST, SECOND};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogSink};
pub use max::{max, max_by, max_by_key};
pub use report::{render_line, MaxReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
