//! CLI entry point.
//!
//! # Responsibility
//! - Print the maximum of the two fixed demo inputs as one stdout line.
//! - Keep stdout deterministic; diagnostics go to stderr only.

const CLI_LOG_LEVEL: &str = "warn";

fn main() {
    if let Err(err) = maxdemo_core::init_stderr_logging(CLI_LOG_LEVEL) {
        eprintln!("maxdemo: logging disabled: {err}");
    }

    println!("{}", maxdemo_core::demo_report());
}
