//! Fixed inputs for the demo binary.

use crate::report::MaxReport;

/// First compile-time input.
pub const FIRST: i32 = 2;
/// Second compile-time input.
pub const SECOND: i32 = 4;

/// Builds the report the CLI prints.
pub fn demo_report() -> MaxReport<i32> {
    MaxReport::new(FIRST, SECOND)
}
