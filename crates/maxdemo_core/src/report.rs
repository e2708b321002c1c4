//! One-line maximum report.
//!
//! # Responsibility
//! - Keep both inputs next to the computed maximum.
//! - Render the human-readable line printed by the CLI.
//!
//! # Invariants
//! - `max` always equals `max(first, second)`; fields are private and the
//!   constructor is the only way to build a report.

use crate::max::max;
use log::debug;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Both inputs of a comparison together with the selected maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaxReport<T> {
    first: T,
    second: T,
    max: T,
}

impl<T: Ord + Clone + Display> MaxReport<T> {
    /// Compares `first` and `second` once and records the result.
    pub fn new(first: T, second: T) -> Self {
        let max = max(first.clone(), second.clone());
        debug!(
            "event=max_computed module=report status=ok first={} second={} max={}",
            first, second, max
        );
        Self { first, second, max }
    }
}

impl<T> MaxReport<T> {
    /// First input, as passed to [`MaxReport::new`].
    pub fn first(&self) -> &T {
        &self.first
    }

    /// Second input; also the maximum when the inputs are equal.
    pub fn second(&self) -> &T {
        &self.second
    }

    /// The selected maximum.
    pub fn max(&self) -> &T {
        &self.max
    }
}

impl<T: Display> Display for MaxReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The maximum of {} and {} is: {}",
            self.first, self.second, self.max
        )
    }
}

/// Renders the report line for two values without a trailing newline.
pub fn render_line<T: Ord + Clone + Display>(first: T, second: T) -> String {
    MaxReport::new(first, second).to_string()
}

#[cfg(test)]
mod tests {
    use super::{render_line, MaxReport};

    #[test]
    fn new_keeps_inputs_and_max() {
        let report = MaxReport::new(2, 4);
        assert_eq!(*report.first(), 2);
        assert_eq!(*report.second(), 4);
        assert_eq!(*report.max(), 4);
    }

    #[test]
    fn display_uses_stable_wording() {
        assert_eq!(render_line(2, 4), "The maximum of 2 and 4 is: 4");
    }

    // Ordered and displayable, but deliberately without `Debug`.
    #[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Score(u8);

    impl std::fmt::Display for Score {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{} pts", self.0)
        }
    }

    #[test]
    fn reports_types_without_debug() {
        assert_eq!(
            render_line(Score(3), Score(9)),
            "The maximum of 3 pts and 9 pts is: 9 pts"
        );
    }

    #[test]
    fn display_has_no_newline() {
        assert!(!render_line(-1, -5).contains('\n'));
    }
}
