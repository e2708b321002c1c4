//! Two-value maximum helpers.
//!
//! # Responsibility
//! - Pick the greater of two values with exactly one comparison.
//!
//! # Invariants
//! - The result is always one of the two arguments.
//! - On equality the second argument is returned.
//! - All helpers are pure and never fail at runtime; incomparable types are
//!   rejected by the trait bounds at compile time.

use std::cmp::Ordering;

/// Returns the greater of `a` and `b`.
///
/// Returns `b` when both compare equal.
pub fn max<T: Ord>(a: T, b: T) -> T {
    max_by(a, b, Ord::cmp)
}

/// Returns the greater of `a` and `b` under a caller-supplied total order.
///
/// # Contract
/// - `compare` is invoked exactly once.
/// - Returns `a` only when `compare(&a, &b)` is `Ordering::Greater`.
pub fn max_by<T, F>(a: T, b: T, compare: F) -> T
where
    F: FnOnce(&T, &T) -> Ordering,
{
    match compare(&a, &b) {
        Ordering::Greater => a,
        Ordering::Less | Ordering::Equal => b,
    }
}

/// Returns the argument with the greater key.
pub fn max_by_key<T, K, F>(a: T, b: T, mut key: F) -> T
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let (key_a, key_b) = (key(&a), key(&b));
    max_by(a, b, |_, _| key_a.cmp(&key_b))
}
