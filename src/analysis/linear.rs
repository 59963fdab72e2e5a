//! # Linear Analysis
//!
//! Characteristics of `f(x) = m·x + b`.

use super::{sign_intervals_between, Characteristics, Degeneracy, RangeSpec};
use crate::point::Point;

/// Derives the characteristics of `f(x) = m·x + b`.
///
/// A zero slope never divides: the constant cases are handled explicitly and
/// flagged instead of evaluating `-b / 0`.
pub fn analyze(m: f64, b: f64) -> Characteristics {
    let f = move |x: f64| m * x + b;

    if m == 0.0 {
        let degeneracy = if b == 0.0 {
            Degeneracy::IdenticallyZero
        } else {
            Degeneracy::Collapsed
        };
        return Characteristics {
            range: RangeSpec::Constant(b),
            y_intercept: Some(b),
            sign_intervals: Some(sign_intervals_between(Vec::new(), f)),
            degeneracy: Some(degeneracy),
            ..Characteristics::default()
        };
    }

    let root = -b / m;
    Characteristics {
        roots: vec![Point::new(root, 0.0)],
        y_intercept: Some(b),
        sign_intervals: Some(sign_intervals_between(vec![root], f)),
        ..Characteristics::default()
    }
}
