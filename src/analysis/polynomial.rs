//! # Cubic Analysis
//!
//! Characteristics of `f(x) = a·x³ + b·x² + c·x + d`, including the
//! lattice-friendly critical-point filter problem generation relies on.

use super::{
    dedup_close, mark_collapsed, quadratic, quadratic_roots, sign_intervals_between,
    Characteristics,
};
use crate::point::Point;

/// Critical-point x-values are kept only within this distance of an integer.
const INTEGER_SNAP: f64 = 0.1;

/// Derives the characteristics of `f(x) = a·x³ + b·x² + c·x + d` with the
/// critical-point simplification enabled.
pub fn analyze(a: f64, b: f64, c: f64, d: f64) -> Characteristics {
    analyze_with(a, b, c, d, true)
}

/// Derives the characteristics of `f(x) = a·x³ + b·x² + c·x + d`.
///
/// With `round_critical_points` set, derivative roots whose x is not within
/// [`INTEGER_SNAP`] of an integer are dropped and the remainder snap to the
/// nearest integer, with y re-evaluated at the snapped x. Generated problems
/// depend on this filter to keep extrema on lattice points; pass `false` to
/// report the raw derivative roots instead.
///
/// # Note
/// Closed-form roots are only reported for the factorable `d = 0` case
/// (`x·(a·x² + b·x + c)`); other cubics report an empty root list.
pub fn analyze_with(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    round_critical_points: bool,
) -> Characteristics {
    if a == 0.0 {
        let mut characteristics = quadratic::analyze(b, c, d);
        mark_collapsed(&mut characteristics);
        return characteristics;
    }

    let f = move |x: f64| ((a * x + b) * x + c) * x + d;

    let mut critical_xs = quadratic_roots(3.0 * a, 2.0 * b, c);
    if round_critical_points {
        critical_xs.retain(|x| {
            let fractional = x.abs().fract();
            fractional < INTEGER_SNAP || fractional > 1.0 - INTEGER_SNAP
        });
        for x in critical_xs.iter_mut() {
            *x = x.round();
        }
        dedup_close(&mut critical_xs);
    }
    let critical_points: Vec<Point> = critical_xs.iter().map(|&x| Point::new(x, f(x))).collect();

    let inflection_x = -b / (3.0 * a);

    let mut root_xs = Vec::new();
    if d == 0.0 {
        root_xs.push(0.0);
        root_xs.extend(quadratic_roots(a, b, c));
        dedup_close(&mut root_xs);
    }
    let roots: Vec<Point> = root_xs.iter().map(|&x| Point::new(x, 0.0)).collect();

    let mut boundaries = critical_xs;
    boundaries.extend(root_xs);

    Characteristics {
        roots,
        critical_points,
        inflection_points: vec![Point::new(inflection_x, f(inflection_x))],
        y_intercept: Some(d),
        sign_intervals: Some(sign_intervals_between(boundaries, f)),
        ..Characteristics::default()
    }
}
