//! # Trigonometric Analysis
//!
//! Characteristics of `f(x) = a·sin(b·x + c) + d`: period, amplitude, the
//! extrema flanking the phase-shifted origin, and roots found by inverting
//! the sine within one period.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{dedup_close, linear, mark_collapsed, Characteristics, Periodicity, RangeSpec};
use crate::point::Point;

/// Derives the characteristics of `f(x) = a·sin(b·x + c) + d`.
///
/// `a = 0` or `b = 0` leaves a constant function; it is analyzed under
/// linear rules and flagged rather than reported as periodic.
pub fn analyze(a: f64, b: f64, c: f64, d: f64) -> Characteristics {
    if a == 0.0 || b == 0.0 {
        let mut characteristics = linear::analyze(0.0, a * c.sin() + d);
        mark_collapsed(&mut characteristics);
        return characteristics;
    }

    let f = move |x: f64| a * (b * x + c).sin() + d;

    let period = TAU / b.abs();
    let amplitude = a.abs();
    let origin = -c / b;

    // The extrema nearest the phase-shifted origin, a quarter period out on
    // either side.
    let quarter = FRAC_PI_2 / b;
    let mut critical_points = vec![
        Point::new(origin - quarter, d - a),
        Point::new(origin + quarter, d + a),
    ];
    critical_points.sort_by(|p, q| p.x.total_cmp(&q.x));

    // sin(bx + c) = -d/a has solutions only while the midline offset stays
    // within the amplitude; both solution branches land in the period
    // starting at the origin.
    let ratio = -d / a;
    let mut root_xs = Vec::new();
    if ratio.abs() <= 1.0 {
        let s = ratio.asin();
        for x in [(s - c) / b, (PI - s - c) / b] {
            root_xs.push(origin + (x - origin).rem_euclid(period));
        }
        dedup_close(&mut root_xs);
    }
    let roots: Vec<Point> = root_xs.into_iter().map(|x| Point::new(x, 0.0)).collect();

    Characteristics {
        range: RangeSpec::Bounded {
            min: d - amplitude,
            max: d + amplitude,
        },
        roots,
        critical_points,
        y_intercept: Some(f(0.0)),
        periodicity: Some(Periodicity {
            period,
            amplitude,
            phase_shift: origin,
            vertical_shift: d,
        }),
        ..Characteristics::default()
    }
}
