//! # Quadratic Analysis
//!
//! Characteristics of `f(x) = a·x² + b·x + c`: vertex, discriminant roots,
//! one-sided range, and the closed-form area enclosed between real roots.

use super::{
    linear, mark_collapsed, quadratic_roots, sign_intervals_between, AreaBetweenRoots,
    Characteristics, RangeSpec,
};
use crate::point::Point;

/// Derives the characteristics of `f(x) = a·x² + b·x + c`.
///
/// A vanished `a` collapses to the linear analyzer and flags the record.
pub fn analyze(a: f64, b: f64, c: f64) -> Characteristics {
    if a == 0.0 {
        let mut characteristics = linear::analyze(b, c);
        mark_collapsed(&mut characteristics);
        return characteristics;
    }

    let f = move |x: f64| (a * x + b) * x + c;

    let vertex_x = -b / (2.0 * a);
    let vertex = Point::new(vertex_x, f(vertex_x));

    let root_xs = quadratic_roots(a, b, c);
    let roots: Vec<Point> = root_xs.iter().map(|&x| Point::new(x, 0.0)).collect();

    let range = if a > 0.0 {
        RangeSpec::AtLeast(vertex.y)
    } else {
        RangeSpec::AtMost(vertex.y)
    };

    // Exact definite integral between the roots; no numeric quadrature.
    let area_between_roots = match root_xs.as_slice() {
        &[x1, x2] => {
            let antiderivative =
                move |x: f64| a / 3.0 * x.powi(3) + b / 2.0 * x.powi(2) + c * x;
            Some(AreaBetweenRoots {
                from: x1,
                to: x2,
                value: (antiderivative(x2) - antiderivative(x1)).abs(),
            })
        }
        _ => None,
    };

    Characteristics {
        roots,
        critical_points: vec![vertex],
        y_intercept: Some(c),
        range,
        sign_intervals: Some(sign_intervals_between(root_xs, f)),
        area_between_roots,
        ..Characteristics::default()
    }
}
