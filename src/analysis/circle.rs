//! # Circle Analysis
//!
//! Characteristics of the locus `(x - h)² + (y - k)² = r²`. A circle is not
//! a function of x, so most fields stay empty and the derived facts live in
//! a [`CircleGeometry`] record instead.

use std::f64::consts::{PI, TAU};

use super::{
    quadratic_roots, Characteristics, CircleGeometry, Degeneracy, DomainSpec, RangeSpec,
    SecantLine, COINCIDENT_TOLERANCE,
};
use crate::point::Point;

/// Derives the characteristics of the circle `(x - h)² + (y - k)² = r²`.
pub fn analyze(h: f64, k: f64, r: f64) -> Characteristics {
    analyze_with_secant(h, k, r, None)
}

/// Derives circle characteristics, optionally intersecting a secant line
/// `y = slope·x + intercept` and recording its crossing points.
pub fn analyze_with_secant(
    h: f64,
    k: f64,
    r: f64,
    secant: Option<(f64, f64)>,
) -> Characteristics {
    let center = Point::new(h, k);

    if r <= 0.0 {
        // A zero or negative radius leaves a single point, not a circle.
        return Characteristics {
            domain: DomainSpec::Bounded { min: h, max: h },
            range: RangeSpec::Bounded { min: k, max: k },
            geometry: Some(CircleGeometry {
                center,
                radius: r,
                area: 0.0,
                circumference: 0.0,
                x_intersections: Vec::new(),
                y_intersections: Vec::new(),
                secant: None,
            }),
            degeneracy: Some(Degeneracy::Collapsed),
            ..Characteristics::default()
        };
    }

    let x_intersections = axis_crossings(k, r, |x| Point::new(h + x, 0.0));
    let y_intersections = axis_crossings(h, r, |y| Point::new(0.0, k + y));

    // The upper y-axis crossing doubles as the y-intercept when it exists.
    let y_intercept = y_intersections.last().map(|point| point.y);

    let secant = secant.map(|(slope, intercept)| SecantLine {
        slope,
        intercept,
        intersections: intersect_line(h, k, r, slope, intercept),
    });

    Characteristics {
        domain: DomainSpec::Bounded {
            min: h - r,
            max: h + r,
        },
        range: RangeSpec::Bounded {
            min: k - r,
            max: k + r,
        },
        critical_points: vec![Point::new(h, k + r), Point::new(h, k - r)],
        y_intercept,
        geometry: Some(CircleGeometry {
            center,
            radius: r,
            area: PI * r * r,
            circumference: TAU * r,
            x_intersections,
            y_intersections,
            secant,
        }),
        ..Characteristics::default()
    }
}

/// Crossing points of one axis, ascending, from the center's offset from it.
///
/// Solves `offset² + t² = r²`; a tangent circle emits the single touching
/// point instead of two coincident ones.
fn axis_crossings(offset: f64, r: f64, to_point: impl Fn(f64) -> Point) -> Vec<Point> {
    if offset.abs() > r {
        return Vec::new();
    }
    let half_chord = (r * r - offset * offset).sqrt();
    if half_chord < COINCIDENT_TOLERANCE {
        return vec![to_point(0.0)];
    }
    vec![to_point(-half_chord), to_point(half_chord)]
}

/// Intersects the line `y = slope·x + intercept` with the circle, returning
/// the crossing points ascending in x (empty when the line misses).
pub(crate) fn intersect_line(
    h: f64,
    k: f64,
    r: f64,
    slope: f64,
    intercept: f64,
) -> Vec<Point> {
    let lift = intercept - k;
    quadratic_roots(
        1.0 + slope * slope,
        2.0 * (slope * lift - h),
        h * h + lift * lift - r * r,
    )
    .into_iter()
    .map(|x| Point::new(x, slope * x + intercept))
    .collect()
}
