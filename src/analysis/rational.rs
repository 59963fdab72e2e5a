//! # Rational Analysis
//!
//! Characteristics of linear-over-linear and quadratic-over-linear rationals:
//! vertical/horizontal/oblique asymptotes, hole detection, and punctured
//! domains.
//!
//! ## Hole Detection
//!
//! A hole is detected when the numerator and denominator share a root under
//! exact float equality. Roots derived in closed form from lattice
//! coefficients compare exactly when they coincide; near-coincident roots
//! from other sources can slip past the comparison, which widening the
//! tolerance would trade for misclassifying distinct-root functions. The
//! exact comparison is the contract.

use super::{
    linear, mark_collapsed, quadratic, quadratic_roots, sign_intervals_between, Asymptotes,
    Characteristics, Degeneracy, DomainSpec, Interval, ObliqueAsymptote, RangeSpec, SignIntervals,
    COINCIDENT_TOLERANCE,
};
use crate::point::Point;

/// Half-width of the symmetric probe used to estimate a hole's limiting y.
const HOLE_PROBE: f64 = 1e-4;

/// Derives the characteristics of `f(x) = (n1·x + n0) / (d1·x + d0)`.
pub fn analyze_linear(n1: f64, n0: f64, d1: f64, d0: f64) -> Characteristics {
    if d1 == 0.0 {
        if d0 == 0.0 {
            return undefined_everywhere();
        }
        // Constant denominator: an ordinary line in disguise.
        let mut characteristics = linear::analyze(n1 / d0, n0 / d0);
        mark_collapsed(&mut characteristics);
        return characteristics;
    }

    let pole = -d0 / d1;
    let f = move |x: f64| (n1 * x + n0) / (d1 * x + d0);

    if n1 == 0.0 && n0 == 0.0 {
        // Zero everywhere it is defined; the pole is a removable gap at y=0.
        return Characteristics {
            domain: DomainSpec::Punctured(vec![pole]),
            range: RangeSpec::Constant(0.0),
            y_intercept: off_pole_intercept(pole, 0.0),
            holes: vec![Point::new(pole, 0.0)],
            sign_intervals: Some(SignIntervals::default()),
            degeneracy: Some(Degeneracy::IdenticallyZero),
            ..Characteristics::default()
        };
    }

    let horizontal = n1 / d1;
    let numerator_root = if n1 == 0.0 { None } else { Some(-n0 / n1) };
    let hole = numerator_root.is_some_and(|u| u == pole);

    if hole {
        // Shared root: f reduces to the constant n1/d1 on the punctured line.
        let limit = hole_limit(f, pole);
        let constant = n1 / d1;
        let mut sign_intervals = SignIntervals::default();
        let halves = vec![Interval::below(pole), Interval::above(pole)];
        if constant > 0.0 {
            sign_intervals.positive = halves;
        } else {
            sign_intervals.negative = halves;
        }
        return Characteristics {
            domain: DomainSpec::Punctured(vec![pole]),
            range: RangeSpec::Constant(constant),
            y_intercept: off_pole_intercept(pole, n0 / d0),
            asymptotes: Some(Asymptotes {
                horizontal: Some(horizontal),
                ..Asymptotes::default()
            }),
            holes: vec![Point::new(pole, limit)],
            sign_intervals: Some(sign_intervals),
            ..Characteristics::default()
        };
    }

    let roots: Vec<Point> = numerator_root
        .iter()
        .map(|&u| Point::new(u, 0.0))
        .collect();

    let mut boundaries = vec![pole];
    boundaries.extend(numerator_root);

    Characteristics {
        domain: DomainSpec::Punctured(vec![pole]),
        range: RangeSpec::Punctured(horizontal),
        roots,
        y_intercept: off_pole_intercept(pole, n0 / d0),
        asymptotes: Some(Asymptotes {
            vertical: vec![pole],
            horizontal: Some(horizontal),
            oblique: None,
        }),
        sign_intervals: Some(sign_intervals_between(boundaries, f)),
        ..Characteristics::default()
    }
}

/// Derives the characteristics of `f(x) = (n2·x² + n1·x + n0) / (d1·x + d0)`.
pub fn analyze_quadratic(n2: f64, n1: f64, n0: f64, d1: f64, d0: f64) -> Characteristics {
    if d1 == 0.0 {
        if d0 == 0.0 {
            return undefined_everywhere();
        }
        let mut characteristics = quadratic::analyze(n2 / d0, n1 / d0, n0 / d0);
        mark_collapsed(&mut characteristics);
        return characteristics;
    }
    if n2 == 0.0 {
        let mut characteristics = analyze_linear(n1, n0, d1, d0);
        mark_collapsed(&mut characteristics);
        return characteristics;
    }

    let pole = -d0 / d1;
    let f = move |x: f64| ((n2 * x + n1) * x + n0) / (d1 * x + d0);

    // One long division step past the pole gives the slant asymptote.
    let slope = n2 / d1;
    let intercept = (n1 - slope * d0) / d1;
    let oblique = ObliqueAsymptote { slope, intercept };

    let numerator_roots = quadratic_roots(n2, n1, n0);
    let hole = numerator_roots.iter().any(|&u| u == pole);
    let holes = if hole {
        vec![Point::new(pole, hole_limit(f, pole))]
    } else {
        Vec::new()
    };

    let root_xs: Vec<f64> = numerator_roots.into_iter().filter(|&u| u != pole).collect();
    let roots: Vec<Point> = root_xs.iter().map(|&x| Point::new(x, 0.0)).collect();

    // The derivative numerator is quadratic in x; its roots away from the
    // pole are the extrema. A shared root makes the pole a double root here,
    // which the exclusion removes.
    let critical_points: Vec<Point> = quadratic_roots(n2 * d1, 2.0 * n2 * d0, n1 * d0 - n0 * d1)
        .into_iter()
        .filter(|&x| (x - pole).abs() > COINCIDENT_TOLERANCE)
        .map(|x| Point::new(x, f(x)))
        .collect();

    let vertical = if hole { Vec::new() } else { vec![pole] };

    let mut boundaries = root_xs;
    boundaries.push(pole);

    Characteristics {
        domain: DomainSpec::Punctured(vec![pole]),
        range: RangeSpec::AllReals,
        roots,
        critical_points,
        y_intercept: off_pole_intercept(pole, n0 / d0),
        asymptotes: Some(Asymptotes {
            vertical,
            horizontal: None,
            oblique: Some(oblique),
        }),
        holes,
        sign_intervals: Some(sign_intervals_between(boundaries, f)),
        ..Characteristics::default()
    }
}

fn undefined_everywhere() -> Characteristics {
    Characteristics {
        domain: DomainSpec::Empty,
        range: RangeSpec::Empty,
        degeneracy: Some(Degeneracy::UndefinedEverywhere),
        ..Characteristics::default()
    }
}

/// The y-intercept exists only when the pole is off the y-axis.
fn off_pole_intercept(pole: f64, value: f64) -> Option<f64> {
    if pole == 0.0 { None } else { Some(value) }
}

/// Estimates the limiting y at a removable discontinuity by averaging a
/// symmetric probe either side of it.
fn hole_limit(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    (f(x - HOLE_PROBE) + f(x + HOLE_PROBE)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_float_eq;

    mod linear_over_linear_tests {
        use super::*;

        #[test]
        fn test_asymptotes_root_and_intercept() {
            // f(x) = (x + 1)/(x - 2)
            let characteristics = analyze_linear(1.0, 1.0, 1.0, -2.0);

            let asymptotes = characteristics.asymptotes.unwrap();
            assert_eq!(asymptotes.vertical, vec![2.0]);
            assert_eq!(asymptotes.horizontal, Some(1.0));
            assert!(asymptotes.oblique.is_none());

            assert_eq!(characteristics.domain, DomainSpec::Punctured(vec![2.0]));
            assert_eq!(characteristics.range, RangeSpec::Punctured(1.0));
            assert_eq!(characteristics.roots, vec![Point::new(-1.0, 0.0)]);
            assert_eq!(characteristics.y_intercept, Some(-0.5));
        }

        #[test]
        fn test_sign_intervals_alternate_across_pole() {
            let characteristics = analyze_linear(1.0, 1.0, 1.0, -2.0);

            let signs = characteristics.sign_intervals.unwrap();
            assert_eq!(signs.positive, vec![Interval::below(-1.0), Interval::above(2.0)]);
            assert_eq!(signs.negative, vec![Interval::between(-1.0, 2.0)]);
            assert_eq!(signs.zeros, vec![Point::new(-1.0, 0.0)]);
        }

        #[test]
        fn test_shared_root_becomes_a_hole() {
            // f(x) = (x - 2)/(x - 2): constant 1 away from x = 2.
            let characteristics = analyze_linear(1.0, -2.0, 1.0, -2.0);

            assert_eq!(characteristics.holes.len(), 1);
            let hole = characteristics.holes[0];
            assert_eq!(hole.x, 2.0);
            assert_float_eq(hole.y, 1.0, 1e-6);

            // The discontinuity is removable, so no vertical asymptote.
            let asymptotes = characteristics.asymptotes.unwrap();
            assert!(asymptotes.vertical.is_empty());
            assert_eq!(asymptotes.horizontal, Some(1.0));

            // The domain stays punctured even though the gap is removable.
            assert_eq!(characteristics.domain, DomainSpec::Punctured(vec![2.0]));
            assert_eq!(characteristics.range, RangeSpec::Constant(1.0));
            assert!(characteristics.roots.is_empty());
        }

        #[test]
        fn test_pole_on_y_axis_has_no_intercept() {
            // f(x) = (x + 1)/x
            let characteristics = analyze_linear(1.0, 1.0, 1.0, 0.0);
            assert_eq!(characteristics.y_intercept, None);
        }

        #[test]
        fn test_constant_numerator_has_no_roots() {
            // f(x) = 3/(x - 1)
            let characteristics = analyze_linear(0.0, 3.0, 1.0, -1.0);

            assert!(characteristics.roots.is_empty());
            assert_eq!(characteristics.range, RangeSpec::Punctured(0.0));

            let signs = characteristics.sign_intervals.unwrap();
            assert_eq!(signs.negative, vec![Interval::below(1.0)]);
            assert_eq!(signs.positive, vec![Interval::above(1.0)]);
        }

        #[test]
        fn test_zero_numerator_is_identically_zero() {
            let characteristics = analyze_linear(0.0, 0.0, 1.0, -2.0);

            assert_eq!(
                characteristics.degeneracy,
                Some(Degeneracy::IdenticallyZero)
            );
            assert_eq!(characteristics.range, RangeSpec::Constant(0.0));
            assert_eq!(characteristics.holes, vec![Point::new(2.0, 0.0)]);
        }

        #[test]
        fn test_constant_denominator_collapses_to_linear() {
            // f(x) = (2x - 4)/2 = x - 2
            let characteristics = analyze_linear(2.0, -4.0, 0.0, 2.0);

            assert_eq!(characteristics.degeneracy, Some(Degeneracy::Collapsed));
            assert_eq!(characteristics.roots, vec![Point::new(2.0, 0.0)]);
            assert!(characteristics.asymptotes.is_none());
        }

        #[test]
        fn test_zero_denominator_is_undefined_everywhere() {
            let characteristics = analyze_linear(1.0, 1.0, 0.0, 0.0);

            assert_eq!(
                characteristics.degeneracy,
                Some(Degeneracy::UndefinedEverywhere)
            );
            assert_eq!(characteristics.domain, DomainSpec::Empty);
            assert_eq!(characteristics.range, RangeSpec::Empty);
        }
    }

    mod quadratic_over_linear_tests {
        use super::*;

        #[test]
        fn test_oblique_asymptote_from_division() {
            // f(x) = (x² + 1)/(x - 1) = x + 1 + 2/(x - 1)
            let characteristics = analyze_quadratic(1.0, 0.0, 1.0, 1.0, -1.0);

            let asymptotes = characteristics.asymptotes.unwrap();
            assert_eq!(asymptotes.vertical, vec![1.0]);
            assert!(asymptotes.horizontal.is_none());
            assert_eq!(
                asymptotes.oblique,
                Some(ObliqueAsymptote {
                    slope: 1.0,
                    intercept: 1.0
                })
            );
            assert_eq!(characteristics.range, RangeSpec::AllReals);
        }

        #[test]
        fn test_critical_points_flank_the_pole() {
            // f(x) = (x² + 1)/(x - 1) has extrema at 1 ± √2.
            let characteristics = analyze_quadratic(1.0, 0.0, 1.0, 1.0, -1.0);

            assert_eq!(characteristics.critical_points.len(), 2);
            let sqrt2 = 2.0_f64.sqrt();
            assert_float_eq(characteristics.critical_points[0].x, 1.0 - sqrt2, 1e-12);
            assert_float_eq(characteristics.critical_points[1].x, 1.0 + sqrt2, 1e-12);
            assert_float_eq(characteristics.critical_points[1].y, 2.0 + 2.0 * sqrt2, 1e-9);
        }

        #[test]
        fn test_numerator_roots_become_function_roots() {
            // f(x) = (x² - 4)/(x - 1)
            let characteristics = analyze_quadratic(1.0, 0.0, -4.0, 1.0, -1.0);

            assert_eq!(
                characteristics.roots,
                vec![Point::new(-2.0, 0.0), Point::new(2.0, 0.0)]
            );
            assert_eq!(characteristics.y_intercept, Some(4.0));
        }

        #[test]
        fn test_shared_root_suppresses_the_asymptote() {
            // f(x) = (x² - 4)/(x - 2) reduces to x + 2 away from x = 2.
            let characteristics = analyze_quadratic(1.0, 0.0, -4.0, 1.0, -2.0);

            assert_eq!(characteristics.holes.len(), 1);
            let hole = characteristics.holes[0];
            assert_eq!(hole.x, 2.0);
            assert_float_eq(hole.y, 4.0, 1e-6);

            let asymptotes = characteristics.asymptotes.unwrap();
            assert!(asymptotes.vertical.is_empty());

            // The pole is a double root of the derivative numerator and is
            // excluded, leaving no extrema for the reduced line.
            assert!(characteristics.critical_points.is_empty());
            assert_eq!(characteristics.roots, vec![Point::new(-2.0, 0.0)]);
        }

        #[test]
        fn test_zero_leading_numerator_collapses() {
            let characteristics = analyze_quadratic(0.0, 1.0, 1.0, 1.0, -2.0);

            assert_eq!(characteristics.degeneracy, Some(Degeneracy::Collapsed));
            let asymptotes = characteristics.asymptotes.unwrap();
            assert_eq!(asymptotes.vertical, vec![2.0]);
            assert_eq!(asymptotes.horizontal, Some(1.0));
        }
    }
}
