//! # Algebraic Analysis
//!
//! Closed-form derivation of function characteristics: domain, range, roots,
//! critical points, asymptotes, sign intervals, and family-specific extras.
//! One analyzer per family, all pure functions from coefficients to a
//! [`Characteristics`] record, dispatched by pattern match on
//! [`FunctionFamily`].
//!
//! ## Quick Start
//!
//! ```rust
//! use curvelab::{analysis, FunctionFamily};
//!
//! let characteristics =
//!     analysis::analyze(FunctionFamily::Quadratic, &vec![1.0, 0.0, -4.0].into()).unwrap();
//!
//! assert_eq!(characteristics.roots.len(), 2);
//! assert_eq!(characteristics.critical_points[0].y, -4.0);
//! ```
//!
//! ## Degenerate Inputs
//!
//! A zero leading or denominator coefficient never divides by zero: each
//! analyzer handles the collapsed shape explicitly and flags the record with
//! a [`Degeneracy`] marker instead of failing. The only hard error is a
//! coefficient vector whose length does not match the family's layout.

pub mod circle;
pub mod linear;
pub mod polynomial;
pub mod quadratic;
pub mod rational;
pub mod trigonometric;

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::family::{Coefficients, FunctionFamily};
use crate::point::Point;

/// Absolute tolerance below which two derived x-values are treated as coincident.
pub(crate) const COINCIDENT_TOLERANCE: f64 = 1e-9;

/// Tolerance for the circle membership test.
pub const MEMBERSHIP_TOLERANCE: f64 = 1e-9;

/// Every reported root must evaluate within this tolerance of zero.
pub const ROOT_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Error when a coefficient vector does not match its family's layout.
    #[error("Invalid coefficient count for the {family} family: expected {expected}, found {found}")]
    WrongArity {
        family: FunctionFamily,
        expected: &'static str,
        found: usize,
    },
}

/// Derives the characteristics of a function from its family and coefficients.
///
/// Deterministic: identical inputs yield bit-identical records.
///
/// # Arguments
/// - `family`: The functional form the coefficients describe.
/// - `coefficients`: The coefficient vector, in the family's layout.
///
/// # Returns
/// The derived characteristics, or [`AnalysisError::WrongArity`] if the
/// vector's length does not match the family.
pub fn analyze(
    family: FunctionFamily,
    coefficients: &Coefficients,
) -> Result<Characteristics, AnalysisError> {
    match (family, coefficients.values.as_slice()) {
        (FunctionFamily::Linear, &[m, b]) => Ok(linear::analyze(m, b)),
        (FunctionFamily::Quadratic, &[a, b, c]) => Ok(quadratic::analyze(a, b, c)),
        (FunctionFamily::Polynomial, &[a, b, c, d]) => Ok(polynomial::analyze(a, b, c, d)),
        (FunctionFamily::Rational, &[n1, n0, d1, d0]) => {
            Ok(rational::analyze_linear(n1, n0, d1, d0))
        }
        (FunctionFamily::Rational, &[n2, n1, n0, d1, d0]) => {
            Ok(rational::analyze_quadratic(n2, n1, n0, d1, d0))
        }
        (FunctionFamily::Trigonometric, &[a, b, c, d]) => Ok(trigonometric::analyze(a, b, c, d)),
        (FunctionFamily::Circle, &[h, k, r]) => Ok(circle::analyze(h, k, r)),
        _ => Err(AnalysisError::WrongArity {
            family,
            expected: family.expected_arity(),
            found: coefficients.len(),
        }),
    }
}

/// Derived descriptive facts about one generated function.
///
/// Computed once per instance and never mutated afterwards; if the
/// characteristics must change, a new record is produced. Fields that do not
/// apply to a family stay empty or `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristics {
    /// The set of x-values the function is defined on.
    pub domain: DomainSpec,

    /// The set of y-values the function attains.
    pub range: RangeSpec,

    /// Points where the function crosses zero, ascending in x.
    pub roots: Vec<Point>,

    /// Points where the first derivative is zero (vertex, extrema).
    pub critical_points: Vec<Point>,

    /// Points where the curvature changes sign (cubic only).
    pub inflection_points: Vec<Point>,

    /// The y-value at x = 0, when 0 is in the domain.
    pub y_intercept: Option<f64>,

    /// Vertical, horizontal, and oblique asymptotes (rational only).
    pub asymptotes: Option<Asymptotes>,

    /// Period, amplitude, and phase description (trigonometric only).
    pub periodicity: Option<Periodicity>,

    /// Maximal positive/negative x-ranges plus exact zero points.
    pub sign_intervals: Option<SignIntervals>,

    /// Removable discontinuities with their limiting y-values (rational only).
    pub holes: Vec<Point>,

    /// Center/radius geometry and axis crossings (circle only).
    pub geometry: Option<CircleGeometry>,

    /// Geometric area enclosed between two real roots (quadratic only).
    pub area_between_roots: Option<AreaBetweenRoots>,

    /// Set when the coefficients collapse the family to a simpler shape.
    pub degeneracy: Option<Degeneracy>,
}

impl Characteristics {
    /// Returns true if the coefficients were flagged as a degenerate family member.
    pub fn is_degenerate(&self) -> bool {
        self.degeneracy.is_some()
    }
}

impl Default for Characteristics {
    /// Returns the neutral record: defined everywhere, nothing derived yet.
    fn default() -> Self {
        Characteristics {
            domain: DomainSpec::AllReals,
            range: RangeSpec::AllReals,
            roots: Vec::new(),
            critical_points: Vec::new(),
            inflection_points: Vec::new(),
            y_intercept: None,
            asymptotes: None,
            periodicity: None,
            sign_intervals: None,
            holes: Vec::new(),
            geometry: None,
            area_between_roots: None,
            degeneracy: None,
        }
    }
}

/// Why a coefficient vector fails to be a proper member of its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Degeneracy {
    /// The function is zero everywhere it is defined; every x is a root.
    IdenticallyZero,
    /// A vanished leading coefficient collapsed the family to a simpler shape.
    Collapsed,
    /// The denominator is identically zero; no input evaluates.
    UndefinedEverywhere,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::IdenticallyZero => write!(f, "identically zero"),
            Degeneracy::Collapsed => write!(f, "collapsed"),
            Degeneracy::UndefinedEverywhere => write!(f, "undefined everywhere"),
        }
    }
}

/// The set of x-values a function is defined on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainSpec {
    /// Defined for every real x.
    AllReals,
    /// The real line minus finitely many excluded x-values.
    Punctured(Vec<f64>),
    /// A closed interval (circle projections).
    Bounded { min: f64, max: f64 },
    /// Defined nowhere.
    Empty,
}

impl fmt::Display for DomainSpec {
    /// Formats the domain in textbook notation ("ℝ", "ℝ \ {2}", "[-3, 3]").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainSpec::AllReals => write!(f, "ℝ"),
            DomainSpec::Punctured(excluded) => {
                write!(f, "ℝ \\ {{{}}}", excluded.iter().join(", "))
            }
            DomainSpec::Bounded { min, max } => write!(f, "[{}, {}]", min, max),
            DomainSpec::Empty => write!(f, "∅"),
        }
    }
}

/// The set of y-values a function attains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RangeSpec {
    /// Every real value is attained.
    AllReals,
    /// `[min, ∞)`
    AtLeast(f64),
    /// `(-∞, max]`
    AtMost(f64),
    /// A closed interval `[min, max]`.
    Bounded { min: f64, max: f64 },
    /// The real line minus one unattained value (rational horizontal asymptote).
    Punctured(f64),
    /// A single attained value (constant functions).
    Constant(f64),
    /// No value is attained.
    Empty,
}

/// An open x-interval, possibly unbounded on either side.
///
/// Used for sign intervals; the endpoints themselves are the zero points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower endpoint (may be `-∞`).
    pub min: f64,
    /// Upper endpoint (may be `∞`).
    pub max: f64,
}

impl Interval {
    /// The whole real line.
    pub fn full() -> Self {
        Interval {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// `(-∞, max)`
    pub fn below(max: f64) -> Self {
        Interval {
            min: f64::NEG_INFINITY,
            max,
        }
    }

    /// `(min, ∞)`
    pub fn above(min: f64) -> Self {
        Interval {
            min,
            max: f64::INFINITY,
        }
    }

    /// `(min, max)`
    pub fn between(min: f64, max: f64) -> Self {
        Interval { min, max }
    }

    /// Returns true if `x` lies strictly inside the interval.
    pub fn contains(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Returns a finite x inside the interval, for probing.
    pub fn probe(&self) -> f64 {
        match (self.min.is_finite(), self.max.is_finite()) {
            (true, true) => (self.min + self.max) / 2.0,
            (true, false) => self.min + 1.0,
            (false, true) => self.max - 1.0,
            (false, false) => 0.0,
        }
    }
}

impl fmt::Display for Interval {
    /// Formats the interval in open notation, e.g. `(-∞, 2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        if self.min == f64::NEG_INFINITY {
            write!(f, "-∞")?;
        } else {
            write!(f, "{}", self.min)?;
        }
        write!(f, ", ")?;
        if self.max == f64::INFINITY {
            write!(f, "∞")?;
        } else {
            write!(f, "{}", self.max)?;
        }
        write!(f, ")")
    }
}

/// Where a function is positive, negative, and exactly zero.
///
/// The intervals partition the domain: consecutive entries meet only at zero
/// points or at excluded x-values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignIntervals {
    /// Maximal open intervals where the function is positive, ascending.
    pub positive: Vec<Interval>,
    /// Maximal open intervals where the function is negative, ascending.
    pub negative: Vec<Interval>,
    /// The exact zero crossings separating the intervals.
    pub zeros: Vec<Point>,
}

/// Asymptote description for rational functions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asymptotes {
    /// x-values of vertical asymptotes, ascending.
    pub vertical: Vec<f64>,
    /// y-value of the horizontal asymptote, when degrees match.
    pub horizontal: Option<f64>,
    /// Slant asymptote, when the numerator degree exceeds by one.
    pub oblique: Option<ObliqueAsymptote>,
}

impl Asymptotes {
    /// Returns true if no asymptote of any kind is present.
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_none() && self.oblique.is_none()
    }
}

/// A slant asymptote `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObliqueAsymptote {
    pub slope: f64,
    pub intercept: f64,
}

impl fmt::Display for ObliqueAsymptote {
    /// Formats the asymptote as a line equation, e.g. `y = x + 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = ")?;
        if self.slope == 0.0 {
            return write!(f, "{}", self.intercept);
        }
        if self.slope == -1.0 {
            write!(f, "-x")?;
        } else if self.slope == 1.0 {
            write!(f, "x")?;
        } else {
            write!(f, "{}x", self.slope)?;
        }
        if self.intercept > 0.0 {
            write!(f, " + {}", self.intercept)?;
        } else if self.intercept < 0.0 {
            write!(f, " - {}", -self.intercept)?;
        }
        Ok(())
    }
}

/// Periodic behaviour of a sine-family function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Periodicity {
    /// The smallest positive period.
    pub period: f64,
    /// Half the vertical extent, always non-negative.
    pub amplitude: f64,
    /// The x-offset of the phase-shifted origin.
    pub phase_shift: f64,
    /// The midline y-value.
    pub vertical_shift: f64,
}

/// Geometric area enclosed between two real roots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaBetweenRoots {
    /// The smaller root.
    pub from: f64,
    /// The larger root.
    pub to: f64,
    /// The unsigned enclosed area.
    pub value: f64,
}

/// Where a query point lies relative to a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointPosition {
    Inside,
    OnBoundary,
    Outside,
}

impl fmt::Display for PointPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointPosition::Inside => write!(f, "inside"),
            PointPosition::OnBoundary => write!(f, "on boundary"),
            PointPosition::Outside => write!(f, "outside"),
        }
    }
}

/// Circle-specific geometry: the circle is a locus, not a function of x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    /// The center `(h, k)`.
    pub center: Point,
    /// The radius `r`.
    pub radius: f64,
    /// Enclosed area `πr²`.
    pub area: f64,
    /// Perimeter `2πr`.
    pub circumference: f64,
    /// Crossings of the x-axis, ascending in x (empty when `|k| > r`).
    pub x_intersections: Vec<Point>,
    /// Crossings of the y-axis, ascending in y (empty when `|h| > r`).
    pub y_intersections: Vec<Point>,
    /// A drawn secant line and its crossing points, when one was generated.
    pub secant: Option<SecantLine>,
}

impl CircleGeometry {
    /// Classifies a query point against the circle boundary.
    ///
    /// # Arguments
    /// - `point`: The point to classify.
    ///
    /// # Returns
    /// [`PointPosition::OnBoundary`] when the point's distance from the
    /// center is within [`MEMBERSHIP_TOLERANCE`] of the radius, otherwise
    /// inside or outside by comparison.
    pub fn classify(&self, point: Point) -> PointPosition {
        let distance = point.distance(&self.center);
        if (distance - self.radius).abs() < MEMBERSHIP_TOLERANCE {
            PointPosition::OnBoundary
        } else if distance < self.radius {
            PointPosition::Inside
        } else {
            PointPosition::Outside
        }
    }
}

/// A line crossing a circle, with its recorded intersection points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecantLine {
    pub slope: f64,
    pub intercept: f64,
    /// Up to two crossing points, ascending in x (empty when the line misses).
    pub intersections: Vec<Point>,
}

/// Sorts x-values ascending and removes near-coincident duplicates.
pub(crate) fn dedup_close(values: &mut Vec<f64>) {
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| (*a - *b).abs() < COINCIDENT_TOLERANCE);
}

/// Solves `a·x² + b·x + c = 0` over the reals.
///
/// Returns the roots ascending: two for a positive discriminant, one for a
/// vanishing discriminant, none for a negative one. A zero `a` falls back to
/// the linear root (or no roots at all).
pub(crate) fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a == 0.0 {
        if b == 0.0 {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let sqrt_discriminant = discriminant.sqrt();
    let mut roots = vec![
        (-b - sqrt_discriminant) / (2.0 * a),
        (-b + sqrt_discriminant) / (2.0 * a),
    ];
    dedup_close(&mut roots);
    roots
}

/// Derives sign intervals by probing midpoints between sorted boundary x-values.
///
/// The boundaries must include every root of `f` (sign can only change at a
/// root); critical points may be included too. Adjacent probes with the same
/// sign merge unless an exact zero separates them, so the result partitions
/// the real line into maximal one-sign intervals plus the zero points.
pub(crate) fn sign_intervals_between(
    mut boundaries: Vec<f64>,
    f: impl Fn(f64) -> f64,
) -> SignIntervals {
    dedup_close(&mut boundaries);

    let mut zeros = Vec::new();
    for &x in &boundaries {
        if f(x).abs() < COINCIDENT_TOLERANCE {
            zeros.push(Point::new(x, 0.0));
        }
    }

    if boundaries.is_empty() {
        let mut intervals = SignIntervals::default();
        let y = f(0.0);
        if y > COINCIDENT_TOLERANCE {
            intervals.positive.push(Interval::full());
        } else if y < -COINCIDENT_TOLERANCE {
            intervals.negative.push(Interval::full());
        }
        return intervals;
    }

    let first = boundaries[0];
    let last = boundaries[boundaries.len() - 1];

    let mut probes: Vec<(Interval, f64)> = Vec::new();
    probes.push((Interval::below(first), f(first - 1.0)));
    for (&a, &b) in boundaries.iter().tuple_windows() {
        probes.push((Interval::between(a, b), f((a + b) / 2.0)));
    }
    probes.push((Interval::above(last), f(last + 1.0)));

    let mut merged: Vec<(Interval, bool)> = Vec::new();
    for (interval, y) in probes {
        let positive = if y > COINCIDENT_TOLERANCE {
            true
        } else if y < -COINCIDENT_TOLERANCE {
            false
        } else {
            continue;
        };
        match merged.last_mut() {
            Some((previous, sign))
                if *sign == positive
                    && previous.max == interval.min
                    && !zeros.iter().any(|zero| zero.x == interval.min) =>
            {
                previous.max = interval.max;
            }
            _ => merged.push((interval, positive)),
        }
    }

    let mut intervals = SignIntervals {
        positive: Vec::new(),
        negative: Vec::new(),
        zeros,
    };
    for (interval, positive) in merged {
        if positive {
            intervals.positive.push(interval);
        } else {
            intervals.negative.push(interval);
        }
    }
    intervals
}

/// Flags a record produced by a lower-degree fallback, keeping any stronger flag.
pub(crate) fn mark_collapsed(characteristics: &mut Characteristics) {
    if characteristics.degeneracy.is_none() {
        characteristics.degeneracy = Some(Degeneracy::Collapsed);
    }
}

impl fmt::Display for RangeSpec {
    /// Formats the range in textbook notation, e.g. `[-4, ∞)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSpec::AllReals => write!(f, "ℝ"),
            RangeSpec::AtLeast(min) => write!(f, "[{}, ∞)", min),
            RangeSpec::AtMost(max) => write!(f, "(-∞, {}]", max),
            RangeSpec::Bounded { min, max } => write!(f, "[{}, {}]", min, max),
            RangeSpec::Punctured(value) => write!(f, "ℝ \\ {{{}}}", value),
            RangeSpec::Constant(value) => write!(f, "{{{}}}", value),
            RangeSpec::Empty => write!(f, "∅"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_float_eq;

    mod quadratic_roots_tests {
        use super::*;

        #[test]
        fn test_two_roots_ascending() {
            let roots = quadratic_roots(1.0, 0.0, -4.0);
            assert_eq!(roots, vec![-2.0, 2.0]);
        }

        #[test]
        fn test_repeated_root_emitted_once() {
            let roots = quadratic_roots(1.0, -4.0, 4.0);
            assert_eq!(roots, vec![2.0]);
        }

        #[test]
        fn test_negative_discriminant() {
            assert!(quadratic_roots(1.0, 0.0, 4.0).is_empty());
        }

        #[test]
        fn test_negative_leading_coefficient_still_ascending() {
            let roots = quadratic_roots(-1.0, 0.0, 4.0);
            assert_eq!(roots, vec![-2.0, 2.0]);
        }

        #[test]
        fn test_linear_fallback() {
            assert_eq!(quadratic_roots(0.0, 2.0, -4.0), vec![2.0]);
            assert!(quadratic_roots(0.0, 0.0, 3.0).is_empty());
        }
    }

    mod sign_interval_tests {
        use super::*;

        #[test]
        fn test_upward_parabola_signs() {
            let intervals = sign_intervals_between(vec![-2.0, 2.0], |x| x * x - 4.0);
            assert_eq!(intervals.positive.len(), 2);
            assert_eq!(intervals.negative.len(), 1);
            assert_eq!(intervals.negative[0], Interval::between(-2.0, 2.0));
            assert_eq!(intervals.zeros.len(), 2);
        }

        #[test]
        fn test_merges_across_non_zero_boundary() {
            // x³ - 3x with the critical points ±1 included as boundaries:
            // the probes either side of each critical point share a sign.
            let f = |x: f64| x * x * x - 3.0 * x;
            let boundaries = vec![-(3.0_f64.sqrt()), -1.0, 0.0, 1.0, 3.0_f64.sqrt()];
            let intervals = sign_intervals_between(boundaries, f);

            assert_eq!(intervals.zeros.len(), 3);
            assert_eq!(intervals.positive.len(), 2);
            assert_eq!(intervals.negative.len(), 2);
            assert_float_eq(intervals.positive[0].min, -(3.0_f64.sqrt()), 1e-12);
            assert_float_eq(intervals.positive[0].max, 0.0, 1e-12);
        }

        #[test]
        fn test_no_boundaries_constant_sign() {
            let intervals = sign_intervals_between(Vec::new(), |_| 3.0);
            assert_eq!(intervals.positive, vec![Interval::full()]);
            assert!(intervals.negative.is_empty());
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_interval_display() {
            assert_eq!(format!("{}", Interval::below(2.0)), "(-∞, 2)");
            assert_eq!(format!("{}", Interval::above(2.0)), "(2, ∞)");
            assert_eq!(format!("{}", Interval::between(-2.0, 2.0)), "(-2, 2)");
        }

        #[test]
        fn test_domain_display() {
            assert_eq!(format!("{}", DomainSpec::AllReals), "ℝ");
            assert_eq!(format!("{}", DomainSpec::Punctured(vec![2.0])), "ℝ \\ {2}");
            assert_eq!(
                format!("{}", DomainSpec::Punctured(vec![-1.0, 2.0])),
                "ℝ \\ {-1, 2}"
            );
            assert_eq!(
                format!("{}", DomainSpec::Bounded { min: -3.0, max: 3.0 }),
                "[-3, 3]"
            );
            assert_eq!(format!("{}", DomainSpec::Empty), "∅");
        }

        #[test]
        fn test_range_display() {
            assert_eq!(format!("{}", RangeSpec::AtLeast(-4.0)), "[-4, ∞)");
            assert_eq!(format!("{}", RangeSpec::AtMost(2.5)), "(-∞, 2.5]");
            assert_eq!(format!("{}", RangeSpec::Punctured(1.0)), "ℝ \\ {1}");
            assert_eq!(format!("{}", RangeSpec::Constant(3.0)), "{3}");
        }

        #[test]
        fn test_oblique_display() {
            let line = ObliqueAsymptote {
                slope: 1.0,
                intercept: 1.0,
            };
            assert_eq!(format!("{}", line), "y = x + 1");

            let steep = ObliqueAsymptote {
                slope: -2.0,
                intercept: -0.5,
            };
            assert_eq!(format!("{}", steep), "y = -2x - 0.5");
        }
    }

    mod dispatch_tests {
        use super::*;

        #[test]
        fn test_wrong_arity_fails_fast() {
            let error = analyze(FunctionFamily::Linear, &vec![1.0, 2.0, 3.0].into())
                .unwrap_err();
            assert_eq!(
                error.to_string(),
                "Invalid coefficient count for the linear family: expected 2, found 3"
            );
        }

        #[test]
        fn test_rational_accepts_both_layouts() {
            assert!(analyze(FunctionFamily::Rational, &vec![1.0, 1.0, 1.0, -2.0].into()).is_ok());
            assert!(
                analyze(
                    FunctionFamily::Rational,
                    &vec![1.0, 0.0, -4.0, 1.0, -1.0].into()
                )
                .is_ok()
            );
        }

        #[test]
        fn test_analysis_is_deterministic() {
            let coefficients: Coefficients = vec![1.0, 0.0, -4.0].into();
            let first = analyze(FunctionFamily::Quadratic, &coefficients).unwrap();
            let second = analyze(FunctionFamily::Quadratic, &coefficients).unwrap();
            assert_eq!(first, second);
        }
    }
}
