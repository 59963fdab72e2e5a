//! Shared validation helpers.
//!
//! Small composable checks used by the [`Validate`](crate::types::Validate)
//! implementations across the crate. Each helper returns a
//! [`ValidationResult`]; `_chain` folds results into running warning/error
//! lists and `_return` collapses those lists into the final outcome.

use crate::analysis::{Interval, SignIntervals};
use crate::family::FunctionFamily;
use crate::point::Point;
use crate::types::ValidationResult;

pub fn _chain<T>(
    result: ValidationResult<T>,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    match result {
        ValidationResult::Valid(_) => {}
        ValidationResult::Warnings(_, warns) => {
            warnings.extend(warns);
        }
        ValidationResult::Invalid(warns, errs) => {
            warnings.extend(warns);
            errors.extend(errs);
        }
    }
}

pub fn _return(warnings: Vec<String>, errors: Vec<String>) -> ValidationResult {
    if !errors.is_empty() {
        ValidationResult::Invalid(warnings, errors)
    } else if !warnings.is_empty() {
        ValidationResult::Warnings((), warnings)
    } else {
        ValidationResult::Valid(())
    }
}

pub fn _float_equals(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON
}

/// Checks that every value in a slice is a finite number.
pub fn validate_finite(values: &[f64], label: &str) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        if value.is_nan() || value.is_infinite() {
            errors.push(format!(
                "{} at index {} is not a valid number: {}",
                label, i, value
            ));
        }
    }

    _return(warnings, errors)
}

/// Checks that a point sequence never steps backwards in x.
pub fn validate_ascending_x(points: &[Point], label: &str) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    for i in 1..points.len() {
        if points[i].x < points[i - 1].x {
            errors.push(format!(
                "{} are not in ascending x order: {} > {} at index {}",
                label,
                points[i - 1].x,
                points[i].x,
                i
            ));
        }
    }

    _return(warnings, errors)
}

/// Checks that a coefficient vector has the length its family expects.
pub fn validate_arity(family: FunctionFamily, found: usize) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    if !family.arity_matches(found) {
        errors.push(format!(
            "Expected {} coefficients for the {} family, but found {}.",
            family.expected_arity(),
            family,
            found
        ));
    }

    _return(warnings, errors)
}

/// Checks that sign intervals form a non-overlapping partition and, where
/// the function evaluates, agree with its sign at a probe point.
///
/// Overlap is an error; a sign disagreement at the probe is only a warning,
/// since merged intervals probe away from the midpoints they were built
/// from.
pub fn validate_sign_partition<F>(signs: &SignIntervals, f: F) -> ValidationResult
where
    F: Fn(f64) -> Option<f64>,
{
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let mut all: Vec<(&Interval, bool)> = signs
        .positive
        .iter()
        .map(|interval| (interval, true))
        .chain(signs.negative.iter().map(|interval| (interval, false)))
        .collect();
    all.sort_by(|a, b| a.0.min.total_cmp(&b.0.min));

    for pair in all.windows(2) {
        if pair[1].0.min < pair[0].0.max {
            errors.push(format!(
                "Sign intervals {} and {} overlap.",
                pair[0].0, pair[1].0
            ));
        }
    }

    for (interval, positive) in all {
        let probe = interval.probe();
        if let Some(y) = f(probe) {
            let agrees = if positive { y > 0.0 } else { y < 0.0 };
            if !agrees {
                warnings.push(format!(
                    "Function sign at x = {} disagrees with the {} interval {}.",
                    probe,
                    if positive { "positive" } else { "negative" },
                    interval
                ));
            }
        }
    }

    _return(warnings, errors)
}
