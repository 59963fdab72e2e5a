//! # Evaluation
//!
//! Pointwise evaluation of a family's function from its raw coefficient
//! slice. Undefined inputs yield `None`, never a NaN or a panic, so the
//! sampler can skip them silently.

use crate::family::FunctionFamily;

/// Rational magnitudes beyond this bound count as asymptotic blow-up and are
/// treated as undefined, ahead of any display clamping.
pub const BLOWUP_BOUND: f64 = 1000.0;

/// Denominator magnitudes below this floor count as division by zero.
pub const DENOMINATOR_FLOOR: f64 = 1e-10;

/// Evaluates a family's function at `x`.
///
/// Circles evaluate their upper semicircle, the only single-valued slice.
///
/// # Returns
/// `None` where the function is undefined: a rational at (or blowing up
/// near) its pole, a circle outside its x-extent, or a coefficient slice
/// that does not match the family's layout.
pub fn evaluate(family: FunctionFamily, coefficients: &[f64], x: f64) -> Option<f64> {
    match (family, coefficients) {
        (FunctionFamily::Linear, &[m, b]) => Some(m * x + b),
        (FunctionFamily::Quadratic, &[a, b, c]) => Some((a * x + b) * x + c),
        (FunctionFamily::Polynomial, &[a, b, c, d]) => Some(((a * x + b) * x + c) * x + d),
        (FunctionFamily::Rational, &[n1, n0, d1, d0]) => {
            rational_value(n1 * x + n0, d1 * x + d0)
        }
        (FunctionFamily::Rational, &[n2, n1, n0, d1, d0]) => {
            rational_value((n2 * x + n1) * x + n0, d1 * x + d0)
        }
        (FunctionFamily::Trigonometric, &[a, b, c, d]) => Some(a * (b * x + c).sin() + d),
        (FunctionFamily::Circle, &[h, k, r]) => {
            let square = r * r - (x - h) * (x - h);
            if square < 0.0 {
                None
            } else {
                Some(k + square.sqrt())
            }
        }
        _ => None,
    }
}

fn rational_value(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator.abs() < DENOMINATOR_FLOOR {
        return None;
    }
    let value = numerator / denominator;
    if value.abs() > BLOWUP_BOUND {
        return None;
    }
    Some(value)
}
