//! # Problem Generation
//!
//! Randomized investigation problems: coefficients drawn from
//! difficulty-dependent lattices, formatted into a display expression, and
//! analyzed into characteristics, all packaged as one [`GeneratedFunction`].
//!
//! Entropy comes only from the injected [`Rng`], so a seeded generator
//! reproduces the same problem bit for bit. Degenerate draws (zero leading
//! coefficients, vanishing denominators) are resolved inside the draw
//! itself; the returned function never carries a degeneracy flag.
//!
//! ## Quick Start
//!
//! ```rust
//! use curvelab::{generate, DifficultyTier, FunctionFamily};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let function = generate(FunctionFamily::Quadratic, DifficultyTier::Easy, &mut rng);
//!
//! assert!(function.expression.starts_with("f(x) = "));
//! assert_eq!(function.coefficients.len(), 3);
//! ```

mod format;
mod ranges;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::{circle, linear, polynomial, quadratic, rational, trigonometric};
use crate::analysis::{Characteristics, ROOT_TOLERANCE};
use crate::eval::evaluate;
use crate::family::{Coefficients, DifficultyTier, FunctionFamily};
use crate::types::{Validate, ValidationResult};
use crate::validation_utils::{
    _chain, _return, validate_arity, validate_ascending_x, validate_finite,
    validate_sign_partition,
};

/// Switches for the simplifications generated problems rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Snap near-integer cubic critical points to the lattice and drop the
    /// rest, keeping extrema solvable by hand. See
    /// [`polynomial::analyze_with`].
    pub round_critical_points: bool,
}

impl Default for GeneratorOptions {
    /// Returns the pedagogical defaults: critical-point rounding on.
    fn default() -> Self {
        GeneratorOptions {
            round_critical_points: true,
        }
    }
}

/// One randomly generated investigation problem.
///
/// Born on a generate request and read-only afterwards; the next request
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFunction {
    pub family: FunctionFamily,
    pub difficulty: DifficultyTier,
    pub coefficients: Coefficients,
    /// Human-readable rendering of the drawn coefficients.
    pub expression: String,
    pub characteristics: Characteristics,
}

impl GeneratedFunction {
    /// Evaluates the generated function at `x`.
    ///
    /// # Returns
    /// `None` where the family's evaluator is undefined (rational pole,
    /// outside a circle's x-extent).
    pub fn eval(&self, x: f64) -> Option<f64> {
        evaluate(self.family, &self.coefficients, x)
    }
}

impl Validate for GeneratedFunction {
    /// Checks the structural contract: finite coefficients in the family's
    /// layout, roots that really evaluate to zero, markers ascending in x,
    /// and sign intervals that partition the line.
    fn validate(&self) -> ValidationResult {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        _chain(
            validate_finite(&self.coefficients, "coefficient"),
            &mut warnings,
            &mut errors,
        );
        _chain(
            validate_arity(self.family, self.coefficients.len()),
            &mut warnings,
            &mut errors,
        );
        _chain(
            validate_ascending_x(&self.characteristics.roots, "roots"),
            &mut warnings,
            &mut errors,
        );
        _chain(
            validate_ascending_x(&self.characteristics.critical_points, "critical points"),
            &mut warnings,
            &mut errors,
        );

        if self.expression.is_empty() {
            errors.push("Expression string is empty.".to_string());
        }

        if self.family.is_function() && !self.characteristics.is_degenerate() {
            for root in &self.characteristics.roots {
                // A root the evaluator cannot reach (excluded x) is allowed.
                if let Some(y) = self.eval(root.x) {
                    if y.abs() >= ROOT_TOLERANCE {
                        errors.push(format!(
                            "Root at x = {} evaluates to {} rather than zero.",
                            root.x, y
                        ));
                    }
                }
            }
        }

        if let Some(signs) = &self.characteristics.sign_intervals {
            _chain(
                validate_sign_partition(signs, |x| self.eval(x)),
                &mut warnings,
                &mut errors,
            );
        }

        _return(warnings, errors)
    }
}

/// Generates a random problem for a family at a difficulty, using the
/// default [`GeneratorOptions`].
pub fn generate<R: Rng + ?Sized>(
    family: FunctionFamily,
    difficulty: DifficultyTier,
    rng: &mut R,
) -> GeneratedFunction {
    generate_with(family, difficulty, GeneratorOptions::default(), rng)
}

/// Generates a random problem with explicit generator options.
pub fn generate_with<R: Rng + ?Sized>(
    family: FunctionFamily,
    difficulty: DifficultyTier,
    options: GeneratorOptions,
    rng: &mut R,
) -> GeneratedFunction {
    let function = match family {
        FunctionFamily::Linear => linear_function(difficulty, rng),
        FunctionFamily::Quadratic => quadratic_function(difficulty, rng),
        FunctionFamily::Polynomial => polynomial_function(difficulty, options, rng),
        FunctionFamily::Rational => rational_function(difficulty, rng),
        FunctionFamily::Trigonometric => trigonometric_function(difficulty, rng),
        FunctionFamily::Circle => circle_function(difficulty, rng),
    };
    debug!(
        "Generated {} {} problem: {}",
        function.difficulty, function.family, function.expression
    );
    function
}

fn linear_function<R: Rng + ?Sized>(difficulty: DifficultyTier, rng: &mut R) -> GeneratedFunction {
    let [m, b] = ranges::linear(difficulty, rng);
    GeneratedFunction {
        family: FunctionFamily::Linear,
        difficulty,
        coefficients: vec![m, b].into(),
        expression: format::linear_expression(m, b),
        characteristics: linear::analyze(m, b),
    }
}

fn quadratic_function<R: Rng + ?Sized>(
    difficulty: DifficultyTier,
    rng: &mut R,
) -> GeneratedFunction {
    let [a, b, c] = ranges::quadratic(difficulty, rng);
    GeneratedFunction {
        family: FunctionFamily::Quadratic,
        difficulty,
        coefficients: vec![a, b, c].into(),
        expression: format::polynomial_expression(&[a, b, c]),
        characteristics: quadratic::analyze(a, b, c),
    }
}

fn polynomial_function<R: Rng + ?Sized>(
    difficulty: DifficultyTier,
    options: GeneratorOptions,
    rng: &mut R,
) -> GeneratedFunction {
    let [a, b, c, d] = ranges::polynomial(difficulty, rng);
    GeneratedFunction {
        family: FunctionFamily::Polynomial,
        difficulty,
        coefficients: vec![a, b, c, d].into(),
        expression: format::polynomial_expression(&[a, b, c, d]),
        characteristics: polynomial::analyze_with(a, b, c, d, options.round_critical_points),
    }
}

fn rational_function<R: Rng + ?Sized>(
    difficulty: DifficultyTier,
    rng: &mut R,
) -> GeneratedFunction {
    let (coefficients, characteristics) = match difficulty {
        DifficultyTier::Easy | DifficultyTier::Medium => {
            let [n1, n0, d1, d0] = ranges::rational_linear(difficulty, rng);
            (
                vec![n1, n0, d1, d0],
                rational::analyze_linear(n1, n0, d1, d0),
            )
        }
        DifficultyTier::Hard => {
            let [n2, n1, n0, d1, d0] = ranges::rational_quadratic(rng);
            (
                vec![n2, n1, n0, d1, d0],
                rational::analyze_quadratic(n2, n1, n0, d1, d0),
            )
        }
    };
    let (numerator, denominator) = coefficients.split_at(coefficients.len() - 2);
    let expression = format::rational_expression(numerator, denominator);
    GeneratedFunction {
        family: FunctionFamily::Rational,
        difficulty,
        coefficients: coefficients.into(),
        expression,
        characteristics,
    }
}

fn trigonometric_function<R: Rng + ?Sized>(
    difficulty: DifficultyTier,
    rng: &mut R,
) -> GeneratedFunction {
    let [a, b, c, d] = ranges::trigonometric(difficulty, rng);
    GeneratedFunction {
        family: FunctionFamily::Trigonometric,
        difficulty,
        coefficients: vec![a, b, c, d].into(),
        expression: format::trigonometric_expression(a, b, c, d),
        characteristics: trigonometric::analyze(a, b, c, d),
    }
}

fn circle_function<R: Rng + ?Sized>(difficulty: DifficultyTier, rng: &mut R) -> GeneratedFunction {
    let [h, k, r] = ranges::circle(difficulty, rng);
    // Hard problems add a secant line for the line-meets-circle step.
    let secant = match difficulty {
        DifficultyTier::Hard => Some((
            rng.gen_range(-ranges::SECANT_SPAN..ranges::SECANT_SPAN),
            rng.gen_range(-ranges::SECANT_SPAN..ranges::SECANT_SPAN),
        )),
        _ => None,
    };
    GeneratedFunction {
        family: FunctionFamily::Circle,
        difficulty,
        coefficients: vec![h, k, r].into(),
        expression: format::circle_expression(h, k, r),
        characteristics: circle::analyze_with_secant(h, k, r, secant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_rng;

    #[test]
    fn test_every_family_and_tier_generates_cleanly() {
        let mut rng = seeded_rng(1);

        for &family in &FunctionFamily::ALL {
            for &difficulty in &DifficultyTier::ALL {
                for _ in 0..20 {
                    let function = generate(family, difficulty, &mut rng);

                    assert_eq!(function.family, family);
                    assert_eq!(function.difficulty, difficulty);
                    assert!(family.arity_matches(function.coefficients.len()));
                    assert!(
                        !function.characteristics.is_degenerate(),
                        "degenerate draw slipped through for {} {}: {}",
                        difficulty,
                        family,
                        function.expression
                    );
                    assert!(
                        !function.validate().is_invalid(),
                        "invalid {} {}: {:?}",
                        difficulty,
                        family,
                        function.validate().errors()
                    );
                }
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_problem() {
        let first = generate(
            FunctionFamily::Rational,
            DifficultyTier::Hard,
            &mut seeded_rng(99),
        );
        let second = generate(
            FunctionFamily::Rational,
            DifficultyTier::Hard,
            &mut seeded_rng(99),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn test_seeds_cover_distinct_problems() {
        let expressions: std::collections::HashSet<String> = (0..50)
            .map(|seed| {
                generate(
                    FunctionFamily::Linear,
                    DifficultyTier::Hard,
                    &mut seeded_rng(seed),
                )
                .expression
            })
            .collect();

        assert!(expressions.len() > 1);
    }

    #[test]
    fn test_hard_circles_carry_a_secant() {
        let mut rng = seeded_rng(5);

        for _ in 0..10 {
            let function = generate(FunctionFamily::Circle, DifficultyTier::Hard, &mut rng);
            let geometry = function.characteristics.geometry.unwrap();
            let secant = geometry.secant.unwrap();
            assert!(secant.slope.abs() <= ranges::SECANT_SPAN);

            let easy = generate(FunctionFamily::Circle, DifficultyTier::Easy, &mut rng);
            assert!(easy.characteristics.geometry.unwrap().secant.is_none());
        }
    }

    #[test]
    fn test_round_critical_points_switch_reaches_the_analyzer() {
        let mut rng = seeded_rng(13);
        let options = GeneratorOptions {
            round_critical_points: false,
        };

        for _ in 0..50 {
            let function = generate_with(
                FunctionFamily::Polynomial,
                DifficultyTier::Medium,
                options,
                &mut rng,
            );
            // Without rounding, whatever extrema exist keep their raw x.
            for point in &function.characteristics.critical_points {
                let &[a, b, c, _] = function.coefficients.values.as_slice() else {
                    panic!("cubic layout expected");
                };
                let slope = (3.0 * a * point.x + 2.0 * b) * point.x + c;
                assert!(slope.abs() < 1e-6, "not a stationary point: {:?}", point);
            }
        }
    }

    #[test]
    fn test_generated_roots_evaluate_to_zero() {
        let mut rng = seeded_rng(21);

        for &difficulty in &DifficultyTier::ALL {
            for _ in 0..30 {
                let function = generate(FunctionFamily::Trigonometric, difficulty, &mut rng);
                for root in &function.characteristics.roots {
                    let y = function.eval(root.x).unwrap();
                    assert!(y.abs() < ROOT_TOLERANCE, "f({}) = {}", root.x, y);
                }
            }
        }
    }
}
