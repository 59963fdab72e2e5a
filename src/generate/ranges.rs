//! # Difficulty Lattices
//!
//! Coefficient draw ranges per family and tier. Ranges widen and precision
//! loosens as difficulty rises; the cubic and rational families stay on the
//! integer lattice at every tier so critical-point rounding and hole
//! classification keep their meaning.

use log::debug;
use rand::Rng;

use crate::family::DifficultyTier;

/// Bounded retries before a nonzero draw falls back to the lattice step.
const MAX_REDRAWS: usize = 8;

/// Hard-tier circle secants draw slope and intercept from ±this span.
pub(crate) const SECANT_SPAN: f64 = 2.0;

/// A uniform coefficient lattice `{min, min+step, …, max}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lattice {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Lattice {
    pub(crate) const fn new(min: f64, max: f64, step: f64) -> Self {
        Lattice { min, max, step }
    }

    pub(crate) const fn integers(min: f64, max: f64) -> Self {
        Lattice::new(min, max, 1.0)
    }

    /// Draws one lattice value uniformly.
    pub(crate) fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let slots = ((self.max - self.min) / self.step).round() as u64;
        self.min + self.step * rng.gen_range(0..=slots) as f64
    }

    /// Draws a nonzero lattice value, resampling a bounded number of times
    /// before substituting the lattice step itself.
    pub(crate) fn draw_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        for _ in 0..MAX_REDRAWS {
            let value = self.draw(rng);
            if value != 0.0 {
                return value;
            }
        }
        debug!(
            "Nonzero draw exhausted {} retries; substituting the lattice step {}.",
            MAX_REDRAWS, self.step
        );
        self.step
    }
}

pub(crate) fn linear<R: Rng + ?Sized>(difficulty: DifficultyTier, rng: &mut R) -> [f64; 2] {
    let (slope, intercept) = match difficulty {
        DifficultyTier::Easy => (
            Lattice::integers(-2.0, 2.0),
            Lattice::integers(-3.0, 3.0),
        ),
        DifficultyTier::Medium => (
            Lattice::new(-3.0, 3.0, 0.5),
            Lattice::new(-5.0, 5.0, 0.5),
        ),
        DifficultyTier::Hard => (
            Lattice::new(-5.0, 5.0, 0.25),
            Lattice::new(-8.0, 8.0, 0.25),
        ),
    };
    [slope.draw_nonzero(rng), intercept.draw(rng)]
}

pub(crate) fn quadratic<R: Rng + ?Sized>(difficulty: DifficultyTier, rng: &mut R) -> [f64; 3] {
    match difficulty {
        // Easy keeps the parabola opening upward.
        DifficultyTier::Easy => {
            let leading = Lattice::integers(1.0, 3.0);
            let others = Lattice::integers(-3.0, 3.0);
            [leading.draw(rng), others.draw(rng), others.draw(rng)]
        }
        DifficultyTier::Medium => {
            let leading = Lattice::new(-3.0, 3.0, 0.5);
            let others = Lattice::new(-4.0, 4.0, 0.5);
            [leading.draw_nonzero(rng), others.draw(rng), others.draw(rng)]
        }
        DifficultyTier::Hard => {
            let leading = Lattice::new(-4.0, 4.0, 0.25);
            let others = Lattice::new(-5.0, 5.0, 0.25);
            [leading.draw_nonzero(rng), others.draw(rng), others.draw(rng)]
        }
    }
}

pub(crate) fn polynomial<R: Rng + ?Sized>(difficulty: DifficultyTier, rng: &mut R) -> [f64; 4] {
    // The leading coefficient is ±1 so extrema tend to land near the lattice.
    let leading = Lattice::new(-1.0, 1.0, 2.0);
    let (middle, constant) = match difficulty {
        DifficultyTier::Easy => (Lattice::integers(-3.0, 3.0), Lattice::integers(-2.0, 2.0)),
        DifficultyTier::Medium => (Lattice::integers(-4.0, 4.0), Lattice::integers(-3.0, 3.0)),
        DifficultyTier::Hard => (Lattice::integers(-5.0, 5.0), Lattice::integers(-4.0, 4.0)),
    };
    [
        leading.draw(rng),
        middle.draw(rng),
        middle.draw(rng),
        constant.draw(rng),
    ]
}

/// Linear-over-linear coefficients `[n1, n0, d1, d0]`. Easy draws monic
/// `(x + n0)/(x + d0)`; Medium draws all four with nonzero slopes.
pub(crate) fn rational_linear<R: Rng + ?Sized>(
    difficulty: DifficultyTier,
    rng: &mut R,
) -> [f64; 4] {
    let offsets = Lattice::integers(-3.0, 3.0);
    match difficulty {
        DifficultyTier::Easy => [1.0, offsets.draw(rng), 1.0, offsets.draw(rng)],
        _ => {
            let slopes = Lattice::integers(-2.0, 2.0);
            [
                slopes.draw_nonzero(rng),
                offsets.draw(rng),
                slopes.draw_nonzero(rng),
                offsets.draw(rng),
            ]
        }
    }
}

/// Quadratic-over-linear coefficients `[n2, n1, n0, d1, d0]` for the hard
/// tier.
pub(crate) fn rational_quadratic<R: Rng + ?Sized>(rng: &mut R) -> [f64; 5] {
    let leading = Lattice::integers(-2.0, 2.0);
    let middle = Lattice::integers(-4.0, 4.0);
    let offset = Lattice::integers(-3.0, 3.0);
    [
        leading.draw_nonzero(rng),
        middle.draw(rng),
        middle.draw(rng),
        leading.draw_nonzero(rng),
        offset.draw(rng),
    ]
}

pub(crate) fn trigonometric<R: Rng + ?Sized>(
    difficulty: DifficultyTier,
    rng: &mut R,
) -> [f64; 4] {
    let (wave, phase, shift) = match difficulty {
        DifficultyTier::Easy => (
            Lattice::integers(1.0, 2.0),
            Lattice::integers(0.0, 0.0),
            Lattice::integers(0.0, 0.0),
        ),
        DifficultyTier::Medium => (
            Lattice::integers(1.0, 3.0),
            Lattice::integers(-2.0, 2.0),
            Lattice::integers(0.0, 0.0),
        ),
        DifficultyTier::Hard => (
            Lattice::integers(1.0, 4.0),
            Lattice::integers(-3.0, 3.0),
            Lattice::integers(-2.0, 2.0),
        ),
    };
    [
        wave.draw(rng),
        wave.draw(rng),
        phase.draw(rng),
        shift.draw(rng),
    ]
}

pub(crate) fn circle<R: Rng + ?Sized>(difficulty: DifficultyTier, rng: &mut R) -> [f64; 3] {
    match difficulty {
        DifficultyTier::Easy => {
            let radius = Lattice::integers(2.0, 4.0);
            [0.0, 0.0, radius.draw(rng)]
        }
        DifficultyTier::Medium => {
            let center = Lattice::integers(-3.0, 3.0);
            let radius = Lattice::integers(2.0, 4.0);
            [center.draw(rng), center.draw(rng), radius.draw(rng)]
        }
        DifficultyTier::Hard => {
            let center = Lattice::new(-5.0, 5.0, 0.5);
            let radius = Lattice::new(2.0, 5.5, 0.5);
            [center.draw(rng), center.draw(rng), radius.draw(rng)]
        }
    }
}
