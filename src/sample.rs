//! # Numeric Sampling
//!
//! Turns a scalar function `f: ℝ → Option<ℝ>` plus an x-window into an
//! ordered, gap-aware sequence of plottable points. Undefined samples are
//! skipped silently (normal control flow near asymptotes, not an error) and
//! runaway magnitudes are clamped to a display cutoff, with one interpolated
//! boundary point keeping the polyline from shooting vertically through the
//! clamp edge.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::family::FunctionFamily;
use crate::point::Point;
use crate::types::{Validate, ValidationResult};
use crate::validation_utils::{_chain, _return, validate_finite};

/// Default number of evenly spaced samples across the window.
pub const DEFAULT_POINTS: usize = 800;

/// Default display cutoff for |y|.
pub const DEFAULT_CLAMP: f64 = 10.0;

/// Controls where and how densely a curve is sampled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Left edge of the sampling window.
    pub x_min: f64,
    /// Right edge of the sampling window.
    pub x_max: f64,
    /// Number of evenly spaced samples, endpoints included.
    pub points: usize,
    /// Emitted |y| values are clamped to this cutoff.
    pub clamp: f64,
}

impl Default for SampleConfig {
    /// Returns the standard window: x ∈ [-5, 5], 800 samples, |y| ≤ 10.
    fn default() -> Self {
        SampleConfig {
            x_min: -5.0,
            x_max: 5.0,
            points: DEFAULT_POINTS,
            clamp: DEFAULT_CLAMP,
        }
    }
}

impl SampleConfig {
    /// Returns the window tuned for a family: rationals sample three times
    /// as densely so the curve hugs its asymptotes, trigonometric curves
    /// widen to a full ±2π window at doubled density.
    pub fn for_family(family: FunctionFamily) -> Self {
        let base = SampleConfig::default();
        match family {
            FunctionFamily::Rational => SampleConfig {
                points: base.points * 3,
                ..base
            },
            FunctionFamily::Trigonometric => SampleConfig {
                x_min: -std::f64::consts::TAU,
                x_max: std::f64::consts::TAU,
                points: base.points * 2,
                ..base
            },
            _ => base,
        }
    }

    /// The x-distance between neighboring samples. Meaningful only for
    /// configurations with at least two points.
    pub fn step(&self) -> f64 {
        (self.x_max - self.x_min) / (self.points - 1) as f64
    }
}

impl Validate for SampleConfig {
    fn validate(&self) -> ValidationResult {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        _chain(
            validate_finite(&[self.x_min, self.x_max, self.clamp], "sample window"),
            &mut warnings,
            &mut errors,
        );

        if self.x_min >= self.x_max {
            errors.push(format!(
                "Sample window is empty: x_min ({}) must be below x_max ({}).",
                self.x_min, self.x_max
            ));
        }
        if self.clamp <= 0.0 {
            errors.push(format!(
                "Clamp cutoff must be positive, but found {}.",
                self.clamp
            ));
        }
        if self.points < 2 {
            warnings.push(format!(
                "Fewer than 2 sample points ({}) produce an empty curve.",
                self.points
            ));
        }

        _return(warnings, errors)
    }
}

/// Samples `f` at evenly spaced x-values across the configured window.
///
/// Skips x-values where `f` is undefined or non-finite. When a sample blows
/// past the clamp cutoff and the previous sample was still in bounds, one
/// boundary point is interpolated at the midpoint x with y halfway between
/// the last in-bound value and the signed cutoff, then the runaway sample is
/// emitted at the cutoff itself.
///
/// # Returns
/// Points non-decreasing in x; empty when the window is degenerate or `f`
/// is undefined across all of it. Pure: identical inputs give identical
/// output.
pub fn sample<F>(f: F, config: &SampleConfig) -> Vec<Point>
where
    F: Fn(f64) -> Option<f64>,
{
    if config.points < 2 || config.x_min >= config.x_max {
        return Vec::new();
    }

    let step = config.step();
    let mut points = Vec::with_capacity(config.points);
    let mut last_in_bounds: Option<f64> = None;

    for index in 0..config.points {
        let x = config.x_min + step * index as f64;
        let y = match f(x) {
            Some(y) if y.is_finite() => y,
            _ => {
                last_in_bounds = None;
                continue;
            }
        };

        if y.abs() > config.clamp {
            let clamped = config.clamp.copysign(y);
            if let Some(previous) = last_in_bounds {
                points.push(Point::new(x - step / 2.0, (previous + clamped) / 2.0));
            }
            points.push(Point::new(x, clamped));
            last_in_bounds = None;
        } else {
            points.push(Point::new(x, y));
            last_in_bounds = Some(y);
        }
    }

    trace!(
        "Sampled {} of {} requested points over [{}, {}]",
        points.len(),
        config.points,
        config.x_min,
        config.x_max
    );
    points
}

/// Samples a circle parametrically at a fixed angular resolution, closing
/// the loop by sweeping θ through a full turn back onto the start.
///
/// # Returns
/// `steps + 1` points tracing the circle counterclockwise from θ = 0;
/// empty when `steps` is zero or the radius is not positive.
pub fn sample_circle(center: Point, radius: f64, steps: usize) -> Vec<Point> {
    if steps == 0 || radius <= 0.0 {
        return Vec::new();
    }

    (0..=steps)
        .map(|index| {
            let theta = std::f64::consts::TAU * index as f64 / steps as f64;
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}
