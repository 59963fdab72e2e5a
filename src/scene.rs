//! # Scene Projection
//!
//! Maps a generated function plus its sampled curve into renderer-agnostic
//! drawing primitives: polyline segments split at discontinuities, labeled
//! marker sets, asymptote guide lines, and fitted axis ranges. Categories
//! are the contract; visual styling belongs to the renderer.
//!
//! The scene is recomputed wholesale on every call, never patched.

use std::fmt;

use itertools::Itertools;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::analysis::Characteristics;
use crate::family::FunctionFamily;
use crate::generate::GeneratedFunction;
use crate::point::Point;
use crate::sample::{sample, sample_circle, SampleConfig};

/// Angular resolution of the parametric circle trace.
pub const CIRCLE_STEPS: usize = 100;

/// Circle axis ranges extend this factor beyond the radius.
const CIRCLE_MARGIN: f64 = 1.2;

/// Share of the y-span added as padding above and below.
const PADDING_SHARE: f64 = 0.1;

/// Padding never grows beyond this many display units.
const PADDING_LIMIT: f64 = 2.0;

/// Absolute bound on the fitted y-range.
const AXIS_BOUND: f64 = 10.0;

/// Fallback y-span when a function has no special points to anchor to.
const DEFAULT_SPAN: (f64, f64) = (-5.0, 5.0);

/// What a marker set highlights. The renderer styles each category
/// distinguishably; nothing here prescribes how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerCategory {
    Root,
    CriticalPoint,
    InflectionPoint,
    Hole,
    /// Circle crossings of the coordinate axes.
    AxisIntersection,
    /// Crossings with a drawn secant line.
    Intersection,
    /// Period multiples along the bottom edge of a trigonometric scene.
    PeriodTick,
}

impl fmt::Display for MarkerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerCategory::Root => write!(f, "root"),
            MarkerCategory::CriticalPoint => write!(f, "critical-point"),
            MarkerCategory::InflectionPoint => write!(f, "inflection-point"),
            MarkerCategory::Hole => write!(f, "hole"),
            MarkerCategory::AxisIntersection => write!(f, "axis-intersection"),
            MarkerCategory::Intersection => write!(f, "intersection"),
            MarkerCategory::PeriodTick => write!(f, "period-tick"),
        }
    }
}

/// A labeled set of highlight points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSet {
    pub category: MarkerCategory,
    pub points: Vec<Point>,
}

/// An infinite guide line drawn behind the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GuideLine {
    Vertical { x: f64 },
    Horizontal { y: f64 },
    Oblique { slope: f64, intercept: f64 },
}

/// A closed display interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// A rounded gridline step yielding about `ticks` divisions.
    pub fn tick_step(&self, ticks: usize) -> f64 {
        if ticks == 0 || self.span() <= 0.0 {
            return 1.0;
        }
        nice_step(self.span() / ticks as f64)
    }
}

/// Rounds a raw step up or down to the nearest 1/2/5 decade multiple.
fn nice_step<F: Float>(raw: F) -> F {
    let ten = F::from(10.0).unwrap_or_else(F::one);
    let magnitude = ten.powf(raw.log10().floor());
    let normalized = raw / magnitude;

    let factor = if normalized < F::from(1.5).unwrap_or_else(F::one) {
        F::one()
    } else if normalized < F::from(3.0).unwrap_or_else(F::one) {
        F::from(2.0).unwrap_or_else(F::one)
    } else if normalized < F::from(7.0).unwrap_or_else(F::one) {
        F::from(5.0).unwrap_or_else(F::one)
    } else {
        ten
    };
    factor * magnitude
}

/// Everything a renderer needs to draw one problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotScene {
    /// Disjoint polylines of the curve itself, ascending in x.
    pub segments: Vec<Vec<Point>>,
    /// Labeled highlight points, one set per populated category.
    pub markers: Vec<MarkerSet>,
    /// Asymptote and secant guide lines.
    pub guides: Vec<GuideLine>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

/// Projects a generated function into a renderable scene.
///
/// Function families sample `f(x)` across the configured window; circles
/// trace their locus parametrically and ignore the window in favor of a
/// margin around the radius.
pub fn project(function: &GeneratedFunction, config: &SampleConfig) -> PlotScene {
    match function.family {
        FunctionFamily::Circle => project_circle(function),
        _ => project_curve(function, config),
    }
}

fn project_curve(function: &GeneratedFunction, config: &SampleConfig) -> PlotScene {
    let characteristics = &function.characteristics;

    let samples = sample(|x| function.eval(x), config);
    let segments = split_segments(&samples, config);

    let x_range = AxisRange {
        min: config.x_min,
        max: config.x_max,
    };
    let y_range = fit_y_range(characteristics, &segments);

    let mut markers = Vec::new();
    push_markers(&mut markers, MarkerCategory::Root, characteristics.roots.clone());
    push_markers(
        &mut markers,
        MarkerCategory::CriticalPoint,
        characteristics.critical_points.clone(),
    );
    push_markers(
        &mut markers,
        MarkerCategory::InflectionPoint,
        characteristics.inflection_points.clone(),
    );
    push_markers(&mut markers, MarkerCategory::Hole, characteristics.holes.clone());

    if let Some(periodicity) = &characteristics.periodicity {
        if periodicity.period > f64::EPSILON {
            let mut ticks = Vec::new();
            let mut x = x_range.min + periodicity.period;
            while x < x_range.max {
                ticks.push(Point::new(x, y_range.min));
                x += periodicity.period;
            }
            push_markers(&mut markers, MarkerCategory::PeriodTick, ticks);
        }
    }

    let mut guides = Vec::new();
    if let Some(asymptotes) = &characteristics.asymptotes {
        for &x in &asymptotes.vertical {
            guides.push(GuideLine::Vertical { x });
        }
        if let Some(y) = asymptotes.horizontal {
            guides.push(GuideLine::Horizontal { y });
        }
        if let Some(oblique) = asymptotes.oblique {
            guides.push(GuideLine::Oblique {
                slope: oblique.slope,
                intercept: oblique.intercept,
            });
        }
    }

    PlotScene {
        segments,
        markers,
        guides,
        x_range,
        y_range,
    }
}

fn project_circle(function: &GeneratedFunction) -> PlotScene {
    let characteristics = &function.characteristics;
    let Some(geometry) = &characteristics.geometry else {
        // Only reachable with a hand-assembled record; draw nothing.
        return PlotScene {
            segments: Vec::new(),
            markers: Vec::new(),
            guides: Vec::new(),
            x_range: AxisRange {
                min: DEFAULT_SPAN.0,
                max: DEFAULT_SPAN.1,
            },
            y_range: AxisRange {
                min: DEFAULT_SPAN.0,
                max: DEFAULT_SPAN.1,
            },
        };
    };

    let trace = sample_circle(geometry.center, geometry.radius, CIRCLE_STEPS);
    let segments = if trace.is_empty() { Vec::new() } else { vec![trace] };

    let mut markers = Vec::new();
    push_markers(
        &mut markers,
        MarkerCategory::CriticalPoint,
        characteristics.critical_points.clone(),
    );
    let mut crossings = geometry.x_intersections.clone();
    crossings.extend(geometry.y_intersections.iter().copied());
    push_markers(&mut markers, MarkerCategory::AxisIntersection, crossings);

    let mut guides = Vec::new();
    if let Some(secant) = &geometry.secant {
        push_markers(
            &mut markers,
            MarkerCategory::Intersection,
            secant.intersections.clone(),
        );
        guides.push(GuideLine::Oblique {
            slope: secant.slope,
            intercept: secant.intercept,
        });
    }

    let reach = CIRCLE_MARGIN * geometry.radius;
    PlotScene {
        segments,
        markers,
        guides,
        x_range: AxisRange {
            min: geometry.center.x - reach,
            max: geometry.center.x + reach,
        },
        y_range: AxisRange {
            min: geometry.center.y - reach,
            max: geometry.center.y + reach,
        },
    }
}

fn push_markers(markers: &mut Vec<MarkerSet>, category: MarkerCategory, points: Vec<Point>) {
    if !points.is_empty() {
        markers.push(MarkerSet { category, points });
    }
}

/// Splits sampled points into disjoint polylines at discontinuities: an
/// x-gap wider than 1.5 sample steps (skipped samples) or a y-jump past
/// half the clamp cutoff (asymptote crossing).
fn split_segments(points: &[Point], config: &SampleConfig) -> Vec<Vec<Point>> {
    let gap = config.step() * 1.5;
    let jump = config.clamp / 2.0;

    let mut segments = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for &point in points {
        if let Some(&previous) = current.last() {
            if point.x - previous.x > gap || (point.y - previous.y).abs() > jump {
                segments.push(std::mem::take(&mut current));
            }
        }
        current.push(point);
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Fits the y display range: span the special points (or a default window),
/// widen to the sampled extent, pad proportionally, clamp to a sane bound,
/// and keep zero visible whenever roots exist.
fn fit_y_range(characteristics: &Characteristics, segments: &[Vec<Point>]) -> AxisRange {
    let special: Vec<f64> = characteristics
        .roots
        .iter()
        .chain(&characteristics.critical_points)
        .map(|point| point.y)
        .collect();

    let (mut min, mut max) = if special.is_empty() {
        DEFAULT_SPAN
    } else {
        special.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(low, high), &y| (low.min(y), high.max(y)),
        )
    };

    if let Some((sampled_min, sampled_max)) = segments
        .iter()
        .flatten()
        .map(|point| point.y)
        .minmax()
        .into_option()
    {
        min = min.min(sampled_min);
        max = max.max(sampled_max);
    }

    let padding = (PADDING_SHARE * (max - min)).min(PADDING_LIMIT);
    min = (min - padding).max(-AXIS_BOUND);
    max = (max + padding).min(AXIS_BOUND);

    if !characteristics.roots.is_empty() {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    AxisRange { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::family::{Coefficients, DifficultyTier};
    use crate::test_utils::assert_float_eq;

    fn fixture(family: FunctionFamily, values: Vec<f64>) -> GeneratedFunction {
        let coefficients = Coefficients::from(values);
        let characteristics = analyze(family, &coefficients).unwrap();
        GeneratedFunction {
            family,
            difficulty: DifficultyTier::Medium,
            coefficients,
            expression: String::from("fixture"),
            characteristics,
        }
    }

    fn marker<'a>(scene: &'a PlotScene, category: MarkerCategory) -> Option<&'a MarkerSet> {
        scene.markers.iter().find(|set| set.category == category)
    }

    mod segment_tests {
        use super::*;

        #[test]
        fn test_continuous_curve_is_one_segment() {
            let function = fixture(FunctionFamily::Quadratic, vec![1.0, 0.0, -4.0]);
            let scene = project(&function, &SampleConfig::default());

            assert_eq!(scene.segments.len(), 1);
            assert!(scene.segments[0].len() > 100);
        }

        #[test]
        fn test_rational_splits_around_the_asymptote() {
            let function = fixture(FunctionFamily::Rational, vec![1.0, 1.0, 1.0, -2.0]);
            let scene = project(&function, &SampleConfig::for_family(FunctionFamily::Rational));

            assert!(scene.segments.len() >= 2);
            // Every segment stays on one side of x = 2.
            for segment in &scene.segments {
                let left = segment.iter().all(|point| point.x < 2.0);
                let right = segment.iter().all(|point| point.x > 2.0);
                assert!(left || right);
            }

            assert!(scene
                .guides
                .contains(&GuideLine::Vertical { x: 2.0 }));
            assert!(scene
                .guides
                .contains(&GuideLine::Horizontal { y: 1.0 }));
        }

        #[test]
        fn test_split_on_gap_and_jump() {
            let config = SampleConfig {
                x_min: 0.0,
                x_max: 4.0,
                points: 5,
                clamp: 10.0,
            };
            let points = [
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                // x-gap: the sample at 2.0 was skipped.
                Point::new(3.0, 1.0),
                // y-jump past clamp/2.
                Point::new(4.0, 8.0),
            ];

            let segments = split_segments(&points, &config);
            assert_eq!(segments.len(), 3);
            assert_eq!(segments[0].len(), 2);
            assert_eq!(segments[1], vec![Point::new(3.0, 1.0)]);
            assert_eq!(segments[2], vec![Point::new(4.0, 8.0)]);
        }
    }

    mod range_tests {
        use super::*;

        #[test]
        fn test_y_range_covers_specials_and_stays_bounded() {
            let function = fixture(FunctionFamily::Quadratic, vec![1.0, 0.0, -4.0]);
            let scene = project(&function, &SampleConfig::default());

            // Vertex and roots are inside, zero is visible, and the clamp
            // keeps the blown-up arms inside ±10.
            assert!(scene.y_range.contains(-4.0));
            assert!(scene.y_range.contains(0.0));
            assert!(scene.y_range.min >= -AXIS_BOUND);
            assert!(scene.y_range.max <= AXIS_BOUND);
        }

        #[test]
        fn test_x_range_mirrors_the_window() {
            let function = fixture(FunctionFamily::Linear, vec![2.0, -4.0]);
            let config = SampleConfig {
                x_min: -3.0,
                x_max: 7.0,
                ..SampleConfig::default()
            };
            let scene = project(&function, &config);

            assert_eq!(scene.x_range, AxisRange { min: -3.0, max: 7.0 });
        }

        #[test]
        fn test_tick_step_lands_on_round_values() {
            let range = AxisRange { min: -5.0, max: 5.0 };
            assert_eq!(range.tick_step(5), 2.0);
            assert_eq!(range.tick_step(10), 1.0);

            let wide = AxisRange { min: 0.0, max: 100.0 };
            assert_eq!(wide.tick_step(4), 20.0);
        }
    }

    mod marker_tests {
        use super::*;

        #[test]
        fn test_quadratic_markers() {
            let function = fixture(FunctionFamily::Quadratic, vec![1.0, 0.0, -4.0]);
            let scene = project(&function, &SampleConfig::default());

            let roots = marker(&scene, MarkerCategory::Root).unwrap();
            assert_eq!(roots.points.len(), 2);

            let critical = marker(&scene, MarkerCategory::CriticalPoint).unwrap();
            assert_eq!(critical.points, vec![Point::new(0.0, -4.0)]);

            assert!(marker(&scene, MarkerCategory::Hole).is_none());
        }

        #[test]
        fn test_hole_markers_appear_for_removable_gaps() {
            let function = fixture(FunctionFamily::Rational, vec![1.0, -2.0, 1.0, -2.0]);
            let scene = project(&function, &SampleConfig::default());

            let holes = marker(&scene, MarkerCategory::Hole).unwrap();
            assert_eq!(holes.points[0].x, 2.0);
            assert!(scene.guides.iter().all(|guide| !matches!(
                guide,
                GuideLine::Vertical { .. }
            )));
        }

        #[test]
        fn test_period_ticks_sit_on_the_bottom_edge() {
            // sin(x) over [-5, 5] fits one period tick at -5 + 2π.
            let function = fixture(
                FunctionFamily::Trigonometric,
                vec![1.0, 1.0, 0.0, 0.0],
            );
            let scene = project(&function, &SampleConfig::default());

            let ticks = marker(&scene, MarkerCategory::PeriodTick).unwrap();
            assert_eq!(ticks.points.len(), 1);
            assert_float_eq(ticks.points[0].x, -5.0 + std::f64::consts::TAU, 1e-12);
            assert_eq!(ticks.points[0].y, scene.y_range.min);
        }
    }

    mod circle_tests {
        use super::*;

        #[test]
        fn test_circle_scene_traces_the_locus() {
            let function = fixture(FunctionFamily::Circle, vec![0.0, 0.0, 3.0]);
            let scene = project(&function, &SampleConfig::default());

            assert_eq!(scene.segments.len(), 1);
            assert_eq!(scene.segments[0].len(), CIRCLE_STEPS + 1);

            assert_float_eq(scene.x_range.min, -3.6, 1e-9);
            assert_float_eq(scene.x_range.max, 3.6, 1e-9);
            assert_float_eq(scene.y_range.min, -3.6, 1e-9);
            assert_float_eq(scene.y_range.max, 3.6, 1e-9);

            let crossings = marker(&scene, MarkerCategory::AxisIntersection).unwrap();
            assert_eq!(crossings.points.len(), 4);
        }

        #[test]
        fn test_secant_becomes_guide_and_intersections() {
            use crate::analysis::circle::analyze_with_secant;

            let coefficients = Coefficients::from(vec![0.0, 0.0, 5.0]);
            let function = GeneratedFunction {
                family: FunctionFamily::Circle,
                difficulty: DifficultyTier::Hard,
                coefficients,
                expression: String::from("fixture"),
                characteristics: analyze_with_secant(0.0, 0.0, 5.0, Some((0.0, 3.0))),
            };
            let scene = project(&function, &SampleConfig::default());

            assert!(scene.guides.contains(&GuideLine::Oblique {
                slope: 0.0,
                intercept: 3.0
            }));
            let intersections = marker(&scene, MarkerCategory::Intersection).unwrap();
            assert_eq!(
                intersections.points,
                vec![Point::new(-4.0, 3.0), Point::new(4.0, 3.0)]
            );
        }
    }
}
