pub mod analysis;
pub mod eval;
pub mod family;
pub mod generate;
pub mod point;
pub mod sample;
pub mod scene;
pub mod validation_utils;

pub mod types;

mod test_utils;

pub use crate::analysis::{analyze, AnalysisError, Characteristics};
pub use crate::eval::evaluate;
pub use crate::family::{Coefficients, DifficultyTier, FunctionFamily, Request};
pub use crate::generate::{generate, generate_with, GeneratedFunction, GeneratorOptions};
pub use crate::point::Point;
pub use crate::sample::{sample, sample_circle, SampleConfig};
pub use crate::scene::{project, AxisRange, GuideLine, MarkerCategory, MarkerSet, PlotScene};
pub use crate::types::{Validate, ValidationResult};
