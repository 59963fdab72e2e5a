//! # Function Families and Difficulty Tiers
//!
//! The closed enumerations that drive the rest of the crate: which algebraic
//! rules apply ([`FunctionFamily`]) and how wide the coefficient draws range
//! ([`DifficultyTier`]), plus the [`Coefficients`] vector they interpret and
//! the [`Request`] object the embedding UI sends.
//!
//! ## Coefficient Layouts
//!
//! | family | layout | meaning |
//! |---|---|---|
//! | linear | `[m, b]` | `m·x + b` |
//! | quadratic | `[a, b, c]` | `a·x² + b·x + c` |
//! | polynomial | `[a, b, c, d]` | `a·x³ + b·x² + c·x + d` |
//! | rational | `[n1, n0, d1, d0]` | `(n1·x + n0)/(d1·x + d0)` |
//! | rational | `[n2, n1, n0, d1, d0]` | `(n2·x² + n1·x + n0)/(d1·x + d0)` |
//! | trigonometric | `[a, b, c, d]` | `a·sin(b·x + c) + d` |
//! | circle | `[h, k, r]` | `(x−h)² + (y−k)² = r²` |

use std::{
    fmt,
    ops::{Deref, Index},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The functional form governing how a coefficient vector is interpreted.
///
/// A closed enumeration: every analyzer, evaluator, and generator rule is
/// selected by pattern match on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionFamily {
    /// `m·x + b`
    Linear,
    /// `a·x² + b·x + c`
    Quadratic,
    /// Cubic `a·x³ + b·x² + c·x + d`
    Polynomial,
    /// Linear-over-linear or quadratic-over-linear quotient
    Rational,
    /// `a·sin(b·x + c) + d`
    Trigonometric,
    /// `(x−h)² + (y−k)² = r²`, a locus rather than a function of x
    Circle,
}

impl FunctionFamily {
    /// Every recognized family, in presentation order.
    pub const ALL: [FunctionFamily; 6] = [
        FunctionFamily::Linear,
        FunctionFamily::Quadratic,
        FunctionFamily::Polynomial,
        FunctionFamily::Rational,
        FunctionFamily::Trigonometric,
        FunctionFamily::Circle,
    ];

    /// Returns true if the family graphs as a function of x.
    ///
    /// The circle family is a locus and is sampled parametrically instead.
    pub fn is_function(&self) -> bool {
        !matches!(self, FunctionFamily::Circle)
    }

    /// Returns true if `count` coefficients form a valid vector for this family.
    pub fn arity_matches(&self, count: usize) -> bool {
        match self {
            FunctionFamily::Linear => count == 2,
            FunctionFamily::Quadratic => count == 3,
            FunctionFamily::Polynomial => count == 4,
            FunctionFamily::Rational => count == 4 || count == 5,
            FunctionFamily::Trigonometric => count == 4,
            FunctionFamily::Circle => count == 3,
        }
    }

    /// Describes the coefficient count this family expects, for error messages.
    pub fn expected_arity(&self) -> &'static str {
        match self {
            FunctionFamily::Linear => "2",
            FunctionFamily::Quadratic => "3",
            FunctionFamily::Polynomial => "4",
            FunctionFamily::Rational => "4 or 5",
            FunctionFamily::Trigonometric => "4",
            FunctionFamily::Circle => "3",
        }
    }
}

impl fmt::Display for FunctionFamily {
    /// Formats the family using its lowercase configuration name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionFamily::Linear => write!(f, "linear"),
            FunctionFamily::Quadratic => write!(f, "quadratic"),
            FunctionFamily::Polynomial => write!(f, "polynomial"),
            FunctionFamily::Rational => write!(f, "rational"),
            FunctionFamily::Trigonometric => write!(f, "trigonometric"),
            FunctionFamily::Circle => write!(f, "circle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionFamilyParseError {
    /// Error when a request names a family the engine does not implement.
    #[error("Unsupported function family: {0}")]
    UnsupportedFamily(String),
}

impl FromStr for FunctionFamily {
    type Err = FunctionFamilyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(FunctionFamily::Linear),
            "quadratic" => Ok(FunctionFamily::Quadratic),
            "polynomial" => Ok(FunctionFamily::Polynomial),
            "rational" => Ok(FunctionFamily::Rational),
            "trigonometric" => Ok(FunctionFamily::Trigonometric),
            "circle" => Ok(FunctionFamily::Circle),
            _ => Err(FunctionFamilyParseError::UnsupportedFamily(s.to_string())),
        }
    }
}

/// How wide and how fine the generator's coefficient draws are.
///
/// Tier progression strictly widens value ranges; linear, quadratic, and
/// circle draws also move from integers to halves and quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    /// Every recognized tier, easiest first.
    pub const ALL: [DifficultyTier; 3] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
    ];
}

impl Default for DifficultyTier {
    /// Returns the default tier (Medium).
    fn default() -> Self {
        DifficultyTier::Medium
    }
}

impl fmt::Display for DifficultyTier {
    /// Formats the tier using its lowercase configuration name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyTier::Easy => write!(f, "easy"),
            DifficultyTier::Medium => write!(f, "medium"),
            DifficultyTier::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyTierParseError {
    /// Error when a request names an unrecognized difficulty tier.
    #[error("Unknown difficulty tier: {0}")]
    UnknownTier(String),
}

impl FromStr for DifficultyTier {
    type Err = DifficultyTierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(DifficultyTier::Easy),
            "medium" => Ok(DifficultyTier::Medium),
            "hard" => Ok(DifficultyTier::Hard),
            _ => Err(DifficultyTierParseError::UnknownTier(s.to_string())),
        }
    }
}

/// An ordered coefficient vector, immutable once generated.
///
/// Length and meaning are fixed per family (see the module table). The
/// wrapper dereferences to a slice for read access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub values: Vec<f64>,
}

impl Coefficients {
    /// Creates a coefficient vector from its values.
    pub fn new(values: Vec<f64>) -> Self {
        Coefficients { values }
    }
}

impl Deref for Coefficients {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl Index<usize> for Coefficients {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl From<Vec<f64>> for Coefficients {
    /// Wraps a vector of values as coefficients.
    fn from(values: Vec<f64>) -> Self {
        Coefficients { values }
    }
}

impl fmt::Display for Coefficients {
    /// Formats the coefficients as a bracketed, comma-separated list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// A generation request from the embedding UI.
///
/// # Examples
///
/// ```rust
/// use curvelab::{DifficultyTier, FunctionFamily, Request};
///
/// let request = Request::parse("quadratic", "easy").unwrap();
/// assert_eq!(request.family, FunctionFamily::Quadratic);
/// assert_eq!(request.difficulty, DifficultyTier::Easy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub family: FunctionFamily,
    pub difficulty: DifficultyTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestParseError {
    #[error("{0}")]
    Family(#[from] FunctionFamilyParseError),
    #[error("{0}")]
    Difficulty(#[from] DifficultyTierParseError),
}

impl Request {
    /// Creates a request from already-typed options.
    pub fn new(family: FunctionFamily, difficulty: DifficultyTier) -> Self {
        Request { family, difficulty }
    }

    /// Parses a request from the UI's lowercase option strings.
    ///
    /// # Arguments
    /// - `family`: One of `linear`, `quadratic`, `polynomial`, `rational`,
    ///   `trigonometric`, `circle`.
    /// - `difficulty`: One of `easy`, `medium`, `hard`.
    ///
    /// # Returns
    /// The typed request, or a descriptive error naming the unrecognized
    /// option. Unsupported names are a caller bug and fail fast here.
    pub fn parse(family: &str, difficulty: &str) -> Result<Self, RequestParseError> {
        Ok(Request {
            family: family.parse()?,
            difficulty: difficulty.parse()?,
        })
    }
}
