//! # Shared Validation Types
//!
//! The validation surface used across the crate: a [`Validate`] trait for
//! values that can check their own internal consistency, and the
//! [`ValidationResult`] returned by it. Validation never panics and never
//! mutates; it reports problems as plain strings for the caller (typically
//! a test or the embedding UI) to surface.

/// The outcome of validating a value.
///
/// Warnings describe suspicious-but-usable states; errors describe states
/// that violate a documented invariant. Errors always carry any warnings
/// gathered along the way.
///
/// # Type Parameters
///
/// * `T` - The value carried by a successful validation (unit by default)
///
/// # Examples
///
/// ```rust
/// use curvelab::types::ValidationResult;
///
/// let result: ValidationResult = ValidationResult::Valid(());
/// assert!(result.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T = ()> {
    /// The value satisfies every checked invariant.
    Valid(T),
    /// The value is usable but has suspicious properties.
    Warnings(T, Vec<String>),
    /// The value violates at least one invariant (warnings, errors).
    Invalid(Vec<String>, Vec<String>),
}

impl<T> ValidationResult<T> {
    /// Returns true if validation passed without warnings or errors.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// Returns true if validation found at least one error.
    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationResult::Invalid(_, _))
    }

    /// Returns the gathered error messages (empty unless invalid).
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationResult::Invalid(_, errors) => errors,
            _ => &[],
        }
    }

    /// Returns the gathered warning messages.
    pub fn warnings(&self) -> &[String] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Warnings(_, warnings) => warnings,
            ValidationResult::Invalid(warnings, _) => warnings,
        }
    }
}

/// Self-validation for values with documented invariants.
pub trait Validate {
    /// Checks the value's internal consistency.
    ///
    /// # Returns
    /// - `Valid(())` if every invariant holds.
    /// - `Warnings((), warnings)` for suspicious-but-usable values.
    /// - `Invalid(warnings, errors)` if an invariant is violated.
    fn validate(&self) -> ValidationResult;
}
