//! # Plane Points
//!
//! The shared coordinate value used throughout the crate: roots, critical
//! points, sampled curve vertices, and intersection points are all plain
//! `Point`s with no identity beyond their coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// # Examples
///
/// ```rust
/// use curvelab::Point;
///
/// let root = Point::new(2.0, 0.0);
/// assert_eq!(format!("{}", root), "(2, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Returns the midpoint between this point and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Returns the Euclidean distance between this point and `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    /// Converts an `(x, y)` tuple into a point.
    fn from(coordinates: (f64, f64)) -> Self {
        Point {
            x: coordinates.0,
            y: coordinates.1,
        }
    }
}

impl fmt::Display for Point {
    /// Formats the point as an `(x, y)` coordinate pair.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
