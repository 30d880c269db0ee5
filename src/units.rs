//! Units accepted in geometry strings, along with conversion rules to go from one to another
//! easily.
//!
//! The layout itself always works in points, the conversion rules used are that
//! 1 in = 72 pt = 25.4 mm.

use std::f64;

use printpdf::{Mm, Pt};

/// A unit in which a length can be written.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Unit {
    /// Points, the unit of the layout.
    Point,

    /// Millimeters.
    Millimeter,

    /// Centimeters.
    Centimeter,

    /// Inches.
    Inch,
}

impl Unit {
    /// Returns the unit matching a suffix, if any.
    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        match suffix {
            "pt" => Some(Unit::Point),
            "mm" => Some(Unit::Millimeter),
            "cm" => Some(Unit::Centimeter),
            "in" => Some(Unit::Inch),
            _ => None,
        }
    }

    /// Converts a value expressed in this unit into points.
    pub fn to_pt(self, value: f64) -> Pt {
        match self {
            Unit::Point => Pt(value),
            Unit::Millimeter => Mm(value).into(),
            Unit::Centimeter => Mm(10.0 * value).into(),
            Unit::Inch => Pt(72.0 * value),
        }
    }
}

/// Compares two float numbers to check if they're close enough to be
/// considered equal.
///
/// # Examples
///
/// ```
/// # use boxes::units::nearly_equal;
/// assert_eq!(nearly_equal(3.0, 2.99999), true);
/// assert_eq!(nearly_equal(4.0, 3.999), false);
/// assert_eq!(nearly_equal(0.0, 1e-12), true);
/// ```
pub fn nearly_equal(a: f64, b: f64) -> bool {
    let diff = (a - b).abs();

    if a == b {
        // Handle infinities.
        true
    } else if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
        // Layout arithmetic accumulates errors around zero, so absolute error it is.
        diff < 1e-9
    } else {
        // Use relative error.
        (diff / f64::min(a.abs() + b.abs(), f64::MAX)) < 10e-6
    }
}
