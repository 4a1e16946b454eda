//! Grading functions
//!
//! Pure, deterministic mappings from numeric measurements to presentation
//! attributes: cyclomatic complexity to an ordinal letter grade, and letter
//! grades (for either metric) to a highlight colour.

use crate::core::error::{HeliumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal letter grade, best (`A`) to worst (`F`).
///
/// Maintainability grades arrive pre-computed from the metrics service and
/// only ever span `A`-`C`; complexity grades span the full range and are
/// derived locally by [`grade_complexity`]. The derived `Ord` follows quality
/// order: `A < B < ... < F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Best.
    A,
    /// Good.
    B,
    /// Fair.
    C,
    /// Poor.
    D,
    /// Bad.
    E,
    /// Worst.
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        };
        write!(f, "{letter}")
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            "D" | "d" => Ok(Self::D),
            "E" | "e" => Ok(Self::E),
            "F" | "f" => Ok(Self::F),
            _ => Err(format!("Unknown grade: '{s}'")),
        }
    }
}

/// Grade a cyclomatic complexity score on a scale from A-F.
///
/// Thresholds are left-inclusive/right-exclusive in ascending order of
/// severity: `<6` is an `A`, `<11` a `B`, `<21` a `C`, `<31` a `D`,
/// `<41` an `E`, everything else an `F`.
#[must_use]
pub const fn grade_complexity(complexity: u32) -> Grade {
    // Upper bounds, best grade first.
    const BOUNDS: [(u32, Grade); 5] = [
        (6, Grade::A),
        (11, Grade::B),
        (21, Grade::C),
        (31, Grade::D),
        (41, Grade::E),
    ];
    let mut i = 0;
    while i < BOUNDS.len() {
        if complexity < BOUNDS[i].0 {
            return BOUNDS[i].1;
        }
        i += 1;
    }
    Grade::F // Out of bounds, lowest grade.
}

/// Highlight colour for a maintainability index grade.
///
/// The metrics service only ever emits `A`-`C` for maintainability; any
/// other grade is a data-contract violation.
///
/// # Errors
/// Returns [`HeliumError::UnknownGrade`] for grades outside `A`-`C`.
pub fn maintainability_color(grade: Grade) -> Result<&'static str> {
    match grade {
        Grade::A => Ok("#217821"),
        Grade::B => Ok("#D45500"),
        Grade::C => Ok("#800000"),
        _ => Err(HeliumError::UnknownGrade(grade)),
    }
}

/// Highlight colour for a cyclomatic complexity grade. Total over `A`-`F`.
#[must_use]
pub const fn complexity_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "#217821",
        Grade::B => "#D4AA00",
        Grade::C => "#D45500",
        Grade::D => "#C87137",
        Grade::E => "#A02C2C",
        Grade::F => "#800000",
    }
}
