use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StructuralError;
use crate::vision::hsv::Hsv;

/// The six sticker colors of a standard cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Blue,
    Yellow,
    Orange,
    Green,
}

impl Color {
    /// Canonical evaluation order. Classification ties resolve to the
    /// earliest entry, so this order is part of the classifier contract.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Green,
    ];

    /// One-character facelet symbol understood by the solver: the letter of
    /// the face whose center sticker carries this color.
    pub fn solver_symbol(self) -> char {
        match self {
            Color::White => 'U',
            Color::Red => 'R',
            Color::Blue => 'F',
            Color::Yellow => 'D',
            Color::Orange => 'L',
            Color::Green => 'B',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Green => "green",
        }
    }

    /// Classification bounds in HSV. Thresholds are fixed; lighting
    /// calibration is out of scope.
    pub fn range(self) -> ColorRange {
        match self {
            Color::White => ColorRange::new([0, 0, 200], [179, 50, 255]),
            Color::Red => ColorRange::new([0, 100, 100], [5, 255, 255]),
            Color::Blue => ColorRange::new([90, 100, 100], [130, 255, 255]),
            Color::Yellow => ColorRange::new([20, 100, 100], [30, 255, 255]),
            Color::Orange => ColorRange::new([6, 100, 100], [10, 255, 255]),
            Color::Green => ColorRange::new([35, 100, 100], [85, 255, 255]),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Red => 1,
            Color::Blue => 2,
            Color::Yellow => 3,
            Color::Orange => 4,
            Color::Green => 5,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = StructuralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "red" | "r" => Ok(Color::Red),
            "blue" | "b" => Ok(Color::Blue),
            "yellow" | "y" => Ok(Color::Yellow),
            "orange" | "o" => Ok(Color::Orange),
            "green" | "g" => Ok(Color::Green),
            other => Err(StructuralError::InvalidColor(other.to_string())),
        }
    }
}

/// Inclusive lower/upper bounds in HSV. Ranges may overlap; the classifier's
/// evaluation order breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, px: Hsv) -> bool {
        px.h >= self.lower[0]
            && px.h <= self.upper[0]
            && px.s >= self.lower[1]
            && px.s <= self.upper[1]
            && px.v >= self.lower[2]
            && px.v <= self.upper[2]
    }
}
