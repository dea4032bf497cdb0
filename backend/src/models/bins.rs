//! Bin definitions for the wave rose.
//!
//! Height bins are fixed-step intervals that are closed on the left and open
//! on the right, except the last one which is closed on both ends. Direction
//! bins are the 16 compass points, each a 22.5° sector centred on its point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of one compass sector in degrees.
pub const SECTOR_WIDTH_DEG: f64 = 22.5;

/// Fixed-step height bin edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightBins {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for HeightBins {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
            step: 0.5,
        }
    }
}

/// One height interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightBin {
    pub index: usize,
    pub lower: f64,
    pub upper: f64,
}

impl HeightBin {
    /// Interval bounds as text, e.g. `"1.5-2.0"` or `"0.25-0.5"`.
    pub fn label(&self) -> String {
        format!("{}-{}", format_edge(self.lower), format_edge(self.upper))
    }
}

/// Shortest decimal form of an edge, with at least one fractional digit.
///
/// Edges are rounded to micrometres first so float drift from the step
/// arithmetic (`0.30000000000000004`) does not leak into labels.
fn format_edge(value: f64) -> String {
    let mut text = format!("{:.6}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.push('0');
    }
    if text == "-0.0" {
        text.remove(0);
    }
    text
}

impl HeightBins {
    /// Check that the edges describe at least one bin.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err("height bin edges must be finite".to_string());
        }
        if self.step <= 0.0 {
            return Err(format!("height bin step must be positive, got {}", self.step));
        }
        if self.max <= self.min {
            return Err(format!(
                "height bin max ({}) must be greater than min ({})",
                self.max, self.min
            ));
        }
        Ok(())
    }

    /// Number of bins between `min` and `max`.
    pub fn count(&self) -> usize {
        ((self.max - self.min) / self.step).round().max(1.0) as usize
    }

    fn edge(&self, i: usize) -> f64 {
        if i >= self.count() {
            self.max
        } else {
            self.min + i as f64 * self.step
        }
    }

    /// The bin at position `index`, if it exists.
    pub fn bin(&self, index: usize) -> Option<HeightBin> {
        (index < self.count()).then(|| HeightBin {
            index,
            lower: self.edge(index),
            upper: self.edge(index + 1),
        })
    }

    /// All bins in ascending order.
    pub fn bins(&self) -> Vec<HeightBin> {
        (0..self.count()).filter_map(|i| self.bin(i)).collect()
    }

    /// Locate the bin holding `height`.
    ///
    /// Returns `None` for values outside `[min, max]` and for NaN.
    pub fn locate(&self, height: f64) -> Option<HeightBin> {
        if !height.is_finite() || height < self.min || height > self.max {
            return None;
        }
        let count = self.count();
        if height == self.max {
            return self.bin(count - 1);
        }

        let mut index = (((height - self.min) / self.step).floor() as usize).min(count - 1);
        // Float division can land one bin off near an edge.
        if index > 0 && height < self.edge(index) {
            index -= 1;
        } else if index + 1 < count && height >= self.edge(index + 1) {
            index += 1;
        }
        self.bin(index)
    }
}

/// The 16 compass points, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Compass {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl Compass {
    pub const ALL: [Compass; 16] = [
        Compass::N,
        Compass::NNE,
        Compass::NE,
        Compass::ENE,
        Compass::E,
        Compass::ESE,
        Compass::SE,
        Compass::SSE,
        Compass::S,
        Compass::SSW,
        Compass::SW,
        Compass::WSW,
        Compass::W,
        Compass::WNW,
        Compass::NW,
        Compass::NNW,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Compass::N => "N",
            Compass::NNE => "NNE",
            Compass::NE => "NE",
            Compass::ENE => "ENE",
            Compass::E => "E",
            Compass::ESE => "ESE",
            Compass::SE => "SE",
            Compass::SSE => "SSE",
            Compass::S => "S",
            Compass::SSW => "SSW",
            Compass::SW => "SW",
            Compass::WSW => "WSW",
            Compass::W => "W",
            Compass::WNW => "WNW",
            Compass::NW => "NW",
            Compass::NNW => "NNW",
        }
    }

    /// Centre bearing of the sector in degrees.
    pub fn bearing(self) -> f64 {
        self as usize as f64 * SECTOR_WIDTH_DEG
    }

    /// Sector holding `degrees`, after reduction modulo 360.
    ///
    /// Sector `k` covers `[k * 22.5 - 11.25, k * 22.5 + 11.25)`. North is
    /// the union of the two half-sectors `[348.75, 360)` and `[0, 11.25)`.
    pub fn from_degrees(degrees: f64) -> Option<Compass> {
        if !degrees.is_finite() {
            return None;
        }
        let reduced = degrees.rem_euclid(360.0);
        let shifted = reduced + SECTOR_WIDTH_DEG / 2.0;
        // shifted / 22.5 reaches 16 only inside the upper north half-sector.
        let sector = (shifted / SECTOR_WIDTH_DEG).floor() as usize % Self::ALL.len();
        Some(Self::ALL[sector])
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
