//! Qubit indices and the editor canvas layout they are derived from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Height of a gate box on the editor canvas, in pixels.
pub const GATE_SIZE: f64 = 40.0;

/// Vertical distance between two qubit wires on the editor canvas, in pixels.
pub const QUBIT_SPACING: f64 = 50.0;

/// Zero-based qubit row.
///
/// Signed because the value is derived from screen coordinates and passed
/// through without range checks: a gate dropped above the first wire yields
/// a negative index, and the simulator is the one that rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitIndex(pub i64);

impl QubitIndex {
    /// Derive the qubit row from the vertical screen position of a gate.
    ///
    /// Computes `round((y + GATE_SIZE / 2) / QUBIT_SPACING) - 1` where halves
    /// round towards positive infinity.
    ///
    /// ```rust
    /// use qubitverse_circuit::QubitIndex;
    ///
    /// assert_eq!(QubitIndex::from_screen_y(30.0), QubitIndex(0));
    /// assert_eq!(QubitIndex::from_screen_y(80.0), QubitIndex(1));
    /// ```
    pub fn from_screen_y(y: f64) -> Self {
        let row = round_half_up((y + GATE_SIZE / 2.0) / QUBIT_SPACING) - 1.0;
        // NaN maps to 0 and infinities saturate.
        QubitIndex(row as i64)
    }
}

impl fmt::Display for QubitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for QubitIndex {
    fn from(index: i64) -> Self {
        QubitIndex(index)
    }
}

impl From<u32> for QubitIndex {
    fn from(index: u32) -> Self {
        QubitIndex(i64::from(index))
    }
}

/// Round to the nearest integer, ties towards positive infinity.
///
/// `f64::round` breaks ties away from zero, which differs for negative
/// halves (`-0.5` must become `0`, not `-1`).
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
