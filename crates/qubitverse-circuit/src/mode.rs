//! Request modes understood by the simulator backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CircuitError;

/// What the backend should do with a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Evolve the state vector.
    Calculate,
    /// Report basis-state probabilities.
    Probability,
    /// Sample measurement outcomes.
    Measure,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Calculate, Mode::Probability, Mode::Measure];

    /// Wire flag: `"0"`, `"1"` or `"2"`.
    #[inline]
    pub fn flag(&self) -> &'static str {
        match self {
            Mode::Calculate => "0",
            Mode::Probability => "1",
            Mode::Measure => "2",
        }
    }

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Calculate => "calculate",
            Mode::Probability => "probability",
            Mode::Measure => "measure",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.flag() == wanted || mode.name() == wanted)
            .ok_or_else(|| CircuitError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert_eq!(Mode::Calculate.flag(), "0");
        assert_eq!(Mode::Probability.flag(), "1");
        assert_eq!(Mode::Measure.flag(), "2");
    }

    #[test]
    fn test_parse_by_name_or_flag() {
        assert_eq!("Probability".parse::<Mode>().unwrap(), Mode::Probability);
        assert_eq!("2".parse::<Mode>().unwrap(), Mode::Measure);
        assert_eq!(" calculate ".parse::<Mode>().unwrap(), Mode::Calculate);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "3".parse::<Mode>().unwrap_err();
        assert!(err.to_string().contains("Unknown mode '3'"));
    }
}
