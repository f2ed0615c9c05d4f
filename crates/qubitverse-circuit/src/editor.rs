//! Circuit-editor state as the visualizer holds it.
//!
//! These types mirror the editor's JSON shape so a saved editor snapshot can
//! be decoded directly. Every collection is optional; unknown fields are
//! ignored.

use serde::{Deserialize, Serialize};

use crate::error::CircuitResult;
use crate::qubit::QubitIndex;

/// A single-qubit gate as placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleQubitGate {
    /// Gate label shown in the box (`X`, `H`, `V†`, `Rx`, ...).
    pub text: String,
    /// Horizontal screen position.
    pub x: f64,
    /// Vertical screen position.
    pub y: f64,
    #[serde(default)]
    pub params: GateParams,
}

/// Optional rotation parameters of a single-qubit gate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GateParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda: Option<f64>,
}

/// A control/target pair (CNOT and CZ share this shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlledGate {
    pub control: QubitIndex,
    pub target: QubitIndex,
    pub x: f64,
}

/// A SWAP between two wires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapGate {
    pub qubit1: QubitIndex,
    pub qubit2: QubitIndex,
    pub x: f64,
}

/// A measurement marker on one wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureMarker {
    pub x: f64,
    pub y: f64,
}

/// Everything the encoder reads from the editor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorState {
    pub gates: Vec<SingleQubitGate>,
    pub cnot_gates: Vec<ControlledGate>,
    pub cz_gates: Vec<ControlledGate>,
    pub swap_gates: Vec<SwapGate>,
    #[serde(rename = "measureNthQ")]
    pub measure_nth: Vec<MeasureMarker>,
    pub num_qubits: u32,
}

impl EditorState {
    /// Create an empty editor state with the given number of wires.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            ..Self::default()
        }
    }

    /// Decode an editor snapshot.
    pub fn from_json(source: &str) -> CircuitResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Encode this state as a pretty-printed editor snapshot.
    pub fn to_json(&self) -> CircuitResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of gates across all collections.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
            + self.cnot_gates.len()
            + self.cz_gates.len()
            + self.swap_gates.len()
            + self.measure_nth.len()
    }

    /// Append a wire.
    pub fn add_qubit(&mut self) {
        self.num_qubits = self.num_qubits.saturating_add(1);
    }

    /// Drop the last wire; stays at zero.
    pub fn remove_qubit(&mut self) {
        self.num_qubits = self.num_qubits.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_key_decodes_absent() {
        let state = EditorState::from_json(r#"{"gates": [{"text": "X", "x": 10, "y": 30}]}"#)
            .unwrap();
        assert_eq!(state.gates[0].params, GateParams::default());
        assert_eq!(state.num_qubits, 0);
    }

    #[test]
    fn test_decode_editor_snapshot() {
        let json = r#"{
            "gates": [{"id": 7, "text": "V†", "x": 10, "y": 30, "params": {"theta": 0.5}}],
            "cnotGates": [{"control": 0, "target": 1, "x": 5}],
            "swapGates": [{"qubit1": 1, "qubit2": 2, "x": 80}],
            "measureNthQ": [{"x": 100, "y": 80}],
            "numQubits": 3
        }"#;

        let state = EditorState::from_json(json).unwrap();
        assert_eq!(state.num_qubits, 3);
        assert_eq!(state.gates[0].text, "V†");
        assert_eq!(state.gates[0].params.theta, Some(0.5));
        assert_eq!(state.gates[0].params.phi, None);
        assert_eq!(state.cnot_gates[0].target, QubitIndex(1));
        assert!(state.cz_gates.is_empty());
        assert_eq!(state.swap_gates[0].qubit2, QubitIndex(2));
        assert_eq!(state.measure_nth[0].y, 80.0);
        assert_eq!(state.gate_count(), 4);
    }

    #[test]
    fn test_missing_collections_default_empty() {
        let state = EditorState::from_json("{}").unwrap();
        assert_eq!(state, EditorState::default());
    }

    #[test]
    fn test_null_params_are_absent() {
        let json = r#"{"gates": [{"text": "X", "x": 0, "y": 0, "params": {"phi": null}}]}"#;
        let state = EditorState::from_json(json).unwrap();
        assert_eq!(state.gates[0].params, GateParams::default());
    }

    #[test]
    fn test_malformed_gate_is_rejected() {
        let json = r#"{"cnotGates": [{"control": 0, "x": 5}]}"#;
        assert!(EditorState::from_json(json).is_err());
    }

    #[test]
    fn test_qubit_count_edits() {
        let mut state = EditorState::new(1);
        state.add_qubit();
        assert_eq!(state.num_qubits, 2);
        state.remove_qubit();
        state.remove_qubit();
        state.remove_qubit();
        assert_eq!(state.num_qubits, 0);
    }

    #[test]
    fn test_snapshot_survives_rewrite() {
        let mut state = EditorState::new(2);
        state.cz_gates.push(ControlledGate {
            control: QubitIndex(1),
            target: QubitIndex(0),
            x: 12.5,
        });
        let rewritten = EditorState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(rewritten, state);
    }
}
