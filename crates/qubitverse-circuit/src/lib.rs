//! Qubitverse circuit encoding
//!
//! Turns the circuit editor's gate collections into the flat text format the
//! Qubitverse simulator reads from its HTTP endpoint.
//!
//! # Overview
//!
//! Encoding is two pure steps:
//!
//! 1. [`extract`] normalizes an [`EditorState`] into a [`CircuitDocument`]:
//!    typed [`GateRecord`]s sorted by their horizontal position, with qubit
//!    rows derived from screen coordinates.
//! 2. [`encode`] writes the document as `key:value` lines, one `@` line
//!    after each record.
//!
//! # Example
//!
//! ```rust
//! use qubitverse_circuit::{EditorState, Mode, encode, extract};
//!
//! let state = EditorState::from_json(r#"{
//!     "gates": [{"text": "H", "x": 10, "y": 30, "params": {}}],
//!     "cnotGates": [{"control": 0, "target": 1, "x": 60}],
//!     "numQubits": 2
//! }"#).unwrap();
//!
//! let document = extract(&state);
//! assert_eq!(document.len(), 2);
//!
//! let text = encode(&document, Mode::Calculate);
//! assert!(text.starts_with("type:single\ngateType:H\nqubit:0\n"));
//! assert!(text.ends_with("type:cnot\ncontrol:0\ntarget:1\nposition:60\n@\n"));
//! ```
//!
//! # Gate kinds
//!
//! | Tag | Source | Fields |
//! |-----|--------|--------|
//! | `single` | editor | `gateType`, `qubit`, `theta`, `phi`, `lambda` |
//! | `cnot`, `cz` | editor | `control`, `target` |
//! | `swap` | editor | `qubitA`, `qubitB` |
//! | `measurenth` | editor | `qubit` |
//! | `toffoli` | [`ExtensionGate`] | `control1`, `control2`, `target` |
//! | `fredkin` | [`ExtensionGate`] | `control`, `target1`, `target2` |
//! | `mcnot`, `mcz` | [`ExtensionGate`] | `controls`, `target` |
//! | `qft` | [`ExtensionGate`] | `qubits`, `inverse` |
//!
//! Every record ends with `position`.

pub mod document;
pub mod editor;
pub mod encoder;
pub mod error;
pub mod gate;
pub mod mode;
pub mod qubit;

pub use document::{CircuitDocument, extract};
pub use editor::{
    ControlledGate, EditorState, GateParams, MeasureMarker, SingleQubitGate, SwapGate,
};
pub use encoder::{encode, encode_state, format_number};
pub use error::{CircuitError, CircuitResult};
pub use gate::{ExtensionGate, FieldValue, GateKind, GateRecord, RotationParams};
pub use mode::Mode;
pub use qubit::QubitIndex;
