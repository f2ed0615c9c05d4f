//! Circuit documents and extraction from editor state.

use serde::Serialize;
use tracing::debug;

use crate::editor::{EditorState, SingleQubitGate};
use crate::gate::{ExtensionGate, GateRecord, RotationParams};
use crate::qubit::QubitIndex;

/// Editor label of the V-dagger gate.
pub const ADJOINT_V_LABEL: &str = "V†";

/// Wire name of the V-dagger gate.
pub const ADJOINT_V_TAG: &str = "adjV";

/// A position-sorted list of normalized gate records plus the wire count.
///
/// Records with equal positions keep no particular relative order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitDocument {
    num_qubits: u32,
    gates: Vec<GateRecord>,
}

impl CircuitDocument {
    /// Create an empty document.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// Build a document from unordered records.
    pub fn from_records(num_qubits: u32, records: impl IntoIterator<Item = GateRecord>) -> Self {
        let mut gates: Vec<GateRecord> = records.into_iter().collect();
        gates.sort_by(|a, b| a.position().total_cmp(&b.position()));
        Self { num_qubits, gates }
    }

    /// Insert an extension record at its position.
    pub fn with_extension(mut self, ext: ExtensionGate) -> Self {
        self.insert(ext.into());
        self
    }

    /// Insert a record, keeping the document sorted.
    pub fn insert(&mut self, record: GateRecord) {
        let position = record.position();
        let index = self
            .gates
            .partition_point(|gate| gate.position().total_cmp(&position).is_le());
        self.gates.insert(index, record);
    }

    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Records in position order.
    pub fn gates(&self) -> &[GateRecord] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Normalize editor state into a circuit document.
///
/// No validation is done: qubit indices, positions and parameters are passed
/// through as they come.
pub fn extract(state: &EditorState) -> CircuitDocument {
    let singles = state.gates.iter().map(single_record);

    let cnots = state.cnot_gates.iter().map(|gate| GateRecord::Cnot {
        control: gate.control,
        target: gate.target,
        position: gate.x,
    });

    let czs = state.cz_gates.iter().map(|gate| GateRecord::Cz {
        control: gate.control,
        target: gate.target,
        position: gate.x,
    });

    let swaps = state.swap_gates.iter().map(|gate| GateRecord::Swap {
        qubit_a: gate.qubit1,
        qubit_b: gate.qubit2,
        position: gate.x,
    });

    let measurements = state.measure_nth.iter().map(|marker| GateRecord::MeasureNth {
        qubit: QubitIndex::from_screen_y(marker.y),
        position: marker.x,
    });

    let document = CircuitDocument::from_records(
        state.num_qubits,
        singles
            .chain(cnots)
            .chain(czs)
            .chain(swaps)
            .chain(measurements),
    );

    debug!(
        num_qubits = document.num_qubits(),
        gates = document.len(),
        "Extracted circuit document"
    );
    document
}

fn single_record(gate: &SingleQubitGate) -> GateRecord {
    let gate_type = if gate.text == ADJOINT_V_LABEL {
        ADJOINT_V_TAG.to_string()
    } else {
        gate.text.clone()
    };

    GateRecord::Single {
        gate_type,
        qubit: QubitIndex::from_screen_y(gate.y),
        params: RotationParams {
            theta: gate.params.theta.unwrap_or(0.0),
            phi: gate.params.phi.unwrap_or(0.0),
            lambda: gate.params.lambda.unwrap_or(0.0),
        },
        position: gate.x,
    }
}

impl EditorState {
    /// Shorthand for [`extract`].
    pub fn to_document(&self) -> CircuitDocument {
        extract(self)
    }
}
