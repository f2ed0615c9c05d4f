//! Normalized gate records.
//!
//! A [`GateRecord`] is the unit the encoder emits: a tagged record whose
//! fields come in a fixed order. The same order drives both the text wire
//! format and the JSON rendering of a record.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitIndex;

/// Every gate tag the simulator's parser knows about.
///
/// Only a subset is produced from editor state; see
/// [`GateKind::is_editor_populated`]. The rest can still be sent through
/// [`ExtensionGate`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    /// Single-qubit gate with rotation parameters.
    Single,
    /// Controlled-X.
    Cnot,
    /// Controlled-Z.
    Cz,
    /// SWAP.
    Swap,
    /// Measurement of one qubit.
    #[serde(rename = "measurenth")]
    MeasureNth,
    /// Toffoli (CCX).
    Toffoli,
    /// Fredkin (CSWAP).
    Fredkin,
    /// Multi-controlled X.
    Mcnot,
    /// Multi-controlled Z.
    Mcz,
    /// Quantum Fourier transform over a qubit list.
    Qft,
}

impl GateKind {
    /// All known kinds, in wire-tag order.
    pub const ALL: [GateKind; 10] = [
        GateKind::Single,
        GateKind::Cnot,
        GateKind::Cz,
        GateKind::Swap,
        GateKind::MeasureNth,
        GateKind::Toffoli,
        GateKind::Fredkin,
        GateKind::Mcnot,
        GateKind::Mcz,
        GateKind::Qft,
    ];

    /// The `type:` tag written on the wire.
    #[inline]
    pub fn tag(&self) -> &'static str {
        match self {
            GateKind::Single => "single",
            GateKind::Cnot => "cnot",
            GateKind::Cz => "cz",
            GateKind::Swap => "swap",
            GateKind::MeasureNth => "measurenth",
            GateKind::Toffoli => "toffoli",
            GateKind::Fredkin => "fredkin",
            GateKind::Mcnot => "mcnot",
            GateKind::Mcz => "mcz",
            GateKind::Qft => "qft",
        }
    }

    /// Look up a kind by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        GateKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Whether the circuit editor produces gates of this kind.
    pub fn is_editor_populated(&self) -> bool {
        matches!(
            self,
            GateKind::Single
                | GateKind::Cnot
                | GateKind::Cz
                | GateKind::Swap
                | GateKind::MeasureNth
        )
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Rotation parameters of a single-qubit gate, defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RotationParams {
    pub theta: f64,
    pub phi: f64,
    pub lambda: f64,
}

/// A gate kind the editor does not populate, carried as an open record.
///
/// Fields keep their insertion order on the wire. The tag is free-form so
/// kinds unknown to [`GateKind`] can be sent without changing this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionGate {
    /// Wire tag written as `type:<tag>`.
    pub tag: String,
    /// Ordered `(key, value)` pairs, emitted between the tag and the position.
    pub fields: Vec<(String, String)>,
    /// Horizontal position used for ordering.
    pub position: f64,
}

impl ExtensionGate {
    /// Create an extension record with no fields.
    pub fn new(tag: impl Into<String>, position: f64) -> Self {
        Self {
            tag: tag.into(),
            fields: Vec::new(),
            position,
        }
    }

    /// Append a field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Toffoli gate with two controls.
    pub fn toffoli(
        control1: QubitIndex,
        control2: QubitIndex,
        target: QubitIndex,
        position: f64,
    ) -> Self {
        Self::new(GateKind::Toffoli.tag(), position)
            .with_field("control1", control1)
            .with_field("control2", control2)
            .with_field("target", target)
    }

    /// Fredkin gate swapping two targets under one control.
    pub fn fredkin(
        control: QubitIndex,
        target1: QubitIndex,
        target2: QubitIndex,
        position: f64,
    ) -> Self {
        Self::new(GateKind::Fredkin.tag(), position)
            .with_field("control", control)
            .with_field("target1", target1)
            .with_field("target2", target2)
    }

    /// Multi-controlled X.
    pub fn mcnot(controls: &[QubitIndex], target: QubitIndex, position: f64) -> Self {
        Self::new(GateKind::Mcnot.tag(), position)
            .with_field("controls", join_indices(controls))
            .with_field("target", target)
    }

    /// Multi-controlled Z.
    pub fn mcz(controls: &[QubitIndex], target: QubitIndex, position: f64) -> Self {
        Self::new(GateKind::Mcz.tag(), position)
            .with_field("controls", join_indices(controls))
            .with_field("target", target)
    }

    /// QFT (or its inverse) over the given qubits.
    pub fn qft(qubits: &[QubitIndex], inverse: bool, position: f64) -> Self {
        Self::new(GateKind::Qft.tag(), position)
            .with_field("qubits", join_indices(qubits))
            .with_field("inverse", inverse)
    }

    /// The known kind for this tag, if any.
    pub fn kind(&self) -> Option<GateKind> {
        GateKind::from_tag(&self.tag)
    }
}

fn join_indices(indices: &[QubitIndex]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// A normalized gate record.
#[derive(Debug, Clone, PartialEq)]
pub enum GateRecord {
    Single {
        gate_type: String,
        qubit: QubitIndex,
        params: RotationParams,
        position: f64,
    },
    Cnot {
        control: QubitIndex,
        target: QubitIndex,
        position: f64,
    },
    Cz {
        control: QubitIndex,
        target: QubitIndex,
        position: f64,
    },
    Swap {
        qubit_a: QubitIndex,
        qubit_b: QubitIndex,
        position: f64,
    },
    MeasureNth {
        qubit: QubitIndex,
        position: f64,
    },
    Extension(ExtensionGate),
}

/// Value of one record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Qubit(QubitIndex),
    Number(f64),
    /// Nested parameters; expanded in place by the text encoder.
    Params(&'a RotationParams),
}

impl GateRecord {
    /// Horizontal position used for ordering.
    #[inline]
    pub fn position(&self) -> f64 {
        match self {
            GateRecord::Single { position, .. }
            | GateRecord::Cnot { position, .. }
            | GateRecord::Cz { position, .. }
            | GateRecord::Swap { position, .. }
            | GateRecord::MeasureNth { position, .. } => *position,
            GateRecord::Extension(ext) => ext.position,
        }
    }

    /// The wire tag of this record.
    pub fn tag(&self) -> &str {
        match self {
            GateRecord::Single { .. } => GateKind::Single.tag(),
            GateRecord::Cnot { .. } => GateKind::Cnot.tag(),
            GateRecord::Cz { .. } => GateKind::Cz.tag(),
            GateRecord::Swap { .. } => GateKind::Swap.tag(),
            GateRecord::MeasureNth { .. } => GateKind::MeasureNth.tag(),
            GateRecord::Extension(ext) => &ext.tag,
        }
    }

    /// The known kind of this record, `None` for unrecognized extension tags.
    pub fn kind(&self) -> Option<GateKind> {
        GateKind::from_tag(self.tag())
    }

    /// Fields in emission order, starting with `type`.
    pub fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        let mut fields = vec![("type", FieldValue::Text(self.tag()))];
        match self {
            GateRecord::Single {
                gate_type,
                qubit,
                params,
                ..
            } => {
                fields.push(("gateType", FieldValue::Text(gate_type)));
                fields.push(("qubit", FieldValue::Qubit(*qubit)));
                fields.push(("params", FieldValue::Params(params)));
            }
            GateRecord::Cnot {
                control, target, ..
            }
            | GateRecord::Cz {
                control, target, ..
            } => {
                fields.push(("control", FieldValue::Qubit(*control)));
                fields.push(("target", FieldValue::Qubit(*target)));
            }
            GateRecord::Swap {
                qubit_a, qubit_b, ..
            } => {
                fields.push(("qubitA", FieldValue::Qubit(*qubit_a)));
                fields.push(("qubitB", FieldValue::Qubit(*qubit_b)));
            }
            GateRecord::MeasureNth { qubit, .. } => {
                fields.push(("qubit", FieldValue::Qubit(*qubit)));
            }
            GateRecord::Extension(ext) => {
                for (key, value) in &ext.fields {
                    fields.push((key.as_str(), FieldValue::Text(value)));
                }
            }
        }
        fields.push(("position", FieldValue::Number(self.position())));
        fields
    }
}

impl From<ExtensionGate> for GateRecord {
    fn from(ext: ExtensionGate) -> Self {
        GateRecord::Extension(ext)
    }
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::Qubit(qubit) => serializer.serialize_i64(qubit.0),
            FieldValue::Number(number) => serializer.serialize_f64(*number),
            FieldValue::Params(params) => params.serialize(serializer),
        }
    }
}

impl Serialize for GateRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
