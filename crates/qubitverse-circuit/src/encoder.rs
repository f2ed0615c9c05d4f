//! Line-oriented text encoder for the simulator's request body.
//!
//! Each record becomes one `key:value` line per field followed by a line
//! holding only `@`. Rotation parameters are written in place as separate
//! `theta`, `phi` and `lambda` lines.
//!
//! ```text
//! type:single
//! gateType:X
//! qubit:0
//! theta:0
//! phi:0
//! lambda:0
//! position:10
//! @
//! ```

use tracing::trace;

use crate::document::{CircuitDocument, extract};
use crate::editor::EditorState;
use crate::gate::{FieldValue, GateRecord};
use crate::mode::Mode;

/// Record separator line.
pub const RECORD_SEPARATOR: &str = "@";

/// Encode a document as request text.
///
/// `mode` is part of the request contract but does not alter the text.
pub fn encode(document: &CircuitDocument, mode: Mode) -> String {
    trace!(
        mode = mode.flag(),
        gates = document.len(),
        "Encoding circuit document"
    );
    let mut encoder = Encoder::new();
    encoder.emit_document(document);
    encoder.finish()
}

/// Extract and encode editor state in one step.
pub fn encode_state(state: &EditorState, mode: Mode) -> String {
    encode(&extract(state), mode)
}

struct Encoder {
    output: String,
}

impl Encoder {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_document(&mut self, document: &CircuitDocument) {
        for record in document.gates() {
            self.emit_record(record);
        }
    }

    fn emit_record(&mut self, record: &GateRecord) {
        for (key, value) in record.fields() {
            match value {
                FieldValue::Params(params) => {
                    self.write_field("theta", &format_number(params.theta));
                    self.write_field("phi", &format_number(params.phi));
                    self.write_field("lambda", &format_number(params.lambda));
                }
                FieldValue::Text(text) => self.write_field(key, text),
                FieldValue::Qubit(qubit) => self.write_field(key, &qubit.to_string()),
                FieldValue::Number(number) => self.write_field(key, &format_number(number)),
            }
        }
        self.writeln(RECORD_SEPARATOR);
    }

    fn write_field(&mut self, key: &str, value: &str) {
        self.output.push_str(key);
        self.output.push(':');
        self.writeln(value);
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn finish(self) -> String {
        self.output
    }
}

/// Render a number the way the editor's runtime converts numbers to text.
///
/// Integral values carry no fraction, `-0` is `0`, and magnitudes outside
/// `[1e-6, 1e21)` switch to exponent form with an explicit sign.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value == 0.0 {
        return "0".into();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}
