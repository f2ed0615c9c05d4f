//! Add Qubit / Delete Qubit command implementation.
//!
//! The panel only reports the request; this command owns the editor state
//! file and applies it. No backend is involved.

use anyhow::Result;
use console::style;
use tracing::debug;

use qubitverse_client::{Control, PanelEvent};

use super::common::{load_state, save_state};

/// Execute a wire-count change on a saved editor state.
pub fn execute(input: &str, control: Control) -> Result<()> {
    let mut state = load_state(input)?;
    let before = state.num_qubits;

    match control.qubit_event() {
        Some(PanelEvent::AddQubit) => state.add_qubit(),
        Some(PanelEvent::DeleteQubit) => state.remove_qubit(),
        _ => anyhow::bail!("{control} does not change the wire count"),
    }
    debug!(before, after = state.num_qubits, "Applied {}", control);

    save_state(input, &state)?;
    println!(
        "{} {}: {} -> {} qubits",
        style("✓").green().bold(),
        control.label(),
        before,
        state.num_qubits
    );

    Ok(())
}
