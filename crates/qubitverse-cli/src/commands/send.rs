//! Calculate / Probability / Measure command implementation.

use anyhow::Result;
use console::style;
use tracing::{debug, warn};

use qubitverse_client::{Control, PanelEvent, RawText};

use super::common::{Connection, build_panel, load_state};

/// Execute a simulator action and print the reply.
pub async fn execute(input: &str, control: Control, connection: &Connection) -> Result<()> {
    let panel = build_panel(connection)?;
    let state = load_state(input)?;

    println!(
        "{} {} {} ({} gates, {} qubits) via {}",
        style("→").cyan().bold(),
        style(control.label()).bold(),
        style(input).green(),
        state.gate_count(),
        state.num_qubits,
        style(panel.caller().endpoint()).yellow()
    );

    let PanelEvent::Response(outcome) = panel.trigger(control, &state).await? else {
        anyhow::bail!("{control} does not talk to the simulator");
    };

    debug!(payload_bytes = outcome.payload.len(), "Sent {}", control);

    let updates = outcome.dispatch(&RawText);
    match updates.log {
        Some(text) => {
            println!("{} Reply:", style("✓").green().bold());
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        None => {
            warn!("{} produced no reply", control);
            anyhow::bail!("No response from {}", panel.caller().endpoint())
        }
    }
}
