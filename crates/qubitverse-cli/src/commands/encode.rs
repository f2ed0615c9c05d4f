//! Encode command implementation.
//!
//! Prints the request body a simulator action would send, without sending it.

use anyhow::Result;

use qubitverse_circuit::{Mode, encode, extract};

use super::common::load_state;

/// Execute the encode command.
pub fn execute(input: &str, mode: Mode, json: bool) -> Result<()> {
    let state = load_state(input)?;
    let document = extract(&state);

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print!("{}", encode(&document, mode));
    }

    Ok(())
}
