//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use qubitverse_circuit::EditorState;
use qubitverse_client::{BackendCaller, ClientConfig, Panel};

/// Connection options shared by every command that builds a panel.
#[derive(Debug, Clone)]
pub struct Connection {
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
}

impl Connection {
    fn config(&self) -> ClientConfig {
        let config = ClientConfig::default().with_endpoint(&self.endpoint);
        match self.timeout_secs {
            Some(secs) => config.with_timeout_secs(secs),
            None => config,
        }
    }
}

/// Load an editor snapshot from a JSON file.
pub fn load_state(path: &str) -> Result<EditorState> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    EditorState::from_json(&source).with_context(|| format!("Failed to decode {path}"))
}

/// Write an editor snapshot back to disk.
pub fn save_state(path: &str, state: &EditorState) -> Result<()> {
    let json = state.to_json()?;
    fs::write(path, json + "\n").with_context(|| format!("Failed to write file: {path}"))
}

/// Build the control panel for a connection.
pub fn build_panel(connection: &Connection) -> Result<Panel> {
    let caller = BackendCaller::new(&connection.config())
        .with_context(|| format!("Cannot use endpoint {}", connection.endpoint))?;
    Ok(Panel::new(caller))
}
