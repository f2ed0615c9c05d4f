//! Qubitverse simulator client
//!
//! Sends circuits from the editor to the Qubitverse simulator and hands the
//! reply back as a value.
//!
//! # Actions
//!
//! | Action | Mode flag | Effect |
//! |--------|-----------|--------|
//! | Calculate | `0` | POST encoded circuit |
//! | Probability | `1` | POST encoded circuit |
//! | Measure | `2` | POST encoded circuit |
//! | Add Qubit | - | [`PanelEvent::AddQubit`] |
//! | Delete Qubit | - | [`PanelEvent::DeleteQubit`] |
//!
//! Requests go to `http://localhost:9080/api/endpoint` as `text/plain` unless
//! configured otherwise (`QUBITVERSE_ENDPOINT`). A failed request is logged
//! and reported as an outcome without a response; there are no retries.
//!
//! # Example
//!
//! ```no_run
//! use qubitverse_circuit::EditorState;
//! use qubitverse_client::{BackendCaller, ClientConfig, RawText};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let caller = BackendCaller::new(&ClientConfig::from_env())?;
//! let state = EditorState::from_json(
//!     r#"{"gates": [{"text": "H", "x": 10, "y": 30}], "numQubits": 1}"#,
//! )?;
//!
//! let updates = caller.probability(&state).await?.dispatch(&RawText);
//! if let Some(log) = updates.log {
//!     println!("{log}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod caller;
pub mod config;
pub mod error;
pub mod panel;
pub mod transport;

pub use caller::{ActionOutcome, BackendCaller, Dispatch, RawText, ResultParser};
pub use config::{ClientConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV, RequestPolicy};
pub use error::{ClientError, ClientResult};
pub use panel::{Control, Panel, PanelEvent};
pub use transport::{HttpTransport, Transport};

// Re-export the circuit types callers need alongside the client.
pub use qubitverse_circuit::{EditorState, Mode};
