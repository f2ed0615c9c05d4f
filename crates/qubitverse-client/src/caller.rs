//! Calculate / Probability / Measure actions.
//!
//! Each action encodes the current editor state, posts it once and returns an
//! [`ActionOutcome`]. The owner of the UI state applies the outcome through
//! [`ActionOutcome::dispatch`]; nothing here touches UI state directly.
//!
//! A failed request is logged and turns into an outcome without a response.
//! It is never returned as an error.

use std::sync::Arc;

use qubitverse_circuit::{EditorState, Mode, encode, extract};
use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::{error, info, instrument};

use crate::config::{ClientConfig, RequestPolicy};
use crate::error::{ClientError, ClientResult};
use crate::transport::{HttpTransport, Transport};

/// Interprets the simulator's reply text.
///
/// Called once per outcome, with `None` when the request failed.
pub trait ResultParser {
    type Output;

    fn parse(&self, raw: Option<&str>) -> Self::Output;
}

/// Passes the reply text through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawText;

impl ResultParser for RawText {
    type Output = Option<String>;

    fn parse(&self, raw: Option<&str>) -> Self::Output {
        raw.map(str::to_owned)
    }
}

/// What one action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Which action ran.
    pub mode: Mode,
    /// The request body that was sent.
    pub payload: String,
    /// Raw reply text; `None` if the request failed.
    pub response: Option<String>,
}

/// UI updates derived from an outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch<T> {
    /// Text for the log view: the raw reply, or `None` on failure.
    pub log: Option<String>,
    /// Parser output, produced even when there was no reply.
    pub result: T,
}

impl ActionOutcome {
    /// Whether the simulator replied.
    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }

    /// Turn the outcome into UI updates.
    pub fn dispatch<P: ResultParser>(self, parser: &P) -> Dispatch<P::Output> {
        let result = parser.parse(self.response.as_deref());
        Dispatch {
            log: self.response,
            result,
        }
    }
}

/// Sends circuits to the simulator on behalf of the UI.
pub struct BackendCaller {
    transport: Arc<dyn Transport>,
    policy: RequestPolicy,
    in_flight: Semaphore,
}

impl std::fmt::Debug for BackendCaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendCaller")
            .field("endpoint", &self.transport.endpoint())
            .field("policy", &self.policy)
            .finish()
    }
}

impl BackendCaller {
    /// Create a caller posting over HTTP.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport), config.policy))
    }

    /// Create a caller on top of any transport.
    pub fn with_transport(transport: Arc<dyn Transport>, policy: RequestPolicy) -> Self {
        Self {
            transport,
            policy,
            in_flight: Semaphore::new(1),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    pub fn policy(&self) -> RequestPolicy {
        self.policy
    }

    /// Whether a guarded request is pending. Always `false` under
    /// [`RequestPolicy::Overlap`].
    pub fn is_busy(&self) -> bool {
        self.in_flight.available_permits() == 0
    }

    /// Run the Calculate action.
    pub async fn calculate(&self, state: &EditorState) -> ClientResult<ActionOutcome> {
        self.send(state, Mode::Calculate).await
    }

    /// Run the Probability action.
    pub async fn probability(&self, state: &EditorState) -> ClientResult<ActionOutcome> {
        self.send(state, Mode::Probability).await
    }

    /// Run the Measure action.
    pub async fn measure(&self, state: &EditorState) -> ClientResult<ActionOutcome> {
        self.send(state, Mode::Measure).await
    }

    /// Encode `state` for `mode` and post it once.
    ///
    /// Only [`ClientError::Busy`] is ever returned, and only under
    /// [`RequestPolicy::RejectWhileBusy`].
    #[instrument(skip(self, state), fields(mode = %mode))]
    pub async fn send(&self, state: &EditorState, mode: Mode) -> ClientResult<ActionOutcome> {
        let _permit = self.acquire()?;

        let payload = encode(&extract(state), mode);
        let response = match self.transport.post_text(payload.clone()).await {
            Ok(text) => {
                info!(bytes = text.len(), "Simulator replied");
                Some(text)
            }
            Err(e) => {
                error!("Request to {} failed: {}", self.transport.endpoint(), e);
                None
            }
        };

        Ok(ActionOutcome {
            mode,
            payload,
            response,
        })
    }

    fn acquire(&self) -> ClientResult<Option<SemaphorePermit<'_>>> {
        match self.policy {
            RequestPolicy::Overlap => Ok(None),
            RequestPolicy::RejectWhileBusy => self
                .in_flight
                .try_acquire()
                .map(Some)
                .map_err(|_| ClientError::Busy),
        }
    }
}
