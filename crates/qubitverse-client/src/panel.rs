//! The five-button control panel.

use std::fmt;

use qubitverse_circuit::{EditorState, Mode};

use crate::caller::{ActionOutcome, BackendCaller};
use crate::error::ClientResult;

/// A trigger on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Calculate,
    Probability,
    Measure,
    AddQubit,
    DeleteQubit,
}

impl Control {
    /// Panel order, top to bottom.
    pub const ALL: [Control; 5] = [
        Control::Calculate,
        Control::Probability,
        Control::Measure,
        Control::AddQubit,
        Control::DeleteQubit,
    ];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Control::Calculate => "Calculate",
            Control::Probability => "Probability",
            Control::Measure => "Measure",
            Control::AddQubit => "Add Qubit",
            Control::DeleteQubit => "Delete Qubit",
        }
    }

    /// The request mode, for controls that talk to the simulator.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Control::Calculate => Some(Mode::Calculate),
            Control::Probability => Some(Mode::Probability),
            Control::Measure => Some(Mode::Measure),
            Control::AddQubit | Control::DeleteQubit => None,
        }
    }

    /// The event for a wire-count control. Needs no backend.
    pub fn qubit_event(&self) -> Option<PanelEvent> {
        match self {
            Control::AddQubit => Some(PanelEvent::AddQubit),
            Control::DeleteQubit => Some(PanelEvent::DeleteQubit),
            Control::Calculate | Control::Probability | Control::Measure => None,
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the owner of the editor state should do after a trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// A simulator request finished (or failed; see [`ActionOutcome::response`]).
    Response(ActionOutcome),
    /// The user asked for one more wire.
    AddQubit,
    /// The user asked to drop a wire.
    DeleteQubit,
}

/// Routes panel triggers. Holds no state of its own.
#[derive(Debug)]
pub struct Panel {
    caller: BackendCaller,
}

impl Panel {
    pub fn new(caller: BackendCaller) -> Self {
        Self { caller }
    }

    pub fn caller(&self) -> &BackendCaller {
        &self.caller
    }

    /// Handle one trigger against the current editor state.
    pub async fn trigger(&self, control: Control, state: &EditorState) -> ClientResult<PanelEvent> {
        let mode = match control {
            Control::Calculate => Mode::Calculate,
            Control::Probability => Mode::Probability,
            Control::Measure => Mode::Measure,
            Control::AddQubit => return Ok(PanelEvent::AddQubit),
            Control::DeleteQubit => return Ok(PanelEvent::DeleteQubit),
        };
        Ok(PanelEvent::Response(self.caller.send(state, mode).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RequestPolicy;
    use crate::transport::Transport;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for CountingTransport {
        fn endpoint(&self) -> &str {
            "memory://counting"
        }

        async fn post_text(&self, _body: String) -> ClientResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("reply".into())
        }
    }

    fn panel() -> (Panel, Arc<CountingTransport>) {
        let transport = Arc::new(CountingTransport::default());
        let caller = BackendCaller::with_transport(transport.clone(), RequestPolicy::Overlap);
        (Panel::new(caller), transport)
    }

    #[test]
    fn test_labels_in_panel_order() {
        let labels: Vec<_> = Control::ALL.iter().map(Control::label).collect();
        assert_eq!(
            labels,
            vec!["Calculate", "Probability", "Measure", "Add Qubit", "Delete Qubit"]
        );
    }

    #[test]
    fn test_qubit_event_only_for_wire_controls() {
        assert_eq!(Control::AddQubit.qubit_event(), Some(PanelEvent::AddQubit));
        assert_eq!(Control::DeleteQubit.qubit_event(), Some(PanelEvent::DeleteQubit));
        for control in [Control::Calculate, Control::Probability, Control::Measure] {
            assert_eq!(control.qubit_event(), None);
            assert!(control.mode().is_some());
        }
    }

    #[tokio::test]
    async fn test_request_controls_hit_backend() {
        let (panel, transport) = panel();
        let state = EditorState::new(1);

        for control in [Control::Calculate, Control::Probability, Control::Measure] {
            let event = panel.trigger(control, &state).await.unwrap();
            let PanelEvent::Response(outcome) = event else {
                panic!("expected a response for {control}");
            };
            assert_eq!(Some(outcome.mode), control.mode());
            assert_eq!(outcome.response.as_deref(), Some("reply"));
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_qubit_controls_are_pass_through() {
        let (panel, transport) = panel();
        let state = EditorState::new(1);

        assert_eq!(
            panel.trigger(Control::AddQubit, &state).await.unwrap(),
            PanelEvent::AddQubit
        );
        assert_eq!(
            panel.trigger(Control::DeleteQubit, &state).await.unwrap(),
            PanelEvent::DeleteQubit
        );
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }
}
