//! End-to-end tests against a local stub of the simulator endpoint.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use qubitverse_client::{
    BackendCaller, ClientConfig, Control, EditorState, Mode, Panel, PanelEvent, RawText,
};

/// One request as the stub saw it: content type and body.
type Seen = Arc<Mutex<Vec<(Option<String>, String)>>>;

async fn record(State(seen): State<Seen>, headers: HeaderMap, body: String) -> String {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    seen.lock().await.push((content_type, body));
    "|00>: 0.5\n|11>: 0.5\n".to_string()
}

async fn reject(body: String) -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("cannot parse {} bytes", body.len()),
    )
}

async fn spawn_stub() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/endpoint", post(record))
        .route("/api/broken", post(reject))
        .with_state(seen.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn bell_state() -> EditorState {
    EditorState::from_json(
        r#"{
            "gates": [{"text": "H", "x": 10, "y": 30, "params": {}}],
            "cnotGates": [{"control": 0, "target": 1, "x": 60}],
            "numQubits": 2
        }"#,
    )
    .unwrap()
}

#[tokio::test]
async fn posts_plain_text_body() {
    let (base, seen) = spawn_stub().await;
    let config = ClientConfig::default().with_endpoint(format!("{base}/api/endpoint"));
    let caller = BackendCaller::new(&config).unwrap();

    let outcome = caller.calculate(&bell_state()).await.unwrap();
    assert_eq!(outcome.mode, Mode::Calculate);
    assert_eq!(outcome.response.as_deref(), Some("|00>: 0.5\n|11>: 0.5\n"));

    let seen = seen.lock().await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("text/plain"));
    assert_eq!(
        seen[0].1,
        "type:single\ngateType:H\nqubit:0\ntheta:0\nphi:0\nlambda:0\nposition:10\n@\n\
         type:cnot\ncontrol:0\ntarget:1\nposition:60\n@\n"
    );
}

#[tokio::test]
async fn error_status_still_returns_body() {
    let (base, _) = spawn_stub().await;
    let config = ClientConfig::default().with_endpoint(format!("{base}/api/broken"));
    let caller = BackendCaller::new(&config).unwrap();

    let outcome = caller.measure(&bell_state()).await.unwrap();
    let dispatch = outcome.dispatch(&RawText);
    let log = dispatch.log.unwrap();
    assert!(log.starts_with("cannot parse"));
    assert_eq!(dispatch.result.as_deref(), Some(log.as_str()));
}

#[tokio::test]
async fn unreachable_backend_yields_no_response() {
    // Grab a free port, then close it again.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::default()
        .with_endpoint(format!("http://{addr}/api/endpoint"))
        .with_timeout_secs(5);
    let caller = BackendCaller::new(&config).unwrap();

    let outcome = caller.probability(&bell_state()).await.unwrap();
    assert_eq!(outcome.response, None);

    let dispatch = outcome.dispatch(&RawText);
    assert_eq!(dispatch.log, None);
    assert_eq!(dispatch.result, None);
}

#[tokio::test]
async fn panel_round_trip() {
    let (base, seen) = spawn_stub().await;
    let config = ClientConfig::default().with_endpoint(format!("{base}/api/endpoint"));
    let panel = Panel::new(BackendCaller::new(&config).unwrap());
    let mut state = bell_state();

    for control in Control::ALL {
        match panel.trigger(control, &state).await.unwrap() {
            PanelEvent::Response(outcome) => assert!(outcome.is_answered()),
            PanelEvent::AddQubit => state.add_qubit(),
            PanelEvent::DeleteQubit => state.remove_qubit(),
        }
    }

    assert_eq!(state.num_qubits, 2);
    assert_eq!(seen.lock().await.len(), 3);
}
