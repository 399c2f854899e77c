// Shared helpers for pumpforge binary tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Json;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::process::Command;

pub const DOGE2: &str = r#"{"name":"Doge2","symbol":"DG2","description":"fun"}"#;

/// What the mock provider answers with.
#[derive(Clone)]
pub enum MockReply {
    /// Successful completion carrying this text.
    Completion(&'static str),
    /// Error status with a provider-shaped error body.
    Error(StatusCode, &'static str),
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    hits: Arc<AtomicUsize>,
}

/// Local stand-in for both OpenAI (`/chat/completions`) and Anthropic
/// (`/v1/messages`) endpoints.
pub struct MockProvider {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockProvider {
    pub async fn start(reply: MockReply) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            reply,
            hits: hits.clone(),
        };

        let router = Router::new()
            .route("/chat/completions", post(openai_handler))
            .route("/v1/messages", post(anthropic_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn openai_handler(State(state): State<MockState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match state.reply {
        MockReply::Completion(text) => Json(json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": text},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 50, "completion_tokens": 20}
        }))
        .into_response(),
        MockReply::Error(status, message) => (
            status,
            Json(json!({"error": {"message": message, "type": "mock_error", "code": null}})),
        )
            .into_response(),
    }
}

async fn anthropic_handler(State(state): State<MockState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match state.reply {
        MockReply::Completion(text) => Json(json!({
            "id": "msg_mock",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 50, "output_tokens": 20}
        }))
        .into_response(),
        MockReply::Error(status, message) => (
            status,
            Json(json!({"type": "error", "error": {"type": "mock_error", "message": message}})),
        )
            .into_response(),
    }
}

/// Write `pumpforge.toml` into `dir`, with the image going to `out/`.
pub fn write_config(dir: &Path, extra: &str) -> PathBuf {
    let path = dir.join("pumpforge.toml");
    let content = format!(
        "timeout_secs = 10\n{extra}\n\n[image]\npath = \"out/token-image.png\"\n"
    );
    std::fs::write(&path, content).unwrap();
    path
}

pub fn image_path(dir: &Path) -> PathBuf {
    dir.join("out/token-image.png")
}

/// The `pumpforge` binary with a scrubbed environment, run from `workdir`.
pub fn pumpforge(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pumpforge"));
    cmd.current_dir(workdir)
        .env_remove("OPENAI_API_KEY")
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("PUMPFORGE_PROVIDER")
        .env_remove("PUMPFORGE_MODEL")
        .env_remove("PUMPFORGE_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}
