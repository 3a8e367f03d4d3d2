use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

/// A message accepted by the fake bot API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: Option<String>,
}

#[derive(Debug)]
struct FakeState {
    bot_token: String,
    chat_id: String,
    messages: Mutex<Vec<SentMessage>>,
}

/// Handle to a fake bot API running in the background.
#[derive(Debug, Clone)]
pub struct FakeTelegram {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeTelegram {
    /// Start a fake bot API on an ephemeral localhost port.
    pub async fn spawn(bot_token: &str, chat_id: &str) -> anyhow::Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .context("Failed to bind fake telegram server")?;
        let addr = listener.local_addr()?;

        let state = Arc::new(FakeState {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            messages: Default::default(),
        });

        let app = router(Arc::clone(&state));
        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!("fake telegram server failed: {err}");
            }
        });

        Ok(Self { addr, state })
    }

    /// Base url to use as the bot api endpoint override.
    pub fn endpoint(&self) -> Url {
        format!("http://{}/", self.addr)
            .parse()
            .expect("socket address forms a valid url")
    }

    /// All messages accepted so far.
    pub fn messages(&self) -> Vec<SentMessage> {
        self.state
            .messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

pub async fn start_server(
    host: IpAddr,
    port: u16,
    bot_token: String,
    chat_id: String,
) -> anyhow::Result<()> {
    info!("Starting telegram testing server on {host}:{port}");
    info!("Telegram api endpoint: http://{host}:{port}/");
    info!("Bot token: {bot_token:?}");
    info!("Chat id: {chat_id:?}");

    let state = Arc::new(FakeState {
        bot_token,
        chat_id,
        messages: Default::default(),
    });

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(state))
        .await
        .context("Failed to start HTTP server")
}

fn router(state: Arc<FakeState>) -> Router<()> {
    Router::new()
        .route("/:bot/sendMessage", routing::post(send_message))
        .with_state(state)
}

async fn send_message(
    state: State<Arc<FakeState>>,
    Path(bot): Path<String>,
    Json(message): Json<SentMessage>,
) -> Response {
    if bot.strip_prefix("bot") != Some(state.bot_token.as_str()) {
        return telegram_error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    if message.chat_id != state.chat_id {
        return telegram_error(StatusCode::BAD_REQUEST, "Bad Request: chat not found");
    }

    if message.text.trim().is_empty() {
        return telegram_error(StatusCode::BAD_REQUEST, "Bad Request: message text is empty");
    }

    info!(chat_id = %message.chat_id, "accepted message:\n{}", message.text);

    let response = json!({
        "ok": true,
        "result": {
            "chat": { "id": message.chat_id },
            "text": message.text,
        },
    });

    if let Ok(mut messages) = state.messages.lock() {
        messages.push(message);
    }

    Json(response).into_response()
}

fn telegram_error(status: StatusCode, description: &str) -> Response {
    let body = json!({
        "ok": false,
        "error_code": status.as_u16(),
        "description": description,
    });
    (status, Json(body)).into_response()
}
