//! Frontend handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::frontend::AppState;

/// The page served at `/`. One button; clicking it fetches the same-origin
/// proxy route and renders the message or an error string.
const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>greetly</title>
<style>
  body { font-family: sans-serif; margin: 3rem; }
  button { padding: 0.5rem 1rem; border: 1px solid #888; border-radius: 6px; }
  #message { color: #15803d; }
  #error { color: #dc2626; }
</style>
</head>
<body>
<button id="call">Call /api/hello</button>
<p id="message"></p>
<p id="error"></p>
<script>
  const btn = document.getElementById("call");
  const message = document.getElementById("message");
  const error = document.getElementById("error");

  btn.addEventListener("click", async () => {
    btn.disabled = true;
    btn.textContent = "Calling…";
    message.textContent = "";
    error.textContent = "";
    try {
      const res = await fetch("/api/hello", { cache: "no-store" });
      if (!res.ok) throw new Error("HTTP " + res.status);
      const data = await res.json();
      message.textContent = "Message: " + (data.message ?? JSON.stringify(data));
    } catch (e) {
      error.textContent = "Error: " + (e instanceof Error ? e.message : "Unknown error");
    } finally {
      btn.disabled = false;
      btn.textContent = "Call /api/hello";
    }
  });
</script>
</body>
</html>
"##;

/// Serve the page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Proxy to the backend greeting route.
///
/// Any upstream failure (transport, bad status, unparseable body) maps to
/// 502 with a JSON error body; the page script renders that as its error
/// state, same as a failed fetch did in the original client.
pub async fn hello_proxy(
    State(state): State<AppState>,
) -> Result<Response, (StatusCode, Json<ErrorBody>)> {
    let body = fetch_upstream(&state).await.map_err(|e| {
        tracing::warn!(error = %e, url = %state.hello_url(), "Proxy request failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(body)).into_response())
}

async fn fetch_upstream(state: &AppState) -> crate::Result<serde_json::Value> {
    let response = state.client.get(state.hello_url()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(crate::Error::UpstreamStatus(status.as_u16()));
    }

    Ok(response.json().await?)
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
