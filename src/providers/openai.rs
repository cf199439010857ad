use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::model::{ChatRequest, ChatResponse};
use crate::providers::http_errors::chat_api_request_error;

#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

pub async fn send(client: &Client, cfg: &Config, request: &ChatRequest) -> Result<RawResponse> {
    let body = request.to_body()?;
    debug!(
        api_url = %cfg.api_url,
        model = %request.model,
        message_count = request.messages.len(),
        body_len = body.len(),
        "sending chat completion request"
    );

    let response = client
        .post(&cfg.api_url)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {}", cfg.api_key))
        .body(body)
        .send()
        .await
        .map_err(|err| {
            debug!(
                api_url = %cfg.api_url,
                model = %request.model,
                error = %err,
                "chat request failed"
            );
            chat_api_request_error(err, &cfg.api_url)
        })?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|err| chat_api_request_error(err, &cfg.api_url))?
        .to_vec();
    debug!(status = %status, body_len = body.len(), "received chat response");

    Ok(RawResponse { status, body })
}

pub fn decode(body: &[u8]) -> Result<ChatResponse> {
    serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, body_len = body.len(), "failed to decode chat response");
        ClientError::Decode(err)
    })
}

fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    let message = serde_json::from_slice::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());
    debug!(
        status = %status,
        response_body_len = body.len(),
        "chat API returned non-success status"
    );
    ClientError::Api { status, message }
}

pub async fn chat(client: &Client, cfg: &Config, request: &ChatRequest) -> Result<ChatResponse> {
    let raw = send(client, cfg, request).await?;
    if !raw.status.is_success() {
        return Err(api_error(raw.status, &raw.body));
    }
    decode(&raw.body)
}
