//! `POST /api/send-email`: validates the task snapshot and forwards it to the
//! automation webhook that delivers the email.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Json,
};
use shared::{RelayPayload, SendEmailPayload, SendEmailResponse, ValidationError};
use tracing::{error, info, warn};

use crate::error::RelayError;
use crate::SharedWebhook;

#[derive(Debug, Clone)]
pub struct Webhook {
    client: reqwest::Client,
    url: String,
}

impl Webhook {
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts `payload` once. There is no retry and no deduplication.
    pub async fn forward(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Upstream { status, body });
        }

        Ok(())
    }
}

pub fn parse_payload(body: &[u8]) -> Result<RelayPayload, ValidationError> {
    SendEmailPayload::from_slice(body)?.validate()
}

pub async fn send_email(
    State(webhook): State<SharedWebhook>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SendEmailResponse>, RelayError> {
    let body = body.map_err(|e| {
        warn!(error = %e, "unreadable send-email body");
        RelayError::from(e)
    })?;
    let payload = parse_payload(&body).map_err(|e| {
        warn!(error = %e, "rejected send-email payload");
        RelayError::from(e)
    })?;

    match webhook.forward(&payload).await {
        Ok(()) => {
            info!(tasks = payload.tasks.len(), url = webhook.url(), "forwarded task list to webhook");
            Ok(Json(SendEmailResponse::ok()))
        }
        Err(e @ RelayError::Upstream { .. }) => {
            warn!(error = %e, "webhook rejected task list");
            Err(e)
        }
        Err(e) => {
            error!(error = %e, "webhook request failed");
            Err(e)
        }
    }
}
