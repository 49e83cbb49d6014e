//! Wire contract for `POST /api/send-email`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::TaskSummary;

pub const SEND_EMAIL_PATH: &str = "/api/send-email";

/// The snapshot the browser posts: the task list at the moment of sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    pub email: String,
    pub tasks: Vec<TaskSummary>,
    pub date: String,
}

/// The request body as received, before any field is checked.
///
/// Every field is optional so that a missing field is reported as a
/// [`ValidationError`] rather than a deserialization failure. Task entries
/// are kept as raw JSON; the webhook owns their meaning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendEmailPayload {
    pub email: Option<String>,
    pub tasks: Option<Vec<Value>>,
    pub date: Option<Value>,
}

/// A payload that passed validation, forwarded to the webhook as received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayPayload {
    pub email: String,
    pub tasks: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing email")]
    MissingEmail,
    #[error("missing tasks")]
    MissingTasks,
    #[error("task list is empty")]
    EmptyTasks,
    #[error("malformed body: {0}")]
    Malformed(String),
}

impl SendEmailPayload {
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    pub fn validate(self) -> Result<RelayPayload, ValidationError> {
        let email = match self.email {
            Some(email) if !email.trim().is_empty() => email,
            _ => return Err(ValidationError::MissingEmail),
        };
        let tasks = self.tasks.ok_or(ValidationError::MissingTasks)?;
        if tasks.is_empty() {
            return Err(ValidationError::EmptyTasks);
        }

        Ok(RelayPayload {
            email,
            tasks,
            date: self.date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
}

impl SendEmailResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: &str) -> Result<RelayPayload, ValidationError> {
        SendEmailPayload::from_slice(body.as_bytes())?.validate()
    }

    #[test]
    fn accepts_complete_payload() {
        let payload = parse(
            r#"{"email":"a@b.com","tasks":[{"text":"Buy milk","status":"Pending"}],"date":"1/1/2024"}"#,
        )
        .unwrap();

        assert_eq!(payload.email, "a@b.com");
        assert_eq!(payload.date, Some(json!("1/1/2024")));
        assert_eq!(payload.tasks, vec![json!({ "text": "Buy milk", "status": "Pending" })]);
    }

    #[test]
    fn task_entries_are_not_interpreted() {
        let payload = parse(
            r#"{"email":"a@b.com","tasks":[{"text":"x","status":"done"},{"status":"Pending"}],"date":"1/1/2024"}"#,
        )
        .unwrap();

        assert_eq!(payload.tasks.len(), 2);
        assert_eq!(payload.tasks[0]["status"], "done");
    }

    #[test]
    fn rejects_empty_task_list() {
        let err = parse(r#"{"email":"a@b.com","tasks":[],"date":"1/1/2024"}"#).unwrap_err();
        assert_eq!(err, ValidationError::EmptyTasks);
    }

    #[test]
    fn rejects_missing_or_blank_email() {
        let tasks = r#"[{"text":"x","status":"Completed"}]"#;
        assert_eq!(
            parse(&format!(r#"{{"tasks":{tasks}}}"#)).unwrap_err(),
            ValidationError::MissingEmail
        );
        assert_eq!(
            parse(&format!(r#"{{"email":"","tasks":{tasks}}}"#)).unwrap_err(),
            ValidationError::MissingEmail
        );
    }

    #[test]
    fn rejects_missing_tasks() {
        let err = parse(r#"{"email":"a@b.com"}"#).unwrap_err();
        assert_eq!(err, ValidationError::MissingTasks);
    }

    #[test]
    fn non_array_tasks_fail_to_parse() {
        let err = parse(r#"{"email":"a@b.com","tasks":"Buy milk"}"#).unwrap_err();
        assert!(matches!(err, ValidationError::Malformed(_)));
    }

    #[test]
    fn missing_date_is_left_out_when_forwarded() {
        let payload =
            parse(r#"{"email":"a@b.com","tasks":[{"text":"x","status":"Pending"}]}"#).unwrap();

        assert_eq!(payload.date, None);
        let forwarded = serde_json::to_value(&payload).unwrap();
        assert!(forwarded.get("date").is_none());
    }

    #[test]
    fn client_snapshot_serializes_status_strings() {
        let request = SendEmailRequest {
            email: "a@b.com".to_string(),
            tasks: vec![TaskSummary {
                text: "Buy milk".to_string(),
                status: crate::TaskStatus::Completed,
            }],
            date: "1/1/2024".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["tasks"][0], json!({ "text": "Buy milk", "status": "Completed" }));
    }

    #[test]
    fn success_response_shape() {
        let json = serde_json::to_value(SendEmailResponse::ok()).unwrap();
        assert_eq!(json, json!({ "success": true }));
    }
}
