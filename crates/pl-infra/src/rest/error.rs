use pl_core::ports::QueryError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Error body returned by the store on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

pub fn map_reqwest_error(error: reqwest::Error) -> QueryError {
    if error.is_timeout() {
        QueryError::Timeout
    } else if error.is_decode() {
        QueryError::Decode(error.to_string())
    } else if let Some(status) = error.status() {
        map_status_error(status, "")
    } else {
        QueryError::Transport(error.to_string())
    }
}

/// Map a non-success response into a [`QueryError`].
pub fn map_status_error(status: StatusCode, body: &str) -> QueryError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = describe(&parsed, status, body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => QueryError::Unauthorized(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => QueryError::Timeout,
        _ => QueryError::Rejected {
            status: status.as_u16(),
            code: parsed.code,
            message,
        },
    }
}

fn describe(parsed: &ErrorBody, status: StatusCode, raw: &str) -> String {
    let mut message = match &parsed.message {
        Some(message) => message.clone(),
        None if !raw.trim().is_empty() => raw.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string(),
    };
    if let Some(details) = &parsed.details {
        message.push_str(&format!(" ({details})"));
    }
    if let Some(hint) = &parsed.hint {
        message.push_str(&format!(" hint: {hint}"));
    }
    message
}
