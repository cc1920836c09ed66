use crate::error::{GatewayError, Result};
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub(crate) fn build_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment.trim_matches('/'));
    }
    url
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Transport failures collapse into the same `ApiError` kind as status failures.
pub(crate) fn transport_error(e: reqwest::Error) -> GatewayError {
    tracing::warn!("Gateway request failed: {}", e);
    GatewayError::ApiError(e.to_string())
}

/// Pulls `error.message` out of a gateway error body, if it has one.
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Returns the `data` field of a successful response, or an `ApiError` carrying
/// the server message (raw body text when the body is not the expected JSON).
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().map_err(transport_error)?;

    if !status.is_success() {
        let message = error_message_from_body(&body).unwrap_or(body);
        tracing::warn!("Gateway returned {}: {}", status, message);
        return Err(GatewayError::ApiError(message));
    }

    let envelope: Envelope<T> = serde_json::from_str(&body)
        .map_err(|e| GatewayError::api_error(format!("invalid response body: {}", e)))?;
    Ok(envelope.data)
}
