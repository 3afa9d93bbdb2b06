use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;

use super::envelope::{self, Enveloped};
use super::error::{Error, Result};

/// Raw HTTP response as returned by a [`Transport`](super::Transport).
///
/// Handed back to callers next to the decoded records so they can look at the
/// status line and headers.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn decode_list<T: Enveloped>(&self) -> Result<Vec<T>> {
        envelope::decode_list(&self.body)
    }

    pub fn decode_one<T: Enveloped>(&self) -> Result<T> {
        envelope::decode_one(&self.body)
    }

    /// Turn a non-success status into [`Error::Api`], keeping the Robot error
    /// code and message when the body carries them.
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            return Ok(self);
        }
        let (code, message) = match serde_json::from_slice::<ErrorBody>(&self.body) {
            Ok(parsed) => (parsed.error.code, parsed.error.message),
            Err(_) => (
                self.status.canonical_reason().unwrap_or("UNKNOWN").to_uppercase().replace(' ', "_"),
                self.text(),
            ),
        };
        tracing::warn!(status = %self.status, %code, "Robot API returned an error: {}", message);
        Err(Error::Api {
            status: self.status,
            code,
            message,
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: String,
    #[serde(default)]
    message: String,
}
