//! # Transport Seam
//!
//! The store never talks to the network directly. Every effect is expressed as an
//! [`ApiRequest`] and handed to a [`Transport`], which is injected into the store at
//! `run()` time. Production code plugs in an HTTP implementation; tests plug in
//! [`MockTransport`](crate::mock::MockTransport).
//!
//! A transport returns the response *payload* as a `serde_json::Value`. Any envelope
//! unwrapping (e.g. `{code, message, data}`) is the transport's job, so entity decoders
//! only ever see the data they care about. Empty bodies come back as `Value::Null`.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Message stored in collection state when a failure carries no readable text.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// HTTP verbs used by the resource endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// A transport-agnostic description of one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, always starting with `/`.
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attaches a JSON body serialized from `payload`.
    pub fn json<P: Serialize + ?Sized>(mut self, payload: &P) -> Result<Self, TransportError> {
        let body =
            serde_json::to_value(payload).map_err(|e| TransportError::Encode(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Errors produced while performing an effect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status. `message` is the server's
    /// own explanation when it sent one, otherwise empty.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Network(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Human-readable message for the collection's `error` field.
    pub fn failure_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }

    pub fn decode(e: impl fmt::Display) -> Self {
        TransportError::Decode(e.to_string())
    }
}

/// Performs API calls on behalf of the stores.
///
/// Implementations must be cheap to share: the store clones the `Arc` into every
/// effect task.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_status_message_falls_back() {
        let err = TransportError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.failure_message(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_server_message_is_kept() {
        let err = TransportError::Status {
            status: 409,
            message: "Country code already exists".into(),
        };
        assert_eq!(err.failure_message(), "Country code already exists");
    }

    #[test]
    fn test_json_attaches_body() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Payload {
            country_code: &'static str,
        }

        let request = ApiRequest::post("/countries")
            .json(&Payload { country_code: "IN" })
            .unwrap();
        assert_eq!(request.body, Some(json!({"countryCode": "IN"})));
        assert_eq!(request.to_string(), "POST /countries");
    }
}
