//! # HTTP Transport
//!
//! [`Transport`] implementation over `reqwest`. Every store effect ends up here.
//!
//! ## Wire conventions
//!
//! - The request path is appended to the configured base URL (keeping any base path).
//! - The session's bearer token is attached per request, so a token refreshed on disk
//!   is picked up without restarting the stores.
//! - Success bodies shaped `{code, message, data}` are unwrapped to `data`; any other
//!   JSON body is passed through. An empty body reads as `null`.
//! - Non-2xx responses become [`TransportError::Status`], carrying the body's `message`
//!   when it has one.

use crate::config::ConsoleConfig;
use crate::session::SessionStore;
use async_trait::async_trait;
use resource_store::{ApiRequest, Method, Transport, TransportError};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Message recorded when the API cannot be reached at all.
pub const NETWORK_ERROR: &str = "Network Error";

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    session: Arc<dyn SessionStore>,
}

impl HttpTransport {
    pub fn new(
        config: &ConsoleConfig,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            session,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let url = self.endpoint(&request.path);
        debug!(%request, "Sending");

        let mut builder = self.client.request(to_reqwest(request.method), url.as_str());
        if let Some(token) = self.session.access_token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(%request, error = %e, "Request did not complete");
            TransportError::Network(network_message(&e))
        })?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(network_message(&e)))?;
        let body = parse_body(&text);

        if !status.is_success() {
            let message = body
                .as_ref()
                .ok()
                .and_then(|b| b.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        body.map(unwrap_envelope)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn network_message(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_connect() {
        NETWORK_ERROR.to_string()
    } else {
        e.to_string()
    }
}

fn parse_body(text: &str) -> Result<Value, TransportError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(TransportError::decode)
}

/// `{code, message, data}` becomes `data`. Anything else is returned as is.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut fields)
            if fields.contains_key("data")
                && (fields.contains_key("code") || fields.contains_key("message")) =>
        {
            fields.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
