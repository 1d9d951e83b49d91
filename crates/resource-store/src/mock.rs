//! # Mock Framework & Testing Guide
//!
//! Two seams can be mocked, depending on what is under test.
//!
//! | Seam | Tool | Use Case |
//! |------|------|----------|
//! | Network | [`MockTransport`] | Testing a real store (reducer, latest-wins, navigation) without HTTP |
//! | Store | [`create_mock_client`] + [`expect_request`] | Testing client wrappers: which request they send, how they map outcomes |
//!
//! ## Pattern 1: Real Store, Mocked Network
//!
//! ```rust,ignore
//! let transport = MockTransport::new();
//! transport
//!     .expect(Method::Get, "/countries")
//!     .return_json(json!([{"country_id": 1, "country_code": "IN", "country_name": "India"}]));
//!
//! let (actor, client) = StoreActor::<Country>::new(8);
//! tokio::spawn(actor.run(Arc::new(transport.clone())));
//!
//! let countries = client.fetch().await.unwrap();
//! assert_eq!(countries.len(), 1);
//! transport.verify();
//! ```
//!
//! Expectations are matched by method and path, not by order, so concurrent requests can
//! be scripted independently. Use [`ExpectationBuilder::after`] to hold a response back and
//! provoke races between requests of the same kind.
//!
//! ## Pattern 2: Client Logic Test (No Store)
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Product>(10);
//! let product_client = ProductClient::new(client);
//!
//! let task = tokio::spawn(async move { product_client.delete_product(7).await });
//!
//! let (request, responder) = expect_request(&mut receiver).await.unwrap();
//! assert!(matches!(request, Request::Delete(7)));
//! responder.unwrap().send(Ok(Success::Deleted(7))).unwrap();
//!
//! assert!(task.await.unwrap().is_ok());
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! Transport failures that are hard to provoke against a real server (timeouts, refused
//! connections, 5xx without a body) are one line each:
//!
//! ```rust,ignore
//! transport
//!     .expect(Method::Delete, "/countries/5")
//!     .return_err(TransportError::Network("Network Error".into()));
//! ```

use crate::client::ResourceClient;
use crate::entity::Resource;
use crate::message::{Request, Response, StoreMessage};
use crate::state::CollectionState;
use crate::transport::{ApiRequest, Method, Transport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, watch};

// =============================================================================
// MOCK TRANSPORT
// =============================================================================

struct Expectation {
    method: Method,
    path: String,
    delay: Option<Duration>,
    response: Result<Value, TransportError>,
}

/// An in-memory [`Transport`] with an expectation list.
///
/// Cloning shares the expectations and the request log, so a test can keep one handle
/// while the store owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<Vec<Expectation>>>,
    received: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one request with the given method and path.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request seen so far, in arrival order.
    pub fn received(&self) -> Vec<ApiRequest> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<String> = exps
                .iter()
                .map(|e| format!("{} {}", e.method, e.path))
                .collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                exps.len(),
                pending
            );
        }
    }
}

/// Builder for a single [`MockTransport`] expectation.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    delay: Option<Duration>,
    expectations: Arc<Mutex<Vec<Expectation>>>,
}

impl ExpectationBuilder {
    /// Delays the response.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn return_json(self, body: Value) {
        self.push(Ok(body));
    }

    /// Responds with no body, as delete and status endpoints do.
    pub fn return_empty(self) {
        self.push(Ok(Value::Null));
    }

    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, TransportError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push(Expectation {
            method: self.method,
            path: self.path,
            delay: self.delay,
            response,
        });
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let expectation = {
            let mut exps = self.expectations.lock().unwrap();
            exps.iter()
                .position(|e| e.method == request.method && e.path == request.path)
                .map(|index| exps.remove(index))
        };
        self.received.lock().unwrap().push(request.clone());

        // An unexpected call fails the request instead of panicking inside the effect task.
        let Some(expectation) = expectation else {
            return Err(TransportError::Network(format!(
                "Unexpected request: {request}"
            )));
        };
        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.response
    }
}

// =============================================================================
// CLIENT HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// # Testing Strategy
/// When testing a *client wrapper* (e.g. `ProductClient`), spinning up a store adds
/// nothing. The test reads the request off the channel, asserts on it, and answers
/// through the responder. The state snapshot of such a client stays at its default.
pub fn create_mock_client<T: Resource>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<StoreMessage<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, state) = watch::channel(CollectionState::default());
    (ResourceClient::new(sender, state), receiver)
}

/// Helper to take the next request off a mock client's channel.
pub async fn expect_request<T: Resource>(
    receiver: &mut mpsc::Receiver<StoreMessage<T>>,
) -> Option<(Request<T>, Option<Response<T>>)> {
    receiver
        .recv()
        .await
        .map(|msg| (msg.request, msg.respond_to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Success;
    use serde_json::json;

    #[tokio::test]
    async fn test_expectations_match_by_method_and_path() {
        let transport = MockTransport::new();
        transport
            .expect(Method::Delete, "/countries/5")
            .return_empty();
        transport
            .expect(Method::Get, "/countries")
            .return_json(json!([]));

        let listed = transport.send(ApiRequest::get("/countries")).await;
        let deleted = transport.send(ApiRequest::delete("/countries/5")).await;

        assert_eq!(listed, Ok(json!([])));
        assert_eq!(deleted, Ok(Value::Null));
        assert_eq!(transport.received().len(), 2);
        transport.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_is_an_error() {
        let transport = MockTransport::new();

        let result = transport.send(ApiRequest::get("/users")).await;

        assert!(matches!(result, Err(TransportError::Network(_))));
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let transport = MockTransport::new();
        transport.expect(Method::Get, "/users").return_json(json!([]));
        transport.verify();
    }

    #[derive(Debug, Clone, serde::Deserialize)]
    struct Tag {
        id: u32,
    }

    #[derive(Debug)]
    enum NoAction {}

    impl Resource for Tag {
        type Id = u32;
        type Create = ();
        type Update = ();
        type Action = NoAction;
        type ActionResult = ();
        type Extra = ();
        const COLLECTION: &'static str = "/tags";

        fn id(&self) -> u32 {
            self.id
        }
        fn action_request(action: &NoAction) -> Result<ApiRequest, TransportError> {
            match *action {}
        }
        fn action_kind(action: &NoAction) -> &'static str {
            match *action {}
        }
        fn decode_action(action: NoAction, _: Value) -> Result<(), TransportError> {
            match action {}
        }
    }

    #[tokio::test]
    async fn test_mock_client_round_trip() {
        let (client, mut receiver) = create_mock_client::<Tag>(4);

        let task = tokio::spawn(async move { client.delete(3).await });

        let (request, responder) = expect_request(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert!(matches!(request, Request::Delete(3)));
        responder
            .expect("Delete awaits its outcome")
            .send(Ok(Success::Deleted(3)))
            .unwrap();

        assert!(task.await.unwrap().is_ok());
    }
}
