//! Fake HTTP transport for testing without network access.
//!
//! Every request is intercepted. A test installs either a handler that turns
//! the request into a canned response, or an error that makes every request
//! fail. State lives in the instance, so parallel tests never see each
//! other's configuration.

use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use http::StatusCode;

use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::{DragonBallError, Result};

/// Handler that answers an intercepted request.
///
/// Returning `Err` simulates a transport failure.
pub type RequestHandler = dyn Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync;

/// Step reported back for an intercepted request.
///
/// A successful exchange reports `ReceivedResponse`, `LoadedData` and
/// `Finished` in that order. A failed one reports a single `Failed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadEvent {
    /// Response metadata delivered.
    ReceivedResponse {
        /// Status code of the delivered response.
        status: StatusCode,
    },
    /// Body bytes delivered.
    LoadedData(usize),
    /// Loading finished.
    Finished,
    /// Loading failed with the given message.
    Failed(String),
}

/// Test double for [`HttpTransport`].
///
/// # Panics
///
/// `send` panics when neither a handler nor an error is configured. That is a
/// broken test, not a runtime condition.
#[derive(Default)]
pub struct MockTransport {
    handler: RwLock<Option<Arc<RequestHandler>>>,
    error: RwLock<Option<DragonBallError>>,
    requests: Mutex<Vec<HttpRequest>>,
    events: Mutex<Vec<LoadEvent>>,
}

impl MockTransport {
    /// Create a transport with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_handler`](Self::set_handler).
    pub fn with_handler<F>(self, handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync + 'static,
    {
        self.set_handler(handler);
        self
    }

    /// Builder form of [`set_error`](Self::set_error).
    pub fn with_error(self, error: DragonBallError) -> Self {
        self.set_error(error);
        self
    }

    /// Install the handler used for subsequent requests.
    pub fn set_handler<F>(&self, handler: F)
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync + 'static,
    {
        *self.handler.write().unwrap() = Some(Arc::new(handler));
    }

    /// Fail every subsequent request with `error`, bypassing the handler.
    pub fn set_error(&self, error: DragonBallError) {
        *self.error.write().unwrap() = Some(error);
    }

    /// Remove the pre-set error so the handler answers again.
    pub fn clear_error(&self) {
        *self.error.write().unwrap() = None;
    }

    /// Remove handler, error and all recorded history.
    pub fn reset(&self) {
        *self.handler.write().unwrap() = None;
        *self.error.write().unwrap() = None;
        self.requests.lock().unwrap().clear();
        self.events.lock().unwrap().clear();
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Delivery steps reported so far, across all requests.
    pub fn events(&self) -> Vec<LoadEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: LoadEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn fail(&self, error: DragonBallError) -> Result<HttpResponse> {
        self.record(LoadEvent::Failed(error.to_string()));
        Err(error)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(error) = self.error.read().unwrap().clone() {
            return self.fail(error);
        }

        let handler = self.handler.read().unwrap().clone();
        let Some(handler) = handler else {
            panic!(
                "MockTransport received unexpected request with no handler: {} {}",
                request.method, request.url
            );
        };

        match handler(&request) {
            Ok(response) => {
                self.record(LoadEvent::ReceivedResponse {
                    status: response.status,
                });
                self.record(LoadEvent::LoadedData(response.body.len()));
                self.record(LoadEvent::Finished);
                Ok(response)
            }
            Err(error) => self.fail(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handler_response_reports_three_steps() {
        let transport =
            MockTransport::new().with_handler(|_| Ok(HttpResponse::new(StatusCode::OK, "abc")));

        let response = transport
            .send(HttpRequest::post("https://example.com"))
            .await
            .unwrap();

        assert_eq!(response.body, b"abc");
        assert_eq!(
            transport.events(),
            vec![
                LoadEvent::ReceivedResponse {
                    status: StatusCode::OK,
                },
                LoadEvent::LoadedData(3),
                LoadEvent::Finished,
            ]
        );
    }

    #[tokio::test]
    async fn test_preset_error_short_circuits_handler() {
        let transport = MockTransport::new()
            .with_handler(|_| panic!("handler must not run"))
            .with_error(DragonBallError::Transport("offline".into()));

        let err = transport
            .send(HttpRequest::post("https://example.com"))
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert_eq!(transport.request_count(), 1);
        assert_eq!(
            transport.events(),
            vec![LoadEvent::Failed("transport error: offline".into())]
        );
    }

    #[tokio::test]
    async fn test_handler_error_reports_failure() {
        let transport = MockTransport::new().with_handler(|_| {
            Err(DragonBallError::ConnectionFailed {
                target: "example.com".into(),
                reason: "refused".into(),
            })
        });

        let err = transport
            .send(HttpRequest::post("https://example.com"))
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert!(matches!(transport.events().as_slice(), [LoadEvent::Failed(_)]));
    }

    #[tokio::test]
    async fn test_clear_error_restores_handler() {
        let transport = MockTransport::new()
            .with_handler(|_| Ok(HttpResponse::new(StatusCode::OK, "")))
            .with_error(DragonBallError::Transport("offline".into()));

        assert!(transport
            .send(HttpRequest::post("https://example.com"))
            .await
            .is_err());

        transport.clear_error();
        assert!(transport
            .send(HttpRequest::post("https://example.com"))
            .await
            .is_ok());
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    #[should_panic(expected = "no handler")]
    async fn test_unconfigured_transport_panics() {
        let transport = MockTransport::new();
        let _ = transport.send(HttpRequest::post("https://example.com")).await;
    }

    #[tokio::test]
    async fn test_reset_clears_history() {
        let transport =
            MockTransport::new().with_handler(|_| Ok(HttpResponse::new(StatusCode::OK, "")));
        transport
            .send(HttpRequest::post("https://example.com"))
            .await
            .unwrap();

        transport.reset();
        assert_eq!(transport.request_count(), 0);
        assert!(transport.events().is_empty());
        assert!(transport.last_request().is_none());
    }
}
