//! HTTP transport abstraction.
//!
//! The client never talks to the network directly. It builds an
//! [`HttpRequest`] and hands it to an injected [`HttpTransport`]; production
//! code uses [`ReqwestTransport`], tests use
//! [`MockTransport`](crate::test_utils::MockTransport).

#[cfg(feature = "http-transport")]
mod reqwest_transport;
mod traits;

#[cfg(feature = "http-transport")]
pub use reqwest_transport::ReqwestTransport;
pub use traits::{HttpRequest, HttpResponse, HttpTransport};
