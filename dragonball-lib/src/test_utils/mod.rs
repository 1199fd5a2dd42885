//! Test utilities for Dragon Ball clients.
//!
//! This module provides:
//! - A fake transport that intercepts every request
//! - Fixtures for heroes, transformations and canned responses
//! - Assertion helpers for captured requests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dragonball_lib::test_utils::{fixtures, MockTransport};
//! use dragonball_lib::{ClientConfig, NetworkClient};
//!
//! let transport = Arc::new(MockTransport::new());
//! transport.set_handler(|_| Ok(fixtures::json_response(&fixtures::heroes(10))));
//!
//! let client = NetworkClient::new(ClientConfig::default(), transport.clone())?;
//! let heroes = client.heroes_list(&"token".into()).await?;
//! assert_eq!(heroes.len(), 10);
//! assert_eq!(transport.request_count(), 1);
//! ```

mod assertions;
pub mod fixtures;
mod mock_transport;

pub use assertions::{assert_authorization, assert_body_contains, assert_path, assert_post};
pub use fixtures::TestFixtures;
pub use mock_transport::{LoadEvent, MockTransport, RequestHandler};
