//! Dragon Ball heroes API client.
//!
//! This crate stays stateless: every operation takes what it needs (a
//! session token, a hero id) and the transport that performs HTTP is
//! injected through the [`HttpTransport`] trait.
//!
//! # Features
//!
//! - **Network client**: login with basic auth, then list heroes and the
//!   transformations of a hero with the returned bearer token
//! - **Transport abstraction**: swap the real reqwest transport for a fake
//!   one in tests (`test-utils` feature)
//! - **Callback bridge**: completion-callback form of every operation for
//!   callers that cannot await futures
//!
//! # Example
//!
//! ```ignore
//! use dragonball_lib::{ClientConfig, NetworkClient};
//!
//! let client = NetworkClient::from_config(ClientConfig::from_env())?;
//! let token = client.login("goku@capsule.corp", "kamehameha").await?;
//!
//! let heroes = client.heroes_list(&token).await?;
//! let goku = heroes.iter().find(|h| h.name == "Goku").unwrap();
//! let transformations = client.transformation_heroes_list(&token, &goku.id).await?;
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub mod callback;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod prelude;
pub mod transport;

/// Test utilities for client testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::NetworkClient;
pub use config::ClientConfig;
pub use errors::{DragonBallError, DragonBallErrorCode};
pub use models::{Credentials, Hero, SessionToken, Transformation};
pub use transport::{HttpRequest, HttpResponse, HttpTransport};

/// Header, method and status types used by [`HttpRequest`] and [`HttpResponse`].
pub use http;

/// Real HTTP transport, only exposed when the default `http-transport` feature is enabled.
#[cfg(feature = "http-transport")]
pub use transport::ReqwestTransport;

/// Common result alias for Dragon Ball API operations.
pub type Result<T> = std::result::Result<T, DragonBallError>;
