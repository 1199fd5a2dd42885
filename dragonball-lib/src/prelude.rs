//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits for
//! quick setup. Import everything with:
//!
//! ```rust,ignore
//! use dragonball_lib::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Client: `NetworkClient`, `ClientConfig`
//! - Records: `Hero`, `Transformation`, `SessionToken`, `Credentials`
//! - Error types: `DragonBallError`, `DragonBallErrorCode`, `Result`
//! - Transport: `HttpTransport` and its request/response types

// Client
pub use crate::client::NetworkClient;
pub use crate::config::ClientConfig;

// Records
pub use crate::models::{Credentials, Hero, SessionToken, Transformation};

// Error handling
pub use crate::errors::{DragonBallError, DragonBallErrorCode};
pub use crate::Result;

// Transport
pub use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

#[cfg(feature = "http-transport")]
pub use crate::transport::ReqwestTransport;

// Callback bridge
#[cfg(not(target_arch = "wasm32"))]
pub use crate::callback::{CallbackClient, CallbackRuntime, FnCallback, ResultCallback};
