//! Network client for the Dragon Ball heroes API.
//!
//! Every operation follows the same contract: build the request, send it
//! through the injected transport, then either decode the body of a 200
//! response or report why that was not possible. Nothing is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use dragonball_lib::{ClientConfig, NetworkClient};
//!
//! let client = NetworkClient::from_config(ClientConfig::from_env())?;
//!
//! let token = client.login("goku@capsule.corp", "kamehameha").await?;
//! for hero in client.heroes_list(&token).await? {
//!     println!("{} (favorite: {})", hero.name, hero.favorite);
//! }
//! ```

use base64::{engine::general_purpose, Engine as _};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderValue;
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, HEROES_PATH, TRANSFORMATIONS_PATH};
use crate::models::{Credentials, Hero, SessionToken, Transformation};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::{DragonBallError, Result};

/// Content type of the transformation request body.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// `Basic <base64(user:password)>` header value.
pub fn basic_auth_value(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.user, credentials.password);
    format!("Basic {}", general_purpose::STANDARD.encode(raw.as_bytes()))
}

/// Build the login request: POST with basic auth and no body.
pub fn build_login_request(
    config: &ClientConfig,
    credentials: &Credentials,
) -> Result<HttpRequest> {
    let authorization = authorization_value(basic_auth_value(credentials))?;
    Ok(HttpRequest::post(config.login_url()).with_header(AUTHORIZATION, authorization))
}

/// Build the hero list request: POST with bearer auth and no body.
///
/// Fails if the token contains bytes that cannot appear in a header.
pub fn build_heroes_request(config: &ClientConfig, token: &SessionToken) -> Result<HttpRequest> {
    let authorization = authorization_value(token.bearer())?;
    Ok(HttpRequest::post(config.url(HEROES_PATH)).with_header(AUTHORIZATION, authorization))
}

/// Build the transformation list request: POST with bearer auth and an
/// `id=<parent_hero_id>` form body.
pub fn build_transformations_request(
    config: &ClientConfig,
    token: &SessionToken,
    parent_hero_id: &str,
) -> Result<HttpRequest> {
    let authorization = authorization_value(token.bearer())?;
    let body = format!("id={}", urlencoding::encode(parent_hero_id));
    Ok(HttpRequest::post(config.url(TRANSFORMATIONS_PATH))
        .with_header(AUTHORIZATION, authorization)
        .with_header(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED))
        .with_body(body))
}

fn authorization_value(value: String) -> Result<HeaderValue> {
    let mut value = HeaderValue::try_from(value)
        .map_err(|e| DragonBallError::invalid_header(AUTHORIZATION.as_str(), e.to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Client for the Dragon Ball heroes API over an injected transport.
///
/// The client holds no mutable state; it is safe to share across tasks when
/// the transport is.
pub struct NetworkClient<T> {
    config: ClientConfig,
    transport: T,
}

#[cfg(feature = "http-transport")]
impl NetworkClient<crate::transport::ReqwestTransport> {
    /// Create a client that performs real HTTP requests.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = crate::transport::ReqwestTransport::new(&config)?;
        Self::new(config, transport)
    }
}

impl<T: HttpTransport> NetworkClient<T> {
    /// Create a client from a configuration and a transport.
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Authenticate with basic auth and return the session token.
    ///
    /// The body of a 200 response is the token itself, as plain text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, password)))]
    pub async fn login(&self, user: &str, password: &str) -> Result<SessionToken> {
        self.login_with(&Credentials::new(user, password)).await
    }

    /// Same as [`login`](Self::login), taking prepared credentials.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(user = %credentials.user)))]
    pub async fn login_with(&self, credentials: &Credentials) -> Result<SessionToken> {
        let request = build_login_request(&self.config, credentials)?;
        let response = self.execute("login", request).await?;

        let token = String::from_utf8(response.body)
            .map_err(|e| DragonBallError::decoding("login", e.to_string()))?;
        Ok(SessionToken(token))
    }

    /// Fetch every hero visible to the session.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub async fn heroes_list(&self, token: &SessionToken) -> Result<Vec<Hero>> {
        let request = build_heroes_request(&self.config, token)?;
        let response = self.execute("heroes_list", request).await?;
        decode_json("heroes_list", &response)
    }

    /// Fetch the transformations of one hero.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, token)))]
    pub async fn transformation_heroes_list(
        &self,
        token: &SessionToken,
        parent_hero_id: &str,
    ) -> Result<Vec<Transformation>> {
        let request = build_transformations_request(&self.config, token, parent_hero_id)?;
        let response = self.execute("transformation_heroes_list", request).await?;
        decode_json("transformation_heroes_list", &response)
    }

    /// Send a request and require a 200 response.
    async fn execute(&self, operation: &'static str, request: HttpRequest) -> Result<HttpResponse> {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, method = %request.method, url = %request.url, "sending request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(operation, error = %err, "transport failed");
                return Err(err);
            }
        };

        if !response.is_ok() {
            #[cfg(feature = "tracing")]
            tracing::warn!(operation, status = %response.status, "unexpected status");
            return Err(DragonBallError::unexpected_status(
                operation,
                response.status.as_u16(),
                &response.body,
            ));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(operation, body_len = response.body.len(), "response received");

        Ok(response)
    }
}

fn decode_json<D: DeserializeOwned>(operation: &str, response: &HttpResponse) -> Result<D> {
    serde_json::from_slice(&response.body)
        .map_err(|e| DragonBallError::decoding(operation, e.to_string()))
}
