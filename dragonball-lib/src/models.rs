//! Records exchanged with the Dragon Ball heroes API.

use serde::{Deserialize, Serialize};

/// Username and password used to build a basic-auth header.
///
/// Credentials are never stored by the client; they live only for the
/// duration of a login call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account user name (usually an email address).
    pub user: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Create credentials from a user name and password.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque session token returned by login.
///
/// The client never inspects the token. An empty token is sent as-is.
///
/// # Example
///
/// ```
/// use dragonball_lib::SessionToken;
///
/// let token: SessionToken = "eyJhbGciOi...".into();
/// assert_eq!(token.bearer(), "Bearer eyJhbGciOi...");
///
/// let empty = SessionToken::new("");
/// assert_eq!(empty.bearer(), "Bearer ");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(pub String);

impl SessionToken {
    /// Create a new token from a string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken(<{} bytes>)", self.0.len())
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A hero as returned by `/api/heros/all`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Hero name.
    pub name: String,
    /// Server-assigned identifier.
    pub id: String,
    /// Free-text description.
    pub description: String,
    /// Whether the account marked this hero as a favorite.
    pub favorite: bool,
    /// Photo URL.
    pub photo: String,
}

/// A transformation of a hero as returned by `/api/heros/tranformations`.
///
/// The parent hero is only known from the request that fetched it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    /// Transformation name.
    pub name: String,
    /// Server-assigned identifier.
    pub id: String,
    /// Free-text description.
    pub description: String,
    /// Photo URL.
    pub photo: String,
}
