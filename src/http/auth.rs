//! Request authentication
//!
//! Static credentials applied to every outgoing request. Obtaining and
//! refreshing tokens is left to the caller.

use reqwest::RequestBuilder;

/// Credentials attached to each request
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// `Authorization: Bearer <token>`
    Bearer {
        /// Access token
        token: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

impl AuthConfig {
    /// Bearer token credentials
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Basic credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Apply the credentials to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            AuthConfig::None => req,
            AuthConfig::Bearer { token } => req.bearer_auth(token),
            AuthConfig::Basic { username, password } => req.basic_auth(username, Some(password)),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::Bearer { .. } => f.debug_struct("Bearer").finish_non_exhaustive(),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}
