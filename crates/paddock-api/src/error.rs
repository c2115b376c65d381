use thiserror::Error;

/// Top-level error type for the `paddock-api` crate.
///
/// Covers every failure mode of the admin API surface: authentication,
/// transport, server-reported business errors, and payload decoding.
/// `paddock-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, account disabled, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Bearer token rejected or expired (HTTP 401).
    #[error("Session expired -- sign in again")]
    SessionExpired,

    /// A call that requires authentication was made before login.
    #[error("Not authenticated -- call login() first")]
    NotAuthenticated,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Server-reported ─────────────────────────────────────────────
    /// Business error from the API: non-2xx status, or a 2xx body
    /// carrying `success: false`.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        message: String,
        code: Option<String>,
        status: u16,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error indicates the session is gone and
    /// re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::SessionExpired | Self::NotAuthenticated | Self::Authentication { .. }
        )
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// The API error code, if the server provided one.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
