//! CLI error types with miette diagnostics.
//!
//! Maps API and config errors into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use paddock_core::CoreError;

/// Exit codes for scripting against the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the platform")]
    #[diagnostic(
        code(paddock::connection_failed),
        help(
            "Check that the host is correct and reachable.\n\
             Try: paddock config show"
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS certificate verification failed")]
    #[diagnostic(
        code(paddock::tls_error),
        help(
            "The platform is using a self-signed certificate.\n\
             Use --insecure (-k) to accept it, or configure ca_cert in your profile."
        )
    )]
    TlsError { reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(paddock::timeout),
        help("Increase the timeout with --timeout or check platform responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(paddock::auth_failed),
        help(
            "Verify the email and password for profile '{profile}'.\n\
             Run: paddock config set-password --profile {profile}"
        )
    )]
    AuthFailed { profile: String, message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(paddock::no_credentials),
        help(
            "Configure credentials with: paddock config init\n\
             Or set the PADDOCK_EMAIL and PADDOCK_PASSWORD environment variables."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource} '{identifier}' not found")]
    #[diagnostic(
        code(paddock::not_found),
        help("Run: paddock {list_command} to see available entries")
    )]
    NotFound {
        resource: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(paddock::api_error))]
    ApiError {
        status: u16,
        message: String,
        code: Option<String>,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(paddock::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(paddock::profile_not_found),
        help("Create one with: paddock config init")
    )]
    ProfileNotFound { name: String },

    #[error("No platform configured")]
    #[diagnostic(
        code(paddock::no_config),
        help(
            "Create a profile with: paddock config init\n\
             Or pass --host on the command line.\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(paddock::config))]
    Config(#[from] paddock_config::ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(paddock::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    ConfirmationFailed { action: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(paddock::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),

    #[error("Could not serialize output: {0}")]
    #[diagnostic(code(paddock::serialize))]
    Serialize(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::ConfirmationFailed { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Translate an API error, attributing auth failures to a profile.
    pub fn from_api(err: paddock_api::Error, profile: &str, timeout_secs: u64) -> Self {
        match err {
            paddock_api::Error::Authentication { message } => Self::AuthFailed {
                profile: profile.to_owned(),
                message,
            },

            paddock_api::Error::SessionExpired | paddock_api::Error::NotAuthenticated => {
                Self::AuthFailed {
                    profile: profile.to_owned(),
                    message: "session expired".into(),
                }
            }

            paddock_api::Error::Transport(e) if e.is_timeout() => Self::Timeout {
                seconds: timeout_secs,
            },

            paddock_api::Error::Transport(e) => Self::ConnectionFailed { source: e.into() },

            paddock_api::Error::Tls(reason) => Self::TlsError { reason },

            paddock_api::Error::Api {
                message,
                code,
                status,
            } => Self::ApiError {
                status,
                message,
                code,
            },

            other => Self::ApiError {
                status: 0,
                message: other.to_string(),
                code: None,
            },
        }
    }

    /// Translate a core error (API layer or client-side validation).
    pub fn from_core(err: CoreError, profile: &str, timeout_secs: u64) -> Self {
        match err {
            CoreError::Api(api) => Self::from_api(api, profile, timeout_secs),
            CoreError::Validation { field, message } => Self::Validation {
                field,
                reason: message,
            },
        }
    }
}
