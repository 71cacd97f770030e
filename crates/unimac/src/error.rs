//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `RenderError` into user-facing errors with help text
//! and a distinct exit code per failure class.

use miette::Diagnostic;
use thiserror::Error;

use unimac_core::{CoreError, RenderError};

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(unimac::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             Set the address with --host or UNIMAC_HOST."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid controller address '{host}': {reason}")]
    #[diagnostic(
        code(unimac::invalid_host),
        help("Use a URL such as https://192.168.1.1 or https://unifi:8443")
    )]
    InvalidHost { host: String, reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(unimac::auth_failed),
        help(
            "Verify the controller username and password.\n\
             Pass them with --username/--password or UNIMAC_USER/UNIMAC_PASSWORD."
        )
    )]
    AuthFailed { message: String },

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Controller request timed out")]
    #[diagnostic(
        code(unimac::timeout),
        help("Increase the timeout with --timeout or check controller responsiveness.")
    )]
    Timeout,

    // ── Output ───────────────────────────────────────────────────────
    #[error("Unsupported extension for {path}")]
    #[diagnostic(
        code(unimac::unsupported_extension),
        help("Reports can be written as .csv, .json, or .xlsx")
    )]
    UnsupportedExtension { path: String },

    #[error("Could not write {path}")]
    #[diagnostic(code(unimac::output_write))]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(unimac::render))]
    Render(RenderError),

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(unimac::api_error))]
    Api { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::Timeout => exit_code::TIMEOUT,
            Self::UnsupportedExtension { .. } | Self::InvalidHost { .. } => exit_code::USAGE,
            Self::OutputWrite { .. } | Self::Render(_) | Self::Api { .. } | Self::Io(_) => {
                exit_code::GENERAL
            }
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Timeout => CliError::Timeout,
            CoreError::Api { message, status } => CliError::Api {
                message: match status {
                    Some(code) => format!("{message} (HTTP {code})"),
                    None => message,
                },
            },
            CoreError::Config { message } | CoreError::Internal(message) => {
                CliError::Api { message }
            }
        }
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::UnsupportedExtension { path } => CliError::UnsupportedExtension {
                path: path.display().to_string(),
            },
            other => CliError::Render(other),
        }
    }
}
