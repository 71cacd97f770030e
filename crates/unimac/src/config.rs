//! Turns parsed global flags into the connection settings for one run.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use unimac_core::{ControllerConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Build a `ControllerConfig` from flags (which clap has already merged
/// with `UNIMAC_*` environment variables and defaults).
pub fn controller_config(global: &GlobalOpts) -> Result<ControllerConfig, CliError> {
    let tls = match &global.ca_cert {
        Some(path) => TlsVerification::CustomCa(path.clone()),
        None if global.verify_tls => TlsVerification::SystemDefaults,
        None => TlsVerification::DangerAcceptInvalid,
    };

    Ok(ControllerConfig {
        url: parse_host(&global.host)?,
        username: global.username.clone(),
        password: SecretString::from(global.password.clone()),
        tls,
        timeout: Duration::from_secs(global.timeout),
    })
}

/// Accept a bare hostname as shorthand for `https://<host>`.
fn parse_host(raw: &str) -> Result<Url, CliError> {
    let raw = raw.trim();
    let candidate = if raw.contains("://") {
        raw.to_owned()
    } else {
        format!("https://{raw}")
    };

    let url = Url::parse(&candidate).map_err(|e| CliError::InvalidHost {
        host: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CliError::InvalidHost {
            host: raw.to_owned(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}
