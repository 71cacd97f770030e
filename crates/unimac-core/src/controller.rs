// ── Controller connection ──
//
// One authenticated session against a UniFi controller's legacy API.
// Lives for a single report run: connect, fetch, disconnect.

use tracing::{debug, info, warn};
use url::Url;

use unimac_api::LegacyClient;

use crate::config::ControllerConfig;
use crate::convert::{client_from_legacy, managed_device_from_legacy};
use crate::error::CoreError;
use crate::model::{Client, DeviceInventory, DeviceKind, Site};
use crate::source::ControllerSource;

/// An authenticated controller session.
pub struct Controller {
    url: Url,
    client: LegacyClient,
}

impl Controller {
    /// Detect the platform, then log in with the configured credentials.
    ///
    /// Any failure here is fatal for the run; no session is returned.
    pub async fn connect(config: &ControllerConfig) -> Result<Self, CoreError> {
        let transport = config.transport().with_cookie_jar();

        let platform = LegacyClient::detect_platform(&config.url, &transport)
            .await
            .map_err(|e| connection_error(&config.url, e))?;
        debug!(?platform, url = %config.url, "detected controller platform");

        let client = LegacyClient::new(config.url.clone(), platform, &transport)?;
        client
            .login(&config.username, &config.password)
            .await
            .map_err(|e| connection_error(&config.url, e))?;
        info!(url = %config.url, "authenticated");

        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }

    /// Controller address this session is bound to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// End the session. Logout failures are logged and otherwise ignored.
    pub async fn disconnect(self) {
        match self.client.logout().await {
            Ok(()) => debug!(url = %self.url, "logged out"),
            Err(e) => warn!(error = %e, "logout failed"),
        }
    }
}

/// Connection failures name the configured controller URL.
fn connection_error(url: &Url, err: unimac_api::Error) -> CoreError {
    match CoreError::from(err) {
        CoreError::ConnectionFailed { reason, .. } => CoreError::ConnectionFailed {
            url: url.to_string(),
            reason,
        },
        other => other,
    }
}

impl ControllerSource for Controller {
    async fn sites(&self) -> Result<Vec<Site>, CoreError> {
        let raw = self.client.list_sites().await?;
        Ok(raw.into_iter().map(Site::from).collect())
    }

    async fn clients(&self, sites: &[Site]) -> Result<Vec<Client>, CoreError> {
        let mut clients = Vec::new();
        for site in sites {
            let display = site.display_name();
            let raw = self.client.list_clients(&site.name).await?;
            debug!(site = %site.name, count = raw.len(), "fetched clients");
            clients.extend(raw.into_iter().map(|c| client_from_legacy(c, &display)));
        }
        Ok(clients)
    }

    async fn devices(&self, sites: &[Site]) -> Result<DeviceInventory, CoreError> {
        let mut inventory = DeviceInventory::default();
        for site in sites {
            let display = site.display_name();
            let raw = self.client.list_devices(&site.name).await?;
            debug!(site = %site.name, count = raw.len(), "fetched devices");
            for device in raw {
                match DeviceKind::from_legacy_type(&device.device_type) {
                    Some(kind) => inventory.push(kind, managed_device_from_legacy(device, &display)),
                    None => debug!(
                        mac = %device.mac,
                        device_type = %device.device_type,
                        "skipping unsupported device type"
                    ),
                }
            }
        }
        Ok(inventory)
    }
}
