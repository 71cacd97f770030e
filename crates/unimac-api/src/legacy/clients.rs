// Legacy API client (station) endpoints

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::LegacyClientEntry;

impl LegacyClient {
    /// List all currently connected clients (stations) of a site.
    ///
    /// `GET /api/s/{site}/stat/sta`
    pub async fn list_clients(&self, site: &str) -> Result<Vec<LegacyClientEntry>, Error> {
        let url = self.site_url(site, "stat/sta")?;
        debug!(site, "listing connected clients");
        self.get(url).await
    }
}
