// ── Data source capability ──
//
// Everything the report commands read from a controller. Correlation and
// rendering only ever see these records, so tests can substitute an
// in-memory source for a live `Controller`.

use crate::error::CoreError;
use crate::model::{Client, DeviceInventory, Site};

/// Read access to a controller's sites, clients, and managed devices.
#[allow(async_fn_in_trait)]
pub trait ControllerSource {
    /// All sites visible to the logged-in account.
    async fn sites(&self) -> Result<Vec<Site>, CoreError>;

    /// Connected clients of every site, concatenated in site order and
    /// stamped with the owning site's display name.
    async fn clients(&self, sites: &[Site]) -> Result<Vec<Client>, CoreError>;

    /// Managed devices of every site, partitioned by kind.
    async fn devices(&self, sites: &[Site]) -> Result<DeviceInventory, CoreError>;
}
