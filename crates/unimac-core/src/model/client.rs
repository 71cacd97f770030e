// ── Client domain type ──

use serde::{Deserialize, Serialize};

use super::mac::MacAddress;

/// A station connected to the network, as reported by `stat/sta`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub mac: MacAddress,
    pub ip: String,
    pub hostname: String,
    /// Operator-assigned alias.
    pub name: String,
    pub network: String,
    /// Empty when the client is not seen behind a switch port.
    pub switch_mac: MacAddress,
    pub switch_port: Option<i64>,
    /// Empty for wired clients.
    pub ap_mac: MacAddress,
    pub rssi: i64,
    pub note: String,
    pub site: String,
    /// Epoch seconds.
    pub last_seen: Option<i64>,

    // Derived by the client correlator; empty until then.
    pub switch_name: String,
    pub ap_name: String,
}
