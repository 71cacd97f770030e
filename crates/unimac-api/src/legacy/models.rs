// Legacy API response types
//
// Models for the UniFi controller's legacy JSON API. All responses are wrapped
// in the `LegacyResponse<T>` envelope. Fields use `#[serde(default)]` liberally
// because the API is inconsistent about field presence across firmware versions.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Response Envelope ────────────────────────────────────────────────

/// Standard UniFi legacy API response envelope.
///
/// Every legacy endpoint wraps its payload:
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
#[derive(Debug, Deserialize)]
pub struct LegacyResponse<T> {
    pub meta: Meta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Metadata from the legacy envelope. `rc` == `"ok"` means success.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub rc: String,
    #[serde(default)]
    pub msg: Option<String>,
}

// ── Flexible scalars ─────────────────────────────────────────────────

/// Accept a number or a string and keep it as text.
///
/// Port indices arrive as `5` on most firmware and `"5"` on some.
fn flex_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accept a number or a numeric string as an integer.
fn flex_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

// ── Device ───────────────────────────────────────────────────────────

/// Full device object from `stat/device`.
///
/// The legacy API can return 100+ fields per device. We model the ones the
/// topology report needs explicitly; everything else lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyDevice {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub mac: String,
    /// `ugw`/`usg`, `usw`, `uap`, `uxg`, `udm`, ...
    #[serde(rename = "type", default)]
    pub device_type: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// The device's own view of its upstream link.
    #[serde(default)]
    pub uplink: Option<LegacyUplink>,
    /// Switches only: which neighbor hangs off which port.
    #[serde(default)]
    pub downlink_table: Vec<LegacyDownlink>,
    #[serde(default)]
    pub config_network: Option<LegacyConfigNetwork>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The `uplink` object nested inside `LegacyDevice`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyUplink {
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub uplink_mac: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub port_idx: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub num_port: Option<String>,
}

/// One row of a switch's `downlink_table`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyDownlink {
    pub mac: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub port_idx: Option<String>,
}

/// Management network settings from `config_network`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyConfigNetwork {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
}

// ── Client (Station) ─────────────────────────────────────────────────

/// Connected client from `stat/sta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyClientEntry {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub mac: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub rssi: Option<i32>,
    #[serde(default)]
    pub last_seen: Option<i64>,
    #[serde(default)]
    pub ap_mac: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub sw_mac: Option<String>,
    #[serde(default, deserialize_with = "flex_int")]
    pub sw_port: Option<i64>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// ── Site ─────────────────────────────────────────────────────────────

/// Site object from `/api/self/sites`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacySite {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn port_indices_accept_numbers_and_strings() {
        let dl: LegacyDownlink =
            serde_json::from_value(json!({ "mac": "aa:bb", "port_idx": 5 })).unwrap();
        assert_eq!(dl.port_idx.as_deref(), Some("5"));

        let dl: LegacyDownlink =
            serde_json::from_value(json!({ "mac": "aa:bb", "port_idx": "7" })).unwrap();
        assert_eq!(dl.port_idx.as_deref(), Some("7"));

        let dl: LegacyDownlink = serde_json::from_value(json!({ "mac": "aa:bb" })).unwrap();
        assert_eq!(dl.port_idx, None);
    }

    #[test]
    fn device_without_topology_fields() {
        let dev: LegacyDevice =
            serde_json::from_value(json!({ "mac": "aa:bb:cc:dd:ee:ff", "type": "uap" })).unwrap();
        assert!(dev.uplink.is_none());
        assert!(dev.downlink_table.is_empty());
        assert!(dev.config_network.is_none());
    }

    #[test]
    fn client_switch_port_as_string() {
        let sta: LegacyClientEntry = serde_json::from_value(json!({
            "mac": "11:22:33:44:55:66",
            "sw_mac": "aa:bb:cc:dd:ee:ff",
            "sw_port": "12",
            "rssi": 40
        }))
        .unwrap();
        assert_eq!(sta.sw_port, Some(12));
        assert_eq!(sta.rssi, Some(40));
    }

    #[test]
    fn unmodeled_fields_are_kept_in_extra() {
        let site: LegacySite = serde_json::from_value(json!({
            "_id": "s1", "name": "default", "desc": "Default", "role": "admin"
        }))
        .unwrap();
        assert_eq!(site.extra.get("role"), Some(&json!("admin")));
        assert!(!site.extra.contains_key("desc"));

        let up: LegacyUplink = serde_json::from_value(json!({
            "uplink_mac": "aa:bb:cc:dd:ee:ff", "type": "wire", "uplink_remote_port": 3
        }))
        .unwrap();
        assert_eq!(up.uplink_mac.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
        assert_eq!(up.port_idx, None);
    }
}
