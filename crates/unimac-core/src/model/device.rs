// ── Device domain types ──

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use super::mac::MacAddress;

/// Rendered in place of an uplink or config field the device does not have.
pub const NO_UPLINK: &str = "none";

/// Managed device family, decided once from the legacy `type` field.
///
/// Declaration order is report order: gateways first, next-gen gateways last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
pub enum DeviceKind {
    #[strum(serialize = "USG")]
    Gateway,
    #[strum(serialize = "USW")]
    Switch,
    #[strum(serialize = "UAP")]
    AccessPoint,
    #[strum(serialize = "UXG")]
    NextGenGateway,
}

impl DeviceKind {
    /// Map a legacy `type` string; `None` for families the report skips.
    pub fn from_legacy_type(raw: &str) -> Option<Self> {
        match raw {
            "ugw" | "usg" => Some(Self::Gateway),
            "usw" => Some(Self::Switch),
            "uap" => Some(Self::AccessPoint),
            "uxg" => Some(Self::NextGenGateway),
            _ => None,
        }
    }

    /// Short family label (`USG`, `USW`, `UAP`, `UXG`).
    pub fn label(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Management network descriptor (`config_network`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigNetwork {
    /// `dhcp` or `static`.
    pub kind: String,
    pub ip: String,
}

/// The neighbor a device hangs off and the port it uses there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uplink {
    pub mac: MacAddress,
    pub name: String,
    pub port: String,
}

impl Uplink {
    /// The neighbor's name, or its MAC when unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.mac.as_str()
        } else {
            &self.name
        }
    }
}

/// A fully correlated device, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub mac: MacAddress,
    pub name: String,
    pub kind: DeviceKind,
    pub site: String,
    pub ip: String,
    pub note: String,
    pub config: Option<ConfigNetwork>,
    pub uplink: Option<Uplink>,
}

impl Device {
    pub fn uplink_name(&self) -> &str {
        self.uplink
            .as_ref()
            .map(Uplink::display_name)
            .filter(|name| !name.is_empty())
            .unwrap_or(NO_UPLINK)
    }

    pub fn uplink_port(&self) -> &str {
        self.uplink
            .as_ref()
            .filter(|u| !u.port.is_empty())
            .map_or(NO_UPLINK, |u| u.port.as_str())
    }

    pub fn config_ip(&self) -> &str {
        self.config
            .as_ref()
            .filter(|c| !c.ip.is_empty())
            .map_or(NO_UPLINK, |c| c.ip.as_str())
    }
}

// ── Raw inventory ────────────────────────────────────────────────────

/// Uplink as the device itself declares it.
///
/// Gateways report their WAN port in `port_idx`; root switches report it in
/// `num_port`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredUplink {
    pub mac: MacAddress,
    pub port_idx: Option<String>,
    pub num_port: Option<String>,
}

/// One entry of a switch's downlink table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Downlink {
    pub mac: MacAddress,
    pub port: String,
}

/// A device as fetched, before correlation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDevice {
    pub mac: MacAddress,
    pub name: String,
    pub site: String,
    pub ip: String,
    pub note: String,
    pub config: Option<ConfigNetwork>,
    pub uplink: Option<DeclaredUplink>,
    /// Populated for switches only.
    pub downlinks: Vec<Downlink>,
}

/// Devices partitioned by kind, each list in controller order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInventory {
    pub gateways: Vec<ManagedDevice>,
    pub switches: Vec<ManagedDevice>,
    pub access_points: Vec<ManagedDevice>,
    pub next_gen_gateways: Vec<ManagedDevice>,
}

impl DeviceInventory {
    pub fn of_kind(&self, kind: DeviceKind) -> &[ManagedDevice] {
        match kind {
            DeviceKind::Gateway => &self.gateways,
            DeviceKind::Switch => &self.switches,
            DeviceKind::AccessPoint => &self.access_points,
            DeviceKind::NextGenGateway => &self.next_gen_gateways,
        }
    }

    pub fn push(&mut self, kind: DeviceKind, device: ManagedDevice) {
        match kind {
            DeviceKind::Gateway => self.gateways.push(device),
            DeviceKind::Switch => self.switches.push(device),
            DeviceKind::AccessPoint => self.access_points.push(device),
            DeviceKind::NextGenGateway => self.next_gen_gateways.push(device),
        }
    }

    pub fn len(&self) -> usize {
        self.gateways.len()
            + self.switches.len()
            + self.access_points.len()
            + self.next_gen_gateways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(uplink: Option<Uplink>, config: Option<ConfigNetwork>) -> Device {
        Device {
            mac: MacAddress::new("aa:bb:cc:00:00:01"),
            name: "ap-lobby".into(),
            kind: DeviceKind::AccessPoint,
            site: "Default (default)".into(),
            ip: "10.0.0.9".into(),
            note: String::new(),
            config,
            uplink,
        }
    }

    #[test]
    fn legacy_type_mapping() {
        assert_eq!(DeviceKind::from_legacy_type("ugw"), Some(DeviceKind::Gateway));
        assert_eq!(DeviceKind::from_legacy_type("usg"), Some(DeviceKind::Gateway));
        assert_eq!(DeviceKind::from_legacy_type("usw"), Some(DeviceKind::Switch));
        assert_eq!(DeviceKind::from_legacy_type("uap"), Some(DeviceKind::AccessPoint));
        assert_eq!(
            DeviceKind::from_legacy_type("uxg"),
            Some(DeviceKind::NextGenGateway)
        );
        assert_eq!(DeviceKind::from_legacy_type("udm"), None);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(DeviceKind::Gateway.to_string(), "USG");
        assert_eq!(DeviceKind::Switch.label(), "USW");
        assert_eq!(DeviceKind::AccessPoint.label(), "UAP");
        assert_eq!(DeviceKind::NextGenGateway.label(), "UXG");
    }

    #[test]
    fn absent_uplink_reads_none() {
        let dev = device(None, None);
        assert_eq!(dev.uplink_name(), NO_UPLINK);
        assert_eq!(dev.uplink_port(), NO_UPLINK);
        assert_eq!(dev.config_ip(), NO_UPLINK);
    }

    #[test]
    fn unnamed_uplink_falls_back_to_mac() {
        let dev = device(
            Some(Uplink {
                mac: MacAddress::new("aa:bb:cc:00:00:00"),
                name: String::new(),
                port: "7".into(),
            }),
            Some(ConfigNetwork {
                kind: "static".into(),
                ip: "10.0.0.9".into(),
            }),
        );
        assert_eq!(dev.uplink_name(), "aa:bb:cc:00:00:00");
        assert_eq!(dev.uplink_port(), "7");
        assert_eq!(dev.config_ip(), "10.0.0.9");
    }

    #[test]
    fn blank_uplink_reads_none() {
        let dev = device(
            Some(Uplink {
                port: "2".into(),
                ..Uplink::default()
            }),
            None,
        );
        assert_eq!(dev.uplink_name(), NO_UPLINK);
        assert_eq!(dev.uplink_port(), "2");
    }
}
