// ── API-to-domain type conversions ──
//
// Bridges raw `unimac_api` legacy models into `unimac_core::model` records.
// Missing optional strings become empty, so downstream code never matches on
// `Option<String>` for display fields.

use unimac_api::legacy::models::{
    LegacyClientEntry, LegacyConfigNetwork, LegacyDevice, LegacyDownlink, LegacySite,
    LegacyUplink,
};

use crate::model::{
    Client, ConfigNetwork, DeclaredUplink, Downlink, MacAddress, ManagedDevice, Site,
};

fn text(raw: Option<String>) -> String {
    raw.unwrap_or_default()
}

// ── Site ───────────────────────────────────────────────────────────

impl From<LegacySite> for Site {
    fn from(s: LegacySite) -> Self {
        Site {
            name: s.name,
            description: text(s.desc),
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Build a [`Client`] stamped with the owning site's display name.
pub fn client_from_legacy(c: LegacyClientEntry, site: &str) -> Client {
    Client {
        mac: MacAddress::new(&c.mac),
        ip: text(c.ip),
        hostname: text(c.hostname),
        name: text(c.name),
        network: text(c.network),
        switch_mac: MacAddress::from(c.sw_mac.as_ref()),
        switch_port: c.sw_port,
        ap_mac: MacAddress::from(c.ap_mac.as_ref()),
        rssi: c.rssi.map_or(0, i64::from),
        note: text(c.note),
        site: site.to_owned(),
        last_seen: c.last_seen,
        switch_name: String::new(),
        ap_name: String::new(),
    }
}

// ── Device ─────────────────────────────────────────────────────────

impl From<LegacyConfigNetwork> for ConfigNetwork {
    fn from(c: LegacyConfigNetwork) -> Self {
        ConfigNetwork {
            kind: text(c.kind),
            ip: text(c.ip),
        }
    }
}

impl From<LegacyUplink> for DeclaredUplink {
    fn from(u: LegacyUplink) -> Self {
        // Newer firmware names the neighbor in `uplink_mac`; `mac` is the
        // older spelling of the same field.
        let mac = u.uplink_mac.or(u.mac);
        DeclaredUplink {
            mac: MacAddress::from(mac.as_ref()),
            port_idx: u.port_idx,
            num_port: u.num_port,
        }
    }
}

impl From<LegacyDownlink> for Downlink {
    fn from(d: LegacyDownlink) -> Self {
        Downlink {
            mac: MacAddress::new(&d.mac),
            port: text(d.port_idx),
        }
    }
}

/// Build a [`ManagedDevice`] stamped with the owning site's display name.
///
/// The downlink table is kept for every kind; only switches populate it.
pub fn managed_device_from_legacy(d: LegacyDevice, site: &str) -> ManagedDevice {
    ManagedDevice {
        mac: MacAddress::new(&d.mac),
        name: text(d.name),
        site: site.to_owned(),
        ip: text(d.ip),
        note: text(d.note),
        config: d.config_network.map(ConfigNetwork::from),
        uplink: d.uplink.map(DeclaredUplink::from),
        downlinks: d.downlink_table.into_iter().map(Downlink::from).collect(),
    }
}
