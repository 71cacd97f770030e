// ── Device correlator ──
//
// Resolves each device's uplink. Switches publish which neighbor sits on
// which of their ports; that downlink view wins over what a device declares
// about itself, except for gateways, which never appear as a downlink.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::model::{
    DeclaredUplink, Device, DeviceInventory, DeviceKind, MacAddress, ManagedDevice, Uplink,
};

/// Appended to the note of a switch no other switch lists as a downlink.
pub const ROOT_NOTE: &str = "root";

/// How many devices of one kind were fetched and how many made the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindCount {
    pub kind: DeviceKind,
    pub available: usize,
    pub added: usize,
}

/// Correlated devices grouped by kind, plus per-kind counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceReport {
    pub devices: Vec<Device>,
    pub counts: Vec<KindCount>,
}

/// Map every downlink MAC to the switch port it hangs off. Last write wins.
fn downlink_map(switches: &[ManagedDevice]) -> HashMap<MacAddress, Uplink> {
    let mut map = HashMap::new();
    for switch in switches {
        for entry in &switch.downlinks {
            map.insert(
                entry.mac.clone(),
                Uplink {
                    mac: switch.mac.clone(),
                    name: switch.name.clone(),
                    port: entry.port.clone(),
                },
            );
        }
    }
    map
}

/// Resolve uplinks for the whole inventory.
///
/// Output is grouped gateway, switch, access point, next-gen gateway, each
/// group in inventory order.
pub fn correlate_devices(inventory: &DeviceInventory) -> DeviceReport {
    let downlinks = downlink_map(&inventory.switches);
    let mut report = DeviceReport {
        devices: Vec::with_capacity(inventory.len()),
        counts: Vec::new(),
    };

    for kind in DeviceKind::iter() {
        let raw = inventory.of_kind(kind);
        let before = report.devices.len();
        report
            .devices
            .extend(raw.iter().map(|d| build_device(kind, d, &downlinks)));
        report.counts.push(KindCount {
            kind,
            available: raw.len(),
            added: report.devices.len() - before,
        });
    }
    report
}

fn build_device(
    kind: DeviceKind,
    raw: &ManagedDevice,
    downlinks: &HashMap<MacAddress, Uplink>,
) -> Device {
    let mut note = raw.note.clone();
    let uplink = match kind {
        DeviceKind::Gateway => declared_uplink(raw, |u| u.port_idx.as_ref()),
        DeviceKind::Switch => match downlinks.get(&raw.mac) {
            Some(parent) => Some(parent.clone()),
            None => {
                mark_root(&mut note);
                declared_uplink(raw, |u| u.num_port.as_ref())
            }
        },
        DeviceKind::AccessPoint | DeviceKind::NextGenGateway => downlinks.get(&raw.mac).cloned(),
    };

    Device {
        mac: raw.mac.clone(),
        name: raw.name.clone(),
        kind,
        site: raw.site.clone(),
        ip: raw.ip.clone(),
        note,
        config: raw.config.clone(),
        uplink,
    }
}

/// The device's own view of its uplink. A declaration without a neighbor MAC
/// names nothing and counts as no uplink.
fn declared_uplink(
    raw: &ManagedDevice,
    port: impl Fn(&DeclaredUplink) -> Option<&String>,
) -> Option<Uplink> {
    raw.uplink
        .as_ref()
        .filter(|u| !u.mac.is_empty())
        .map(|u| Uplink {
            mac: u.mac.clone(),
            name: String::new(),
            port: port(u).cloned().unwrap_or_default(),
        })
}

fn mark_root(note: &mut String) {
    if !note.is_empty() {
        note.push(' ');
    }
    note.push_str(ROOT_NOTE);
}
