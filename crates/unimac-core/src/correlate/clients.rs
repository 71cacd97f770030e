// ── Client correlator ──

use std::collections::HashMap;

use crate::model::{Client, DeviceInventory, MacAddress, ManagedDevice};

/// Device MAC → device display name.
pub type NameMap = HashMap<MacAddress, String>;

fn name_map(devices: &[ManagedDevice]) -> NameMap {
    devices
        .iter()
        .map(|d| (d.mac.clone(), d.name.clone()))
        .collect()
}

/// Names of every switch in the inventory, keyed by MAC.
pub fn switch_names(inventory: &DeviceInventory) -> NameMap {
    name_map(&inventory.switches)
}

/// Names of every access point in the inventory, keyed by MAC.
pub fn ap_names(inventory: &DeviceInventory) -> NameMap {
    name_map(&inventory.access_points)
}

/// Fill `switch_name` and `ap_name` from the lookup maps.
///
/// The two lookups are independent. An empty reference or a MAC with no
/// matching device leaves the field empty.
pub fn hydrate_clients(clients: &mut [Client], switches: &NameMap, aps: &NameMap) {
    for client in clients.iter_mut() {
        if let Some(name) = lookup(switches, &client.switch_mac) {
            client.switch_name = name.to_owned();
        }
        if let Some(name) = lookup(aps, &client.ap_mac) {
            client.ap_name = name.to_owned();
        }
    }
}

fn lookup<'a>(map: &'a NameMap, mac: &MacAddress) -> Option<&'a str> {
    if mac.is_empty() {
        return None;
    }
    map.get(mac).map(String::as_str)
}

/// Ascending by MAC; clients sharing a MAC keep their relative order.
pub fn sort_by_mac(clients: &mut [Client]) {
    clients.sort_by(|a, b| a.mac.cmp(&b.mac));
}
