// ── Column definitions ──
//
// One enum per record type. Variant order is column order in every format;
// the strum label is the header text.

use chrono::{DateTime, Local};
use strum::{EnumIter, IntoStaticStr};

use super::{Cell, ReportRow};
use crate::model::{Client, Device};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum ClientColumn {
    #[strum(serialize = "MAC")]
    Mac,
    #[strum(serialize = "IP")]
    Ip,
    Hostname,
    Name,
    Site,
    Network,
    Switch,
    SwitchPort,
    #[strum(serialize = "AP")]
    Ap,
    #[strum(serialize = "RSSI")]
    Rssi,
    LastSeen,
    Note,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum DeviceColumn {
    #[strum(serialize = "MAC")]
    Mac,
    Type,
    Site,
    #[strum(serialize = "IP")]
    Ip,
    Name,
    /// Reserved; always blank.
    Network,
    Uplink,
    UplinkPort,
    #[strum(serialize = "ConfigIP")]
    ConfigIp,
    Note,
}

/// Epoch seconds as local wall-clock time.
fn last_seen_cell(epoch: Option<i64>) -> Cell {
    epoch
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map_or(Cell::Blank, |dt| Cell::Timestamp(dt.with_timezone(&Local).naive_local()))
}

impl ReportRow for Client {
    type Column = ClientColumn;
    const TITLE: &'static str = "Clients";

    fn cell(&self, column: ClientColumn) -> Cell {
        match column {
            ClientColumn::Mac => self.mac.as_str().into(),
            ClientColumn::Ip => self.ip.as_str().into(),
            ClientColumn::Hostname => self.hostname.as_str().into(),
            ClientColumn::Name => self.name.as_str().into(),
            ClientColumn::Site => self.site.as_str().into(),
            ClientColumn::Network => self.network.as_str().into(),
            ClientColumn::Switch => self.switch_name.as_str().into(),
            ClientColumn::SwitchPort => self.switch_port.into(),
            ClientColumn::Ap => self.ap_name.as_str().into(),
            ClientColumn::Rssi => Cell::Integer(self.rssi),
            ClientColumn::LastSeen => last_seen_cell(self.last_seen),
            ClientColumn::Note => self.note.as_str().into(),
        }
    }
}

impl ReportRow for Device {
    type Column = DeviceColumn;
    const TITLE: &'static str = "Devices";

    fn cell(&self, column: DeviceColumn) -> Cell {
        match column {
            DeviceColumn::Mac => self.mac.as_str().into(),
            DeviceColumn::Type => self.kind.label().into(),
            DeviceColumn::Site => self.site.as_str().into(),
            DeviceColumn::Ip => self.ip.as_str().into(),
            DeviceColumn::Name => self.name.as_str().into(),
            DeviceColumn::Network => Cell::Blank,
            DeviceColumn::Uplink => self.uplink_name().into(),
            DeviceColumn::UplinkPort => self.uplink_port().into(),
            DeviceColumn::ConfigIp => self.config_ip().into(),
            DeviceColumn::Note => self.note.as_str().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DeviceKind, MacAddress, NO_UPLINK};
    use crate::report::header;

    #[test]
    fn client_header_order() {
        assert_eq!(
            header::<Client>(),
            [
                "MAC", "IP", "Hostname", "Name", "Site", "Network", "Switch", "SwitchPort", "AP",
                "RSSI", "LastSeen", "Note",
            ]
        );
    }

    #[test]
    fn device_header_order() {
        assert_eq!(
            header::<Device>(),
            [
                "MAC", "Type", "Site", "IP", "Name", "Network", "Uplink", "UplinkPort", "ConfigIP",
                "Note",
            ]
        );
    }

    #[test]
    fn client_numeric_and_optional_cells() {
        let client = Client {
            mac: MacAddress::new("11:22:33:44:55:66"),
            rssi: 41,
            ..Client::default()
        };
        assert_eq!(client.cell(ClientColumn::Rssi), Cell::Integer(41));
        assert_eq!(client.cell(ClientColumn::SwitchPort), Cell::Blank);
        assert_eq!(client.cell(ClientColumn::LastSeen), Cell::Blank);
        assert_eq!(client.cell(ClientColumn::Switch), Cell::Text(String::new()));
    }

    #[test]
    fn last_seen_uses_local_time() {
        let client = Client {
            last_seen: Some(1_700_000_000),
            ..Client::default()
        };
        let expected = DateTime::from_timestamp(1_700_000_000, 0)
            .map(|dt| dt.with_timezone(&Local).naive_local());
        let cell = client.cell(ClientColumn::LastSeen);
        assert_eq!(Some(&cell), expected.map(Cell::Timestamp).as_ref());
        assert_eq!(
            Some(cell.to_string()),
            expected.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        );
    }

    #[test]
    fn device_without_uplink_or_config() {
        let device = Device {
            mac: MacAddress::new("00:00:00:00:00:03"),
            name: "A1".into(),
            kind: DeviceKind::AccessPoint,
            site: String::new(),
            ip: String::new(),
            note: String::new(),
            config: None,
            uplink: None,
        };
        assert_eq!(device.cell(DeviceColumn::Type), Cell::from("UAP"));
        assert_eq!(device.cell(DeviceColumn::Network), Cell::Blank);
        assert_eq!(device.cell(DeviceColumn::Uplink), Cell::from(NO_UPLINK));
        assert_eq!(device.cell(DeviceColumn::UplinkPort), Cell::from(NO_UPLINK));
        assert_eq!(device.cell(DeviceColumn::ConfigIp), Cell::from(NO_UPLINK));
    }
}
