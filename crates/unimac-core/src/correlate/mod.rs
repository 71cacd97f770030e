// ── Topology correlation ──
//
// Pure functions from fetched records to report-ready records. A MAC that
// names no known device is a miss, never an error: the derived field stays
// empty (clients) or the uplink stays absent (devices).

pub mod clients;
pub mod devices;

pub use clients::{ap_names, hydrate_clients, sort_by_mac, switch_names};
pub use devices::{DeviceReport, KindCount, correlate_devices};
