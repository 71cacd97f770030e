// ── Domain model ──
//
// Records built fresh for each run from the controller's wire models.
// Correlation fills the derived fields; rendering only reads them.

pub mod client;
pub mod device;
pub mod mac;
pub mod site;

pub use client::Client;
pub use device::{
    ConfigNetwork, DeclaredUplink, Device, DeviceInventory, DeviceKind, Downlink, ManagedDevice,
    NO_UPLINK, Uplink,
};
pub use mac::MacAddress;
pub use site::Site;
