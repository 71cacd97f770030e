//! Topology correlation and report generation for UniFi controllers.
//!
//! This crate sits between `unimac-api` and the `unimac` CLI:
//!
//! - **[`ControllerSource`]**: sites, clients, and a [`DeviceInventory`]
//!   partitioned by device kind. [`Controller`] implements it over the
//!   controller's legacy API.
//!
//! - **Correlation** ([`correlate`]): resolves MAC references into names,
//!   i.e. which switch or access point each client hangs off, and which neighbor
//!   and port each device uplinks to.
//!
//! - **Reports** ([`report`]): one column enum per record type drives the
//!   table, CSV, JSON, and XLSX renderers, so every format agrees on labels
//!   and order.

pub mod config;
pub mod controller;
pub mod convert;
pub mod correlate;
pub mod error;
pub mod model;
pub mod report;
pub mod source;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ControllerConfig, TlsVerification};
pub use controller::Controller;
pub use correlate::{DeviceReport, KindCount, correlate_devices, hydrate_clients, sort_by_mac};
pub use error::CoreError;
pub use report::{Cell, RenderError, ReportFormat, ReportRow};
pub use source::ControllerSource;

pub use model::{
    Client, ConfigNetwork, DeclaredUplink, Device, DeviceInventory, DeviceKind, Downlink,
    MacAddress, ManagedDevice, NO_UPLINK, Site, Uplink,
};
