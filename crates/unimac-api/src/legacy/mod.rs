// Legacy API client modules
//
// Hand-written client for the UniFi controller's legacy (non-OpenAPI)
// endpoints, wrapped in the standard `{ meta: { rc, msg }, data: [...] }`
// envelope. Only the read endpoints a topology report needs are covered.

pub mod auth;
pub mod client;
pub mod clients;
pub mod devices;
pub mod models;
pub mod sites;

pub use client::LegacyClient;
