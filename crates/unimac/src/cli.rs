//! Clap derive structures for the `unimac` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use unimac_core::config::DEFAULT_HOST;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unimac -- where is every client and device plugged in?
#[derive(Debug, Parser)]
#[command(
    name = "unimac",
    version,
    about = "Map UniFi clients and devices to the switch ports and access points they use",
    long_about = "Queries a UniFi network controller for its sites, clients, and managed\n\
        devices, resolves which switch port or access point each one hangs off,\n\
        and prints the result as a table or writes it as CSV, JSON, or XLSX.",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller address
    #[arg(long, short = 'H', env = "UNIMAC_HOST", default_value = DEFAULT_HOST, global = true)]
    pub host: String,

    /// Controller username
    #[arg(long, short = 'u', env = "UNIMAC_USER", default_value = "", hide_default_value = true, global = true)]
    pub username: String,

    /// Controller password
    #[arg(
        long,
        short = 'p',
        env = "UNIMAC_PASSWORD",
        hide_env_values = true,
        default_value = "",
        hide_default_value = true,
        global = true
    )]
    pub password: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    pub timeout: u64,

    /// Verify the controller's TLS certificate against the system roots
    #[arg(long, global = true)]
    pub verify_tls: bool,

    /// Trust the CA certificate in this PEM file (implies verification)
    #[arg(long, env = "UNIMAC_CA_CERT", value_name = "PEM", global = true)]
    pub ca_cert: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress messages
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report managed devices and their uplinks
    Devices(DevicesArgs),

    /// Report connected clients and where they attach
    Clients(ClientsArgs),

    /// Print the version
    Version,

    /// Print license notices
    Licenses,
}

#[derive(Debug, Args)]
pub struct DevicesArgs {
    /// Write the report to a .csv, .json, or .xlsx file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ClientsArgs {
    /// Write the report to a .csv, .json, or .xlsx file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Sort clients by MAC address
    #[arg(long, short = 's')]
    pub sort: bool,
}
