//! Command-line interface.

use crate::config::{ServerConfig, DEFAULT_MOUNT_ROOT, DEFAULT_PORT, DEFAULT_ROOT};
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

/// Start a mock server with endpoints served from static JSON fixtures
#[derive(Debug, Parser)]
#[command(name = "mockapi", version, about)]
pub struct Cli {
    /// Provide verbose information
    #[arg(short, long)]
    pub verbose: bool,

    /// IP address where the mock server will be hosted
    #[arg(short, long, default_value = "0.0.0.0")]
    pub ip: IpAddr,

    /// Port where the mock server will listen
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Root directory where the static api mocks are placed
    #[arg(short = 'M', long = "static-mock", value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub static_mock: PathBuf,

    /// URL prefix under which every mock route is registered
    #[arg(short, long, default_value = DEFAULT_MOUNT_ROOT)]
    pub mount_root: String,
}

impl Cli {
    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            ip: self.ip,
            port: self.port,
            root: self.static_mock.clone(),
            mount_root: self.mount_root.clone(),
        }
    }
}
