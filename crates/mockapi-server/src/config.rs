//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ROOT: &str = "./mock-api";
pub const DEFAULT_MOUNT_ROOT: &str = "/";

/// Settings needed to scan fixtures and bind the listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub ip: IpAddr,
    pub port: u16,
    /// Directory holding the JSON fixtures
    pub root: PathBuf,
    /// URL prefix for every derived route
    pub mount_root: String,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            root: PathBuf::from(DEFAULT_ROOT),
            mount_root: DEFAULT_MOUNT_ROOT.to_string(),
        }
    }
}
