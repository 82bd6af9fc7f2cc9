//! HTTP layer for the mockapi fixture server.
//!
//! Wires the route registry from `mockapi-core` into an axum router with a
//! single fallback handler and permissive CORS.

pub mod cli;
pub mod config;
pub mod cors;
pub mod handler;
pub mod logging;
pub mod server;

pub use config::ServerConfig;
pub use server::{app, load_registry, run};
