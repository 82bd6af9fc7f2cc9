//! Mock route registration and lookup.
//!
//! [`RouteRegistry`] is the explicit list of routes built once at startup
//! from a fixture scan and handed to the HTTP layer, which asks it for the
//! route matching each request.

pub mod registry;

pub use registry::{MockRoute, Registration, Request, RouteRegistry};
