//! Core domain types for route descriptors and fixture responses.

pub mod fixture;
pub mod route;
