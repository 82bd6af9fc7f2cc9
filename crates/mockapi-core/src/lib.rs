//! Core library for the mockapi fixture server.
//!
//! Maps a directory of JSON fixture files onto HTTP routes by naming
//! convention and loads the canned responses they describe. Nothing in here
//! depends on a particular HTTP library; `mockapi-server` wires it to axum.

pub mod fixture;
pub mod matching;
pub mod mocks;
pub mod routing;
pub mod scan;
pub mod types;
