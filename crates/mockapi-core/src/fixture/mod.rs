//! Fixture file loading and parsing.

pub mod error;
pub mod loader;
pub mod parser;

pub use error::FixtureError;
pub use loader::load_fixture;
pub use parser::parse_fixture;
