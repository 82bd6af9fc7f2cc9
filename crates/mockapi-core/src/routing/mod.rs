//! Fixture path to route descriptor derivation.
//!
//! A fixture path goes through four named stages, in order:
//! method extraction, URL assembly, query-directory extraction and
//! path-parameter substitution. See [`stages::STAGES`].

pub mod builder;
pub mod stages;

pub use builder::RouteDescriptorBuilder;
pub use stages::{RouteDraft, Stage, StageContext, STAGES};
