//! Route descriptor builder.

use crate::routing::stages::{RouteDraft, StageContext, STAGES};
use crate::types::route::RouteDescriptor;

/// Derives a [`RouteDescriptor`] from a fixture path relative to the root.
///
/// The builder holds no state besides its mount root, so building the same
/// path twice always gives equal descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDescriptorBuilder {
    ctx: StageContext,
}

impl RouteDescriptorBuilder {
    /// Create a builder that registers routes under `mount_root`
    pub fn new(mount_root: &str) -> Self {
        Self {
            ctx: StageContext::new(mount_root),
        }
    }

    pub fn mount_root(&self) -> &str {
        if self.ctx.mount_root.is_empty() {
            "/"
        } else {
            &self.ctx.mount_root
        }
    }

    /// Run every stage over `relative_path` and return the finished route.
    ///
    /// The path is expected to end in `.json`; scanning only yields such
    /// files. Malformed brace pairs are passed through untouched.
    pub fn build(&self, relative_path: &str) -> RouteDescriptor {
        let draft = STAGES
            .iter()
            .fold(RouteDraft::new(relative_path), |draft, stage| {
                (stage.apply)(draft, &self.ctx)
            });

        RouteDescriptor {
            method: draft.method,
            url: draft.url,
            query: draft.query,
        }
    }
}
