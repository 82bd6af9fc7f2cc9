//! Registry of fixture-backed routes.

use crate::matching::{parse_query_string, query_matches, UrlPattern};
use crate::routing::RouteDescriptorBuilder;
use crate::scan::{FixturePath, FixtureSource, ScanError};
use crate::types::route::{HttpMethod, RouteDescriptor};
use std::collections::HashMap;
use std::path::PathBuf;

/// Incoming request as seen by route lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// `None` for methods no fixture can be served on
    pub method: Option<HttpMethod>,
    /// Percent-decoded request path
    pub path: String,
    /// Raw query string without the leading `?`
    pub query: String,
}

impl Request {
    pub fn new(
        method: Option<HttpMethod>,
        path: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            query: query.into(),
        }
    }

    /// Build a lookup request from raw HTTP parts.
    ///
    /// The path is percent-decoded so it compares against directory names;
    /// the query is kept raw and decoded during matching.
    pub fn from_parts(method: &str, path: &str, query: Option<&str>) -> Self {
        let path = urlencoding::decode(path)
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| path.to_owned());

        Self::new(method.parse().ok(), path, query.unwrap_or_default())
    }
}

/// A registered route and the fixture that answers it
#[derive(Debug, Clone)]
pub struct MockRoute {
    pub descriptor: RouteDescriptor,
    pub fixture: FixturePath,
    pattern: UrlPattern,
}

impl MockRoute {
    pub fn new(descriptor: RouteDescriptor, fixture: FixturePath) -> Self {
        let pattern = UrlPattern::new(&descriptor.url);
        Self {
            descriptor,
            fixture,
            pattern,
        }
    }

    fn matches(&self, method: HttpMethod, path: &str, query: &HashMap<String, String>) -> bool {
        self.descriptor.method == method
            && self.pattern.matches(path)
            && query_matches(&self.descriptor.query, query)
    }
}

/// Outcome of [`RouteRegistry::register`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Registered,
    /// An identical route was registered earlier and keeps serving;
    /// `by` is that route's fixture file
    Shadowed { by: PathBuf },
}

/// Ordered routes, first registration wins on duplicates.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: Vec<MockRoute>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Build the registry from every fixture under `source`, in scan order.
    pub fn from_source(
        source: &FixtureSource,
        builder: &RouteDescriptorBuilder,
    ) -> Result<Self, ScanError> {
        let mut registry = Self::new();
        for fixture in source.collect()? {
            let descriptor = builder.build(&fixture.relative);
            registry.register(descriptor, fixture);
        }
        Ok(registry)
    }

    /// Add a route unless one with the same method, template and query pairs
    /// is already registered.
    pub fn register(&mut self, descriptor: RouteDescriptor, fixture: FixturePath) -> Registration {
        if let Some(existing) = self.routes.iter().find(|r| r.descriptor == descriptor) {
            tracing::warn!(
                route = %descriptor,
                fixture = %fixture.absolute.display(),
                shadowed_by = %existing.fixture.absolute.display(),
                "Duplicate route ignored"
            );
            return Registration::Shadowed {
                by: existing.fixture.absolute.clone(),
            };
        }

        tracing::debug!(route = %descriptor, fixture = %fixture.relative, "Route registered");
        self.routes.push(MockRoute::new(descriptor, fixture));
        Registration::Registered
    }

    pub fn routes(&self) -> &[MockRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Find the route answering `request`.
    ///
    /// Among the routes whose method, template and query pairs all match,
    /// the one declaring the most query pairs wins; ties go to the earliest
    /// registered.
    pub fn find_route(&self, request: &Request) -> Option<&MockRoute> {
        let method = request.method?;
        let query = parse_query_string(&request.query);

        self.routes
            .iter()
            .filter(|route| route.matches(method, &request.path, &query))
            .fold(None, |best: Option<&MockRoute>, route| match best {
                Some(b) if b.descriptor.query.len() >= route.descriptor.query.len() => Some(b),
                _ => Some(route),
            })
    }
}
