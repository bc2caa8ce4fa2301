// ============================================================================
// Menu Core - Route Resolution
// File: crates/menu-core/src/routing.rs
// ============================================================================
//! Named-route lookup in both directions, plus the outcome type used when a
//! menu item's URL is resolved.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use menu_shared::constants::PLACEHOLDER_URL;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route named '{0}'")]
    NoReverseMatch(String),

    #[error("No route matches path '{0}'")]
    NoRouteMatch(String),
}

/// Route-resolution service consumed by the menu renderer.
pub trait UrlResolver: Send + Sync {
    /// Symbolic route name → concrete path.
    fn reverse(&self, name: &str) -> Result<String, RouteError>;

    /// Concrete path → symbolic route name.
    fn resolve(&self, path: &str) -> Result<String, RouteError>;
}

/// Exact-match route table built from configuration.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    by_name: HashMap<String, String>,
    by_path: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` → `path`. The first registration of a name or path wins.
    pub fn register(&mut self, name: impl Into<String>, path: impl Into<String>) -> &mut Self {
        let name = name.into();
        let path = path.into();

        if self.by_name.contains_key(&name) {
            warn!("Ignoring duplicate route name: {}", name);
            return self;
        }
        self.by_path.entry(path.clone()).or_insert_with(|| name.clone());
        self.by_name.insert(name, path);
        self
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl<N, P> FromIterator<(N, P)> for RouteTable
where
    N: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for (name, path) in iter {
            table.register(name, path);
        }
        table
    }
}

impl UrlResolver for RouteTable {
    fn reverse(&self, name: &str) -> Result<String, RouteError> {
        self.by_name
            .get(name)
            .cloned()
            .ok_or_else(|| RouteError::NoReverseMatch(name.to_string()))
    }

    fn resolve(&self, path: &str) -> Result<String, RouteError> {
        self.by_path
            .get(path)
            .cloned()
            .ok_or_else(|| RouteError::NoRouteMatch(path.to_string()))
    }
}

/// How a menu item's display URL was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum ResolvedUrl {
    /// `named_url` reversed to a registered route.
    Route(String),
    /// `named_url` did not reverse; used literally.
    Fallback(String),
    /// `explicit_url` used verbatim.
    Explicit(String),
    /// Neither URL set.
    Placeholder,
}

impl ResolvedUrl {
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedUrl::Route(url) | ResolvedUrl::Fallback(url) | ResolvedUrl::Explicit(url) => url,
            ResolvedUrl::Placeholder => PLACEHOLDER_URL,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ResolvedUrl::Route(url) | ResolvedUrl::Fallback(url) | ResolvedUrl::Explicit(url) => url,
            ResolvedUrl::Placeholder => PLACEHOLDER_URL.to_string(),
        }
    }

    pub fn is_navigable(&self) -> bool {
        !matches!(self, ResolvedUrl::Placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        [("home", "/"), ("product_list", "/products/")].into_iter().collect()
    }

    #[test]
    fn test_reverse_and_resolve() {
        let routes = table();
        assert_eq!(routes.reverse("product_list").unwrap(), "/products/");
        assert_eq!(routes.resolve("/").unwrap(), "home");
        assert_eq!(
            routes.reverse("missing"),
            Err(RouteError::NoReverseMatch("missing".into()))
        );
        assert_eq!(
            routes.resolve("/nowhere/"),
            Err(RouteError::NoRouteMatch("/nowhere/".into()))
        );
    }

    #[test]
    fn test_first_registration_wins() {
        let mut routes = table();
        routes.register("home", "/other/");
        routes.register("landing", "/");
        assert_eq!(routes.reverse("home").unwrap(), "/");
        assert_eq!(routes.resolve("/").unwrap(), "home");
        assert_eq!(routes.reverse("landing").unwrap(), "/");
        assert_eq!(routes.len(), 3);
    }

    #[test]
    fn test_resolved_url_as_str() {
        assert_eq!(ResolvedUrl::Route("/a/".into()).as_str(), "/a/");
        assert_eq!(ResolvedUrl::Placeholder.as_str(), "#");
        assert!(!ResolvedUrl::Placeholder.is_navigable());
        assert_eq!(ResolvedUrl::Fallback("about-us".into()).into_string(), "about-us");
    }
}
