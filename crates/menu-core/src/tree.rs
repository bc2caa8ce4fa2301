// ============================================================================
// Menu Core - Menu Tree Builder
// File: crates/menu-core/src/tree.rs
// ============================================================================
//! Rebuilds the parent/child forest of one menu from its flat, order-sorted
//! rows and annotates every node for the presentation layer.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::MenuItem;
use crate::routing::UrlResolver;

/// One annotated node of a rendered menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    pub item: MenuItem,
    pub url: String,
    /// `false` for the `#` placeholder.
    pub navigable: bool,
    pub is_active: bool,
    pub has_active_child: bool,
    pub should_expand: bool,
    pub children: Vec<MenuNode>,
}

/// Everything a menu template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMenu {
    pub menu_tree: Vec<MenuNode>,
    pub menu_name: String,
    pub current_url: String,
    /// Route name `current_url` resolved to, if any.
    pub current_route_name: Option<String>,
}

impl MenuNode {
    /// Depth-first search by item id.
    pub fn find(&self, id: Uuid) -> Option<&MenuNode> {
        if self.item.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(MenuNode::count).sum::<usize>()
    }
}

impl RenderedMenu {
    pub fn find(&self, id: Uuid) -> Option<&MenuNode> {
        self.menu_tree.iter().find_map(|root| root.find(id))
    }
}

/// Builds the annotated forest for one menu.
///
/// `items` must already be filtered to a single menu and sorted by `order`;
/// sibling order follows input order. An item whose parent is not among
/// `items` (e.g. a parent stored under another menu) becomes a root. Items
/// caught in a parent cycle are unreachable from any root and are dropped.
pub fn build_menu_tree<R: UrlResolver + ?Sized>(
    items: &[MenuItem],
    current_path: &str,
    current_route_name: Option<&str>,
    resolver: &R,
) -> Vec<MenuNode> {
    let builder = TreeBuilder::new(items, current_path, current_route_name, resolver);
    let mut roots = builder.build_level(None);
    mark_expanded(&mut roots);

    let emitted: usize = roots.iter().map(MenuNode::count).sum();
    if emitted < items.len() {
        warn!(
            "{} of {} menu items unreachable from a root (parent cycle)",
            items.len() - emitted,
            items.len()
        );
    }
    roots
}

struct TreeBuilder<'a, R: ?Sized> {
    children_of: HashMap<Option<Uuid>, Vec<&'a MenuItem>>,
    current_path: &'a str,
    current_route_name: Option<&'a str>,
    resolver: &'a R,
}

impl<'a, R: UrlResolver + ?Sized> TreeBuilder<'a, R> {
    fn new(
        items: &'a [MenuItem],
        current_path: &'a str,
        current_route_name: Option<&'a str>,
        resolver: &'a R,
    ) -> Self {
        let known: HashSet<Uuid> = items.iter().map(|item| item.id).collect();

        // Single grouping pass; Vec push keeps input (order-sorted) sequence.
        let mut children_of: HashMap<Option<Uuid>, Vec<&MenuItem>> = HashMap::new();
        for item in items {
            let parent = item.parent_id.filter(|p| known.contains(p));
            if item.parent_id.is_some() && parent.is_none() {
                debug!("Menu item '{}' has a parent outside this menu, treating as root", item.name);
            }
            children_of.entry(parent).or_default().push(item);
        }

        Self {
            children_of,
            current_path,
            current_route_name: current_route_name.filter(|name| !name.is_empty()),
            resolver,
        }
    }

    fn build_level(&self, parent: Option<Uuid>) -> Vec<MenuNode> {
        self.children_of
            .get(&parent)
            .map(|siblings| siblings.iter().map(|item| self.build_node(item)).collect())
            .unwrap_or_default()
    }

    fn build_node(&self, item: &MenuItem) -> MenuNode {
        let children = self.build_level(Some(item.id));
        let resolved = item.resolve_url(self.resolver);
        let navigable = resolved.is_navigable();
        let url = resolved.into_string();
        let is_active = self.is_active(item, &url);
        let has_active_child = children
            .iter()
            .any(|child| child.is_active || child.has_active_child);

        MenuNode {
            item: item.clone(),
            url,
            navigable,
            is_active,
            has_active_child,
            should_expand: false,
            children,
        }
    }

    /// Route-name match first, then literal URL match.
    fn is_active(&self, item: &MenuItem, url: &str) -> bool {
        if let Some(route_name) = self.current_route_name {
            if item.named_url.as_deref() == Some(route_name) {
                return true;
            }
        }
        url == self.current_path
    }
}

/// Sets `should_expand` on roots and, under an expanding root, on its direct
/// children. Deeper nodes keep `false`.
fn mark_expanded(roots: &mut [MenuNode]) {
    for root in roots.iter_mut() {
        root.should_expand = root.is_active || root.has_active_child;
        if root.should_expand {
            for child in root.children.iter_mut() {
                child.should_expand = child.is_active || child.has_active_child;
            }
        }
    }
}
