// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Self-referencing navigation node
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;
use validator::Validate;

use menu_shared::utils::{non_blank, slugify};

use crate::routing::{ResolvedUrl, UrlResolver};

/// One node of a named navigation menu.
///
/// `parent_id` is a key into the same table, not a live reference. Deleting a
/// parent removes its whole subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    pub id: Uuid,

    #[validate(length(min = 1, max = 50, message = "Menu item name must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "Named URL too long"))]
    pub named_url: Option<String>,

    #[validate(length(max = 100, message = "Explicit URL too long"))]
    pub explicit_url: Option<String>,

    pub parent_id: Option<Uuid>,

    #[validate(length(min = 1, max = 50, message = "Menu name must be between 1 and 50 characters"))]
    pub menu_name: String,

    #[validate(range(min = 0, message = "Order must not be negative"))]
    pub order: i32,
}

/// Editable fields of a menu item, as submitted by the admin surface.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MenuItemInput {
    pub name: String,
    pub menu_name: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub named_url: Option<String>,
    #[serde(default)]
    pub explicit_url: Option<String>,
}

impl MenuItem {
    pub fn new(
        name: String,
        menu_name: String,
        parent_id: Option<Uuid>,
        order: i32,
        named_url: Option<String>,
        explicit_url: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            named_url: non_blank(named_url),
            explicit_url: non_blank(explicit_url),
            parent_id,
            menu_name: menu_name.trim().to_string(),
            order,
        };

        item.validate()?;
        Ok(item)
    }

    pub fn from_input(input: MenuItemInput) -> Result<Self, validator::ValidationErrors> {
        Self::new(
            input.name,
            input.menu_name,
            input.parent_id,
            input.order,
            input.named_url,
            input.explicit_url,
        )
    }

    /// Replaces the editable fields, keeping `id`.
    pub fn apply(&mut self, input: MenuItemInput) -> Result<(), validator::ValidationErrors> {
        let updated = Self {
            id: self.id,
            ..Self::from_input(input)?
        };
        *self = updated;
        Ok(())
    }

    /// Fills `named_url` from the slugified name when neither URL is set.
    /// An existing `named_url` is never replaced.
    pub fn prepare_for_save(&mut self) {
        if self.named_url.is_some() || self.explicit_url.is_some() {
            return;
        }
        let slug = slugify(&self.name);
        if slug.is_empty() {
            debug!("Menu item '{}' has no sluggable characters, leaving named_url empty", self.name);
            return;
        }
        self.named_url = Some(slug);
    }

    /// Display URL. A `named_url` always takes priority over `explicit_url`,
    /// even when it fails to reverse.
    pub fn resolve_url<R: UrlResolver + ?Sized>(&self, resolver: &R) -> ResolvedUrl {
        if let Some(named_url) = self.named_url.as_deref().filter(|n| !n.is_empty()) {
            return match resolver.reverse(named_url) {
                Ok(path) => ResolvedUrl::Route(path),
                Err(e) => {
                    warn!("Menu item '{}' falls back to literal URL: {}", self.name, e);
                    ResolvedUrl::Fallback(named_url.to_string())
                }
            };
        }
        match self.explicit_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => ResolvedUrl::Explicit(url.to_string()),
            None => ResolvedUrl::Placeholder,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
