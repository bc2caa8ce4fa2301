//! Handlebars templates for menu markup.

use handlebars::{Handlebars, TemplateError};
use tracing::info;

pub const MENU_TEMPLATE: &str = "menu";
pub const PAGE_TEMPLATE: &str = "page";
const MENU_NODE_PARTIAL: &str = "menu_node";

/// Registers the embedded templates. `menu_node` recurses into children.
pub fn build_templates() -> Result<Handlebars<'static>, TemplateError> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(false);
    registry.register_partial(MENU_NODE_PARTIAL, include_str!("../templates/menu_node.hbs"))?;
    registry.register_template_string(MENU_TEMPLATE, include_str!("../templates/menu.hbs"))?;
    registry.register_template_string(PAGE_TEMPLATE, include_str!("../templates/page.hbs"))?;
    info!("Registered {} menu templates", registry.get_templates().len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::{build_menu_tree, MenuItem, RenderedMenu, RouteTable};

    fn render(items: &[MenuItem], path: &str) -> String {
        let routes: RouteTable = [("home", "/")].into_iter().collect();
        let menu = RenderedMenu {
            menu_tree: build_menu_tree(items, path, None, &routes),
            menu_name: "main".into(),
            current_url: path.into(),
            current_route_name: None,
        };
        build_templates().unwrap().render(MENU_TEMPLATE, &menu).unwrap()
    }

    fn item(name: &str, parent: Option<&MenuItem>, url: &str) -> MenuItem {
        MenuItem::new(name.into(), "main".into(), parent.map(|p| p.id), 0, None, Some(url.into())).unwrap()
    }

    #[test]
    fn test_collapsed_branch_hides_children() {
        let products = item("Products", None, "/products/");
        let phones = item("Phones", Some(&products), "/products/phones/");

        let html = render(&[products, phones], "/elsewhere/");
        assert!(html.contains(r#"href="/products/""#));
        assert!(!html.contains("Phones"));
    }

    #[test]
    fn test_active_branch_is_open() {
        let products = item("Products", None, "/products/");
        let phones = item("Phones", Some(&products), "/products/phones/");
        let android = item("Android", Some(&phones), "/products/phones/android/");

        let html = render(&[products, phones, android], "/products/phones/");
        assert!(html.contains("Phones"));
        assert!(html.contains("Android"));
        assert!(html.contains(r#"aria-current="page""#));
        assert!(html.contains("tree-menu__item--expanded"));
    }

    #[test]
    fn test_placeholder_renders_without_link() {
        let section = MenuItem::new("Section".into(), "main".into(), None, 0, None, None).unwrap();
        let html = render(&[section], "/");
        assert!(html.contains(r#"<span class="tree-menu__label">Section</span>"#));
        assert!(!html.contains(r##"href="#""##));
    }

    #[test]
    fn test_labels_are_escaped() {
        let html = render(&[item("<b>Bold</b>", None, "/b/")], "/");
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    }
}
