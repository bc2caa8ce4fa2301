use std::sync::Arc;

use handlebars::{Handlebars, TemplateError};

use menu_core::repositories::MenuItemRepository;
use menu_core::services::{MenuItemService, MenuService};
use menu_core::RouteTable;
use menu_shared::config::AppConfig;

use crate::templates::build_templates;

#[derive(Clone)]
pub struct AppState {
    pub menu_repo: Arc<dyn MenuItemRepository>,
    pub routes: Arc<RouteTable>,
    pub templates: Arc<Handlebars<'static>>,
    pub config: AppConfig,
}

impl AppState {
    /// Builds the route table from `config.routes` and loads templates.
    pub fn new(menu_repo: Arc<dyn MenuItemRepository>, config: AppConfig) -> Result<Self, TemplateError> {
        let routes: RouteTable = config
            .routes
            .iter()
            .map(|route| (route.name.clone(), route.path.clone()))
            .collect();

        Ok(Self {
            menu_repo,
            routes: Arc::new(routes),
            templates: Arc::new(build_templates()?),
            config,
        })
    }

    pub fn menu_service(&self) -> MenuService<dyn MenuItemRepository, RouteTable> {
        MenuService::new(self.menu_repo.clone(), self.routes.clone())
    }

    pub fn menu_item_service(&self) -> MenuItemService<dyn MenuItemRepository> {
        MenuItemService::new(self.menu_repo.clone())
    }
}
