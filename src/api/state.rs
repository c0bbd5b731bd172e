use anyhow::Result;
use handlebars::Handlebars;

use crate::ai::chat::ChatService;
use crate::ai::gateway::SharedGateway;
use crate::api::routes::pages::templates;
use crate::core::{AppConfig, BusinessCatalog};

// Nothing here is replaced after startup; mutable chat state lives
// behind the session store's own locks.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: BusinessCatalog,
    pub chat: ChatService,
    pub pages: Handlebars<'static>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: BusinessCatalog, gateway: SharedGateway) -> Result<Self> {
        let chat = ChatService::for_profile(&catalog.profile, gateway, config.chat_timeout)?;
        let pages = templates::templates()?;
        Ok(Self {
            config,
            catalog,
            chat,
            pages,
        })
    }
}
