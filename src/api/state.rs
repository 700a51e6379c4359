use std::sync::Arc;

use crate::config::AppConfig;
use crate::fetch::Fetcher;
use crate::registry::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub fetcher: Arc<Fetcher>,
    pub registry: SessionRegistry,
}
