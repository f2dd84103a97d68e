use std::sync::Arc;

use crate::config::Config;
use crate::core::api::HttpQuantityStore;
use crate::core::auth::AuthStore;
use crate::core::model::CountryRef;

/// Shared application state, threaded through every screen update.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub store: HttpQuantityStore,
    pub catalog: Arc<Vec<CountryRef>>,
    pub auth: Box<dyn AuthStore>,
    pub menu_open: bool,
}
