use std::sync::Arc;

use crate::config::Config;
use crate::services::telegram::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub notifier: Arc<dyn Notifier>,
}
