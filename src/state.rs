use std::sync::Arc;

use crate::{config::Config, repositories::records::RecordSource};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn RecordSource>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn RecordSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }
}
