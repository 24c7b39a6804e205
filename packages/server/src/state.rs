use std::sync::Arc;

use common::MetricSource;
use common::store::Store;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub metrics: Arc<dyn MetricSource>,
    pub config: AppConfig,
}
