mod sea;

use std::sync::Arc;

use common::store::{MemoryStore, Store};
use sea_orm::DbErr;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::init_db;

pub use sea::SeaStore;

/// Database URL prefix selecting the in-process store.
pub const MEMORY_URL_PREFIX: &str = "memory://";

/// Open the store described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn Store>, DbErr> {
    if config.url.starts_with(MEMORY_URL_PREFIX) {
        info!("Using in-memory store; data is lost on restart");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let db = init_db(config).await?;
    info!("Connected to database");
    Ok(Arc::new(SeaStore::new(db)))
}
