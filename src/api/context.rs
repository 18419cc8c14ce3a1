use crate::config::{AppConfig, Environment};
use crate::db::UserRepository;
use std::sync::Arc;

/// Application context handed to every handler at wiring time
#[derive(Clone)]
pub struct AppContext {
    pub env: Environment,
    pub port: u16,
    /// Service version reported by the health check
    pub version: String,
    pub db: Arc<dyn UserRepository>,
}

impl AppContext {
    pub fn new(config: &AppConfig, db: Arc<dyn UserRepository>) -> Self {
        AppContext {
            env: config.env,
            port: config.port,
            version: config.version.clone(),
            db,
        }
    }
}
