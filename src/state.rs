//! Application state for the Axum router.

use crate::config::JwtConfig;
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;
use crate::utils::PasswordEncoder;

/// Shared state handed to every request handler.
///
/// Cloning is cheap since Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
    /// JWT configuration for token generation and validation
    pub jwt_config: JwtConfig,
}

impl AppState {
    /// Builds repositories and services once from the pool; the password
    /// encoder is constructed here and injected into the services that
    /// need it.
    pub fn new(pool: AsyncDbPool, jwt_config: JwtConfig) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos, PasswordEncoder::new());
        Self {
            services,
            db_pool: pool,
            jwt_config,
        }
    }
}
