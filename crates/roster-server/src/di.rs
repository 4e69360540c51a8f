//! Dependency injection module using Shaku.

use roster_config::{DatabaseConfig, SecurityConfig};
use roster_core::RosterResult;
use roster_repository::{DatabasePool, DatabasePoolParameters, MySqlUserRepository};
use roster_security::{PasswordHasher, PasswordHasherParameters};
use roster_service::UserServiceComponent;
use shaku::module;
use std::sync::Arc;

// Single-process module: pool, repository, hasher and the user service.
module! {
    pub AppModule {
        components = [
            DatabasePool,
            PasswordHasher,
            MySqlUserRepository,
            UserServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the application module.
///
/// Connects the database pool, verifies the connection and runs migrations
/// before handing the pool to the module.
pub async fn build_app_module(
    db_config: &DatabaseConfig,
    security_config: &SecurityConfig,
) -> RosterResult<Arc<AppModule>> {
    let db_pool = DatabasePool::connect(db_config).await?;
    db_pool.health_check().await?;
    db_pool.run_migrations().await?;

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<PasswordHasher>(PasswordHasherParameters {
            cost: security_config.password_hash_cost,
        })
        .build();

    Ok(Arc::new(module))
}
