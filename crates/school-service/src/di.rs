//! Dependency injection module using Shaku.
//!
//! The storage handle is the only shared component: it is built once by
//! the composing service and injected into each DAO at construction.

use school_config::DatabaseConfig;
use school_core::SchoolResult;
use school_repository::{DatabasePool, DatabasePoolInterface, DatabasePoolParameters};
use shaku::{module, HasComponent};
use std::sync::Arc;
use tracing::debug;

// Storage module: owns the one shared database handle.
module! {
    pub StorageModule {
        components = [DatabasePool],
        providers = [],
    }
}

/// Connects to MySQL and builds the storage module around the handle.
pub async fn build_storage_module(config: &DatabaseConfig) -> SchoolResult<Arc<StorageModule>> {
    let db_pool = DatabasePool::connect(config).await?;
    Ok(Arc::new(storage_module_with(&db_pool)))
}

/// Builds the storage module around an existing handle.
#[must_use]
pub fn storage_module_with(db_pool: &DatabasePool) -> StorageModule {
    debug!("Building storage module");

    StorageModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .build()
}

/// Resolves the shared storage handle from a module.
#[must_use]
pub fn resolve_pool<M: HasComponent<dyn DatabasePoolInterface>>(
    module: &M,
) -> Arc<dyn DatabasePoolInterface> {
    module.resolve()
}
