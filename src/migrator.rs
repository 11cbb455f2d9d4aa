use std::sync::Arc;

use async_trait::async_trait;

use crate::{Error, MigrationConfig};

/// The migration-execution entry point, opaque to this harness.
///
/// A migrator is bound to one [MigrationConfig] at construction and is
/// released by dropping it, whether [Migrator::migrate] succeeded or not.
/// The harness never inspects what a migrator did beyond the externally
/// observable server state.
#[async_trait]
pub trait Migrator: Send {
    /// Run the migration to completion.
    ///
    /// Returns [Error::Database] when the engine rejects the run, most
    /// notably when the target database is missing and creation was not
    /// configured.
    async fn migrate(&mut self) -> Result<(), Error>;
}

/// Factory binding a fresh [Migrator] to a [MigrationConfig].
pub type MigratorFactory = Arc<dyn Fn(MigrationConfig) -> Box<dyn Migrator> + Send + Sync>;
