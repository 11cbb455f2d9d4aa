//! A minimal reference [Migrator] for exercising the harness.
//!
//! [SqlScriptMigrator] implements just enough of a migration tool's contract
//! to drive the verifier scenarios end to end: connect to the target
//! database, bootstrap it through the admin connection when configured to
//! (honoring a hand-written `createDatabase.sql` in the bootstrap slot), and
//! apply forward scripts from the `up/` folder in name order. It has no
//! versioning, ordering metadata, or checksum logic on purpose; real
//! migration tools plug into the harness through the [Migrator] trait the
//! same way this one does.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::AnyConnection;
use sqlx::Connection;

use crate::{provision, Dialect, Error, MigrationConfig, Migrator};

/// Reference migrator applying plain SQL scripts from the configured script
/// root.
pub struct SqlScriptMigrator {
    config: MigrationConfig,
    dialect: Arc<dyn Dialect>,
}

impl SqlScriptMigrator {
    pub fn new(config: MigrationConfig, dialect: Arc<dyn Dialect>) -> Self {
        Self { config, dialect }
    }

    async fn connect_target(&self) -> Result<AnyConnection, Error> {
        Ok(AnyConnection::connect(self.config.connection_string()).await?)
    }

    /// Create the configured database through the admin connection, running
    /// a custom `createDatabase.sql` when one sits in the bootstrap slot.
    async fn bootstrap_database(&self) -> Result<(), Error> {
        let admin_connection_string = self.config.admin_connection_string().ok_or_else(|| {
            Error::Configuration(
                "create_database is set but no admin connection string is configured".to_string(),
            )
        })?;
        let mut admin = AnyConnection::connect(admin_connection_string).await?;
        let script_path = self.config.create_database_script_path();
        let bootstrap = if tokio::fs::try_exists(&script_path).await? {
            #[cfg(feature = "tracing")]
            tracing::info!(script = %script_path.display(), "bootstrapping from custom script");
            tokio::fs::read_to_string(&script_path).await?
        } else {
            let database = provision::database_name(self.config.connection_string())?;
            let credentials = provision::parse_credentials(self.config.connection_string())?;
            self.dialect.create_database(&database, &credentials.password)
        };
        sqlx::raw_sql(&bootstrap).execute(&mut admin).await?;
        admin.close().await?;
        Ok(())
    }

    async fn apply_up_scripts(&self, conn: &mut AnyConnection) -> Result<(), Error> {
        let dir = self.config.up_scripts_dir();
        if !tokio::fs::try_exists(&dir).await? {
            return Ok(());
        }
        let mut entries = tokio::fs::read_dir(&dir).await?;
        let mut scripts = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|extension| extension == "sql") {
                scripts.push(path);
            }
        }
        scripts.sort();
        for path in scripts {
            let sql = tokio::fs::read_to_string(&path).await?;
            sqlx::raw_sql(&sql).execute(&mut *conn).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Migrator for SqlScriptMigrator {
    async fn migrate(&mut self) -> Result<(), Error> {
        let mut target = match self.connect_target().await {
            Ok(conn) => conn,
            Err(err) if err.is_database() && self.config.create_database() => {
                self.bootstrap_database().await?;
                // A custom bootstrap script may have provisioned a different
                // database than the configured one; this reconnect is where
                // that mismatch surfaces.
                self.connect_target().await?
            }
            Err(err) => return Err(err),
        };
        let outcome = self.apply_up_scripts(&mut target).await;
        target.close().await?;
        outcome
    }
}
