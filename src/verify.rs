//! Migration-contract scenario checks.
//!
//! Each scenario is a plain async function over a shared [EngineContext],
//! so the per-engine test modules can drive the same suite with
//! engine-appropriate inputs. A scenario builds its own [MigrationConfig]
//! against a scenario-unique database name, acquires a migrator for it, and
//! releases everything it touched (connections, migrators, script files)
//! on every exit path. A failed check comes back as [Error::Generic]
//! carrying the specific assertion that did not hold.

use sqlx::Connection;

use crate::{provision, EngineContext, Error, MigrationConfig};

/// The version probe: the admin connection must report a server version
/// starting with the engine's expected prefix.
pub async fn reports_expected_version(ctx: &EngineContext) -> Result<(), Error> {
    let mut admin = ctx.admin_connection().await?;
    let version: String = sqlx::query_scalar(ctx.dialect().select_version())
        .fetch_one(&mut admin)
        .await?;
    admin.close().await?;
    let prefix = ctx.dialect().version_prefix();
    if !version.starts_with(prefix) {
        return Err(Error::Generic(format!(
            "{}: expected server version starting with '{}', got '{}'",
            ctx.dialect().name(),
            prefix,
            version
        )));
    }
    Ok(())
}

/// With the create flag set and the database absent, migration must make it
/// appear in the server's database listing.
pub async fn creates_database_when_configured(
    ctx: &EngineContext,
    database: &str,
) -> Result<(), Error> {
    assert_database_absent(ctx, database).await?;
    let scripts = tempfile::tempdir()?;
    let config = MigrationConfig::new(ctx.connection_string(database), scripts.path())
        .with_create_database(true)
        .with_admin_connection_string(ctx.admin_connection_string())
        .with_non_interactive(true);
    let mut migrator = ctx.migrator_for(config);
    let outcome = migrator.migrate().await;
    drop(migrator);
    outcome?;
    assert_database_present(ctx, database).await
}

/// With the create flag off and the database absent, migration must fail
/// with the engine's database error kind and leave the database absent.
///
/// Engines that auto-create a database on connect cannot enforce the
/// failure half; for a context with `throw_on_missing_database` off only
/// the absence check applies.
pub async fn does_not_create_database_when_not_configured(
    ctx: &EngineContext,
    database: &str,
) -> Result<(), Error> {
    assert_database_absent(ctx, database).await?;
    let scripts = tempfile::tempdir()?;
    let config = MigrationConfig::new(ctx.connection_string(database), scripts.path())
        .with_non_interactive(true);
    let mut migrator = ctx.migrator_for(config);
    let outcome = migrator.migrate().await;
    drop(migrator);
    if ctx.throw_on_missing_database() {
        match outcome {
            Err(err) if ctx.dialect().is_database_error(&err) => {}
            Err(err) => return Err(err),
            Ok(()) => {
                return Err(Error::Generic(format!(
                    "{}: expected migration against missing database '{}' to fail",
                    ctx.dialect().name(),
                    database
                )))
            }
        }
    } else {
        outcome?;
    }
    assert_database_absent(ctx, database).await
}

/// A database that already exists must not make a create-configured
/// migration fail, and must survive it unchanged in the listing.
pub async fn tolerates_existing_database(ctx: &EngineContext, database: &str) -> Result<(), Error> {
    provision::ensure_database_and_user(ctx, database).await?;
    assert_database_present(ctx, database).await?;
    let scripts = tempfile::tempdir()?;
    let config = MigrationConfig::new(ctx.connection_string(database), scripts.path())
        .with_create_database(true)
        .with_admin_connection_string(ctx.admin_connection_string())
        .with_non_interactive(true);
    let mut migrator = ctx.migrator_for(config);
    let outcome = migrator.migrate().await;
    drop(migrator);
    outcome?;
    assert_database_present(ctx, database).await
}

/// When the database already exists, migration must succeed with an invalid
/// admin connection string and with none at all: no administrative action
/// is required, so the admin connection must never be touched.
pub async fn ignores_admin_connection_when_database_exists(
    ctx: &EngineContext,
    database: &str,
) -> Result<(), Error> {
    provision::ensure_database_and_user(ctx, database).await?;
    assert_database_present(ctx, database).await?;
    for admin_connection_string in [Some("Invalid stuff".to_string()), None] {
        let scripts = tempfile::tempdir()?;
        let mut config = MigrationConfig::new(ctx.connection_string(database), scripts.path())
            .with_create_database(true)
            .with_non_interactive(true);
        if let Some(admin) = admin_connection_string {
            config = config.with_admin_connection_string(admin);
        }
        let mut migrator = ctx.migrator_for(config);
        let outcome = migrator.migrate().await;
        drop(migrator);
        outcome?;
    }
    Ok(())
}

/// A hand-written script in the create-database slot wins over the
/// configured name: the migration fails with the engine's database error
/// kind (the script provisions `scripted`, so connecting to `configured`
/// afterwards is rejected), the scripted database exists, and the
/// configured one does not. The script lives in a scenario-owned temporary
/// directory and is removed when the scenario ends, on every exit path.
pub async fn custom_create_script_overrides_configured_name(
    ctx: &EngineContext,
    configured: &str,
    scripted: &str,
) -> Result<(), Error> {
    let scripts = tempfile::tempdir()?;
    let config = MigrationConfig::new(ctx.connection_string(configured), scripts.path())
        .with_create_database(true)
        .with_admin_connection_string(ctx.admin_connection_string())
        .with_non_interactive(true);
    let script_path = config.create_database_script_path();
    if let Some(parent) = script_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(
        &script_path,
        ctx.dialect().create_database(scripted, ctx.user_password()),
    )
    .await?;
    let mut migrator = ctx.migrator_for(config);
    let outcome = migrator.migrate().await;
    drop(migrator);
    match outcome {
        Err(err) if ctx.dialect().is_database_error(&err) => {}
        Err(err) => return Err(err),
        Ok(()) => {
            return Err(Error::Generic(format!(
                "{}: expected migration to fail: the bootstrap script provisions '{}' while the configuration targets '{}'",
                ctx.dialect().name(),
                scripted,
                configured
            )))
        }
    }
    assert_database_present(ctx, scripted).await?;
    assert_database_absent(ctx, configured).await
}

/// Assert that `database` appears in the server's database listing.
pub async fn assert_database_present(ctx: &EngineContext, database: &str) -> Result<(), Error> {
    let databases = provision::list_databases(ctx).await?;
    if !databases.iter().any(|name| name == database) {
        return Err(Error::Generic(format!(
            "{}: expected database '{}' to exist, found {:?}",
            ctx.dialect().name(),
            database,
            databases
        )));
    }
    Ok(())
}

/// Assert that `database` does not appear in the server's database listing.
pub async fn assert_database_absent(ctx: &EngineContext, database: &str) -> Result<(), Error> {
    let databases = provision::list_databases(ctx).await?;
    if databases.iter().any(|name| name == database) {
        return Err(Error::Generic(format!(
            "{}: expected database '{}' to be absent",
            ctx.dialect().name(),
            database
        )));
    }
    Ok(())
}
