/// Administrative SQL and metadata for one database engine.
///
/// Implementations are stateless text generation over inputs the caller has
/// already sanitized; no I/O happens here. Engines where the admin login
/// already carries full rights return `None` from the user and grant
/// statements, and the provisioning layer skips those steps.
pub trait Dialect: Send + Sync {
    /// Engine name, used in log and assertion messages.
    fn name(&self) -> &'static str;

    /// Statement creating `database`. The application user's `password` is
    /// available for engines whose bootstrap couples database and credential
    /// creation.
    fn create_database(&self, database: &str, password: &str) -> String;

    /// Statement creating the per-database application user, when the engine
    /// needs one.
    fn create_user(&self, database: &str, user: &str, password: &str) -> Option<String>;

    /// Statement granting `user` access to `database`, when the engine needs
    /// one.
    fn grant_access(&self, database: &str, user: &str) -> Option<String>;

    /// Query listing database names, one text column per row.
    fn list_databases(&self) -> &'static str;

    /// Scalar query returning the server version string.
    fn select_version(&self) -> &'static str;

    /// Prefix the [Dialect::select_version] result is expected to start
    /// with for the engine under test.
    fn version_prefix(&self) -> &'static str;

    /// Whether `error` is this engine's database-level error kind, the one
    /// the verifier expects from missing-database and bad-bootstrap
    /// scenarios. The shared connection layer normalizes engine failures
    /// into one variant, so the default suits every bundled engine.
    fn is_database_error(&self, error: &crate::Error) -> bool {
        error.is_database()
    }
}
