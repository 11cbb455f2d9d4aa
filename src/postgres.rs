//! PostgreSQL dialect.
//!
//! PostgreSQL separates login roles from databases, so the full
//! administrative capability set applies: create the database, create the
//! per-database application user, and grant it access.

use crate::Dialect;

/// Administrative SQL for PostgreSQL.
///
/// Database identifiers are quoted so names keep their exact case; unquoted
/// they would fold to lowercase and no longer round-trip through the
/// connection string. User names are left unquoted and are expected
/// lowercase for the same reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "PostgreSQL"
    }

    fn create_database(&self, database: &str, _password: &str) -> String {
        format!("CREATE DATABASE \"{database}\"")
    }

    fn create_user(&self, _database: &str, user: &str, password: &str) -> Option<String> {
        Some(format!("CREATE USER {user} WITH PASSWORD '{password}'"))
    }

    fn grant_access(&self, database: &str, user: &str) -> Option<String> {
        Some(format!(
            "GRANT ALL PRIVILEGES ON DATABASE \"{database}\" TO {user}"
        ))
    }

    fn list_databases(&self) -> &'static str {
        "SELECT datname::text FROM pg_database WHERE datistemplate = false ORDER BY datname"
    }

    fn select_version(&self) -> &'static str {
        "SELECT version()"
    }

    fn version_prefix(&self) -> &'static str {
        "PostgreSQL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_identifiers_keep_their_case() {
        let dialect = PostgresDialect;
        assert_eq!(
            dialect.create_database("NEWDATABASE", "pw"),
            "CREATE DATABASE \"NEWDATABASE\""
        );
        assert_eq!(
            dialect
                .grant_access("NEWDATABASE", "newdatabase_user")
                .unwrap(),
            "GRANT ALL PRIVILEGES ON DATABASE \"NEWDATABASE\" TO newdatabase_user"
        );
    }

    #[test]
    fn user_creation_carries_the_password() {
        let dialect = PostgresDialect;
        assert_eq!(
            dialect.create_user("DB", "db_user", "secret").unwrap(),
            "CREATE USER db_user WITH PASSWORD 'secret'"
        );
    }
}
