//! MySQL dialect.

use crate::Dialect;

/// Administrative SQL for MySQL.
///
/// On Linux servers schema names are case-sensitive by default
/// (`lower_case_table_names = 0`), so a database created as `NEWDATABASE`
/// is listed and addressed exactly that way.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "MySQL"
    }

    fn create_database(&self, database: &str, _password: &str) -> String {
        format!("CREATE DATABASE `{database}`")
    }

    fn create_user(&self, _database: &str, user: &str, password: &str) -> Option<String> {
        Some(format!(
            "CREATE USER IF NOT EXISTS '{user}'@'%' IDENTIFIED BY '{password}'"
        ))
    }

    fn grant_access(&self, database: &str, user: &str) -> Option<String> {
        Some(format!(
            "GRANT ALL PRIVILEGES ON `{database}`.* TO '{user}'@'%'"
        ))
    }

    fn list_databases(&self) -> &'static str {
        "SELECT schema_name FROM information_schema.schemata ORDER BY schema_name"
    }

    fn select_version(&self) -> &'static str {
        "SELECT VERSION()"
    }

    /// Matches the server version the test infrastructure pins.
    fn version_prefix(&self) -> &'static str {
        "8.4"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_quote_with_backticks() {
        let dialect = MySqlDialect;
        assert_eq!(
            dialect.create_database("DAATAA", "pw"),
            "CREATE DATABASE `DAATAA`"
        );
        assert_eq!(
            dialect.grant_access("DAATAA", "daataa_user").unwrap(),
            "GRANT ALL PRIVILEGES ON `DAATAA`.* TO 'daataa_user'@'%'"
        );
    }

    #[test]
    fn user_creation_is_idempotent_by_statement() {
        let dialect = MySqlDialect;
        assert_eq!(
            dialect.create_user("DB", "db_user", "secret").unwrap(),
            "CREATE USER IF NOT EXISTS 'db_user'@'%' IDENTIFIED BY 'secret'"
        );
    }
}
