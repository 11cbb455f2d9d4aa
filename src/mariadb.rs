//! MariaDB dialect.

use crate::mysql::MySqlDialect;
use crate::Dialect;

/// Administrative SQL for MariaDB.
///
/// Statement text is shared with [MySqlDialect]; MariaDB differs only in
/// identity and in the server version it reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct MariaDbDialect;

impl Dialect for MariaDbDialect {
    fn name(&self) -> &'static str {
        "MariaDB"
    }

    fn create_database(&self, database: &str, password: &str) -> String {
        MySqlDialect.create_database(database, password)
    }

    fn create_user(&self, database: &str, user: &str, password: &str) -> Option<String> {
        MySqlDialect.create_user(database, user, password)
    }

    fn grant_access(&self, database: &str, user: &str) -> Option<String> {
        MySqlDialect.grant_access(database, user)
    }

    fn list_databases(&self) -> &'static str {
        MySqlDialect.list_databases()
    }

    fn select_version(&self) -> &'static str {
        MySqlDialect.select_version()
    }

    /// Matches the server version the test infrastructure pins.
    fn version_prefix(&self) -> &'static str {
        "11.4"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_statement_text_with_mysql() {
        let dialect = MariaDbDialect;
        assert_eq!(
            dialect.create_database("DB", "pw"),
            MySqlDialect.create_database("DB", "pw")
        );
        assert_eq!(
            dialect.grant_access("DB", "db_user"),
            MySqlDialect.grant_access("DB", "db_user")
        );
        assert_ne!(dialect.version_prefix(), MySqlDialect.version_prefix());
    }
}
