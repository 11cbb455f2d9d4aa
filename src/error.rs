/// Error type for the migverify crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An engine-level failure reported by the database server or the
    /// connection to it: connection refused, object already exists, object
    /// not found, permission denied.
    ///
    /// Provisioning treats this kind as retryable; the verifier treats it as
    /// the expected signal in missing-database and bad-bootstrap scenarios.
    #[error("{0}")]
    Database(sqlx::Error),
    /// A malformed connection string or URL. This indicates a
    /// harness-authoring bug rather than transient server state, so it is
    /// never retried or swallowed.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A failure touching the on-disk script contract.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Generic(String),
}

impl Error {
    /// Whether this error is the recognized database-level kind.
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        match value {
            sqlx::Error::Configuration(source) => Self::Configuration(source.to_string()),
            other => Self::Database(other),
        }
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}
