use std::path::{Path, PathBuf};

/// On-disk layout of a migration script root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FolderLayout {
    /// `createDatabase/` holds the bootstrap script slot, `up/` holds
    /// forward migration scripts.
    #[default]
    Default,
}

impl FolderLayout {
    /// Name of the folder holding the create-database bootstrap script.
    pub fn create_database_folder(&self) -> &'static str {
        match self {
            Self::Default => "createDatabase",
        }
    }

    /// Name of the folder holding forward migration scripts.
    pub fn up_folder(&self) -> &'static str {
        match self {
            Self::Default => "up",
        }
    }
}

/// Describes one migration run: the target connection, options, and script
/// location.
///
/// A configuration is built once per scenario with [MigrationConfig::new]
/// and the `with_*` methods, and is never mutated afterwards. Scenarios
/// running concurrently each hold an independent value pointing at their own
/// database name, so nothing here is ever shared mutable state.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    connection_string: String,
    admin_connection_string: Option<String>,
    create_database: bool,
    script_root: PathBuf,
    folder_layout: FolderLayout,
    non_interactive: bool,
}

impl MigrationConfig {
    /// Create a configuration targeting `connection_string` with scripts
    /// under `script_root`. Database creation is off and interactive
    /// prompting is on until overridden.
    pub fn new(connection_string: impl Into<String>, script_root: impl Into<PathBuf>) -> Self {
        Self {
            connection_string: connection_string.into(),
            admin_connection_string: None,
            create_database: false,
            script_root: script_root.into(),
            folder_layout: FolderLayout::default(),
            non_interactive: false,
        }
    }

    /// Whether the migrator should create the target database when missing.
    pub fn with_create_database(mut self, create_database: bool) -> Self {
        self.create_database = create_database;
        self
    }

    /// Connection string with rights to create databases and users.
    pub fn with_admin_connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.admin_connection_string = Some(connection_string.into());
        self
    }

    pub fn with_folder_layout(mut self, folder_layout: FolderLayout) -> Self {
        self.folder_layout = folder_layout;
        self
    }

    pub fn with_non_interactive(mut self, non_interactive: bool) -> Self {
        self.non_interactive = non_interactive;
        self
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn admin_connection_string(&self) -> Option<&str> {
        self.admin_connection_string.as_deref()
    }

    pub fn create_database(&self) -> bool {
        self.create_database
    }

    pub fn script_root(&self) -> &Path {
        &self.script_root
    }

    pub fn folder_layout(&self) -> FolderLayout {
        self.folder_layout
    }

    pub fn non_interactive(&self) -> bool {
        self.non_interactive
    }

    /// Path of the create-database bootstrap script slot. A file placed here
    /// overrides the engine's default create statement.
    pub fn create_database_script_path(&self) -> PathBuf {
        self.script_root
            .join(self.folder_layout.create_database_folder())
            .join("createDatabase.sql")
    }

    /// Directory scanned for forward migration scripts.
    pub fn up_scripts_dir(&self) -> PathBuf {
        self.script_root.join(self.folder_layout.up_folder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_conservative() {
        let config = MigrationConfig::new("postgres://u:p@localhost/db", "/tmp/scripts");
        assert!(!config.create_database());
        assert!(!config.non_interactive());
        assert_eq!(config.admin_connection_string(), None);
        assert_eq!(config.folder_layout(), FolderLayout::Default);
    }

    #[test]
    fn builder_overrides_stick() {
        let config = MigrationConfig::new("postgres://u:p@localhost/db", "/tmp/scripts")
            .with_create_database(true)
            .with_admin_connection_string("postgres://admin:pw@localhost/postgres")
            .with_non_interactive(true);
        assert!(config.create_database());
        assert!(config.non_interactive());
        assert_eq!(
            config.admin_connection_string(),
            Some("postgres://admin:pw@localhost/postgres")
        );
    }

    #[test]
    fn script_paths_follow_the_layout() {
        let config = MigrationConfig::new("postgres://u:p@localhost/db", "/tmp/scripts");
        assert_eq!(
            config.create_database_script_path(),
            PathBuf::from("/tmp/scripts/createDatabase/createDatabase.sql")
        );
        assert_eq!(config.up_scripts_dir(), PathBuf::from("/tmp/scripts/up"));
    }
}
