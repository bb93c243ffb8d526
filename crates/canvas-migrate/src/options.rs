/// Knobs for [`crate::run_migrations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOptions {
    /// Table recording applied plan versions.
    pub version_table: String,
    /// Render the SQL without touching the database.
    pub dry_run: bool,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            version_table: canvas_naming::default_version_table(),
            dry_run: false,
        }
    }
}

impl MigrationOptions {
    pub fn version_table(mut self, table: impl Into<String>) -> Self {
        self.version_table = table.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The plan was executed and its version recorded.
    Applied { version: u32, statements: Vec<String> },
    /// The database already holds `version` or newer; nothing ran.
    UpToDate { version: u32 },
    /// SQL that would run, version table creation included.
    DryRun { version: u32, statements: Vec<String> },
}

impl MigrationOutcome {
    pub fn version(&self) -> u32 {
        match self {
            MigrationOutcome::Applied { version, .. }
            | MigrationOutcome::UpToDate { version }
            | MigrationOutcome::DryRun { version, .. } => *version,
        }
    }

    pub fn statements(&self) -> &[String] {
        match self {
            MigrationOutcome::Applied { statements, .. }
            | MigrationOutcome::DryRun { statements, .. } => statements,
            MigrationOutcome::UpToDate { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_version_table_is_prefixed() {
        let options = MigrationOptions::default();
        assert_eq!(options.version_table, "canvas-ai_schema_version");
        assert!(!options.dry_run);
    }

    #[test]
    fn builder_overrides() {
        let options = MigrationOptions::default().version_table("v").dry_run(true);
        assert_eq!(options.version_table, "v");
        assert!(options.dry_run);
    }

    #[test]
    fn up_to_date_has_no_statements() {
        let outcome = MigrationOutcome::UpToDate { version: 1 };
        assert_eq!(outcome.version(), 1);
        assert!(outcome.statements().is_empty());
    }
}
