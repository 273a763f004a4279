//! Database configuration record shared by the compose and task generators.

use crate::constants::DEFAULT_PG_VERSION;
use serde::Serialize;

/// Settings of the development postgres instance.
///
/// Built once per run from the collected answers and consumed by both
/// generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PgConfig {
    /// Free-form image version tag
    pub version: String,
    pub db_name: String,
    /// Host port, kept as typed by the user
    pub port: String,
}

impl PgConfig {
    /// Builds the configuration for a project, deriving the database name
    /// from the project name.
    pub fn new(project_name: &str, port: impl Into<String>) -> Self {
        Self {
            version: DEFAULT_PG_VERSION.to_string(),
            db_name: derive_db_name(project_name),
            port: port.into(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Replaces the first `-` of the project name with `_`.
///
/// Only the first occurrence is converted: `a-b-c` becomes `a_b-c`.
pub fn derive_db_name(project_name: &str) -> String {
    project_name.replacen('-', "_", 1)
}
