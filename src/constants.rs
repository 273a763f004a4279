//! Common constants used throughout pgstarter.

/// Image tag used for the throwaway psql client containers when none is given
pub const DEFAULT_PG_VERSION: &str = "latest";

/// Hardcoded development credentials shared by the compose and task documents
pub const DB_USER: &str = "devuser";
pub const DB_PASS: &str = "devuser";

/// Port postgres listens on inside its container
pub const PG_CONTAINER_PORT: &str = "5432";

pub const DOCKER_DIR: &str = "docker";
pub const COMPOSE_FILE: &str = "compose.yaml";

pub const DB_DIR: &str = "db";
/// Placeholder SQL scripts, created empty
pub const SQL_FILES: [&str; 3] = ["schema.sql", "reset.sql", "seed.sql"];

pub const TASK_FILE: &str = "Taskfile.yaml";

pub const PROJECT_NAME_PROMPT: &str = "What is project name?";
pub const PORT_PROMPT: &str = "DB Port?";
