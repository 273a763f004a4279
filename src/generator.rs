//! Generators for the compose and task documents.
//!
//! Both are pure functions of the project name and a [`PgConfig`]: the same
//! inputs always yield byte-identical text.

use crate::config::PgConfig;
use crate::constants::{DB_PASS, DB_USER, PG_CONTAINER_PORT};
use crate::error::Result;
use crate::renderer::TemplateRenderer;

const COMPOSE_TEMPLATE: &str = include_str!("../templates/compose.yaml.j2");
const TASK_TEMPLATE: &str = include_str!("../templates/Taskfile.yaml.j2");

/// Task names emitted into the task document, in document order.
pub const TASK_NAMES: [&str; 9] = [
    "default",
    "docker",
    "db",
    "db-reset",
    "db-migrate",
    "db-seed",
    "db-migrate-apply",
    "db-init",
    "jaeger",
];

fn context(project_name: &str, pg: &PgConfig) -> serde_json::Value {
    serde_json::json!({
        "project_name": project_name,
        "pg": pg,
        "db_user": DB_USER,
        "db_pass": DB_PASS,
        "container_port": PG_CONTAINER_PORT,
    })
}

/// Renders the docker compose document describing the `{project_name}-db`
/// postgres service.
pub fn compose_file(
    engine: &dyn TemplateRenderer,
    project_name: &str,
    pg: &PgConfig,
) -> Result<String> {
    engine.render(COMPOSE_TEMPLATE, &context(project_name, pg))
}

/// Renders the Taskfile with the database, migration and tracing tasks.
///
/// `db-init` runs `db-reset`, `db-migrate-apply` and `db-seed` in that order.
pub fn task_file(
    engine: &dyn TemplateRenderer,
    project_name: &str,
    pg: &PgConfig,
) -> Result<String> {
    engine.render(TASK_TEMPLATE, &context(project_name, pg))
}
