//! Project layout creation.
//! Resolves the target directory and writes the rendered documents plus the
//! empty SQL placeholders through a [`Filesystem`].

use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::config::PgConfig;
use crate::constants::{
    COMPOSE_FILE, DB_DIR, DEFAULT_PG_VERSION, DOCKER_DIR, SQL_FILES, TASK_FILE,
};
use crate::error::{Error, Result};
use crate::fs::Filesystem;
use crate::generator::{compose_file, task_file};
use crate::parser::{get_answers, PreloadedAnswers};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;

/// Lexically normalizes a path: drops `.` components and folds `..` into
/// the preceding component. Does not touch the filesystem.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Resolves the directory the project is generated into.
///
/// # Arguments
/// * `base_dir` - Directory of the running program
/// * `target` - Optional target given on the command line; always placed
///   under `base_dir`, a leading root is dropped (`/srv/app` -> `base_dir/srv/app`)
pub fn resolve_target_dir<P: AsRef<Path>>(base_dir: P, target: Option<&Path>) -> PathBuf {
    let mut joined = base_dir.as_ref().to_path_buf();
    if let Some(target) = target {
        for component in target.components() {
            match component {
                Component::RootDir | Component::Prefix(_) => {}
                other => joined.push(other.as_os_str()),
            }
        }
    }
    normalize_path(joined)
}

/// Directory containing the running executable.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}

/// A single write performed while scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    CreateDir { target: PathBuf },
    Write { target: PathBuf, content: String },
}

impl FileOperation {
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::CreateDir { target } | FileOperation::Write { target, .. } => target,
        }
    }
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::CreateDir { target } => {
                write!(f, "Created directory: '{}'", target.display())
            }
            FileOperation::Write { target, .. } => write!(f, "Created: '{}'", target.display()),
        }
    }
}

/// Plans the full project layout without touching the filesystem.
///
/// Operations are ordered: `docker/`, `docker/compose.yaml`, `db/`, the three
/// SQL placeholders, then `Taskfile.yaml`.
pub fn plan(
    engine: &dyn TemplateRenderer,
    target_dir: &Path,
    project_name: &str,
    pg: &PgConfig,
) -> Result<Vec<FileOperation>> {
    let docker_dir = target_dir.join(DOCKER_DIR);
    let db_dir = target_dir.join(DB_DIR);

    let mut operations = vec![
        FileOperation::CreateDir { target: docker_dir.clone() },
        FileOperation::Write {
            target: docker_dir.join(COMPOSE_FILE),
            content: compose_file(engine, project_name, pg)?,
        },
        FileOperation::CreateDir { target: db_dir.clone() },
    ];
    operations.extend(SQL_FILES.iter().map(|name| FileOperation::Write {
        target: db_dir.join(name),
        content: String::new(),
    }));
    operations.push(FileOperation::Write {
        target: target_dir.join(TASK_FILE),
        content: task_file(engine, project_name, pg)?,
    });

    Ok(operations)
}

/// Applies planned operations to a filesystem.
pub struct Scaffolder<'a> {
    fs: &'a dyn Filesystem,
    /// Tolerate existing directories instead of failing on them
    force: bool,
}

impl<'a> Scaffolder<'a> {
    pub fn new(fs: &'a dyn Filesystem, force: bool) -> Self {
        Self { fs, force }
    }

    /// Executes a single operation.
    pub fn apply(&self, operation: &FileOperation) -> Result<()> {
        match operation {
            FileOperation::CreateDir { target } => {
                debug!("Creating directory: {}", target.display());
                if self.force {
                    self.fs.create_dir_all(target)
                } else {
                    self.fs.create_dir(target)
                }
            }
            FileOperation::Write { target, content } => {
                debug!("Writing file: {} ({} bytes)", target.display(), content.len());
                self.fs.write_file(target, content)
            }
        }
    }

    /// Writes the whole project into `target_dir`.
    ///
    /// Stops at the first failing operation.
    ///
    /// # Errors
    /// * `Error::OutputDirectoryNotFound` if `target_dir` does not exist
    /// * `Error::IoError` if a directory already exists (without force) or a
    ///   write fails
    pub fn scaffold(
        &self,
        engine: &dyn TemplateRenderer,
        target_dir: &Path,
        project_name: &str,
        pg: &PgConfig,
    ) -> Result<Vec<FileOperation>> {
        if !self.fs.is_dir(target_dir) {
            return Err(Error::OutputDirectoryNotFound {
                output_dir: target_dir.display().to_string(),
            });
        }

        let operations = plan(engine, target_dir, project_name, pg)?;
        for operation in &operations {
            self.apply(operation)?;
        }
        Ok(operations)
    }
}

/// Settings of one scaffolding run, usually taken from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Already resolved target directory
    pub target_dir: PathBuf,
    pub preloaded: PreloadedAnswers,
    pub pg_version: String,
    pub force: bool,
}

impl RunOptions {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            preloaded: PreloadedAnswers::default(),
            pg_version: DEFAULT_PG_VERSION.to_string(),
            force: false,
        }
    }
}

/// Collects the answers and writes the project.
///
/// # Returns
/// * `Ok(None)` - a prompt was cancelled and nothing was written
/// * `Ok(Some(operations))` - the operations performed, in order
pub fn run(
    engine: &dyn TemplateRenderer,
    prompt: &dyn Prompter,
    fs: &dyn Filesystem,
    options: RunOptions,
) -> Result<Option<Vec<FileOperation>>> {
    debug!("Target directory: {}", options.target_dir.display());

    let Some(answers) = get_answers(prompt, options.preloaded)? else {
        log::info!("Input cancelled, nothing written");
        return Ok(None);
    };

    let pg = PgConfig::new(&answers.project_name, answers.port).with_version(options.pg_version);
    debug!("Database configuration: {pg:?}");

    Scaffolder::new(fs, options.force)
        .scaffold(engine, &options.target_dir, &answers.project_name, &pg)
        .map(Some)
}
