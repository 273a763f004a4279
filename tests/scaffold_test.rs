use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use pgstarter::config::PgConfig;
use pgstarter::error::{Error, Result};
use pgstarter::fs::{Filesystem, LocalFilesystem, MemoryFilesystem};
use pgstarter::parser::{get_answers, Answers, PreloadedAnswers};
use pgstarter::prompt::Prompter;
use pgstarter::renderer::MiniJinjaRenderer;
use pgstarter::scaffold::{plan, run, FileOperation, RunOptions, Scaffolder};
use tempfile::TempDir;

/// Prompter replaying scripted answers; `None` simulates a cancelled prompt.
struct ScriptedPrompter {
    answers: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(answers: &[Option<&str>]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.map(str::to_string)).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, question: &str) -> Result<Option<String>> {
        self.asked.borrow_mut().push(question.to_string());
        Ok(self.answers.borrow_mut().pop_front().flatten())
    }
}

fn run_in(
    prompt: &dyn Prompter,
    fs: &MemoryFilesystem,
    options: RunOptions,
) -> Result<Option<Vec<FileOperation>>> {
    run(&MiniJinjaRenderer::new(), prompt, fs, options)
}

fn expected_files(root: &Path) -> Vec<PathBuf> {
    let mut files = vec![
        root.join("Taskfile.yaml"),
        root.join("db/reset.sql"),
        root.join("db/schema.sql"),
        root.join("db/seed.sql"),
        root.join("docker/compose.yaml"),
    ];
    files.sort();
    files
}

#[test_log::test]
fn test_scaffold_my_app() {
    let root = Path::new("/work/proj");
    let fs = MemoryFilesystem::with_root(root);
    let prompt = ScriptedPrompter::new(&[Some("my-app"), Some("5433")]);

    let operations = run_in(&prompt, &fs, RunOptions::new(root)).unwrap().unwrap();
    assert_eq!(operations.len(), 7);
    assert_eq!(fs.list_files(), expected_files(root));

    let compose = fs.read_file(&root.join("docker/compose.yaml")).unwrap();
    assert!(compose.contains("my-app-db"));
    assert!(compose.contains("5433:5432"));
    assert!(compose.contains("POSTGRES_DB: my_app"));

    let tasks = fs.read_file(&root.join("Taskfile.yaml")).unwrap();
    assert!(tasks.contains("DB_USER: devuser"));
    assert!(tasks.contains("DB_PORT: 5433"));
    assert!(tasks.contains("DB_NAME: my_app"));

    for sql in ["schema.sql", "reset.sql", "seed.sql"] {
        assert_eq!(fs.read_file(&root.join("db").join(sql)).as_deref(), Some(""));
    }

    assert_eq!(*prompt.asked.borrow(), ["What is project name?", "DB Port?"]);
}

#[test]
fn test_cancelled_project_name_writes_nothing() {
    let root = Path::new("/work/proj");
    let fs = MemoryFilesystem::with_root(root);
    let prompt = ScriptedPrompter::new(&[None, Some("5433")]);

    assert!(run_in(&prompt, &fs, RunOptions::new(root)).unwrap().is_none());
    assert!(fs.list_files().is_empty());
    assert!(!fs.is_dir(&root.join("docker")));
}

#[test]
fn test_cancelled_port_writes_nothing() {
    let root = Path::new("/work/proj");
    let fs = MemoryFilesystem::with_root(root);
    let dirs_before = fs.list_dirs();
    let prompt = ScriptedPrompter::new(&[Some("my-app"), None]);

    assert!(run_in(&prompt, &fs, RunOptions::new(root)).unwrap().is_none());
    assert!(fs.list_files().is_empty());
    assert_eq!(fs.list_dirs(), dirs_before);
}

#[test]
fn test_preloaded_answers_skip_prompts() {
    let prompt = ScriptedPrompter::new(&[Some("5433")]);
    let preloaded = PreloadedAnswers { project_name: Some("api".to_string()), port: None };

    let answers = get_answers(&prompt, preloaded).unwrap();
    assert_eq!(
        answers,
        Some(Answers { project_name: "api".to_string(), port: "5433".to_string() })
    );
    assert_eq!(*prompt.asked.borrow(), ["DB Port?"]);
}

#[test]
fn test_plan_order() {
    let engine = MiniJinjaRenderer::new();
    let root = Path::new("/p");
    let pg = PgConfig::new("simple", "5432");

    let targets: Vec<PathBuf> = plan(&engine, root, "simple", &pg)
        .unwrap()
        .iter()
        .map(|op| op.target().to_path_buf())
        .collect();
    assert_eq!(
        targets,
        [
            "/p/docker",
            "/p/docker/compose.yaml",
            "/p/db",
            "/p/db/schema.sql",
            "/p/db/reset.sql",
            "/p/db/seed.sql",
            "/p/Taskfile.yaml",
        ]
        .map(PathBuf::from)
    );
}

#[test]
fn test_missing_target_dir() {
    let fs = MemoryFilesystem::new();
    let engine = MiniJinjaRenderer::new();
    let pg = PgConfig::new("x", "5432");

    let result = Scaffolder::new(&fs, false).scaffold(&engine, Path::new("/nope"), "x", &pg);
    assert!(matches!(result, Err(Error::OutputDirectoryNotFound { .. })));
    assert!(fs.list_files().is_empty());
}

#[test]
fn test_existing_directory_without_force_fails() {
    let root = Path::new("/work/proj");
    let fs = MemoryFilesystem::with_root(root);
    let engine = MiniJinjaRenderer::new();
    let pg = PgConfig::new("x", "5432");

    let scaffolder = Scaffolder::new(&fs, false);
    scaffolder.scaffold(&engine, root, "x", &pg).unwrap();

    match scaffolder.scaffold(&engine, root, "x", &pg) {
        Err(Error::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
        other => panic!("Expected IoError, got {other:?}"),
    }
}

#[test]
fn test_force_overwrites() {
    let root = Path::new("/work/proj");
    let fs = MemoryFilesystem::with_root(root);
    let engine = MiniJinjaRenderer::new();

    let scaffolder = Scaffolder::new(&fs, true);
    scaffolder.scaffold(&engine, root, "old", &PgConfig::new("old", "1111")).unwrap();
    scaffolder.scaffold(&engine, root, "new", &PgConfig::new("new", "2222")).unwrap();

    let compose = fs.read_file(&root.join("docker/compose.yaml")).unwrap();
    assert!(compose.contains("new-db"));
    assert!(!compose.contains("old-db"));
    assert_eq!(fs.list_files().len(), 5);
}

#[test_log::test]
fn test_scaffold_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let fs = LocalFilesystem::new();
    let engine = MiniJinjaRenderer::new();
    let pg = PgConfig::new("my-app", "5433");

    Scaffolder::new(&fs, false).scaffold(&engine, root, "my-app", &pg).unwrap();

    let compose = std::fs::read_to_string(root.join("docker/compose.yaml")).unwrap();
    assert!(compose.contains("5433:5432"));
    let tasks = std::fs::read_to_string(root.join("Taskfile.yaml")).unwrap();
    assert!(tasks.contains("- task: db-migrate-apply"));
    for sql in ["schema.sql", "reset.sql", "seed.sql"] {
        let path = root.join("db").join(sql);
        assert_eq!(std::fs::metadata(path).unwrap().len(), 0);
    }

    // A second run hits the existing docker/ directory
    assert!(Scaffolder::new(&fs, false).scaffold(&engine, root, "my-app", &pg).is_err());
}

#[test]
fn test_run_with_preloaded_answers_and_version() {
    let root = Path::new("/work/proj");
    let fs = MemoryFilesystem::with_root(root);
    let prompt = ScriptedPrompter::new(&[]);
    let options = RunOptions {
        preloaded: PreloadedAnswers {
            project_name: Some("billing-api".to_string()),
            port: Some("6543".to_string()),
        },
        pg_version: "16-alpine".to_string(),
        ..RunOptions::new(root)
    };

    let operations = run_in(&prompt, &fs, options).unwrap().unwrap();
    assert_eq!(operations.len(), 7);
    assert!(prompt.asked.borrow().is_empty());

    let compose = fs.read_file(&root.join("docker/compose.yaml")).unwrap();
    assert!(compose.contains("billing-api-db"));
    assert!(compose.contains("6543:5432"));

    let tasks = fs.read_file(&root.join("Taskfile.yaml")).unwrap();
    assert!(tasks.contains("DB_NAME: billing_api\n"));
    assert_eq!(tasks.matches("postgres:16-alpine psql").count(), 3);
}

#[test]
fn test_run_with_force_reuses_directories() {
    let root = Path::new("/work/proj");
    let fs = MemoryFilesystem::with_root(root);
    fs.create_dir_all(&root.join("docker")).unwrap();

    let prompt = ScriptedPrompter::new(&[Some("x"), Some("5432")]);
    let result = run_in(&prompt, &fs, RunOptions::new(root));
    assert!(matches!(result, Err(Error::IoError(_))));

    let prompt = ScriptedPrompter::new(&[Some("x"), Some("5432")]);
    let options = RunOptions { force: true, ..RunOptions::new(root) };
    assert!(run_in(&prompt, &fs, options).unwrap().is_some());
    assert_eq!(fs.list_files(), expected_files(root));
}

#[test]
fn test_empty_answers_are_accepted() {
    let root = Path::new("/work/proj");
    let fs = MemoryFilesystem::with_root(root);
    let prompt = ScriptedPrompter::new(&[Some(""), Some("")]);

    assert!(run_in(&prompt, &fs, RunOptions::new(root)).unwrap().is_some());
    let compose = fs.read_file(&root.join("docker/compose.yaml")).unwrap();
    assert!(compose.contains("  -db:\n"));
    assert!(compose.contains("- :5432\n"));
}
