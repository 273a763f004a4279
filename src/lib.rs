//! pgstarter scaffolds a local postgres development setup.
//! It writes a docker compose file, a Taskfile with database tasks and empty
//! SQL scripts into a target directory.

/// Command-line interface module for pgstarter
pub mod cli;

/// Database configuration record
pub mod config;

/// Shared constants: file names, credentials, prompts
pub mod constants;

/// Error types and handling
pub mod error;

/// Filesystem abstraction with local and in-memory implementations
pub mod fs;

/// Compose and Taskfile document generators
pub mod generator;

/// Collection of the project name and port
pub mod parser;

/// User input and interaction handling
pub mod prompt;

/// Template rendering
pub mod renderer;

/// Target directory resolution and project layout
pub mod scaffold;
