//! Command-line interface implementation for pgstarter.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::DEFAULT_PG_VERSION;

/// Command-line arguments structure for pgstarter.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "pgstarter: scaffold a postgres dev setup with docker compose and a Taskfile",
    long_about = None
)]
pub struct Args {
    /// Directory to generate into, relative to the pgstarter executable
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Project name; asked interactively when omitted
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Host port of the database; asked interactively when omitted
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<String>,

    /// Postgres image tag used by the psql client tasks
    #[arg(long, value_name = "TAG", default_value = DEFAULT_PG_VERSION)]
    pub pg_version: String,

    /// Reuse existing docker/ and db/ directories and overwrite generated files
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 after printing help on invalid values
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::InvalidValue || e.kind() == ErrorKind::UnknownArgument {
                eprintln!("{e}");
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
