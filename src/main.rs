//! pgstarter's main application entry point.
//! Handles command-line argument parsing and coordinates prompting,
//! rendering and writing of the project files.

use pgstarter::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    fs::LocalFilesystem,
    parser::PreloadedAnswers,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    scaffold::{program_dir, resolve_target_dir, run as scaffold_project, RunOptions},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the target directory next to the executable
/// 2. Collects the project name and port, stopping quietly on cancel
/// 3. Writes compose file, SQL placeholders and Taskfile
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();
    let fs = LocalFilesystem::new();

    let target_dir = resolve_target_dir(program_dir()?, args.target_dir.as_deref());
    let options = RunOptions {
        target_dir: target_dir.clone(),
        preloaded: PreloadedAnswers { project_name: args.name, port: args.port },
        pg_version: args.pg_version,
        force: args.force,
    };

    let Some(operations) = scaffold_project(&engine, &prompt, &fs, options)? else {
        return Ok(());
    };
    for operation in &operations {
        println!("{operation}");
    }

    println!("Project generated successfully in {}.", target_dir.display());
    Ok(())
}
