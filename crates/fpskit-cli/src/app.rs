//! CLI Application logic
//!
//! Contains the command-line interface implementation. Both commands are
//! batch drivers: a failing file is reported and skipped, the rest of the
//! batch continues (parse errors are deterministic data faults, so there
//! is nothing to retry).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use fpskit_core::FpsDocument;
use fpskit_export::{
    pack_images, save_images, save_solution_page, save_spj_page, save_statement_page,
    save_test_cases, Preprocess,
};

#[derive(Parser)]
#[command(name = "fpskit")]
#[command(author, version, about = "Free Problem Set conversion toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unpack FPS problem sets into per-problem directories
    Convert {
        /// Input FPS XML file, or a directory scanned for *.xml
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },

    /// Inline the image references of HTML pages as data: URLs
    Pack {
        /// Input HTML file, or a directory scanned for *.htm/*.html
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output } => convert_command(&input, &output),
        Commands::Pack { input, output } => pack_command(&input, &output),
    }
}

/// Execute the convert command over a file or directory of FPS documents
pub fn convert_command(input: &Path, output: &Path) -> Result<()> {
    let files = collect_files(input, &["xml"])?;

    let mut converted = 0usize;
    for file in &files {
        match convert_file(file, output) {
            Ok(count) => {
                info!("converted {} ({count} problems)", file.display());
                converted += count;
            }
            Err(e) => warn!("skipping {}: {e:#}", file.display()),
        }
    }

    info!("{converted} problems written to {}", output.display());
    Ok(())
}

/// Convert one FPS document; returns the number of problems written
pub fn convert_file(path: &Path, output: &Path) -> Result<usize> {
    let doc = FpsDocument::open(path)
        .with_context(|| format!("failed to open FPS document {}", path.display()))?;
    let problems = doc
        .problems()
        .with_context(|| format!("failed to parse {}", path.display()))?;

    for problem in &problems {
        let problem_dir = output.join(&problem.title);
        save_test_cases(problem, &problem_dir.join("data"), Preprocess::default())?;
        save_spj_page(problem, &problem_dir)?;
        save_solution_page(problem, &problem_dir)?;
        // statement last: it must see the rewritten image references
        let rewritten = save_images(problem, &problem_dir, "")?;
        save_statement_page(&rewritten, &problem_dir)?;
    }

    Ok(problems.len())
}

/// Execute the pack command over a file or directory of HTML pages
pub fn pack_command(input: &Path, output: &Path) -> Result<()> {
    let files = collect_files(input, &["htm", "html"])?;
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;

    for file in &files {
        match pack_file(file, output) {
            Ok(()) => info!("packed {}", file.display()),
            Err(e) => warn!("skipping {}: {e:#}", file.display()),
        }
    }

    Ok(())
}

/// Inline one HTML page into `output` as `packed-<name>`
pub fn pack_file(path: &Path, output: &Path) -> Result<()> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    // image references resolve relative to the page itself
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let packed = pack_images(&html, base_dir)
        .with_context(|| format!("failed to inline images of {}", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page.html".to_string());
    fs::write(output.join(format!("packed-{name}")), packed)?;
    Ok(())
}

/// The batch for one invocation: the input itself when it is a file, or
/// every direct child with a matching extension, sorted for determinism
fn collect_files(input: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        anyhow::bail!("input path not found: {}", input.display());
    }
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(input)
        .with_context(|| format!("failed to read directory {}", input.display()))?
    {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)));
        if path.is_file() && matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
