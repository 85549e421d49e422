//! `cargo run -p architecture-lint`: check the app's layering.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("no Cargo.toml declaring [workspace] above {}", .start.display())]
struct NoWorkspace {
    start: PathBuf,
}

fn main() -> ExitCode {
    let outcome = workspace_root()
        .map_err(|err| err.to_string())
        .and_then(|root| {
            architecture_lint::lint_app_sources(&root.join("app")).map_err(|err| err.to_string())
        });
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            let _ = writeln!(io::stderr().lock(), "{message}");
            ExitCode::FAILURE
        }
    }
}

/// Nearest workspace manifest above the current directory, falling back to
/// the one above this crate.
fn workspace_root() -> Result<PathBuf, NoWorkspace> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let starts = std::env::current_dir()
        .ok()
        .into_iter()
        .chain([manifest_dir.to_path_buf()]);
    starts
        .filter_map(|start| {
            start
                .ancestors()
                .find(|dir| declares_workspace(dir))
                .map(Path::to_path_buf)
        })
        .next()
        .ok_or_else(|| NoWorkspace {
            start: manifest_dir.to_path_buf(),
        })
}

fn declares_workspace(dir: &Path) -> bool {
    fs::read_to_string(dir.join("Cargo.toml"))
        .is_ok_and(|manifest| manifest.lines().any(|line| line.trim() == "[workspace]"))
}
