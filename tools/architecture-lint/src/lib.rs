//! Layering check for the todo app crate.
//!
//! Every source file under `app/src/{domain,routing,inbound,outbound}` is
//! parsed and each path it names is classified as either a sibling layer or
//! an external crate. Each layer then declares what it may depend on:
//!
//! - `domain` depends on nothing else in the crate and on no web crates
//! - `routing` may use `domain` only, and no web crates
//! - `inbound` adapters may not reach into `outbound`
//! - `outbound` adapters may not reach into `inbound` or `routing`, nor web
//!   crates
//!
//! Run it with `cargo run -p architecture-lint` from anywhere in the
//! workspace.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::Visit;
use thiserror::Error;

/// Name the app crate is imported under from integration code.
const APP_CRATE: &str = "todo_app";

/// Crates that tie code to the HTTP framework.
const WEB_CRATES: [&str; 5] = [
    "actix_http",
    "actix_rt",
    "actix_service",
    "actix_session",
    "actix_web",
];

/// One forbidden dependency found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .file.display())]
pub struct Violation {
    /// File path relative to `app/src`.
    pub file: PathBuf,
    /// Which rule the file breaks.
    pub message: String,
}

/// Why a lint run failed.
#[derive(Debug, Error)]
pub enum ArchitectureLintError {
    /// Walking or reading the source tree failed.
    #[error("I/O error while linting architecture: {0}")]
    Io(#[from] io::Error),
    /// A file could not be parsed or sits outside every layer.
    #[error("cannot lint {}: {message}", .file.display())]
    Parse { file: PathBuf, message: String },
    /// Files importing what their layer forbids.
    #[error("architecture boundary violations:\n{}", list(.0))]
    Violations(Vec<Violation>),
}

fn list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("- {violation}\n"))
        .collect()
}

/// A Rust source file, path relative to `app/src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    pub file: PathBuf,
    pub contents: String,
}

/// Lint the sources under `app_dir/src`.
pub fn lint_app_sources(app_dir: &Path) -> Result<(), ArchitectureLintError> {
    lint_sources(&read_layer_sources(&app_dir.join("src"))?)
}

/// Lint in-memory sources.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();
    for source in sources {
        let parse_error = |message: String| ArchitectureLintError::Parse {
            file: source.file.clone(),
            message,
        };
        let layer = ModuleLayer::infer_from_path(&source.file).ok_or_else(|| {
            parse_error("file is not under domain, routing, inbound or outbound".to_owned())
        })?;
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| parse_error(err.to_string()))?;
        violations.extend(layer.check(&source.file, &parsed));
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

/// Top-level module of the app crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ModuleLayer {
    Domain,
    Routing,
    Inbound,
    Outbound,
}

/// Something a path in a source file depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Dependency<'a> {
    Layer(ModuleLayer),
    Crate(&'a str),
}

impl ModuleLayer {
    const ALL: [Self; 4] = [Self::Domain, Self::Routing, Self::Inbound, Self::Outbound];

    const fn name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Routing => "routing",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layer| layer.name() == name)
    }

    fn infer_from_path(relative_path: &Path) -> Option<Self> {
        let first = relative_path.components().next()?.as_os_str().to_str()?;
        Self::from_name(first)
    }

    fn permits(self, dependency: Dependency<'_>) -> bool {
        match (self, dependency) {
            (_, Dependency::Layer(other)) if other == self => true,
            (Self::Domain, Dependency::Layer(_)) => false,
            (Self::Routing, Dependency::Layer(other)) => other == Self::Domain,
            (Self::Inbound, Dependency::Layer(other)) => other != Self::Outbound,
            (Self::Outbound, Dependency::Layer(other)) => other == Self::Domain,
            (Self::Inbound, Dependency::Crate(_)) => true,
            (_, Dependency::Crate(name)) => !WEB_CRATES.contains(&name),
        }
    }

    fn check(self, file: &Path, parsed: &syn::File) -> Vec<Violation> {
        let mut collector = PathCollector::default();
        collector.visit_file(parsed);

        let denied: BTreeSet<Dependency<'_>> = collector
            .paths
            .iter()
            .filter_map(|segments| classify(segments))
            .filter(|dependency| !self.permits(*dependency))
            .collect();

        let layer = self.name();
        denied
            .into_iter()
            .map(|dependency| Violation {
                file: file.to_path_buf(),
                message: match dependency {
                    Dependency::Layer(other) => {
                        format!("{layer} module must not depend on crate::{}", other.name())
                    }
                    Dependency::Crate(name) => {
                        format!("{layer} module must not depend on external crate `{name}`")
                    }
                },
            })
            .collect()
    }
}

fn is_relative(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

/// Layer or crate a path names, if it can be told from its leading segments.
fn classify(segments: &[String]) -> Option<Dependency<'_>> {
    let first = segments.first()?.as_str();
    if let Some(layer) = ModuleLayer::from_name(first) {
        return Some(Dependency::Layer(layer));
    }
    if is_relative(first) || first == APP_CRATE {
        let inner = segments
            .iter()
            .skip(1)
            .find(|segment| !is_relative(segment))?;
        return ModuleLayer::from_name(inner).map(Dependency::Layer);
    }
    Some(Dependency::Crate(first))
}

/// Every path named in a file, from `use` trees and expressions alike.
#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

/// Flatten a `use` tree into one path per imported name. Globs keep their
/// prefix.
fn use_paths(tree: &syn::UseTree, prefix: &[String], out: &mut BTreeSet<Vec<String>>) {
    let with = |ident: &syn::Ident| {
        let mut path = prefix.to_vec();
        path.push(ident.to_string());
        path
    };
    match tree {
        syn::UseTree::Path(path) => use_paths(&path.tree, &with(&path.ident), out),
        syn::UseTree::Name(name) => {
            out.insert(with(&name.ident));
        }
        syn::UseTree::Rename(rename) => {
            out.insert(with(&rename.ident));
        }
        syn::UseTree::Glob(_) => {
            out.insert(prefix.to_vec());
        }
        syn::UseTree::Group(group) => {
            for item in &group.items {
                use_paths(item, prefix, out);
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        if !segments.is_empty() {
            self.paths.insert(segments);
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        use_paths(&node.tree, &[], &mut self.paths);
    }
}

/// `.rs` files under each layer directory that exists.
fn read_layer_sources(src_dir: &Path) -> Result<Vec<LintSource>, ArchitectureLintError> {
    let mut pending: Vec<PathBuf> = ModuleLayer::ALL
        .into_iter()
        .map(|layer| src_dir.join(layer.name()))
        .filter(|dir| dir.is_dir())
        .collect();
    let mut sources = Vec::new();
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let file = path
                    .strip_prefix(src_dir)
                    .map_err(|err| ArchitectureLintError::Parse {
                        file: path.clone(),
                        message: err.to_string(),
                    })?
                    .to_path_buf();
                let contents = fs::read_to_string(&path)?;
                sources.push(LintSource { file, contents });
            }
        }
    }
    Ok(sources)
}

#[cfg(test)]
mod tests;
