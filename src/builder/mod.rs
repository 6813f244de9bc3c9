//! Directory traversal that populates a [`Graph`].
//!
//! Each directory becomes an `rdfs:Class` (a subclass of its parent), each
//! other entry an `fs:File` individual linked to its directory by
//! `fs:containsFile` and the inverse `fs:isContainedIn`.
//!
//! The walk is depth-first and best-effort: a directory that cannot be listed
//! keeps its own node but contributes no children, and the walk continues with
//! its siblings. Such skips, and identifier collisions, go to a
//! [`TraversalObserver`]; the default observer stays silent.
//!
//! ```no_run
//! use folder_rdf::builder::{build_graph, BuildOptions};
//!
//! let (graph, stats) = build_graph(std::path::Path::new("."), &BuildOptions::default());
//! println!("{} triples, {} files", graph.len(), stats.files);
//! ```
use crate::graph::{vocab, Graph, Namespace};
use crate::sanitize::NameSanitizer;
use oxrdf::{Literal, NamedNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub mod observer;

pub use observer::{LoggingObserver, RecordingObserver, SilentObserver, TraversalEvent, TraversalObserver};

/// How file identifiers are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIdMode {
    /// Sanitized bare file name. Same-named files in different directories share a node.
    #[default]
    Name,
    /// Sanitized `<directory relative path>/<file name>`; unique per file.
    Qualified,
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub namespace: Namespace,
    pub file_ids: FileIdMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub directories: usize,
    pub files: usize,
    pub skipped: usize,
    pub collisions: usize,
}

/// Recursive builder bound to one traversal root.
pub struct TreeGraphBuilder<'o> {
    root: PathBuf,
    fs: Namespace,
    file_ids: FileIdMode,
    sanitizer: NameSanitizer,
    observer: &'o mut dyn TraversalObserver,
    // identifier -> first path that produced it
    seen: HashMap<String, PathBuf>,
    stats: BuildStats,
}

impl<'o> TreeGraphBuilder<'o> {
    pub fn new(root: &Path, options: &BuildOptions, observer: &'o mut dyn TraversalObserver) -> Self {
        Self {
            root: root.to_path_buf(),
            fs: options.namespace.clone(),
            file_ids: options.file_ids,
            sanitizer: NameSanitizer::new(),
            observer,
            seen: HashMap::new(),
            stats: BuildStats::default(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path { &self.root }

    #[must_use]
    pub fn stats(&self) -> BuildStats { self.stats }

    /// Add `directory` and everything below it to `graph`.
    ///
    /// `parent` is the class node of the enclosing directory; pass `None` for
    /// the traversal root. Listing failures are reported to the observer and
    /// never returned.
    pub fn build(&mut self, directory: &Path, graph: &mut Graph, parent: Option<&NamedNode>) {
        let relative = relative_id_path(&self.root, directory);
        let dir_id = match relative.as_deref() {
            None => vocab::ROOT_ID.to_string(),
            Some(rel) => self.sanitizer.sanitize(rel),
        };
        self.note_identifier(&dir_id, directory);
        let dir_node = self.fs.term(&dir_id);
        self.stats.directories += 1;
        debug!(id = %dir_id, path = %directory.display(), "directory");

        let label = match relative {
            None => vocab::ROOT_LABEL.to_string(),
            Some(_) => bare_name(directory),
        };
        let label = Literal::new_simple_literal(label);
        graph.add(dir_node.as_ref(), vocab::rdfs::LABEL, label.as_ref());
        graph.add(dir_node.as_ref(), vocab::rdf::TYPE, vocab::rdfs::CLASS);
        if let Some(parent) = parent {
            graph.add(dir_node.as_ref(), vocab::rdfs::SUB_CLASS_OF, parent.as_ref());
        }

        let entries = match list_entries(directory) {
            Ok(entries) => entries,
            Err(e) => {
                self.stats.skipped += 1;
                self.observer.skipped_directory(directory, &e);
                return;
            }
        };

        for (name, path) in entries {
            if path.is_dir() {
                self.build(&path, graph, Some(&dir_node));
            } else {
                self.add_file(graph, &dir_node, &dir_id, &name, &path);
            }
        }
    }

    fn add_file(&mut self, graph: &mut Graph, dir_node: &NamedNode, dir_id: &str, name: &str, path: &Path) {
        let file_id = match self.file_ids {
            FileIdMode::Name => self.sanitizer.sanitize(name),
            FileIdMode::Qualified => self.sanitizer.sanitize(&format!("{dir_id}/{name}")),
        };
        self.note_identifier(&file_id, path);
        self.stats.files += 1;

        let file_node = self.fs.term(&file_id);
        let contains = self.fs.term(vocab::CONTAINS_FILE);
        let contained_in = self.fs.term(vocab::IS_CONTAINED_IN);
        let file_class = self.fs.term(vocab::FILE);
        let label = Literal::new_simple_literal(name);
        graph.add(file_node.as_ref(), vocab::rdf::TYPE, file_class.as_ref());
        graph.add(file_node.as_ref(), vocab::rdfs::LABEL, label.as_ref());
        graph.add(dir_node.as_ref(), contains.as_ref(), file_node.as_ref());
        graph.add(file_node.as_ref(), contained_in.as_ref(), dir_node.as_ref());
    }

    fn note_identifier(&mut self, id: &str, path: &Path) {
        match self.seen.get(id) {
            Some(first) if first != path => {
                self.stats.collisions += 1;
                self.observer.identifier_collision(id, first, path);
            }
            Some(_) => {}
            None => {
                self.seen.insert(id.to_string(), path.to_path_buf());
            }
        }
    }
}

/// Build a complete graph for `root`: ontology header plus the traversal.
///
/// Never fails. A root that cannot be listed (missing, a plain file, no
/// permission) still yields the ontology header and the root class node,
/// and counts as one skipped directory.
#[must_use]
pub fn build_graph(root: &Path, options: &BuildOptions) -> (Graph, BuildStats) {
    build_graph_with_observer(root, options, &mut SilentObserver)
}

/// Like [`build_graph`], reporting skips and collisions to `observer`.
pub fn build_graph_with_observer(
    root: &Path,
    options: &BuildOptions,
    observer: &mut dyn TraversalObserver,
) -> (Graph, BuildStats) {
    let mut graph = Graph::with_filesystem_ontology(&options.namespace);
    let mut builder = TreeGraphBuilder::new(root, options, observer);
    builder.build(root, &mut graph, None);
    (graph, builder.stats())
}

/// Relative path of `dir` under `root` joined with `/`, or `None` for the root itself.
fn relative_id_path(root: &Path, dir: &Path) -> Option<String> {
    let rel = dir.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() { None } else { Some(parts.join("/")) }
}

fn bare_name(path: &Path) -> String {
    path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

// Collected and sorted up front so the directory handle is released before recursing.
fn list_entries(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        entries.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}
