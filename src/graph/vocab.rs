//! Vocabulary used by the filesystem ontology.
//!
//! `rdf:` and `rdfs:` terms come from [`oxrdf::vocab`]; this module only adds
//! the prefix table entries and the `fs:` local names (base IRI configurable,
//! see [`DEFAULT_FS_NAMESPACE`]).
pub use oxrdf::vocab::{rdf, rdfs};

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

pub const DEFAULT_FS_NAMESPACE: &str = "http://example.org/filesystem#";
pub const FS_PREFIX: &str = "fs";

// Local names inside the fs namespace
pub const FILE: &str = "File";
pub const CONTAINS_FILE: &str = "containsFile";
pub const IS_CONTAINED_IN: &str = "isContainedIn";

/// Identifier reserved for the traversal root.
pub const ROOT_ID: &str = "root";
/// Label given to the traversal root.
pub const ROOT_LABEL: &str = "Root";
