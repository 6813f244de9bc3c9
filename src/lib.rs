//! folder-rdf: turn a directory tree into an RDF graph
//!
//! Directories become `rdfs:Class` nodes arranged by `rdfs:subClassOf`, files
//! become `fs:File` individuals tied to their directory by `fs:containsFile`
//! and its inverse `fs:isContainedIn`. Node names are sanitized so that they
//! are valid XML names and the graph can be written as RDF/XML; the triples
//! are [`oxrdf`] terms and the RDF syntaxes are produced by [`oxrdfio`].
//!
//! # Quickstart (Library)
//! ```no_run
//! use folder_rdf::builder::{build_graph, BuildOptions};
//! use folder_rdf::output::{serialize, RdfFormat};
//!
//! let root = std::path::Path::new(".");
//! let (graph, _stats) = build_graph(root, &BuildOptions::default());
//! let xml = serialize(&graph, RdfFormat::RdfXml).expect("serialize");
//! println!("{xml}");
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! folder-rdf build ~/projects/site
//! folder-rdf build --path . --format turtle -o tree.ttl --stats
//! ```
pub mod app;
pub mod builder;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod output;
pub mod sanitize;
pub mod utils;
