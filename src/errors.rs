use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolderRdfError {
    #[error("No folder selected.")]
    NoRootSelected,

    #[error("Invalid namespace IRI '{iri}': {message}")]
    Namespace { iri: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}
