//! Hooks for traversal events the builder recovers from on its own.
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Receives events the traversal does not surface as errors.
///
/// Every method has a no-op default, so implementors pick what they need.
pub trait TraversalObserver {
    /// `path` could not be listed; its contents were left out of the graph.
    fn skipped_directory(&mut self, _path: &Path, _error: &io::Error) {}

    /// `second` sanitized to `id`, which `first` already produced.
    fn identifier_collision(&mut self, _id: &str, _first: &Path, _second: &Path) {}
}

/// Default: ignore everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl TraversalObserver for SilentObserver {}

/// Emits a `tracing` warning per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl TraversalObserver for LoggingObserver {
    fn skipped_directory(&mut self, path: &Path, error: &io::Error) {
        warn!(path = %path.display(), error = %error, "skipping unreadable directory");
    }

    fn identifier_collision(&mut self, id: &str, first: &Path, second: &Path) {
        warn!(id, first = %first.display(), second = %second.display(), "identifier collision");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent {
    Skipped { path: PathBuf, error: String },
    Collision { id: String, first: PathBuf, second: PathBuf },
}

/// Keeps every event, optionally forwarding to another observer.
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Vec<TraversalEvent>,
    forward: Option<Box<dyn TraversalObserver>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn forwarding_to(inner: Box<dyn TraversalObserver>) -> Self {
        Self { events: Vec::new(), forward: Some(inner) }
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.events.iter().filter_map(|e| match e {
            TraversalEvent::Skipped { path, .. } => Some(path.as_path()),
            TraversalEvent::Collision { .. } => None,
        })
    }

    pub fn collisions(&self) -> impl Iterator<Item = (&str, &Path, &Path)> {
        self.events.iter().filter_map(|e| match e {
            TraversalEvent::Collision { id, first, second } => {
                Some((id.as_str(), first.as_path(), second.as_path()))
            }
            TraversalEvent::Skipped { .. } => None,
        })
    }
}

impl TraversalObserver for RecordingObserver {
    fn skipped_directory(&mut self, path: &Path, error: &io::Error) {
        self.events.push(TraversalEvent::Skipped { path: path.to_path_buf(), error: error.to_string() });
        if let Some(inner) = self.forward.as_mut() {
            inner.skipped_directory(path, error);
        }
    }

    fn identifier_collision(&mut self, id: &str, first: &Path, second: &Path) {
        self.events.push(TraversalEvent::Collision {
            id: id.to_string(),
            first: first.to_path_buf(),
            second: second.to_path_buf(),
        });
        if let Some(inner) = self.forward.as_mut() {
            inner.identifier_collision(id, first, second);
        }
    }
}
