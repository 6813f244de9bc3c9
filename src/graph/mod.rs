//! Triple store for the folder graph.
//!
//! [`Graph`] wraps an [`oxrdf::Graph`] (set semantics: inserting a duplicate
//! is a no-op) and keeps the prefix table serializers abbreviate with.
//! [`Graph::sorted_triples`] gives a stable order independent of insertion,
//! so every serialization is reproducible.
//!
//! Build one with [`Graph::with_filesystem_ontology`], which binds the `fs`,
//! `rdf` and `rdfs` prefixes and declares the two containment properties,
//! then hand it to [`crate::builder::TreeGraphBuilder`].
use crate::errors::FolderRdfError;
use oxrdf::{Literal, NamedNode, NamedNodeRef, Term, TermRef, Triple, TripleRef};
use std::collections::BTreeMap;

pub mod vocab;

/// Base IRI of the `fs:` namespace; local names are appended verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    base: String,
}

impl Namespace {
    /// # Errors
    /// Returns `FolderRdfError::Namespace` if `base` is not an absolute IRI.
    pub fn new(base: impl Into<String>) -> Result<Self, FolderRdfError> {
        let base = base.into();
        if let Err(e) = NamedNode::new(base.as_str()) {
            return Err(FolderRdfError::Namespace { iri: base, message: e.to_string() });
        }
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &str { &self.base }

    /// IRI for `local`, which must be a sanitized identifier or an `fs:` local name.
    #[must_use]
    pub fn term(&self, local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{}", self.base, local))
    }
}

impl Default for Namespace {
    fn default() -> Self { Self { base: vocab::DEFAULT_FS_NAMESPACE.to_string() } }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// prefix -> namespace IRI
    pub prefixes: BTreeMap<String, String>,
    triples: oxrdf::Graph,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Empty graph with `fs`, `rdf`, `rdfs` bound and the `containsFile` /
    /// `isContainedIn` properties declared.
    #[must_use]
    pub fn with_filesystem_ontology(fs: &Namespace) -> Self {
        let mut g = Self::new();
        g.bind(vocab::FS_PREFIX, fs.base());
        g.bind("rdf", vocab::RDF);
        g.bind("rdfs", vocab::RDFS);
        for name in [vocab::CONTAINS_FILE, vocab::IS_CONTAINED_IN] {
            let prop = fs.term(name);
            let label = Literal::new_simple_literal(name);
            g.add(prop.as_ref(), vocab::rdf::TYPE, vocab::rdf::PROPERTY);
            g.add(prop.as_ref(), vocab::rdfs::LABEL, label.as_ref());
        }
        g
    }

    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        self.prefixes.insert(prefix.to_string(), namespace.to_string());
    }

    /// Insert a triple. Returns `false` if it was already present.
    pub fn add<'a>(
        &mut self,
        subject: impl Into<NamedNodeRef<'a>>,
        predicate: impl Into<NamedNodeRef<'a>>,
        object: impl Into<TermRef<'a>>,
    ) -> bool {
        self.triples.insert(TripleRef::new(subject.into(), predicate.into(), object.into()))
    }

    #[must_use]
    pub fn contains<'a>(
        &self,
        subject: impl Into<NamedNodeRef<'a>>,
        predicate: impl Into<NamedNodeRef<'a>>,
        object: impl Into<TermRef<'a>>,
    ) -> bool {
        self.triples.contains(TripleRef::new(subject.into(), predicate.into(), object.into()))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.triples.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.triples.is_empty() }

    /// The underlying triple set.
    #[must_use]
    pub fn triples(&self) -> &oxrdf::Graph { &self.triples }

    /// Objects of all triples matching `(subject, predicate, _)`.
    #[must_use]
    pub fn objects<'a>(&self, subject: impl Into<NamedNodeRef<'a>>, predicate: impl Into<NamedNodeRef<'a>>) -> Vec<Term> {
        self.triples
            .objects_for_subject_predicate(subject.into(), predicate.into())
            .map(TermRef::into_owned)
            .collect()
    }

    /// IRI subjects of all triples matching `(_, predicate, object)`.
    #[must_use]
    pub fn subjects<'a>(&self, predicate: impl Into<NamedNodeRef<'a>>, object: impl Into<TermRef<'a>>) -> Vec<NamedNode> {
        self.triples
            .subjects_for_predicate_object(predicate.into(), object.into())
            .filter_map(|s| match TermRef::from(s) {
                TermRef::NamedNode(n) => Some(n.into_owned()),
                _ => None,
            })
            .collect()
    }

    /// All triples using `predicate`.
    #[must_use]
    pub fn with_predicate<'a>(&self, predicate: impl Into<NamedNodeRef<'a>>) -> Vec<Triple> {
        self.triples.triples_for_predicate(predicate.into()).map(TripleRef::into_owned).collect()
    }

    /// Every triple, ordered by subject, predicate, object. Triples of one
    /// subject are adjacent, which lets serializers group them.
    #[must_use]
    pub fn sorted_triples(&self) -> Vec<TripleRef<'_>> {
        let mut out: Vec<TripleRef<'_>> = self.triples.iter().collect();
        out.sort_by_cached_key(|t| (t.subject.to_string(), t.predicate.as_str().to_string(), t.object.to_string()));
        out
    }
}
