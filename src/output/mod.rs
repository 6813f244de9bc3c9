//! Graph serializers.
//!
//! RDF/XML, Turtle and N-Triples go through [`oxrdfio::RdfSerializer`] with
//! the graph's prefix table applied; JSON is a serde dump of the same triples.
//! Every format walks [`Graph::sorted_triples`], so the same graph always
//! produces the same bytes.
use crate::errors::FolderRdfError;
use crate::graph::Graph;
use oxrdf::{GraphNameRef, Literal, TermRef, TripleRef};
use oxrdfio::{RdfFormat as SyntaxFormat, RdfSerializer};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RdfFormat {
    #[default]
    RdfXml,
    Turtle,
    NTriples,
    Json,
}

impl RdfFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            RdfFormat::RdfXml => "rdf",
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
            RdfFormat::Json => "json",
        }
    }

    /// The oxrdfio syntax for this format, `None` for the JSON dump.
    #[must_use]
    pub fn syntax(self) -> Option<SyntaxFormat> {
        match self {
            RdfFormat::RdfXml => Some(SyntaxFormat::RdfXml),
            RdfFormat::Turtle => Some(SyntaxFormat::Turtle),
            RdfFormat::NTriples => Some(SyntaxFormat::NTriples),
            RdfFormat::Json => None,
        }
    }
}

impl std::str::FromStr for RdfFormat {
    type Err = FolderRdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rdfxml" | "xml" | "pretty-xml" => Ok(RdfFormat::RdfXml),
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "ntriples" | "nt" => Ok(RdfFormat::NTriples),
            "json" => Ok(RdfFormat::Json),
            other => Err(FolderRdfError::Serialization(format!("unknown format '{other}'"))),
        }
    }
}

/// Serialize `graph` in `format`.
///
/// # Errors
/// Returns `FolderRdfError::Serialization` if a bound prefix is not a valid
/// IRI or JSON encoding fails, `FolderRdfError::Io` if the RDF writer fails.
pub fn serialize(graph: &Graph, format: RdfFormat) -> Result<String, FolderRdfError> {
    match format.syntax() {
        Some(syntax) => write_rdf(graph, syntax),
        None => serde_json::to_string_pretty(&GraphDump::from_graph(graph))
            .map_err(|e| FolderRdfError::Serialization(format!("JSON encode error: {e}"))),
    }
}

fn write_rdf(graph: &Graph, syntax: SyntaxFormat) -> Result<String, FolderRdfError> {
    let mut serializer = RdfSerializer::from_format(syntax);
    for (prefix, ns) in &graph.prefixes {
        serializer = serializer
            .with_prefix(prefix.as_str(), ns.as_str())
            .map_err(|e| FolderRdfError::Serialization(format!("prefix {prefix}: <{ns}> {e}")))?;
    }
    let mut writer = serializer.for_writer(Vec::new());
    let xml = syntax == SyntaxFormat::RdfXml;
    for t in graph.sorted_triples() {
        match t.object {
            TermRef::Literal(l) if xml && !is_xml_text(l.value()) => {
                let cleaned = Literal::new_simple_literal(xml_safe(l.value()));
                let t = TripleRef::new(t.subject, t.predicate, cleaned.as_ref());
                writer.serialize_quad(t.in_graph(GraphNameRef::DefaultGraph))?;
            }
            _ => writer.serialize_quad(t.in_graph(GraphNameRef::DefaultGraph))?,
        }
    }
    let bytes = writer.finish()?;
    String::from_utf8(bytes).map_err(|e| FolderRdfError::Serialization(format!("writer produced invalid UTF-8: {e}")))
}

// XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn is_xml_text(v: &str) -> bool { v.chars().all(is_xml_char) }

/// `v` with every character XML 1.0 cannot carry (C0 controls, U+FFFE,
/// U+FFFF) replaced by U+FFFD. Labels in RDF/XML output pass through this.
#[must_use]
pub fn xml_safe(v: &str) -> Cow<'_, str> {
    if is_xml_text(v) {
        Cow::Borrowed(v)
    } else {
        Cow::Owned(v.chars().map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' }).collect())
    }
}

/// JSON form of a graph: the prefix table and the ordered triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDump {
    pub prefixes: BTreeMap<String, String>,
    pub triples: Vec<JsonTriple>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonTriple {
    pub subject: String,
    pub predicate: String,
    pub object: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum JsonObject {
    Iri(String),
    Literal(String),
}

impl GraphDump {
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let triples = graph
            .sorted_triples()
            .into_iter()
            .map(|t| JsonTriple {
                subject: match TermRef::from(t.subject) {
                    TermRef::NamedNode(n) => n.as_str().to_string(),
                    other => other.to_string(),
                },
                predicate: t.predicate.as_str().to_string(),
                object: match t.object {
                    TermRef::NamedNode(n) => JsonObject::Iri(n.as_str().to_string()),
                    TermRef::Literal(l) => JsonObject::Literal(l.value().to_string()),
                    other => JsonObject::Iri(other.to_string()),
                },
            })
            .collect();
        Self { prefixes: graph.prefixes.clone(), triples }
    }
}
