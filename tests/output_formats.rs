use folder_rdf::builder::{build_graph, BuildOptions};
use folder_rdf::graph::{vocab, Graph, Namespace};
use folder_rdf::output::{serialize, xml_safe, GraphDump, RdfFormat};
use oxrdf::{Literal, TermRef, Triple, TripleRef};
use oxrdfio::RdfParser;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    fs::write(path, content).unwrap();
}

fn sample_tree(root: &Path) {
    write_file(&root.join("docs").join("a&b <draft>.txt"), "");
    write_file(&root.join("docs").join("guide.md"), "");
    write_file(&root.join("main.rs"), "");
}

// Names that need escaping, rewriting or replacing somewhere along the way.
fn awkward_tree(root: &Path) {
    sample_tree(root);
    write_file(&root.join(".hidden").join("..twice"), "");
    write_file(&root.join("café.md"), "");
    write_file(&root.join("notes").join("a\u{FFFE}b"), "");
    write_file(&root.join("quote \"q\" 'a'.txt"), "");
    write_file(&root.join("end."), "");
}

fn triple_strings(graph: &Graph, xml: bool) -> BTreeSet<String> {
    graph
        .triples()
        .iter()
        .map(|t| match t.object {
            TermRef::Literal(l) if xml => {
                let cleaned = Literal::new_simple_literal(xml_safe(l.value()));
                TripleRef::new(t.subject, t.predicate, cleaned.as_ref()).to_string()
            }
            _ => t.to_string(),
        })
        .collect()
}

fn parse_back(text: &str, format: RdfFormat) -> BTreeSet<String> {
    let syntax = format.syntax().unwrap();
    RdfParser::from_format(syntax)
        .for_reader(text.as_bytes())
        .map(|quad| {
            let quad = quad.unwrap();
            Triple::new(quad.subject, quad.predicate, quad.object).to_string()
        })
        .collect()
}

#[test]
fn rdfxml_round_trips_awkward_names() {
    let dir = tempdir().unwrap();
    awkward_tree(dir.path());
    let (graph, _) = build_graph(dir.path(), &BuildOptions::default());
    let xml = serialize(&graph, RdfFormat::RdfXml).unwrap();

    assert!(!xml.contains('\u{FFFE}'));
    assert!(!xml.contains("a&b <draft>"));
    assert!(xml.contains("café.md"));
    assert_eq!(parse_back(&xml, RdfFormat::RdfXml), triple_strings(&graph, true));
}

#[test]
fn turtle_round_trips_awkward_names() {
    let dir = tempdir().unwrap();
    awkward_tree(dir.path());
    let (graph, _) = build_graph(dir.path(), &BuildOptions::default());
    let ttl = serialize(&graph, RdfFormat::Turtle).unwrap();

    assert_eq!(parse_back(&ttl, RdfFormat::Turtle), triple_strings(&graph, false));
}

#[test]
fn ntriples_round_trips_awkward_names() {
    let dir = tempdir().unwrap();
    awkward_tree(dir.path());
    let (graph, _) = build_graph(dir.path(), &BuildOptions::default());
    let nt = serialize(&graph, RdfFormat::NTriples).unwrap();

    assert_eq!(nt.lines().count(), graph.len());
    assert_eq!(parse_back(&nt, RdfFormat::NTriples), triple_strings(&graph, false));
}

#[test]
fn rdfxml_declares_bound_prefixes() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());
    let (graph, _) = build_graph(dir.path(), &BuildOptions::default());
    let xml = serialize(&graph, RdfFormat::RdfXml).unwrap();

    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("xmlns:fs=\"http://example.org/filesystem#\""));
    assert!(xml.contains("xmlns:rdfs=\"http://www.w3.org/2000/01/rdf-schema#\""));
    assert!(xml.contains("http://example.org/filesystem#a_b__draft_.txt"));
    assert!(xml.trim_end().ends_with("</rdf:RDF>"));
}

#[test]
fn turtle_abbreviates_with_bound_prefixes() {
    let fs_ = Namespace::new("urn:tree#").unwrap();
    let mut graph = Graph::with_filesystem_ontology(&fs_);
    let label = Literal::new_simple_literal("say \"hi\"");
    graph.add(fs_.term("root").as_ref(), vocab::rdfs::LABEL, label.as_ref());

    let ttl = serialize(&graph, RdfFormat::Turtle).unwrap();
    assert!(ttl.contains("@prefix fs: <urn:tree#> ."));
    assert!(ttl.contains("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> ."));
    assert!(ttl.contains("fs:containsFile"));
    assert!(!ttl.contains("<urn:tree#containsFile>"));
    assert!(ttl.contains(r#""say \"hi\"""#));
}

#[test]
fn ntriples_writes_full_iris() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());
    let (graph, _) = build_graph(dir.path(), &BuildOptions::default());
    let nt = serialize(&graph, RdfFormat::NTriples).unwrap();
    assert!(nt.contains(
        "<http://example.org/filesystem#main.rs> <http://example.org/filesystem#isContainedIn> <http://example.org/filesystem#root> ."
    ));
    assert!(nt.lines().all(|l| l.starts_with('<') && l.ends_with(" .")));
}

#[test]
fn json_dump_round_trips() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());
    let (graph, _) = build_graph(dir.path(), &BuildOptions::default());
    let json = serialize(&graph, RdfFormat::Json).unwrap();
    let back: GraphDump = serde_json::from_str(&json).unwrap();
    assert_eq!(back, GraphDump::from_graph(&graph));
    assert_eq!(back.triples.len(), graph.len());
    assert!(json.contains("\"type\": \"literal\""));
}

#[test]
fn repeated_builds_serialize_identically() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());
    write_file(&dir.path().join("z").join("y").join("x"), "");
    let opts = BuildOptions::default();
    for format in [RdfFormat::RdfXml, RdfFormat::Turtle, RdfFormat::NTriples, RdfFormat::Json] {
        let (g1, _) = build_graph(dir.path(), &opts);
        let (g2, _) = build_graph(dir.path(), &opts);
        assert_eq!(serialize(&g1, format).unwrap(), serialize(&g2, format).unwrap());
    }
}
