use folder_rdf::builder::FileIdMode;
use folder_rdf::output::RdfFormat;
use folder_rdf::utils::config;
use std::fs;
use std::path::{Path, PathBuf};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    fs::write(path, content).unwrap();
}

#[test]
fn parses_full_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("folder-rdf.toml");
    let data = r#"
output = "tree.nt"
format = "ntriples"
namespace = "http://example.com/fs#"
file_ids = "qualified"
log_skipped = true
"#;
    write(&cfg_path, data);

    let cfg = config::load_config_at(&cfg_path).expect("config parsed");
    assert_eq!(cfg.output, Some(PathBuf::from("tree.nt")));
    assert_eq!(cfg.format, Some(RdfFormat::NTriples));
    assert_eq!(cfg.namespace.as_deref(), Some("http://example.com/fs#"));
    assert_eq!(cfg.file_ids, Some(FileIdMode::Qualified));
    assert_eq!(cfg.log_skipped, Some(true));
}

#[test]
fn load_config_near_looks_for_default_name() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(config::load_config_near(tmp.path()).unwrap(), None);

    write(&tmp.path().join(config::DEFAULT_CONFIG_NAME), "format = 'rdfxml'\n");
    let cfg = config::load_config_near(tmp.path()).unwrap().expect("found default config");
    assert_eq!(cfg.format, Some(RdfFormat::RdfXml));
    assert_eq!(cfg.output, None);
}

#[test]
fn unknown_keys_and_values_are_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("c.toml");
    write(&p, "colour = 'blue'\n");
    assert!(config::load_config_at(&p).is_err());
    write(&p, "file_ids = 'hashed'\n");
    let err = config::load_config_at(&p).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn missing_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(config::load_config_at(&tmp.path().join("absent.toml")).is_err());
}
