use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::builder::FileIdMode;
use crate::output::RdfFormat;

#[derive(Debug, Parser)]
#[command(
    name = "folder-rdf",
    version,
    about = "Convert a directory tree into an RDF graph",
    long_about = "Walk a directory tree and write an RDF graph of it: every directory becomes an rdfs:Class (subclass of its parent), every file an fs:File individual linked by fs:containsFile / fs:isContainedIn. Unreadable directories are skipped. Without a path argument the folder is asked for interactively."
)]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Pretty RDF/XML
    Rdfxml,
    Turtle,
    Ntriples,
    /// JSON dump of prefixes and triples
    Json,
}

impl From<FormatArg> for RdfFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Rdfxml => RdfFormat::RdfXml,
            FormatArg::Turtle => RdfFormat::Turtle,
            FormatArg::Ntriples => RdfFormat::NTriples,
            FormatArg::Json => RdfFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileIdsArg {
    /// Bare file name (same-named files share a node)
    Name,
    /// Directory path plus file name (unique per file)
    Qualified,
}

impl From<FileIdsArg> for FileIdMode {
    fn from(f: FileIdsArg) -> Self {
        match f {
            FileIdsArg::Name => FileIdMode::Name,
            FileIdsArg::Qualified => FileIdMode::Qualified,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the RDF graph for a directory and write it out
    Build {
        /// Directory to convert (positional form of --path)
        #[arg(value_name = "PATH", conflicts_with = "path")]
        path_pos: Option<PathBuf>,
        /// Directory to convert
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Output file; `-` writes to stdout (default: folder_structure.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Path to a TOML configuration file (default: ./folder-rdf.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Base IRI of the filesystem namespace
        #[arg(long, env = "FOLDER_RDF_NAMESPACE")]
        namespace: Option<String>,
        /// How file identifiers are derived
        #[arg(long, value_enum)]
        file_ids: Option<FileIdsArg>,
        /// Print a build summary after writing the output
        #[arg(long, default_value_t = false)]
        stats: bool,
        /// Log directories skipped because they could not be read
        #[arg(long, default_value_t = false)]
        log_skipped: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
