use crate::builder::{build_graph_with_observer, BuildOptions, FileIdMode, LoggingObserver, RecordingObserver};
use crate::cli::{Cli, Commands};
use crate::errors::FolderRdfError;
use crate::graph::{vocab, Namespace};
use crate::output::{serialize, RdfFormat};
use crate::utils::config::{load_config_at, load_config_near, Config};
use crate::utils::{prompt, summary};
use clap::CommandFactory;
use clap_complete::generate;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Effective build settings after merging flags, config and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: PathBuf,
    pub format: RdfFormat,
    pub namespace: String,
    pub file_ids: FileIdMode,
    pub log_skipped: bool,
}

/// Flags as given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub format: Option<RdfFormat>,
    pub namespace: Option<String>,
    pub file_ids: Option<FileIdMode>,
    pub log_skipped: bool,
}

/// Flags win over config values, which win over defaults.
#[must_use]
pub fn resolve_settings(flags: Overrides, cfg: Option<Config>) -> Settings {
    let cfg = cfg.unwrap_or_default();
    let format = flags.format.or(cfg.format).unwrap_or_default();
    let output = flags
        .output
        .or(cfg.output)
        .unwrap_or_else(|| PathBuf::from(format!("folder_structure.{}", format.extension())));
    Settings {
        output,
        format,
        namespace: flags
            .namespace
            .or(cfg.namespace)
            .unwrap_or_else(|| vocab::DEFAULT_FS_NAMESPACE.to_string()),
        file_ids: flags.file_ids.or(cfg.file_ids).unwrap_or_default(),
        log_skipped: flags.log_skipped || cfg.log_skipped.unwrap_or(false),
    }
}

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = env!("CARGO_PKG_NAME");
            let mut out = io::stdout();
            generate(shell, &mut cmd, bin_name, &mut out);
            0
        }
        Commands::Build {
            path_pos,
            path,
            output,
            format,
            config,
            namespace,
            file_ids,
            stats,
            log_skipped,
        } => {
            // an empty path argument counts as no selection
            let given = path_pos.or(path).filter(|p| !p.as_os_str().is_empty());
            let Some(root) = given.or_else(prompt::select_folder) else {
                eprintln!("{}", FolderRdfError::NoRootSelected);
                return 1;
            };

            let cfg = match config {
                Some(p) => load_config_at(&p).map(Some),
                None => load_config_near(Path::new(".")),
            };
            let cfg = match cfg {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{e}");
                    return 1;
                }
            };
            let flags = Overrides {
                output,
                format: format.map(Into::into),
                namespace,
                file_ids: file_ids.map(Into::into),
                log_skipped,
            };
            let settings = resolve_settings(flags, cfg);

            match run_build(&root, &settings, stats, cli.quiet) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Build failed: {e}");
                    1
                }
            }
        }
    }
}

fn run_build(root: &Path, settings: &Settings, stats: bool, quiet: bool) -> Result<(), FolderRdfError> {
    let options = BuildOptions { namespace: Namespace::new(settings.namespace.clone())?, file_ids: settings.file_ids };
    let mut observer = if settings.log_skipped {
        RecordingObserver::forwarding_to(Box::new(LoggingObserver))
    } else {
        RecordingObserver::default()
    };
    let (graph, build_stats) = build_graph_with_observer(root, &options, &mut observer);
    info!(
        root = %root.display(),
        triples = graph.len(),
        directories = build_stats.directories,
        files = build_stats.files,
        skipped = build_stats.skipped,
        "graph built"
    );

    let content = serialize(&graph, settings.format)?;
    let to_stdout = settings.output == Path::new("-");
    if to_stdout {
        let mut out = io::stdout().lock();
        out.write_all(content.as_bytes())?;
        out.flush()?;
    } else {
        fs::write(&settings.output, content)?;
    }

    if stats {
        let counts = [
            ("directories", build_stats.directories),
            ("files", build_stats.files),
            ("skipped", build_stats.skipped),
            ("collisions", build_stats.collisions),
            ("triples", graph.len()),
        ];
        let mut rendered = summary::render("Build summary", &counts);
        for path in observer.skipped() {
            let _ = write!(rendered, "\nskipped: {}", path.display());
        }
        // keep stdout clean for the document itself
        if to_stdout {
            eprintln!("{rendered}");
        } else {
            println!("{rendered}");
        }
    }

    if !quiet && !to_stdout {
        println!("RDF data has been written to {}", settings.output.display());
    }
    Ok(())
}
