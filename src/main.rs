use tracing_subscriber::EnvFilter;

fn main() {
    use folder_rdf::cli::parse;
    let cli = parse();
    init_tracing(cli.verbose);
    let code = folder_rdf::app::run_cli(cli);
    if code != 0 { std::process::exit(code); }
}

// FOLDER_RDF_LOG takes a full filter directive; otherwise -v picks the level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("FOLDER_RDF_LOG").unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
