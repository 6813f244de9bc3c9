pub mod summary {
    use std::fmt::Write as _;

    /// Titled `name  count` report: names left-aligned, counts right-aligned,
    /// the title underlined to the full width of the report.
    #[must_use]
    pub fn render(title: &str, counts: &[(&str, usize)]) -> String {
        let name_w = counts.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
        let count_w = counts.iter().map(|(_, c)| c.to_string().len()).max().unwrap_or(0);
        let width = title.chars().count().max(name_w + 2 + count_w);

        let mut out = String::new();
        let _ = write!(out, "{title}\n{}", "=".repeat(width));
        for (name, count) in counts {
            let _ = write!(out, "\n{name:<name_w$}  {count:>count_w$}");
        }
        out
    }
}

pub mod config {
    use crate::builder::FileIdMode;
    use crate::errors::FolderRdfError;
    use crate::output::RdfFormat;
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const DEFAULT_CONFIG_NAME: &str = "folder-rdf.toml";

    /// Settings file. Every key is optional; explicit CLI flags take precedence.
    #[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
    #[serde(deny_unknown_fields)]
    pub struct Config {
        pub output: Option<PathBuf>,
        pub format: Option<RdfFormat>,
        pub namespace: Option<String>,
        pub file_ids: Option<FileIdMode>,
        pub log_skipped: Option<bool>,
    }

    /// Load and parse the config at `path`.
    ///
    /// # Errors
    /// Returns `FolderRdfError::Config` if the file cannot be read or parsed.
    pub fn load_config_at(path: &Path) -> Result<Config, FolderRdfError> {
        let data = fs::read_to_string(path)
            .map_err(|e| FolderRdfError::Config { path: path.to_path_buf(), message: e.to_string() })?;
        toml::from_str::<Config>(&data)
            .map_err(|e| FolderRdfError::Config { path: path.to_path_buf(), message: e.to_string() })
    }

    /// Load `folder-rdf.toml` from `dir` if it exists.
    ///
    /// # Errors
    /// Returns `FolderRdfError::Config` if the file exists but is invalid.
    pub fn load_config_near(dir: &Path) -> Result<Option<Config>, FolderRdfError> {
        let p = dir.join(DEFAULT_CONFIG_NAME);
        if p.is_file() {
            load_config_at(&p).map(Some)
        } else {
            Ok(None)
        }
    }
}

pub mod prompt {
    use std::io::{self, BufRead, IsTerminal, Write};
    use std::path::PathBuf;

    /// Ask for a folder on the terminal. `None` when stdin is not interactive
    /// or the answer is empty.
    #[must_use]
    pub fn select_folder() -> Option<PathBuf> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return None;
        }
        let mut err = io::stderr();
        let _ = write!(err, "Folder to convert: ");
        let _ = err.flush();
        read_selection(&mut stdin.lock())
    }

    /// Read one answer line; EOF, read errors and blank lines mean "cancelled".
    pub fn read_selection<R: BufRead>(reader: &mut R) -> Option<PathBuf> {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() { None } else { Some(PathBuf::from(answer)) }
            }
        }
    }
}
