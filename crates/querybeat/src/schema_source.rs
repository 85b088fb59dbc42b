use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, SchemaSourceError>;

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub schema_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files. All files found are read as one schema.",
        name="SCHEMA_PATHS",
        required=true,
    )]
    pub schema_paths: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum SchemaSourceError {
    #[error("Failed to scan {path:?}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Failed to read schema file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No schema files found (looked for extensions: {exts})")]
    NoSchemaFiles {
        exts: String,
    },
}

/// The concatenated text of every schema file that was found.
#[derive(Debug)]
pub(crate) struct SchemaText {
    pub file_paths: Vec<PathBuf>,
    pub text: String,
}

impl SchemaArgs {
    /// Find every schema file at or under the given paths, in sorted path
    /// order.
    ///
    /// Directories are filtered by `schema_file_exts`. A single file path
    /// is always used, whatever its extension.
    pub(crate) fn find_schema_files(&self) -> Result<Vec<PathBuf>> {
        let exts: HashSet<&str> =
            self.schema_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        let mut file_paths = vec![];
        for path in &self.schema_paths {
            if path.is_file() {
                log::trace!("Using explicitly named schema file {path:?}.");
                file_paths.push(path.to_owned());
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.map_err(|source| SchemaSourceError::Walk {
                    path: path.to_owned(),
                    source,
                })?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                match entry_path.extension().and_then(|ext| ext.to_str()) {
                    Some(ext) if exts.contains(ext) => {
                        log::trace!("Found schema file at {entry_path:#?}.");
                        file_paths.push(entry_path.to_path_buf());
                    },
                    _ => log::trace!("Skipping non-schema file: {entry_path:#?}."),
                }
            }
        }

        if file_paths.is_empty() {
            return Err(SchemaSourceError::NoSchemaFiles {
                exts: self.schema_file_exts.join(", "),
            });
        }
        log::debug!("Found {} schema files.", file_paths.len());
        Ok(file_paths)
    }

    pub(crate) async fn load(&self) -> Result<SchemaText> {
        let file_paths = self.find_schema_files()?;
        let mut text = String::new();
        for path in &file_paths {
            let contents =
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SchemaSourceError::Io {
                        path: path.to_owned(),
                        source,
                    })?;
            text.push_str(&contents);
            text.push('\n');
        }
        Ok(SchemaText { file_paths, text })
    }
}
