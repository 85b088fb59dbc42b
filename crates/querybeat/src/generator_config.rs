use querybeat_core::query_gen::QueryGeneratorConfig;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid TOML in config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid JSON in config file {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(
        "Unsupported config file extension for {path:?}; expected `.toml` \
        or `.json`"
    )]
    UnsupportedFormat {
        path: PathBuf,
    },
}

/// Load the generator config for this invocation: the built-in tables,
/// overlaid with the contents of `path` when one was given.
pub(crate) async fn load_generator_config(
    path: Option<&Path>,
) -> Result<QueryGeneratorConfig> {
    let Some(path) = path else {
        log::debug!("No config file given; using built-in generator tables.");
        return Ok(QueryGeneratorConfig::default());
    };

    log::debug!("Reading generator config from {path:?}.");
    let contents =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
    let overrides = parse_generator_config(&contents, path)?;
    log::info!(
        "Loaded {} selection sets and {} `code` placeholders from {path:?}.",
        overrides.selection_sets.len(),
        overrides.code_placeholders.len(),
    );
    Ok(QueryGeneratorConfig::default().merge(overrides))
}

/// Parse config text, picking the format from `path`'s extension.
pub(crate) fn parse_generator_config(
    contents: &str,
    path: &Path,
) -> Result<QueryGeneratorConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    match extension {
        "toml" => toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),

        "json" => serde_json::from_str(contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        }),

        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
