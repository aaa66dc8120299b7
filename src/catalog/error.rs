use std::path::PathBuf;

/// Raised by `CatalogStore::add` when a required field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("artist is required")]
    MissingArtist,
}

/// Failure to read a seed catalog file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
