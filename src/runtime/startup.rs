use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::{self, CatalogEvent, CatalogStore};
use crate::config::{LogFormat, Settings};

/// Initialize the tracing subsystem, writing to the log file.
///
/// The terminal belongs to the UI, so nothing is logged to stdout. When the
/// log file cannot be opened the app runs without logging.
pub fn init_tracing(settings: &Settings) {
    let Some(path) = settings.log_file_path() else {
        return;
    };
    let file = match open_log_file(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "melodystream: cannot open log file {}, logging disabled: {e}",
                path.display()
            );
            return;
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let subscriber = tracing_subscriber::registry().with(env_filter);
    let writer = Mutex::new(file);

    match settings.logging.format {
        LogFormat::Json => {
            subscriber
                .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
                .init();
        }
        LogFormat::Pretty => {
            subscriber
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Seed the catalog and attach the logging subscriber.
pub fn build_store(settings: &Settings) -> CatalogStore {
    let tracks = catalog::seed_tracks(settings.catalog.seed_path.as_deref());
    let mut store = CatalogStore::with_tracks(tracks);
    store.subscribe(log_catalog_event);
    store
}

fn log_catalog_event(event: &CatalogEvent) {
    match event {
        CatalogEvent::Added(t) => {
            tracing::info!(id = %t.id, title = %t.title, artist = %t.artist, "Track added");
        }
        CatalogEvent::Removed(t) => {
            tracing::info!(id = %t.id, title = %t.title, "Track removed");
        }
        CatalogEvent::LikeToggled { id, liked } => {
            tracing::debug!(id = %id, liked, "Like toggled");
        }
        CatalogEvent::SelectionChanged(Some(id)) => {
            tracing::debug!(id = %id, "Selection changed");
        }
        CatalogEvent::SelectionChanged(None) => {
            tracing::debug!("Selection cleared");
        }
    }
}
