use std::path::Path;

use serde::Deserialize;

use super::error::SeedError;
use super::model::{NewTrack, Track};

/// Seed file layout: a TOML array of `[[tracks]]` tables.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    tracks: Vec<SeedTrack>,
}

#[derive(Debug, Deserialize)]
struct SeedTrack {
    title: String,
    artist: String,
    #[serde(default)]
    album: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    genre: String,
    #[serde(default)]
    liked: bool,
}

impl From<SeedTrack> for Track {
    fn from(s: SeedTrack) -> Self {
        let candidate = NewTrack::new(s.title, s.artist)
            .album(s.album)
            .duration(s.duration)
            .genre(s.genre);
        Track::from_candidate(candidate, s.liked)
    }
}

/// The sample catalog every session starts with unless a seed file is set.
pub fn builtin_seed() -> Vec<Track> {
    let rows = [
        ("Cosmic Dreams", "Luna Nova", "Stellar Nights", "3:45", "Electronic", true),
        ("Electric Pulse", "Neon Waves", "Digital Reality", "4:12", "Synthwave", false),
        ("Midnight Jazz", "Blue Notes", "After Hours", "5:28", "Jazz", true),
        ("Solar Flare", "Cosmic Entity", "Space Odyssey", "4:33", "Ambient", false),
        ("Digital Dreams", "Cyber Sound", "Future Vibes", "3:21", "Electronic", true),
    ];

    rows.into_iter()
        .map(|(title, artist, album, duration, genre, liked)| {
            let candidate = NewTrack::new(title, artist)
                .album(album)
                .duration(duration)
                .genre(genre);
            Track::from_candidate(candidate, liked)
        })
        .collect()
}

/// Read tracks from a TOML seed file. Entries are trusted as-is.
pub fn load_seed_file(path: &Path) -> Result<Vec<Track>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SeedFile = toml::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.tracks.into_iter().map(Track::from).collect())
}

/// Resolve the start-up catalog: the seed file when configured and readable,
/// otherwise the built-in sample data.
pub fn seed_tracks(seed_path: Option<&Path>) -> Vec<Track> {
    let Some(path) = seed_path else {
        return builtin_seed();
    };

    match load_seed_file(path) {
        Ok(tracks) => {
            tracing::info!(path = %path.display(), count = tracks.len(), "Loaded seed catalog");
            tracks
        }
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to built-in catalog");
            builtin_seed()
        }
    }
}
