use std::fmt;

use uuid::Uuid;

/// Opaque identifier of a track, stable for the track's lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(Uuid);

impl TrackId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Free-form label such as `3:45`; never parsed.
    pub duration: String,
    pub genre: String,
    pub liked: bool,
}

impl Track {
    /// Build a stored track from a candidate, assigning a fresh id.
    pub(crate) fn from_candidate(candidate: NewTrack, liked: bool) -> Self {
        Self {
            id: TrackId::new(),
            title: candidate.title,
            artist: candidate.artist,
            album: candidate.album,
            duration: candidate.duration,
            genre: candidate.genre,
            liked,
        }
    }

    /// True when `query_lower` is a substring of the lowercased title, artist
    /// or album.
    pub(crate) fn matches_lower(&self, query_lower: &str) -> bool {
        if query_lower.is_empty() {
            return true;
        }
        [&self.title, &self.artist, &self.album]
            .iter()
            .any(|field| field.to_lowercase().contains(query_lower))
    }
}

/// A candidate track description, as entered in the admin "Add Song" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTrack {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    pub genre: String,
}

impl NewTrack {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            ..Self::default()
        }
    }

    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }
}
