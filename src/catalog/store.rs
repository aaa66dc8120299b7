//! The catalog store: ordered tracks, the current selection and the
//! subscriber list.

use super::error::ValidationError;
use super::events::{CatalogEvent, Subscriber, SubscriptionId};
use super::model::{NewTrack, Track, TrackId};

/// In-memory owner of the track collection.
///
/// Insertion order is the default display order. Every mutating call that
/// actually changes state notifies all subscribers before returning; calls
/// that match nothing are silent no-ops.
#[derive(Default)]
pub struct CatalogStore {
    tracks: Vec<Track>,
    selected: Option<TrackId>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding already-built tracks. Seed data is trusted and
    /// is not validated.
    pub fn with_tracks(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            ..Self::default()
        }
    }

    /// Register `callback` to be invoked synchronously after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&CatalogEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, event: CatalogEvent) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }

    /// Validate `candidate` and append it to the end of the collection.
    pub fn add(&mut self, candidate: NewTrack) -> Result<Track, ValidationError> {
        if candidate.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if candidate.artist.is_empty() {
            return Err(ValidationError::MissingArtist);
        }

        let track = Track::from_candidate(candidate, false);
        self.tracks.push(track.clone());
        self.notify(CatalogEvent::Added(track.clone()));
        Ok(track)
    }

    /// Remove the track with `id`, keeping the order of the rest. Clears the
    /// selection when it pointed at the removed track.
    pub fn remove(&mut self, id: TrackId) {
        let Some(pos) = self.position(id) else {
            return;
        };

        let removed = self.tracks.remove(pos);
        self.notify(CatalogEvent::Removed(removed));

        if self.selected == Some(id) {
            self.selected = None;
            self.notify(CatalogEvent::SelectionChanged(None));
        }
    }

    pub fn toggle_liked(&mut self, id: TrackId) {
        let Some(track) = self.tracks.iter_mut().find(|t| t.id == id) else {
            return;
        };

        track.liked = !track.liked;
        let liked = track.liked;
        self.notify(CatalogEvent::LikeToggled { id, liked });
    }

    /// Snapshot of tracks whose title, artist or album contains `query`,
    /// ignoring case. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Track> {
        let query_lower = query.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.matches_lower(&query_lower))
            .cloned()
            .collect()
    }

    /// Snapshot of liked tracks in collection order.
    pub fn liked(&self) -> Vec<Track> {
        self.tracks.iter().filter(|t| t.liked).cloned().collect()
    }

    /// Mark `id` as the current selection. Unknown ids leave the selection
    /// untouched.
    pub fn select(&mut self, id: TrackId) {
        if self.selected == Some(id) || self.position(id).is_none() {
            return;
        }
        self.selected = Some(id);
        self.notify(CatalogEvent::SelectionChanged(Some(id)));
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.notify(CatalogEvent::SelectionChanged(None));
        }
    }

    pub fn selected(&self) -> Option<&Track> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn position(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }
}
