//! Change notifications emitted by the catalog store.
//!
//! Events always carry owned data so subscribers never borrow from the
//! store while it is being mutated.

use super::model::{Track, TrackId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A track was admitted at the end of the collection.
    Added(Track),
    /// A track was removed; carries the removed record.
    Removed(Track),
    LikeToggled { id: TrackId, liked: bool },
    /// The current selection changed (`None` when cleared).
    SelectionChanged(Option<TrackId>),
}

/// Handle returned by `CatalogStore::subscribe`, used to unsubscribe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

pub(crate) type Subscriber = Box<dyn FnMut(&CatalogEvent)>;
