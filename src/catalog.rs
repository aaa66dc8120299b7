//! Catalog module: the in-memory track collection and everything that
//! feeds or formats it.
//!
//! `CatalogStore` owns the tracks and the current selection, and notifies
//! subscribers synchronously on every mutation. Seed data and display
//! helpers live alongside it.

mod display;
mod error;
mod events;
mod model;
mod seed;
mod store;

pub use display::display_from_fields;
pub use error::{SeedError, ValidationError};
pub use events::{CatalogEvent, SubscriptionId};
pub use model::{NewTrack, Track, TrackId};
pub use seed::{builtin_seed, load_seed_file, seed_tracks};
pub use store::CatalogStore;

#[cfg(test)]
mod tests;
