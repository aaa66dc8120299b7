use crate::config::TrackDisplayField;

use super::model::Track;

/// Build a display string for `track` from the given `fields`, joined by `sep`.
///
/// Blank fields are skipped; when nothing is left the title is used.
pub fn display_from_fields(track: &Track, fields: &[TrackDisplayField], sep: &str) -> String {
    let parts: Vec<&str> = fields
        .iter()
        .map(|f| match f {
            TrackDisplayField::Title => track.title.as_str(),
            TrackDisplayField::Artist => track.artist.as_str(),
            TrackDisplayField::Album => track.album.as_str(),
            TrackDisplayField::Genre => track.genre.as_str(),
            TrackDisplayField::Duration => track.duration.as_str(),
        })
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}
