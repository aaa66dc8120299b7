use super::*;
use crate::config::TrackDisplayField;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn two_track_store() -> CatalogStore {
    let tracks = vec![
        Track::from_candidate(NewTrack::new("Cosmic Dreams", "Luna Nova").album("Stellar Nights"), false),
        Track::from_candidate(NewTrack::new("Electric Pulse", "Neon Waves").album("Digital Reality"), false),
    ];
    CatalogStore::with_tracks(tracks)
}

fn titles(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}

fn recorder(store: &mut CatalogStore) -> Rc<RefCell<Vec<CatalogEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    events
}

#[test]
fn scenario_search_add_and_remove() {
    let mut store = two_track_store();

    assert_eq!(titles(&store.search("nova")), vec!["Cosmic Dreams"]);

    assert_eq!(
        store.add(NewTrack::new("", "X")),
        Err(ValidationError::MissingTitle)
    );
    assert_eq!(store.len(), 2);

    let added = store.add(NewTrack::new("New Song", "Y")).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(
        store.tracks().iter().filter(|t| t.id == added.id).count(),
        1
    );

    let pulse = store.tracks()[1].id;
    store.remove(pulse);
    assert_eq!(titles(store.tracks()), vec!["Cosmic Dreams", "New Song"]);
}

#[test]
fn add_assigns_unique_ids() {
    let mut store = CatalogStore::new();
    let mut seen = HashSet::new();
    for i in 0..200 {
        let t = store.add(NewTrack::new(format!("Song {i}"), "Artist")).unwrap();
        assert!(seen.insert(t.id));
    }
    assert_eq!(store.len(), 200);
}

#[test]
fn add_rejects_missing_artist_without_mutating() {
    let mut store = two_track_store();
    let events = recorder(&mut store);
    let before = store.tracks().to_vec();

    assert_eq!(
        store.add(NewTrack::new("Title", "")),
        Err(ValidationError::MissingArtist)
    );
    assert_eq!(store.tracks(), before.as_slice());
    assert!(events.borrow().is_empty());
}

#[test]
fn add_appends_with_liked_false_and_all_fields() {
    let mut store = two_track_store();
    let t = store
        .add(
            NewTrack::new("Solar Flare", "Cosmic Entity")
                .album("Space Odyssey")
                .duration("not a time")
                .genre("Ambient"),
        )
        .unwrap();

    assert!(!t.liked);
    assert_eq!(t.duration, "not a time");
    assert_eq!(store.tracks().last(), Some(&t));
}

#[test]
fn remove_twice_is_a_noop_the_second_time() {
    let mut store = two_track_store();
    let id = store.tracks()[0].id;

    store.remove(id);
    let after_first = store.tracks().to_vec();
    let events = recorder(&mut store);

    store.remove(id);
    assert_eq!(store.tracks(), after_first.as_slice());
    assert!(events.borrow().is_empty());
}

#[test]
fn empty_search_returns_everything_in_order() {
    let store = CatalogStore::with_tracks(builtin_seed());
    assert_eq!(store.search(""), store.tracks().to_vec());
}

#[test]
fn search_ignores_case() {
    let store = CatalogStore::with_tracks(builtin_seed());
    let lower = store.search("jazz");
    assert_eq!(lower, store.search("JAZZ"));
    assert_eq!(titles(&lower), vec!["Midnight Jazz"]);
}

#[test]
fn search_matches_album_but_not_genre() {
    let store = CatalogStore::with_tracks(builtin_seed());
    assert_eq!(titles(&store.search("after hours")), vec!["Midnight Jazz"]);
    assert!(store.search("synthwave").is_empty());
}

#[test]
fn search_is_a_snapshot() {
    let mut store = two_track_store();
    let snapshot = store.search("");
    store.add(NewTrack::new("Late", "Arrival")).unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(store.len(), 3);
}

#[test]
fn toggle_liked_is_an_involution() {
    let mut store = two_track_store();
    let id = store.tracks()[0].id;
    let original = store.tracks()[0].liked;

    store.toggle_liked(id);
    assert_eq!(store.get(id).map(|t| t.liked), Some(!original));
    store.toggle_liked(id);
    assert_eq!(store.get(id).map(|t| t.liked), Some(original));
}

#[test]
fn liked_lists_only_liked_tracks() {
    let store = CatalogStore::with_tracks(builtin_seed());
    assert_eq!(
        titles(&store.liked()),
        vec!["Cosmic Dreams", "Midnight Jazz", "Digital Dreams"]
    );
}

#[test]
fn operations_on_unknown_ids_are_silent() {
    let mut store = two_track_store();
    let events = recorder(&mut store);
    let ghost = TrackId::new();

    store.remove(ghost);
    store.toggle_liked(ghost);
    store.select(ghost);

    assert_eq!(store.len(), 2);
    assert!(store.selected().is_none());
    assert!(events.borrow().is_empty());
}

#[test]
fn subscribers_see_every_mutation_in_order() {
    let mut store = two_track_store();
    let events = recorder(&mut store);
    let first = store.tracks()[0].id;

    let added = store.add(NewTrack::new("A", "B")).unwrap();
    store.toggle_liked(first);
    store.select(added.id);
    store.remove(added.id);

    let got = events.borrow();
    assert_eq!(
        *got,
        vec![
            CatalogEvent::Added(added.clone()),
            CatalogEvent::LikeToggled { id: first, liked: true },
            CatalogEvent::SelectionChanged(Some(added.id)),
            CatalogEvent::Removed(added),
            CatalogEvent::SelectionChanged(None),
        ]
    );
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut store = two_track_store();
    let count = Rc::new(RefCell::new(0));
    let c = Rc::clone(&count);
    let sub = store.subscribe(move |_| *c.borrow_mut() += 1);

    store.add(NewTrack::new("A", "B")).unwrap();
    assert!(store.unsubscribe(sub));
    assert!(!store.unsubscribe(sub));
    store.add(NewTrack::new("C", "D")).unwrap();

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn select_and_clear_selection() {
    let mut store = two_track_store();
    let id = store.tracks()[1].id;

    store.select(id);
    assert_eq!(store.selected().map(|t| t.title.as_str()), Some("Electric Pulse"));

    store.select(TrackId::new());
    assert_eq!(store.selected().map(|t| t.id), Some(id));

    store.clear_selection();
    assert!(store.selected().is_none());
}

#[test]
fn removing_an_unselected_track_keeps_selection() {
    let mut store = two_track_store();
    let keep = store.tracks()[0].id;
    store.select(keep);
    store.remove(store.tracks()[1].id);
    assert_eq!(store.selected().map(|t| t.id), Some(keep));
}

#[test]
fn builtin_seed_has_distinct_ids() {
    let seed = builtin_seed();
    let ids: HashSet<_> = seed.iter().map(|t| t.id).collect();
    assert_eq!(seed.len(), 5);
    assert_eq!(ids.len(), 5);
}

#[test]
fn load_seed_file_reads_tracks_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.toml");
    std::fs::write(
        &path,
        r#"
[[tracks]]
title = "Night Drive"
artist = "Chrome Avenue"
album = "Neon Roads"
duration = "4:01"
genre = "Synthwave"
liked = true

[[tracks]]
title = "Bare"
artist = "Minimal"
"#,
    )
    .unwrap();

    let tracks = load_seed_file(&path).unwrap();
    assert_eq!(titles(&tracks), vec!["Night Drive", "Bare"]);
    assert!(tracks[0].liked);
    assert!(!tracks[1].liked);
    assert_eq!(tracks[1].album, "");
}

#[test]
fn load_seed_file_reports_missing_and_malformed_files() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("nope.toml");
    assert!(matches!(load_seed_file(&missing), Err(SeedError::Io { .. })));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[[tracks]]\ntitle = 3\n").unwrap();
    assert!(matches!(load_seed_file(&bad), Err(SeedError::Parse { .. })));
}

#[test]
fn seed_tracks_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert_eq!(seed_tracks(Some(&missing)).len(), builtin_seed().len());
    assert_eq!(seed_tracks(None).len(), 5);
}

#[test]
fn display_from_fields_joins_non_blank_fields() {
    let t = Track::from_candidate(NewTrack::new("Song", "  Artist  ").duration("3:00"), false);
    assert_eq!(
        display_from_fields(&t, &[TrackDisplayField::Artist, TrackDisplayField::Title], " - "),
        "Artist - Song"
    );
    assert_eq!(
        display_from_fields(
            &t,
            &[TrackDisplayField::Album, TrackDisplayField::Title, TrackDisplayField::Duration],
            " | "
        ),
        "Song | 3:00"
    );
    assert_eq!(display_from_fields(&t, &[TrackDisplayField::Genre], " - "), "Song");
}

#[test]
fn validation_errors_read_naturally() {
    assert_eq!(ValidationError::MissingTitle.to_string(), "title is required");
    assert_eq!(ValidationError::MissingArtist.to_string(), "artist is required");
}
