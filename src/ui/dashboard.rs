use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table, TableState},
};

use super::{ACCENT, controls_footer, input_box};
use crate::app::{App, PlaybackState};
use crate::catalog::{Track, display_from_fields};
use crate::config::UiSettings;

/// Featured liked tracks shown above the full list.
const FEATURED_MAX: usize = 6;

const SEARCH_CONTROLS: [(&str, &str); 4] = [
    ("type", "search"),
    ("enter", "keep results"),
    ("esc", "clear"),
    ("up/down", "move"),
];

const CONTROLS: [(&str, &str); 10] = [
    ("j/k", "up/down"),
    ("enter", "play selected"),
    ("space/p", "play/pause"),
    ("f", "like"),
    ("F", "like now playing"),
    ("h/l", "seek"),
    ("-/+", "volume"),
    ("/", "search"),
    ("o", "logout"),
    ("q", "quit"),
];

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App, ui: &UiSettings) {
    let columns = Layout::horizontal([Constraint::Length(30), Constraint::Min(40)]).split(area);
    draw_sidebar(frame, columns[0], app, ui);

    let liked = app.store.liked();
    let featured: Vec<&Track> = liked.iter().take(FEATURED_MAX).collect();
    let player_height = if app.store.selected().is_some() { 5 } else { 0 };

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(featured.len().max(1) as u16 + 2),
        Constraint::Min(5),
        Constraint::Length(player_height),
        Constraint::Length(4),
    ])
    .split(columns[1]);

    frame.render_widget(
        input_box(
            "search",
            &app.user.search_query,
            "Search songs, artists, albums... (press /)",
            app.user.search_mode,
        ),
        rows[0],
    );

    draw_featured(frame, rows[1], &featured);
    draw_all_songs(frame, rows[2], app);

    if let Some(track) = app.store.selected() {
        draw_player(frame, rows[3], app, track, ui);
    }

    let footer = if app.user.search_mode {
        controls_footer(&SEARCH_CONTROLS)
    } else {
        controls_footer(&CONTROLS)
    };
    frame.render_widget(footer, rows[4]);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, ui: &UiSettings) {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let lines = vec![
        Line::from(format!("♪ {}", ui.header_text)).bold().fg(ACCENT),
        Line::from("Your Music Hub").style(dim),
        Line::from(""),
        Line::from(" ⌂  Home").bold(),
        Line::from(" ⌕  Search"),
        Line::from(" ≡  Your Library"),
        Line::from(""),
        Line::from("PLAYLISTS").style(dim),
        Line::from(vec![
            Span::styled(" ♥ ", Style::default().fg(ACCENT)),
            Span::raw(format!("Liked Songs ({})", app.store.liked().len())),
        ]),
        Line::from("   Recently Played"),
        Line::from("   My Playlist #1"),
        Line::from(""),
        Line::from(" ⏻  Logout (o)").style(dim),
    ];

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_featured(frame: &mut Frame, area: Rect, featured: &[&Track]) {
    let items: Vec<ListItem> = if featured.is_empty() {
        vec![ListItem::new("Like a song with f to pin it here").style(Style::default().add_modifier(Modifier::DIM))]
    } else {
        featured
            .iter()
            .map(|t| {
                ListItem::new(Line::from(vec![
                    Span::styled("♥ ", Style::default().fg(ACCENT)),
                    Span::raw(t.title.as_str()).bold(),
                    Span::raw("  "),
                    Span::styled(t.artist.as_str(), Style::default().add_modifier(Modifier::DIM)),
                ]))
            })
            .collect()
    };

    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(" your favorites ")),
        area,
    );
}

fn draw_all_songs(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.visible_tracks();
    let now_playing = app.store.selected().map(|t| t.id);

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let marker = if Some(t.id) == now_playing { "▶" } else { "" };
            let heart = if t.liked { "♥" } else { "♡" };
            Row::new(vec![
                Cell::from(format!("{}{}", marker, i + 1)),
                Cell::from(heart).style(Style::default().fg(ACCENT)),
                Cell::from(t.title.clone()),
                Cell::from(t.artist.clone()),
                Cell::from(t.album.clone()),
                Cell::from(t.genre.clone()),
                Cell::from(t.duration.clone()),
            ])
        })
        .collect();

    let title = if app.user.search_query.is_empty() {
        " all songs ".to_string()
    } else {
        format!(" all songs • {} match(es) ", visible.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec!["#", "", "Title", "Artist", "Album", "Genre", "Time"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !visible.is_empty() {
        state.select(Some(app.user.cursor));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_player(frame: &mut Frame, area: Rect, app: &App, track: &Track, ui: &UiSettings) {
    let cols = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(40),
        Constraint::Percentage(25),
    ])
    .split(area);

    let state = match app.player.state {
        PlaybackState::Playing => "▶ Playing",
        PlaybackState::Paused => "⏸ Paused",
        PlaybackState::Stopped => "■ Stopped",
    };
    let heart = if track.liked { "♥" } else { "♡" };
    let song = display_from_fields(track, &ui.now_playing_fields, &ui.now_playing_separator);

    frame.render_widget(
        Paragraph::new(Text::from(vec![
            Line::from(song).bold(),
            Line::from(vec![
                Span::styled(format!("{} ", heart), Style::default().fg(ACCENT)),
                Span::raw(state),
            ]),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" now playing ")),
        cols[0],
    );

    frame.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" position "))
            .gauge_style(Style::default().fg(ACCENT))
            .percent(u16::from(app.player.position))
            .label(format!("{}% of {}", app.player.position, track.duration)),
        cols[1],
    );

    frame.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" volume "))
            .gauge_style(Style::default().fg(ACCENT))
            .percent(u16::from(app.player.volume)),
        cols[2],
    );
}
