use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};

use super::{ACCENT, centered_rect_sized, controls_footer, input_box};
use crate::app::{App, TrackField, TrackForm};
use crate::config::UiSettings;

const CONTROLS: [(&str, &str); 6] = [
    ("j/k", "up/down"),
    ("a", "add song"),
    ("d", "delete song"),
    ("gg/G", "top/bottom"),
    ("o", "logout"),
    ("q", "quit"),
];

const DIALOG_CONTROLS: [(&str, &str); 4] = [
    ("tab/down", "next field"),
    ("shift-tab/up", "previous field"),
    ("enter", "add song"),
    ("esc", "cancel"),
];

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App, ui: &UiSettings) {
    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Min(5),
        Constraint::Length(4),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Text::from(vec![
            Line::from(format!("♪ {} Admin", ui.header_text)).bold().fg(ACCENT),
            Line::from("Manage your music platform").style(Style::default().add_modifier(Modifier::DIM)),
        ]))
        .block(Block::default().borders(Borders::ALL)),
        rows[0],
    );

    let total = app.store.len().to_string();
    let stats = [
        ("Total Songs", total.as_str(), "in this session"),
        ("Active Users", "1,234", "+15% from last month"),
        ("Total Plays", "45,678", "+23% from last week"),
    ];
    let stat_cols = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(rows[1]);
    for ((label, value, note), rect) in stats.iter().zip(stat_cols.iter()) {
        frame.render_widget(
            Paragraph::new(Text::from(vec![
                Line::from(*value).bold().fg(ACCENT),
                Line::from(*note).style(Style::default().add_modifier(Modifier::DIM)),
            ]))
            .alignment(Alignment::Center)
            .block(Block::bordered().title(format!(" {} ", label))),
            *rect,
        );
    }

    draw_song_table(frame, rows[2], app);

    if app.admin.dialog.is_some() {
        frame.render_widget(controls_footer(&DIALOG_CONTROLS), rows[3]);
    } else {
        frame.render_widget(controls_footer(&CONTROLS), rows[3]);
    }

    if let Some(form) = &app.admin.dialog {
        draw_add_dialog(frame, area, form);
    }
}

fn draw_song_table(frame: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = app
        .store
        .tracks()
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.title.clone()).bold(),
                Cell::from(t.artist.clone()),
                Cell::from(t.album.clone()),
                Cell::from(t.duration.clone()),
                Cell::from(t.genre.clone()).style(Style::default().fg(ACCENT)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(9),
            Constraint::Fill(1),
        ],
    )
    .header(
        Row::new(vec!["Title", "Artist", "Album", "Duration", "Genre"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" song management ")
            .title_bottom(Line::from(" add or remove songs from your platform ").right_aligned()),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !app.store.is_empty() {
        state.select(Some(app.admin.cursor));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_add_dialog(frame: &mut Frame, area: Rect, form: &TrackForm) {
    let field_count = TrackField::ALL.len() as u16;
    let popup = centered_rect_sized(60, field_count * 3 + 4, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_style(Style::default().fg(ACCENT))
        .title(" Add New Song ")
        .title_bottom(Line::from(" * required ").right_aligned());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(TrackField::ALL.iter().map(|_| Constraint::Length(3)));
    let rows = Layout::vertical(constraints).split(inner);

    frame.render_widget(
        Paragraph::new("Fill in the details to add a new song to your platform")
            .style(Style::default().add_modifier(Modifier::DIM)),
        rows[0],
    );

    for (field, rect) in TrackField::ALL.iter().zip(rows.iter().skip(1)) {
        frame.render_widget(
            input_box(
                field.label(),
                form.value(*field),
                field.placeholder(),
                form.focus == *field,
            ),
            *rect,
        );
    }
}
