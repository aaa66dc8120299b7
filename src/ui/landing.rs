use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Paragraph, Wrap},
};

use super::{ACCENT, controls_footer};
use crate::config::UiSettings;

const STATS: [(&str, &str); 3] = [("10K+", "Songs"), ("50K+", "Users"), ("24/7", "Streaming")];

const FEATURES: [(&str, &str); 3] = [
    (
        "High Quality Audio",
        "Experience crystal clear sound with our premium audio streaming technology",
    ),
    (
        "Social Experience",
        "Connect with friends, share playlists, and discover new music together",
    ),
    (
        "Smart Recommendations",
        "Suggestions that adapt to your taste and mood",
    ),
];

pub(super) fn draw(frame: &mut Frame, area: Rect, ui: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Hero
    let hero = Text::from(vec![
        Line::from(""),
        Line::from(format!("♪  {}  ♪", ui.header_text)).bold().fg(ACCENT),
        Line::from(""),
        Line::from(ui.tagline.as_str()).italic(),
        Line::from(
            "Experience music like never before. Stream, discover, and connect with the beats that move your soul.",
        ),
        Line::from(""),
        Line::from("[ Enter ] Get Started").bold(),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(
        Paragraph::new(hero)
            .wrap(Wrap { trim: true })
            .block(Block::bordered()),
        chunks[0],
    );

    // Stats
    let stat_cols = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(chunks[1]);
    for ((value, label), rect) in STATS.iter().zip(stat_cols.iter()) {
        let text = Text::from(vec![
            Line::from(*value).bold().fg(ACCENT),
            Line::from(*label).style(Style::default().add_modifier(Modifier::DIM)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(Paragraph::new(text).block(Block::bordered()), *rect);
    }

    // Features
    let feature_area = Layout::vertical([Constraint::Length(2), Constraint::Min(4)]).split(chunks[2]);
    frame.render_widget(
        Paragraph::new(Line::from(format!("Why Choose {}?", ui.header_text)).bold())
            .alignment(Alignment::Center),
        feature_area[0],
    );
    let feature_cols = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(feature_area[1]);
    for ((title, blurb), rect) in FEATURES.iter().zip(feature_cols.iter()) {
        frame.render_widget(
            Paragraph::new(*blurb)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center)
                .block(Block::bordered().title(format!(" {} ", title))),
            *rect,
        );
    }

    frame.render_widget(
        controls_footer(&[("enter", "get started"), ("q", "quit")]),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(format!("© {}. All rights reserved.", ui.header_text))
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Right),
        chunks[4],
    );
}
