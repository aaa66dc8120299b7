//! UI rendering helpers for the terminal user interface.
//!
//! `draw` dispatches on the active screen; each screen lives in its own
//! submodule. Notifications are drawn last, on top of everything.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::{App, Screen, ToastKind};
use crate::config::UiSettings;

mod admin;
mod dashboard;
mod landing;
mod login;

pub(crate) const ACCENT: Color = Color::Magenta;
pub(crate) const DESTRUCTIVE: Color = Color::Red;

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let area = frame.area();
    match app.screen {
        Screen::Landing => landing::draw(frame, area, ui_settings),
        Screen::Login => login::draw(frame, area, app, ui_settings),
        Screen::UserDashboard => dashboard::draw(frame, area, app, ui_settings),
        Screen::AdminDashboard => admin::draw(frame, area, app, ui_settings),
    }
    draw_toasts(frame, area, app);
}

/// Render key hints as `[key] action | [key] action`, keeping the given order.
pub(crate) fn controls_text(bindings: &[(&str, &str)]) -> String {
    bindings
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

pub(crate) fn controls_footer(bindings: &[(&str, &str)]) -> Paragraph<'static> {
    Paragraph::new(controls_text(bindings))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true })
}

/// Compute a centered rectangle with given size constrained to `r`.
pub(crate) fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// A single-line text input in a titled box. Shows `placeholder` dimmed
/// while empty and highlights the border when focused.
pub(crate) fn input_box<'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
) -> Paragraph<'a> {
    let content = if value.is_empty() {
        Line::from(Span::styled(placeholder, Style::default().add_modifier(Modifier::DIM)))
    } else if focused {
        Line::from(vec![Span::raw(value), "▏".fg(ACCENT)])
    } else {
        Line::from(value)
    };

    let border = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };

    Paragraph::new(content).block(
        Block::bordered()
            .title(format!(" {} ", label))
            .border_style(border),
    )
}

const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 4;

/// Stack live notifications in the top-right corner, newest at the bottom.
fn draw_toasts(frame: &mut Frame, area: Rect, app: &App) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + 1;

    for toast in app.toasts.iter() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect {
            x,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        let color = match toast.kind {
            ToastKind::Info => ACCENT,
            ToastKind::Destructive => DESTRUCTIVE,
        };

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.description.as_str())
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Left)
                .block(
                    Block::bordered()
                        .border_style(Style::default().fg(color))
                        .title(Span::styled(
                            format!(" {} ", toast.title),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ))
                        .title_bottom(Line::from(" x dismiss ").right_aligned())
                        .padding(Padding::horizontal(1)),
                ),
            rect,
        );
        y += TOAST_HEIGHT;
    }
}
