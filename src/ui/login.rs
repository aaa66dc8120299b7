use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Paragraph, Tabs},
};

use super::{ACCENT, controls_footer, input_box};
use crate::app::{App, LoginField, Role};
use crate::config::UiSettings;

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App, ui: &UiSettings) {
    let halves = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(area);

    let hero = Text::from(vec![
        Line::from(format!("♪  {}  ♪", ui.header_text)).bold().fg(ACCENT),
        Line::from(""),
        Line::from(ui.tagline.as_str()).italic(),
    ])
    .alignment(Alignment::Center);
    let hero_area = Layout::vertical([Constraint::Fill(1), Constraint::Length(3), Constraint::Fill(1)])
        .split(halves[0]);
    frame.render_widget(Block::bordered(), halves[0]);
    frame.render_widget(Paragraph::new(hero), hero_area[1]);

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(4),
    ])
    .split(halves[1]);

    let form = &app.login;
    let selected_tab = match form.role {
        Role::User => 0,
        Role::Admin => 1,
    };
    let tabs = Tabs::new(vec![" User Login ", " Admin Login "])
        .select(selected_tab)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .block(Block::bordered());
    frame.render_widget(tabs, rows[0]);

    let (heading, description, email_label, password_label, button) = match form.role {
        Role::User => (
            "Welcome Back",
            "Sign in to your account to access your music",
            "Email",
            "Password",
            "Sign In",
        ),
        Role::Admin => (
            "Admin Access",
            "Sign in with administrator credentials",
            "Admin Email",
            "Admin Password",
            "Admin Sign In",
        ),
    };

    frame.render_widget(
        Paragraph::new(Text::from(vec![
            Line::from(heading).bold(),
            Line::from(description).style(Style::default().add_modifier(Modifier::DIM)),
        ])),
        rows[1],
    );

    let masked = form.masked_password();
    frame.render_widget(
        input_box(
            email_label,
            &form.email,
            "Enter your email",
            form.focus == LoginField::Email,
        ),
        rows[2],
    );
    frame.render_widget(
        input_box(
            password_label,
            &masked,
            "Enter your password",
            form.focus == LoginField::Password,
        ),
        rows[3],
    );
    frame.render_widget(
        Paragraph::new(Line::from(format!("[ Enter ] {}", button)).bold().fg(ACCENT))
            .alignment(Alignment::Center),
        rows[4],
    );

    frame.render_widget(
        controls_footer(&[
            ("tab", "switch user/admin"),
            ("up/down", "switch field"),
            ("enter", "sign in"),
            ("esc", "back"),
        ]),
        rows[6],
    );
}
