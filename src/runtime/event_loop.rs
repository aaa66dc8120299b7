use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Screen};
use crate::config;
use crate::ui;

/// Main terminal event loop: expires notifications, applies catalog events,
/// draws and dispatches keys to the active screen. Returns `Ok(())` when
/// shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());
        app.sync_catalog_events();

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Route a key press to the active screen. Returns true on quit.
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.screen {
        Screen::Landing => handle_landing_key(key, app),
        Screen::Login => {
            handle_login_key(key, app);
            false
        }
        Screen::UserDashboard => handle_user_key(key, app),
        Screen::AdminDashboard => handle_admin_key(key, app),
    }
}

fn handle_landing_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Enter | KeyCode::Char('g') => app.open_login(),
        KeyCode::Char('x') => app.dismiss_toasts(),
        _ => {}
    }
    false
}

fn handle_login_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.back_to_landing(),
        KeyCode::Tab | KeyCode::BackTab => app.login.toggle_role(),
        KeyCode::Up | KeyCode::Down => app.login.toggle_focus(),
        KeyCode::Enter => {
            // Failure is reported through a notification.
            let _ = app.submit_login();
        }
        KeyCode::Backspace => app.login.pop_char(),
        KeyCode::Char(c) if !c.is_control() => app.login.push_char(c),
        _ => {}
    }
}

fn handle_user_key(key: KeyEvent, app: &mut App) -> bool {
    if app.user.search_mode {
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.exit_search_mode(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Down => app.next(),
            KeyCode::Up => app.prev(),
            KeyCode::Char('j') | KeyCode::Char('n')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                app.next()
            }
            KeyCode::Char('k') | KeyCode::Char('p')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                app.prev()
            }
            KeyCode::Char(c) if !c.is_control() => app.push_search_char(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('o') => app.logout(),
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('g') | KeyCode::Home => app.first(),
        KeyCode::Char('G') | KeyCode::End => app.last(),
        KeyCode::Enter => app.play_at_cursor(),
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_play_pause(),
        KeyCode::Char('f') => app.toggle_liked_at_cursor(),
        KeyCode::Char('F') => app.toggle_liked_now_playing(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.volume_up(),
        KeyCode::Char('-') => app.volume_down(),
        KeyCode::Char('l') | KeyCode::Right => app.seek_forward(),
        KeyCode::Char('h') | KeyCode::Left => app.seek_back(),
        KeyCode::Char('x') => app.dismiss_toasts(),
        _ => {}
    }
    false
}

fn handle_admin_key(key: KeyEvent, app: &mut App) -> bool {
    if app.admin.dialog.is_some() {
        match key.code {
            KeyCode::Esc => app.cancel_add_dialog(),
            KeyCode::Enter => {
                // Failure is reported through a notification.
                let _ = app.submit_add_dialog();
            }
            code => {
                if let Some(form) = app.admin.dialog.as_mut() {
                    match code {
                        KeyCode::Tab | KeyCode::Down => form.focus_next(),
                        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                        KeyCode::Backspace => form.pop_char(),
                        KeyCode::Char(c) if !c.is_control() => form.push_char(c),
                        _ => {}
                    }
                }
            }
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('o') => app.logout(),
        KeyCode::Char('a') => app.open_add_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_at_cursor(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('g') | KeyCode::Home => app.first(),
        KeyCode::Char('G') | KeyCode::End => app.last(),
        KeyCode::Char('x') => app.dismiss_toasts(),
        _ => {}
    }
    false
}
