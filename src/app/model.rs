//! Application model types: `App` and `Screen`.
//!
//! The `App` struct owns the catalog store and every piece of per-screen
//! state (forms, cursors, search, player, notifications). Key handling in
//! the runtime only calls methods here; it never touches the store directly.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::catalog::{CatalogEvent, CatalogStore, Track, ValidationError};
use crate::config::UiSettings;

use super::forms::{LoginError, LoginForm, Role, TrackForm};
use super::player::{PlaybackState, Player};
use super::toast::{ToastKind, Toasts};

/// Which screen is on display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Login,
    UserDashboard,
    AdminDashboard,
}

/// Listening dashboard state.
#[derive(Debug, Clone, Default)]
pub struct UserView {
    pub search_query: String,
    /// True while keystrokes go into the search box.
    pub search_mode: bool,
    /// Position in the current search results.
    pub cursor: usize,
}

/// Catalog management dashboard state.
#[derive(Debug, Clone, Default)]
pub struct AdminView {
    /// Position in the full track table.
    pub cursor: usize,
    /// Open "Add Song" dialog, if any.
    pub dialog: Option<TrackForm>,
}

/// The main application model.
pub struct App {
    pub screen: Screen,
    pub store: CatalogStore,
    pub login: LoginForm,
    pub user: UserView,
    pub admin: AdminView,
    pub player: Player,
    pub toasts: Toasts,

    events: mpsc::Receiver<CatalogEvent>,
    volume_step: i16,
    position_step: i16,
}

impl App {
    /// Create a new `App` around `store`, subscribing to its change events.
    pub fn new(mut store: CatalogStore, ui: &UiSettings) -> Self {
        let (tx, rx) = mpsc::channel();
        store.subscribe(move |event| {
            let _ = tx.send(event.clone());
        });

        Self {
            screen: Screen::Landing,
            store,
            login: LoginForm::default(),
            user: UserView::default(),
            admin: AdminView::default(),
            player: Player::default(),
            toasts: Toasts::new(Duration::from_millis(ui.toast_ms)),
            events: rx,
            volume_step: i16::from(ui.volume_step),
            position_step: i16::from(ui.position_step),
        }
    }

    /// Apply every catalog event published since the last call.
    pub fn sync_catalog_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply_catalog_event(event);
        }
    }

    fn apply_catalog_event(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Added(_) => {
                self.toasts
                    .push(ToastKind::Info, "Success", "Song added successfully");
            }
            CatalogEvent::Removed(_) => {
                self.toasts
                    .push(ToastKind::Info, "Success", "Song deleted successfully");
                self.clamp_cursors();
            }
            CatalogEvent::LikeToggled { liked: true, .. } => {
                self.toasts.push(
                    ToastKind::Info,
                    "Added to Liked Songs",
                    "Song added to your favorites",
                );
            }
            CatalogEvent::LikeToggled { liked: false, .. } => {
                self.toasts.push(
                    ToastKind::Info,
                    "Removed from Liked Songs",
                    "Song removed from your favorites",
                );
            }
            CatalogEvent::SelectionChanged(None) => self.player.stop(),
            CatalogEvent::SelectionChanged(Some(_)) => {}
        }
    }

    /// Expire old notifications.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.expire(now);
    }

    pub fn dismiss_toasts(&mut self) {
        self.toasts.dismiss_all();
    }

    // Navigation

    pub fn open_login(&mut self) {
        self.screen = Screen::Login;
    }

    pub fn back_to_landing(&mut self) {
        self.screen = Screen::Landing;
    }

    /// Mock login: route to the dashboard of the chosen role.
    pub fn submit_login(&mut self) -> Result<Role, LoginError> {
        match self.login.submit() {
            Ok(role) => {
                tracing::info!(role = role.label(), "Login accepted");
                self.toasts.push(
                    ToastKind::Info,
                    "Login Successful",
                    format!("Welcome {}!", role.label()),
                );
                self.screen = match role {
                    Role::User => Screen::UserDashboard,
                    Role::Admin => Screen::AdminDashboard,
                };
                Ok(role)
            }
            Err(e) => {
                tracing::info!(error = %e, "Login rejected");
                self.toasts.push(ToastKind::Destructive, "Error", e.to_string());
                Err(e)
            }
        }
    }

    /// Leave either dashboard, resetting every per-session view. The catalog
    /// itself is kept.
    pub fn logout(&mut self) {
        tracing::info!(from = ?self.screen, "Logout");
        self.store.clear_selection();
        self.sync_catalog_events();
        self.login = LoginForm::default();
        self.user = UserView::default();
        self.admin = AdminView::default();
        self.player = Player::default();
        self.screen = Screen::Landing;
    }

    // Listening dashboard

    /// Current search results, in catalog order.
    pub fn visible_tracks(&self) -> Vec<Track> {
        self.store.search(&self.user.search_query)
    }

    pub fn track_at_cursor(&self) -> Option<Track> {
        match self.screen {
            Screen::UserDashboard => self.visible_tracks().into_iter().nth(self.user.cursor),
            Screen::AdminDashboard => self.store.tracks().get(self.admin.cursor).cloned(),
            Screen::Landing | Screen::Login => None,
        }
    }

    pub fn enter_search_mode(&mut self) {
        self.user.search_mode = true;
    }

    /// Leave search mode, keeping the query applied.
    pub fn exit_search_mode(&mut self) {
        self.user.search_mode = false;
    }

    pub fn clear_search(&mut self) {
        self.user.search_query.clear();
        self.user.search_mode = false;
        self.clamp_cursors();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.user.search_query.push(c);
        self.clamp_cursors();
    }

    pub fn pop_search_char(&mut self) {
        self.user.search_query.pop();
        self.clamp_cursors();
    }

    /// Select the highlighted track and start (simulated) playback.
    pub fn play_at_cursor(&mut self) {
        let Some(track) = self.track_at_cursor() else {
            return;
        };
        self.store.select(track.id);
        self.sync_catalog_events();
        self.player.start();
        tracing::debug!(id = %track.id, title = %track.title, "Now playing");
        self.toasts.push(
            ToastKind::Info,
            "Now Playing",
            format!("{} by {}", track.title, track.artist),
        );
    }

    pub fn toggle_play_pause(&mut self) {
        if self.store.selected().is_some() {
            self.player.toggle();
        }
    }

    pub fn toggle_liked_at_cursor(&mut self) {
        if let Some(track) = self.track_at_cursor() {
            self.store.toggle_liked(track.id);
            self.sync_catalog_events();
        }
    }

    /// Like/unlike the track in the player bar.
    pub fn toggle_liked_now_playing(&mut self) {
        if let Some(id) = self.store.selected().map(|t| t.id) {
            self.store.toggle_liked(id);
            self.sync_catalog_events();
        }
    }

    pub fn volume_up(&mut self) {
        self.player.volume_by(self.volume_step);
    }

    pub fn volume_down(&mut self) {
        self.player.volume_by(-self.volume_step);
    }

    pub fn seek_forward(&mut self) {
        if self.player.state != PlaybackState::Stopped {
            self.player.seek_by(self.position_step);
        }
    }

    pub fn seek_back(&mut self) {
        if self.player.state != PlaybackState::Stopped {
            self.player.seek_by(-self.position_step);
        }
    }

    // Admin dashboard

    pub fn open_add_dialog(&mut self) {
        if self.admin.dialog.is_none() {
            self.admin.dialog = Some(TrackForm::default());
        }
    }

    /// Close the dialog without adding anything.
    pub fn cancel_add_dialog(&mut self) {
        self.admin.dialog = None;
    }

    /// Submit the "Add Song" dialog. On failure the dialog stays open with
    /// its input intact and a destructive notification is shown. Returns
    /// `None` when no dialog is open.
    pub fn submit_add_dialog(&mut self) -> Option<Result<Track, ValidationError>> {
        let candidate = self.admin.dialog.as_ref()?.candidate.clone();

        Some(match self.store.add(candidate) {
            Ok(track) => {
                self.admin.dialog = None;
                self.admin.cursor = self.store.len() - 1;
                self.sync_catalog_events();
                Ok(track)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected new song");
                self.toasts.push(
                    ToastKind::Destructive,
                    "Error",
                    "Please fill in required fields",
                );
                Err(e)
            }
        })
    }

    pub fn delete_at_cursor(&mut self) {
        if let Some(track) = self.track_at_cursor() {
            self.store.remove(track.id);
            self.sync_catalog_events();
        }
    }

    // Cursor movement, shared by both dashboards

    fn cursor_len(&self) -> usize {
        match self.screen {
            Screen::UserDashboard => self.visible_tracks().len(),
            Screen::AdminDashboard => self.store.len(),
            Screen::Landing | Screen::Login => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.screen {
            Screen::UserDashboard => Some(&mut self.user.cursor),
            Screen::AdminDashboard => Some(&mut self.admin.cursor),
            Screen::Landing | Screen::Login => None,
        }
    }

    /// Move the cursor down, wrapping to the first row.
    pub fn next(&mut self) {
        let len = self.cursor_len();
        if let Some(cursor) = self.cursor_mut() {
            if len > 0 {
                *cursor = (*cursor + 1) % len;
            }
        }
    }

    /// Move the cursor up, wrapping to the last row.
    pub fn prev(&mut self) {
        let len = self.cursor_len();
        if let Some(cursor) = self.cursor_mut() {
            if len > 0 {
                *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
            }
        }
    }

    pub fn first(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = 0;
        }
    }

    pub fn last(&mut self) {
        let len = self.cursor_len();
        if let Some(cursor) = self.cursor_mut() {
            *cursor = len.saturating_sub(1);
        }
    }

    /// Keep both cursors inside their lists after the lists shrink.
    fn clamp_cursors(&mut self) {
        let visible = self.visible_tracks().len();
        self.user.cursor = self.user.cursor.min(visible.saturating_sub(1));
        self.admin.cursor = self.admin.cursor.min(self.store.len().saturating_sub(1));
    }
}
