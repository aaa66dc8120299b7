//! Text-entry forms: the mock login and the admin "Add Song" dialog.

use crate::catalog::NewTrack;

/// The two mock login roles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
}

/// Login form state. Both role tabs share the same email and password.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub role: Role,
    pub email: String,
    pub password: String,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn toggle_role(&mut self) {
        self.role = match self.role {
            Role::User => Role::Admin,
            Role::Admin => Role::User,
        };
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    /// Mock authentication: any non-empty email and password are accepted.
    pub fn submit(&self) -> Result<Role, LoginError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        Ok(self.role)
    }

    /// Password rendered as bullets, one per character.
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TrackField {
    #[default]
    Title,
    Artist,
    Album,
    Duration,
    Genre,
}

impl TrackField {
    pub const ALL: [TrackField; 5] = [
        TrackField::Title,
        TrackField::Artist,
        TrackField::Album,
        TrackField::Duration,
        TrackField::Genre,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TrackField::Title => "Title *",
            TrackField::Artist => "Artist *",
            TrackField::Album => "Album",
            TrackField::Duration => "Duration",
            TrackField::Genre => "Genre",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            TrackField::Title => "Song title",
            TrackField::Artist => "Artist name",
            TrackField::Album => "Album name",
            TrackField::Duration => "e.g., 3:45",
            TrackField::Genre => "Music genre",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }
}

/// The "Add Song" dialog: a candidate track plus the focused field.
#[derive(Debug, Clone, Default)]
pub struct TrackForm {
    pub candidate: NewTrack,
    pub focus: TrackField,
}

impl TrackForm {
    pub fn value(&self, field: TrackField) -> &str {
        match field {
            TrackField::Title => &self.candidate.title,
            TrackField::Artist => &self.candidate.artist,
            TrackField::Album => &self.candidate.album,
            TrackField::Duration => &self.candidate.duration,
            TrackField::Genre => &self.candidate.genre,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            TrackField::Title => &mut self.candidate.title,
            TrackField::Artist => &mut self.candidate.artist,
            TrackField::Album => &mut self.candidate.album,
            TrackField::Duration => &mut self.candidate.duration,
            TrackField::Genre => &mut self.candidate.genre,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        let i = (self.focus.index() + 1) % TrackField::ALL.len();
        self.focus = TrackField::ALL[i];
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        let n = TrackField::ALL.len();
        let i = (self.focus.index() + n - 1) % n;
        self.focus = TrackField::ALL[i];
    }
}
