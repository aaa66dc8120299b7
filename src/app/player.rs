//! Simulated playback state. No audio is decoded or played; the player is
//! a flag plus volume and position gauges.

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing selected.
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub state: PlaybackState,
    /// Percent, 0..=100.
    pub volume: u8,
    /// Percent of the current track, 0..=100.
    pub position: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            state: PlaybackState::Stopped,
            volume: 70,
            position: 30,
        }
    }
}

impl Player {
    pub fn start(&mut self) {
        self.state = PlaybackState::Playing;
    }

    /// Flip between playing and paused. Has no effect while stopped.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            PlaybackState::Stopped => PlaybackState::Stopped,
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        };
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn volume_by(&mut self, delta: i16) {
        self.volume = step_percent(self.volume, delta);
    }

    pub fn seek_by(&mut self, delta: i16) {
        self.position = step_percent(self.position, delta);
    }
}

fn step_percent(value: u8, delta: i16) -> u8 {
    (i16::from(value) + delta).clamp(0, 100) as u8
}
