//! Music player module
//!
//! Every tick opens a short-lived session to the music daemon, fetches the
//! player status and current track in one batched request, and renders the
//! track label through a scrolling marquee. Any failure yields an empty
//! fragment for that tick. The session is released exactly once on every
//! path through `SessionGuard`.

mod mpd;

pub use mpd::{MpdDaemon, MpdSession};

use crate::core::{Icon, Marquee, Module, ModuleMetadata, Palette, PlayerError, Tick};
use log::debug;
use rootbar_types::MusicConfig;
use std::ops::{Deref, DerefMut};

const STOP_ICON: Icon = Icon::new(Palette::GREEN, "\u{f04d} ");
const PLAY_ICON: Icon = Icon::new(Palette::GREEN, "\u{f001} ");
const PAUSE_ICON: Icon = Icon::new(Palette::GREEN, "\u{f04c} ");

/// Shown while the player is stopped
const EMPTY_PLAYLIST: &str = "Empty Playlist";

/// Player state as reported by the daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Unknown,
    Stop,
    Play,
    Pause,
}

impl PlayState {
    fn icon(self) -> Option<Icon> {
        match self {
            PlayState::Unknown => None,
            PlayState::Stop => Some(STOP_ICON),
            PlayState::Play => Some(PLAY_ICON),
            PlayState::Pause => Some(PAUSE_ICON),
        }
    }
}

/// The current song's tags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    /// Every artist tag value, in order (a song may carry none or several)
    pub artists: Vec<String>,
    pub title: Option<String>,
    /// Song length in seconds, if known
    pub duration: Option<f64>,
}

impl Track {
    /// `"<artists> - <title>"`, or just the title when there is no artist
    pub fn label(&self) -> String {
        let artists = self.artists.concat();
        let title = self.title.as_deref().unwrap_or_default();
        if artists.is_empty() {
            title.to_string()
        } else {
            format!("{} - {}", artists, title)
        }
    }

    fn has_duration(&self) -> bool {
        self.duration.is_some_and(|d| d > 0.0)
    }
}

/// Result of one batched status + current song query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSnapshot {
    pub state: PlayState,
    /// Elapsed play time in whole seconds
    pub elapsed: u32,
    /// Total play time in whole seconds
    pub total: u32,
    pub track: Option<Track>,
}

/// A music daemon that can be connected to once per tick
pub trait PlayerDaemon {
    type Session: PlayerSession;

    /// Open a connection. An `Err` means nothing was acquired.
    fn connect(&mut self) -> Result<Self::Session, PlayerError>;
}

/// An open connection to the daemon
pub trait PlayerSession {
    /// Consume and validate the daemon's greeting
    fn handshake(&mut self) -> Result<(), PlayerError>;

    /// Fetch status and current song in a single batched request
    fn fetch(&mut self) -> Result<PlayerSnapshot, PlayerError>;

    /// Release the connection. Called exactly once by `SessionGuard`.
    fn close(&mut self);
}

/// Closes the wrapped session when dropped
pub struct SessionGuard<S: PlayerSession> {
    session: S,
}

impl<S: PlayerSession> SessionGuard<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }
}

impl<S: PlayerSession> Deref for SessionGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.session
    }
}

impl<S: PlayerSession> DerefMut for SessionGuard<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

impl<S: PlayerSession> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        self.session.close();
    }
}

/// Now-playing module
pub struct MusicModule<D: PlayerDaemon = MpdDaemon> {
    metadata: ModuleMetadata,
    daemon: D,
    marquee: Marquee,
}

impl MusicModule<MpdDaemon> {
    pub fn new(config: &MusicConfig) -> Self {
        Self::with_daemon(MpdDaemon::new(config), config)
    }
}

impl<D: PlayerDaemon> MusicModule<D> {
    pub fn with_daemon(daemon: D, config: &MusicConfig) -> Self {
        Self {
            metadata: ModuleMetadata::new("music", "Music Player", "MPD now playing"),
            daemon,
            marquee: Marquee::new(config.width, config.overflow_pad),
        }
    }

    pub fn marquee(&self) -> &Marquee {
        &self.marquee
    }

    fn poll(&mut self) -> Result<String, PlayerError> {
        let mut session = SessionGuard::new(self.daemon.connect()?);
        session.handshake()?;
        let snapshot = session.fetch()?;
        Ok(self.format(&snapshot))
    }

    fn format(&mut self, snapshot: &PlayerSnapshot) -> String {
        let icon = snapshot.state.icon().map(|i| i.to_string()).unwrap_or_default();

        if snapshot.state == PlayState::Stop {
            return format!("{}{}", icon, EMPTY_PLAYLIST);
        }

        let mut duration = String::new();
        if let Some(track) = &snapshot.track {
            self.marquee.set_label(&track.label());
            if track.has_duration() {
                duration = format_duration(snapshot.elapsed, snapshot.total);
            }
        }

        format!("{}{}{}", icon, self.marquee.step(), duration)
    }
}

/// `" [m:ss/m:ss]"`
fn format_duration(elapsed: u32, total: u32) -> String {
    format!(
        " [{}:{:02}/{}:{:02}]",
        elapsed / 60,
        elapsed % 60,
        total / 60,
        total % 60
    )
}

impl<D: PlayerDaemon> Module for MusicModule<D> {
    fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    fn render(&mut self, _tick: &Tick) -> String {
        match self.poll() {
            Ok(text) => text,
            Err(e) => {
                debug!("Music player unavailable: {}", e);
                String::new()
            }
        }
    }
}
