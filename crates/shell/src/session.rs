//! Session-wide settings with change notification.
//!
//! Theme and the notification badge are ambient configuration threaded
//! through the whole chrome: get/set accessors plus a broadcast
//! subscription so header widgets re-render on change. Lives for the
//! application session; nothing here is persisted.

use std::sync::mpsc::{self, Receiver};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Color theme applied to the whole chrome. Applying it is the
/// presentation layer's job; this is only the selected value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
    Blue,
    Purple,
    Green,
    Orange,
    Rose,
    Coffee,
    Midnight,
    Forest,
    Sunset,
}

impl Theme {
    /// Interpret a stored/selected theme name; unknown names fall back to
    /// the light theme.
    pub fn parse(name: &str) -> Theme {
        match name {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            "system" => Theme::System,
            "blue" => Theme::Blue,
            "purple" => Theme::Purple,
            "green" => Theme::Green,
            "orange" => Theme::Orange,
            "rose" => Theme::Rose,
            "coffee" => Theme::Coffee,
            "midnight" => Theme::Midnight,
            "forest" => Theme::Forest,
            "sunset" => Theme::Sunset,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
            Theme::Blue => "blue",
            Theme::Purple => "purple",
            Theme::Green => "green",
            Theme::Orange => "orange",
            Theme::Rose => "rose",
            Theme::Coffee => "coffee",
            Theme::Midnight => "midnight",
            Theme::Forest => "forest",
            Theme::Sunset => "sunset",
        }
    }
}

/// A settings change delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChanged {
    Theme(Theme),
    Notifications(u32),
}

/// A subscription to settings changes.
///
/// Designed for single-threaded consumption by one chrome widget; each
/// subscriber gets a copy of every change (broadcast semantics).
#[derive(Debug)]
pub struct SettingsSubscription {
    receiver: Receiver<SettingsChanged>,
}

impl SettingsSubscription {
    /// Block until the next change is available.
    pub fn recv(&self) -> Result<SettingsChanged, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a change without blocking.
    pub fn try_recv(&self) -> Result<SettingsChanged, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a change.
    pub fn recv_timeout(
        &self,
        timeout: Duration,
    ) -> Result<SettingsChanged, mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct SettingsState {
    theme: Theme,
    notifications: u32,
}

/// Process-wide settings with get/set accessors and broadcast fan-out.
///
/// - No IO / no async
/// - Best-effort delivery; dead subscribers are dropped while publishing
#[derive(Debug, Default)]
pub struct SessionSettings {
    state: Mutex<SettingsState>,
    subscribers: Mutex<Vec<mpsc::Sender<SettingsChanged>>>,
}

impl SessionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .theme
    }

    pub fn set_theme(&self, theme: Theme) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .theme = theme;
        self.publish(SettingsChanged::Theme(theme));
    }

    pub fn notifications(&self) -> u32 {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .notifications
    }

    pub fn set_notifications(&self, count: u32) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .notifications = count;
        self.publish(SettingsChanged::Notifications(count));
    }

    pub fn subscribe(&self) -> SettingsSubscription {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }
        SettingsSubscription { receiver: rx }
    }

    fn publish(&self, change: SettingsChanged) {
        let mut subs = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(change).is_ok());
    }
}
