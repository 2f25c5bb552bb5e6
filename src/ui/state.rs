//! Application state management
//!
//! This module provides the central display state for the Tutordeck UI.

use crate::session::{SessionEvent, SessionSnapshot};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use uuid::Uuid;

/// Which top-level screen is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Variant landing screen
    #[default]
    Welcome,
    /// Live session status
    Session,
}

/// Connection lifecycle as reported by the session controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No session
    #[default]
    Disconnected,
    /// Start requested, waiting for the backend
    Connecting,
    /// Session live
    Active,
}

impl ConnectionState {
    pub fn label(self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "Disconnected",
            ConnectionState::Connecting => "Connecting",
            ConnectionState::Active => "Active",
        }
    }
}

/// Debug information displayed in the debug panel
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    /// Current frame rate
    pub fps: f32,
    /// Recent log messages
    pub log_messages: VecDeque<String>,
}

impl DebugInfo {
    pub fn new() -> Self {
        Self {
            log_messages: VecDeque::with_capacity(100),
            ..Default::default()
        }
    }

    pub fn add_log(&mut self, message: String) {
        if self.log_messages.len() >= 100 {
            self.log_messages.pop_front();
        }
        self.log_messages.push_back(message);
    }
}

/// Central application state
pub struct AppState {
    /// Visible screen
    pub screen: Screen,

    /// Session connection lifecycle
    pub connection: ConnectionState,

    /// Latest agent-driven session state
    pub snapshot: SessionSnapshot,

    /// Identifier of the live session, if any
    pub session_id: Option<Uuid>,

    /// When the live session connected
    pub session_started_at: Option<DateTime<Local>>,

    /// Local-only selection on the sales welcome screen
    pub selected_use_case: Option<&'static str>,

    /// Local-only selection on the shopping welcome screen
    pub selected_category: Option<&'static str>,

    /// Last controller-side error, shown until dismissed
    pub last_error: Option<String>,

    /// Whether to show the debug panel
    pub show_debug_panel: bool,

    /// Debug information
    pub debug_info: DebugInfo,

    /// Frame time tracking for FPS
    frame_times: VecDeque<f64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new application state
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            connection: ConnectionState::Disconnected,
            snapshot: SessionSnapshot::default(),
            session_id: None,
            session_started_at: None,
            selected_use_case: None,
            selected_category: None,
            last_error: None,
            show_debug_panel: false,
            debug_info: DebugInfo::new(),
            frame_times: VecDeque::with_capacity(60),
        }
    }

    /// Update FPS calculation
    pub fn update_fps(&mut self, delta_time: f64) {
        self.frame_times.push_back(delta_time);
        if self.frame_times.len() > 60 {
            self.frame_times.pop_front();
        }

        if !self.frame_times.is_empty() {
            let avg_time: f64 =
                self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64;
            self.debug_info.fps = if avg_time > 0.0 { 1.0 / avg_time as f32 } else { 0.0 };
        }
    }

    /// Record that the user asked to start a session
    pub fn begin_connecting(&mut self) {
        self.screen = Screen::Session;
        self.connection = ConnectionState::Connecting;
        self.debug_info.add_log("Session start requested".to_string());
    }

    /// Apply one controller event to the display state
    pub fn apply_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Connecting => {
                self.connection = ConnectionState::Connecting;
            }
            SessionEvent::Connected {
                session_id,
                started_at,
            } => {
                self.connection = ConnectionState::Active;
                self.session_id = Some(session_id);
                self.session_started_at = Some(started_at);
                self.debug_info
                    .add_log(format!("Connected (session {})", short_id(&session_id)));
            }
            SessionEvent::SnapshotUpdated(snapshot) => {
                if self.snapshot != snapshot {
                    self.debug_info.add_log(format!(
                        "Mode changed to {}",
                        snapshot.current_mode().display_name()
                    ));
                }
                self.snapshot = snapshot;
            }
            SessionEvent::Ended => {
                self.connection = ConnectionState::Disconnected;
                self.screen = Screen::Welcome;
                self.session_id = None;
                self.session_started_at = None;
                self.snapshot = SessionSnapshot::default();
                self.debug_info.add_log("Session ended".to_string());
            }
            SessionEvent::Error(error) => {
                self.debug_info.add_log(format!("Error: {error}"));
                self.last_error = Some(error);
            }
        }
    }
}

fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Mode;

    fn connected_event() -> SessionEvent {
        SessionEvent::Connected {
            session_id: Uuid::new_v4(),
            started_at: Local::now(),
        }
    }

    #[test]
    fn test_begin_connecting_switches_screen() {
        let mut state = AppState::new();
        state.begin_connecting();
        assert_eq!(state.screen, Screen::Session);
        assert_eq!(state.connection, ConnectionState::Connecting);
    }

    #[test]
    fn test_connected_event_activates_session() {
        let mut state = AppState::new();
        state.begin_connecting();
        state.apply_event(connected_event());

        assert_eq!(state.connection, ConnectionState::Active);
        assert!(state.session_id.is_some());
        assert!(state.session_started_at.is_some());
    }

    #[test]
    fn test_snapshot_updates_are_mirrored() {
        let mut state = AppState::new();
        state.apply_event(SessionEvent::SnapshotUpdated(SessionSnapshot {
            mode: Some("quiz".to_string()),
            voice: Some("en-US-ken".to_string()),
            concept: Some("loops".to_string()),
        }));

        assert_eq!(state.snapshot.current_mode(), Mode::Quiz);
        assert_eq!(state.snapshot.current_concept(), Some("loops"));
    }

    #[test]
    fn test_ended_resets_to_welcome() {
        let mut state = AppState::new();
        state.begin_connecting();
        state.apply_event(connected_event());
        state.apply_event(SessionEvent::SnapshotUpdated(SessionSnapshot {
            mode: Some("learn".to_string()),
            ..Default::default()
        }));

        state.apply_event(SessionEvent::Ended);

        assert_eq!(state.screen, Screen::Welcome);
        assert_eq!(state.connection, ConnectionState::Disconnected);
        assert!(state.session_id.is_none());
        assert_eq!(state.snapshot, SessionSnapshot::default());
    }

    #[test]
    fn test_error_event_is_recorded() {
        let mut state = AppState::new();
        state.apply_event(SessionEvent::Error("backend unreachable".to_string()));
        assert_eq!(state.last_error.as_deref(), Some("backend unreachable"));
    }

    #[test]
    fn test_log_ring_buffer_is_bounded() {
        let mut info = DebugInfo::new();
        for i in 0..150 {
            info.add_log(format!("message {i}"));
        }
        assert_eq!(info.log_messages.len(), 100);
        assert_eq!(info.log_messages.front().unwrap(), "message 50");
    }
}
