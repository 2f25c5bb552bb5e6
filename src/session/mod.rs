//! Session domain
//!
//! The narrow boundary toward the external voice-agent backend, plus the
//! display lookups for the session state it drives.

pub mod controller;
pub mod mode;
pub mod voice;

pub use controller::{ControllerConfig, SessionCommand, SessionController, SessionEvent};
pub use mode::Mode;
pub use voice::Voice;

/// Display-only session state as delivered by the agent
///
/// All fields are optional free-form strings; consumers resolve them
/// through the mode/voice lookups, which define the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub mode: Option<String>,
    pub voice: Option<String>,
    pub concept: Option<String>,
}

impl SessionSnapshot {
    /// Resolved learning mode, falling back to [`Mode::Select`]
    pub fn current_mode(&self) -> Mode {
        Mode::resolve(self.mode.as_deref().unwrap_or_default())
    }

    /// Resolved narrator voice, falling back to [`Voice::Matthew`]
    pub fn current_voice(&self) -> Voice {
        Voice::resolve(self.voice.as_deref().unwrap_or_default())
    }

    /// The concept under study; absent and empty both mean "none yet"
    pub fn current_concept(&self) -> Option<&str> {
        self.concept.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_resolves_to_defaults() {
        let snapshot = SessionSnapshot::default();
        assert_eq!(snapshot.current_mode(), Mode::Select);
        assert_eq!(snapshot.current_voice(), Voice::Matthew);
        assert!(snapshot.current_concept().is_none());
    }

    #[test]
    fn test_empty_concept_string_counts_as_absent() {
        let snapshot = SessionSnapshot {
            concept: Some(String::new()),
            ..Default::default()
        };
        assert!(snapshot.current_concept().is_none());
    }

    #[test]
    fn test_concept_is_passed_through_verbatim() {
        let snapshot = SessionSnapshot {
            concept: Some("higher-order functions".to_string()),
            ..Default::default()
        };
        assert_eq!(snapshot.current_concept(), Some("higher-order functions"));
    }
}
