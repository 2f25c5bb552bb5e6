//! Learning mode lookup
//!
//! The active mode arrives from the agent as a free-form string; this
//! module resolves it to a closed enum with display metadata. Resolution
//! is total: unknown values fall back to `Select`.

use egui::Color32;

/// Learning/interaction phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Choosing a mode and concept
    #[default]
    Select,
    /// The tutor explains a concept
    Learn,
    /// The tutor asks questions
    Quiz,
    /// The learner explains the concept back
    TeachBack,
}

impl Mode {
    /// Modes the learner can be in once a concept is chosen
    pub const SELECTABLE: [Mode; 3] = [Mode::Learn, Mode::Quiz, Mode::TeachBack];

    /// Resolve an agent-supplied mode string, falling back to `Select`
    pub fn resolve(raw: &str) -> Self {
        match raw {
            "learn" => Mode::Learn,
            "quiz" => Mode::Quiz,
            "teach_back" => Mode::TeachBack,
            _ => Mode::Select,
        }
    }

    /// Wire name as the agent sends it
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Select => "select",
            Mode::Learn => "learn",
            Mode::Quiz => "quiz",
            Mode::TeachBack => "teach_back",
        }
    }

    /// Short display name
    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Select => "Select",
            Mode::Learn => "Learn",
            Mode::Quiz => "Quiz",
            Mode::TeachBack => "Teach Back",
        }
    }

    /// Banner label shown in the session header
    pub fn label(self) -> &'static str {
        match self {
            Mode::Select => "📚 Choose Mode",
            Mode::Learn => "📖 Learn Mode",
            Mode::Quiz => "❓ Quiz Mode",
            Mode::TeachBack => "💬 Teach Back Mode",
        }
    }

    /// Large header icon
    pub fn icon(self) -> &'static str {
        match self {
            Mode::Select => "🎯",
            Mode::Learn => "🧑‍🏫",
            Mode::Quiz => "🎓",
            Mode::TeachBack => "👨‍🎓",
        }
    }

    /// One-line summary under the banner
    pub fn blurb(self) -> &'static str {
        match self {
            Mode::Select => "Select your learning mode and concept",
            Mode::Learn => "Listen to concept explanation",
            Mode::Quiz => "Answer questions to test understanding",
            Mode::TeachBack => "Explain the concept to the tutor",
        }
    }

    /// Longer guidance copy for the description box
    pub fn guidance(self) -> &'static str {
        match self {
            Mode::Select => {
                "Choose a learning mode (Learn, Quiz, or Teach Back) and pick a concept to get started!"
            }
            Mode::Learn => {
                "Listen carefully as the tutor explains the concept with clear examples and real-world applications."
            }
            Mode::Quiz => {
                "Answer the questions thoughtfully. The tutor will provide feedback and guide you through any misconceptions."
            }
            Mode::TeachBack => {
                "Explain the concept in your own words as if teaching someone new. The tutor will give constructive feedback."
            }
        }
    }

    /// Accent color for mode labels and the status card border
    pub fn accent(self) -> Color32 {
        match self {
            Mode::Select => Color32::from_rgb(147, 51, 234), // Purple
            Mode::Learn => Color32::from_rgb(37, 99, 235),   // Blue
            Mode::Quiz => Color32::from_rgb(217, 119, 6),    // Amber
            Mode::TeachBack => Color32::from_rgb(22, 163, 74), // Green
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_modes() {
        assert_eq!(Mode::resolve("select"), Mode::Select);
        assert_eq!(Mode::resolve("learn"), Mode::Learn);
        assert_eq!(Mode::resolve("quiz"), Mode::Quiz);
        assert_eq!(Mode::resolve("teach_back"), Mode::TeachBack);
    }

    #[test]
    fn test_unknown_modes_fall_back_to_select() {
        for raw in ["", "warp_speed", "LEARN", "teach-back", "quizz"] {
            let mode = Mode::resolve(raw);
            assert_eq!(mode, Mode::Select, "{raw:?} should fall back");
            assert_eq!(mode.label(), "📚 Choose Mode");
            assert_eq!(mode.icon(), "🎯");
            assert_eq!(mode.blurb(), "Select your learning mode and concept");
        }
    }

    #[test]
    fn test_wire_names_round_trip() {
        for mode in [Mode::Select, Mode::Learn, Mode::Quiz, Mode::TeachBack] {
            assert_eq!(Mode::resolve(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_selectable_excludes_select() {
        assert!(!Mode::SELECTABLE.contains(&Mode::Select));
        assert_eq!(Mode::SELECTABLE.len(), 3);
    }

    #[test]
    fn test_teach_back_display_name_has_space() {
        assert_eq!(Mode::TeachBack.display_name(), "Teach Back");
    }
}
