//! Narrator voice lookup
//!
//! Voice identifiers arrive as provider-specific strings (for example
//! "en-US-ken"); matching is by case-insensitive substring with Matthew
//! as the default persona.

use egui::Color32;

/// Synthetic narrator persona for session audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Voice {
    #[default]
    Matthew,
    Alicia,
    Ken,
}

impl Voice {
    /// Resolve an agent-supplied voice string, falling back to Matthew
    pub fn resolve(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        if lower.contains("alicia") {
            Voice::Alicia
        } else if lower.contains("ken") {
            Voice::Ken
        } else {
            Voice::Matthew
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Voice::Matthew => "Matthew",
            Voice::Alicia => "Alicia",
            Voice::Ken => "Ken",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Voice::Matthew => "👨‍🏫",
            Voice::Alicia => "👩‍💼",
            Voice::Ken => "👨‍💻",
        }
    }

    /// Accent color for the voice cell
    pub fn accent(self) -> Color32 {
        match self {
            Voice::Matthew => Color32::from_rgb(59, 130, 246), // Blue
            Voice::Alicia => Color32::from_rgb(236, 72, 153),  // Pink
            Voice::Ken => Color32::from_rgb(16, 185, 129),     // Emerald
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_ids_resolve_by_substring() {
        assert_eq!(Voice::resolve("en-US-ken"), Voice::Ken);
        assert_eq!(Voice::resolve("en-US-alicia"), Voice::Alicia);
        assert_eq!(Voice::resolve("en-US-matthew"), Voice::Matthew);
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(Voice::resolve("ALICIA"), Voice::Alicia);
        assert_eq!(Voice::resolve("Warm-Alicia-2"), Voice::Alicia);
        assert_eq!(Voice::resolve("KEN"), Voice::Ken);
    }

    #[test]
    fn test_unmatched_strings_default_to_matthew() {
        for raw in ["", "matthew", "nova", "en-GB-oliver"] {
            assert_eq!(Voice::resolve(raw), Voice::Matthew, "{raw:?}");
        }
    }

    #[test]
    fn test_display_tuples() {
        assert_eq!(Voice::Alicia.name(), "Alicia");
        assert_eq!(Voice::Alicia.emoji(), "👩‍💼");
        assert_eq!(Voice::Matthew.name(), "Matthew");
        assert_eq!(Voice::Matthew.emoji(), "👨‍🏫");
        assert_eq!(Voice::Ken.emoji(), "👨‍💻");
    }
}
