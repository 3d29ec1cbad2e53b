use alloc::string::String;
use serde::{Deserialize, Serialize};

/// How the mine field is prepared around the first opened cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldGeneration {
    /// Layout is used exactly as shuffled, the first click may hit a mine.
    Random,
    /// Mines are moved out of the 3x3 block around the first click.
    #[default]
    SafeStart,
    /// Currently behaves like [`SafeStart`](Self::SafeStart).
    PureLogic,
}

impl FieldGeneration {
    pub const fn relocates_first_click(self) -> bool {
        !matches!(self, Self::Random)
    }
}

/// Gameplay toggles, usually loaded from the player's stored preferences.
///
/// Missing keys fall back to their defaults when deserializing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub field_generation: FieldGeneration,
    pub show_question_marks: bool,
    pub enable_chord: bool,
    /// Display zoom in percent, ignored by the engine.
    pub scale: u16,
    /// Opening a mine is ignored instead of losing the game.
    pub dev_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_generation: FieldGeneration::SafeStart,
            show_question_marks: true,
            enable_chord: true,
            scale: 100,
            dev_mode: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_merges_over_defaults() {
        let settings = Settings::from_json(r#"{"enableChord":false,"fieldGeneration":"random"}"#)
            .unwrap();

        assert_eq!(settings.field_generation, FieldGeneration::Random);
        assert!(!settings.enable_chord);
        assert!(settings.show_question_marks);
        assert_eq!(settings.scale, 100);
        assert!(!settings.dev_mode);
    }

    #[test]
    fn json_uses_kebab_case_generation_names() {
        let settings = Settings {
            field_generation: FieldGeneration::PureLogic,
            ..Default::default()
        };

        let json = settings.to_json().unwrap();

        assert!(json.contains(r#""fieldGeneration":"pure-logic""#));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn unknown_generation_is_rejected() {
        assert!(Settings::from_json(r#"{"fieldGeneration":"lucky"}"#).is_err());
    }

    #[test]
    fn only_random_skips_relocation() {
        assert!(!FieldGeneration::Random.relocates_first_click());
        assert!(FieldGeneration::SafeStart.relocates_first_click());
        assert!(FieldGeneration::PureLogic.relocates_first_click());
    }
}
