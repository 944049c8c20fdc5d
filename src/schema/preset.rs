//! RON presets — input records saved on disk for the tools and demos.

use std::path::Path;
use thiserror::Error;

use crate::schema::seo::SeoAnswers;
use crate::schema::story::StoryInputs;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

impl StoryInputs {
    /// Load a story preset from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<StoryInputs, PresetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a story preset from a RON string.
    pub fn parse_ron(input: &str) -> Result<StoryInputs, PresetError> {
        Ok(ron::from_str(input)?)
    }
}

impl SeoAnswers {
    /// Load a SEO questionnaire preset from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<SeoAnswers, PresetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a SEO questionnaire preset from a RON string.
    pub fn parse_ron(input: &str) -> Result<SeoAnswers, PresetError> {
        Ok(ron::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::story::{Rating, Tone};

    #[test]
    fn parse_partial_story_preset() {
        let inputs = StoryInputs::parse_ron(
            r#"(
                title: "Cidade de Vidro",
                tone: Misterioso,
                rating: Pg13,
                episodes_count: 10,
                episode_minutes: 14,
            )"#,
        )
        .unwrap();
        assert_eq!(inputs.title, "Cidade de Vidro");
        assert_eq!(inputs.tone, Tone::Misterioso);
        assert_eq!(inputs.rating, Rating::Pg13);
        assert_eq!(inputs.episode_minutes, 14);
        // Omitted fields fall back to serde defaults.
        assert!(inputs.premise.is_empty());
    }

    #[test]
    fn parse_seo_preset_with_flags() {
        let answers = SeoAnswers::parse_ron(
            r#"(
                series_name: "PROJETO NEON",
                ep_number: "02",
                flags: (
                    series_continuous: true,
                    adult_18: false,
                    shonen_action: false,
                    premium_tone: true,
                    short_episodes: true,
                    fixed_schedule: false,
                    ptbr: true,
                    one_universe: true,
                    shorts: false,
                    monetize: true,
                ),
            )"#,
        )
        .unwrap();
        assert_eq!(answers.series_name, "PROJETO NEON");
        assert!(!answers.flags.shonen_action);
        assert!(answers.flags.ptbr);
    }

    #[test]
    fn invalid_ron_reports_error() {
        assert!(StoryInputs::parse_ron("(title: )").is_err());
    }
}
