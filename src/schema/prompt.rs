use serde::{Deserialize, Serialize};

use crate::schema::story::Rating;
use crate::schema::take::{CameraMotion, ShotType, TakeDuration, TakeSpec};

/// One spoken line inside the live prompt builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogueLine {
    #[serde(default)]
    pub speaker: String,
    #[serde(default)]
    pub line: String,
}

/// The live prompt-builder field set.
///
/// Rendered reactively into one prompt text on every field change; empty
/// fields resolve to per-language placeholders at render time, so the
/// record itself is stored exactly as edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptState {
    #[serde(default)]
    pub style_lock: String,
    #[serde(default)]
    pub format_line: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub prose: String,
    #[serde(default)]
    pub shot: String,
    #[serde(default)]
    pub angle: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub motion: String,
    #[serde(default)]
    pub depth_of_field: String,
    #[serde(default)]
    pub lighting: String,
    #[serde(default)]
    pub beats: [String; 3],
    #[serde(default)]
    pub performance: [String; 2],
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
    #[serde(default)]
    pub vfx: String,
    #[serde(default)]
    pub extra_rules: String,
}

impl PromptState {
    /// One-way copy of a take into the builder. Subsequent edits never
    /// flow back to the take.
    pub fn seeded_from(take: &TakeSpec) -> PromptState {
        PromptState {
            label: take.label.clone(),
            prose: take.prose.clone(),
            shot: take.shot.label(crate::core::lang::Lang::Pt).to_string(),
            motion: take.motion.label(crate::core::lang::Lang::Pt).to_string(),
            beats: take.beats.clone(),
            performance: take.performance.clone(),
            vfx: take.vfx.clone(),
            ..PromptState::default()
        }
    }
}

/// Sky condition for the simple builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Storm,
    Snow,
    Fog,
}

/// Emotional color of the shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MoodTone {
    #[default]
    Tenso,
    Melancolico,
    Epico,
    Sombrio,
    Esperancoso,
}

/// Internal rhythm of the shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Pace {
    Lento,
    #[default]
    Medio,
    Rapido,
}

/// Atmosphere overlays the simple builder can toggle on.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VfxToggles {
    #[serde(default)]
    pub neon_glow: bool,
    #[serde(default)]
    pub embers: bool,
    #[serde(default)]
    pub smoke: bool,
    #[serde(default)]
    pub dust: bool,
    #[serde(default)]
    pub lens_flare: bool,
    #[serde(default)]
    pub particles: bool,
}

/// The simplified field set behind "auto-build": a handful of enumerated
/// choices that expand into the full advanced field set via fixed phrase
/// tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimpleShotInputs {
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub time_of_day: String,
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub mood: MoodTone,
    #[serde(default)]
    pub pace: Pace,
    #[serde(default)]
    pub shot: ShotType,
    #[serde(default)]
    pub motion: CameraMotion,
    #[serde(default)]
    pub angle: String,
    #[serde(default)]
    pub ratio: String,
    #[serde(default)]
    pub duration: TakeDuration,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub vfx: VfxToggles,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::take::TakeId;

    #[test]
    fn seeding_copies_take_fields() {
        let take = TakeSpec {
            id: TakeId("tk-test".to_string()),
            label: "EP01 C01 T1".to_string(),
            duration: TakeDuration::S8,
            shot: ShotType::Wide,
            motion: CameraMotion::SlowPushIn,
            prose: "prose".to_string(),
            beats: ["a".into(), "b".into(), "c".into()],
            performance: ["x".into(), "y".into()],
            vfx: "fog".to_string(),
        };
        let state = PromptState::seeded_from(&take);
        assert_eq!(state.label, "EP01 C01 T1");
        assert_eq!(state.beats[2], "c");
        assert_eq!(state.vfx, "fog");
        // Untouched fields stay empty and fall back to placeholders later.
        assert!(state.lighting.is_empty());
        assert!(state.dialogue.is_empty());
    }
}
