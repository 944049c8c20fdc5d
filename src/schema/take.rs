use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::lang::Lang;

/// Opaque unique identifier for a take.
///
/// Collision resistance is all that is required; ordering comes from array
/// position in the parent `StoryOutput`, never from the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TakeId(pub String);

impl TakeId {
    /// Draw a fresh id from the caller's RNG. 128 bits of randomness,
    /// rendered as hex with a fixed prefix.
    pub fn fresh<R: Rng>(rng: &mut R) -> TakeId {
        let hi: u64 = rng.gen();
        let lo: u64 = rng.gen();
        TakeId(format!("tk-{hi:016x}{lo:016x}"))
    }
}

/// Clip length requested from the video generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TakeDuration {
    S4,
    S6,
    #[default]
    S8,
    S10,
    S12,
}

impl TakeDuration {
    pub fn label(&self) -> &'static str {
        match self {
            Self::S4 => "4s",
            Self::S6 => "6s",
            Self::S8 => "8s",
            Self::S10 => "10s",
            Self::S12 => "12s",
        }
    }

    pub fn seconds(&self) -> u32 {
        match self {
            Self::S4 => 4,
            Self::S6 => 6,
            Self::S8 => 8,
            Self::S10 => 10,
            Self::S12 => 12,
        }
    }
}

/// Framing of the shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShotType {
    Wide,
    #[default]
    Medium,
    CloseUp,
}

impl ShotType {
    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Self::Wide, Lang::Pt) => "plano aberto (wide)",
            (Self::Wide, Lang::En) => "wide shot",
            (Self::Medium, Lang::Pt) => "plano médio",
            (Self::Medium, Lang::En) => "medium shot",
            (Self::CloseUp, Lang::Pt) => "close-up",
            (Self::CloseUp, Lang::En) => "close-up",
        }
    }
}

/// The single camera movement allowed inside a take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CameraMotion {
    #[default]
    Static,
    SlowPushIn,
    SlowPullOut,
    PanLeft,
    PanRight,
}

impl CameraMotion {
    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Self::Static, Lang::Pt) => "câmera fixa",
            (Self::Static, Lang::En) => "static camera",
            (Self::SlowPushIn, Lang::Pt) => "push-in lento",
            (Self::SlowPushIn, Lang::En) => "slow push-in",
            (Self::SlowPullOut, Lang::Pt) => "pull-out lento",
            (Self::SlowPullOut, Lang::En) => "slow pull-out",
            (Self::PanLeft, Lang::Pt) => "pan para a esquerda",
            (Self::PanLeft, Lang::En) => "pan left",
            (Self::PanRight, Lang::Pt) => "pan para a direita",
            (Self::PanRight, Lang::En) => "pan right",
        }
    }
}

/// One camera-direction specification, destined to become a single clip
/// request to the external video generator.
///
/// Takes are created in batches by the episode composer (three per scene
/// plus one closing take) and are immutable afterwards; seeding the live
/// prompt builder from a take is a one-way copy, not a live link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeSpec {
    pub id: TakeId,
    pub label: String,
    pub duration: TakeDuration,
    pub shot: ShotType,
    pub motion: CameraMotion,
    pub prose: String,
    pub beats: [String; 3],
    pub performance: [String; 2],
    pub vfx: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fresh_ids_do_not_collide() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = TakeId::fresh(&mut rng);
        let b = TakeId::fresh(&mut rng);
        assert_ne!(a, b);
        assert!(a.0.starts_with("tk-"));
        assert_eq!(a.0.len(), 3 + 32);
    }

    #[test]
    fn duration_labels_match_seconds() {
        for d in [
            TakeDuration::S4,
            TakeDuration::S6,
            TakeDuration::S8,
            TakeDuration::S10,
            TakeDuration::S12,
        ] {
            assert_eq!(d.label(), format!("{}s", d.seconds()));
        }
    }

    #[test]
    fn shot_labels_per_language() {
        assert_eq!(ShotType::Wide.label(Lang::En), "wide shot");
        assert_eq!(ShotType::Wide.label(Lang::Pt), "plano aberto (wide)");
    }

    #[test]
    fn motion_labels_per_language() {
        assert_eq!(CameraMotion::SlowPushIn.label(Lang::En), "slow push-in");
        assert_eq!(CameraMotion::PanRight.label(Lang::Pt), "pan para a direita");
    }
}
