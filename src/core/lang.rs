/// The externally visible localization axis and its fixed lookup tables.
///
/// The engine is authored in Portuguese; English output is derived either
/// by heading-table selection (prompts) or by whole-word substitution
/// (bible, outline, script). There is no independent translation path.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lang {
    #[default]
    Pt,
    En,
}

/// The six prompt-section heading keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Prose,
    Cinematography,
    Beats,
    Performance,
    Vfx,
    HardRules,
}

impl Heading {
    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Self::Prose, Lang::Pt) => "CENA",
            (Self::Prose, Lang::En) => "SCENE",
            (Self::Cinematography, Lang::Pt) => "CINEMATOGRAFIA",
            (Self::Cinematography, Lang::En) => "CINEMATOGRAPHY",
            (Self::Beats, Lang::Pt) => "AÇÕES (BEATS)",
            (Self::Beats, Lang::En) => "ACTIONS (BEATS)",
            (Self::Performance, Lang::Pt) => "ATUAÇÃO (MICRO-ACTING)",
            (Self::Performance, Lang::En) => "PERFORMANCE (MICRO-ACTING)",
            (Self::Vfx, Lang::Pt) => "VFX / ATMOSFERA",
            (Self::Vfx, Lang::En) => "VFX / ATMOSPHERE",
            (Self::HardRules, Lang::Pt) => "REGRAS DURAS",
            (Self::HardRules, Lang::En) => "HARD RULES",
        }
    }
}

/// The live-only dialogue block heading. Not one of the six fixed keys —
/// it only appears when the builder holds at least one dialogue line.
pub fn dialogue_heading(lang: Lang) -> &'static str {
    match lang {
        Lang::Pt => "DIÁLOGO",
        Lang::En => "DIALOGUE",
    }
}

/// Annotation appended to every camera-motion line.
pub fn only_one_movement(lang: Lang) -> &'static str {
    match lang {
        Lang::Pt => "apenas um movimento",
        Lang::En => "only one movement",
    }
}

/// First line of every generated prompt. Constant across languages — the
/// external video generator keys on it.
pub const STYLE_ID: &str = "STYLE ID: CINEMATIC 2D ANIME";

/// Fixed visual-style constraints prepended to every prompt.
pub const STYLE_LOCK: &str = "Premium 2D hand-drawn anime in motion: crisp lineart, \
cel shading, painted backgrounds, volumetric light. Character design stays identical \
across every take. No 3D, no photorealism, no on-screen text, no logos, no watermarks.";

/// Fixed closing constraints of every prompt.
pub const HARD_RULES: &str = "Only one camera movement per take. No cuts inside the take. \
No on-screen text or logos. Keep faces on-model and consistent. PG-13 intensity at most.";

/// The format line: fixed resolution/framerate, parameterized duration,
/// ratio and rating.
pub fn format_line(ratio: &str, duration: &str, rating: &str) -> String {
    format!("FORMAT: 4K • 24fps • {ratio} • {duration} • {rating}.")
}

/// Per-field placeholders for the live prompt builder. Placeholders are
/// usable content, not instructions, so an untouched form still yields a
/// prompt the video generator accepts.
pub struct Placeholders {
    pub label: &'static str,
    pub prose: &'static str,
    pub shot: &'static str,
    pub angle: &'static str,
    pub distance: &'static str,
    pub motion: &'static str,
    pub depth_of_field: &'static str,
    pub lighting: &'static str,
    pub beats: [&'static str; 3],
    pub performance: [&'static str; 2],
    pub vfx: &'static str,
}

pub fn placeholders(lang: Lang) -> Placeholders {
    match lang {
        Lang::Pt => Placeholders {
            label: "TAKE ÚNICO",
            prose: "Uma figura parada no meio do quadro enquanto a cidade respira ao fundo.",
            shot: "plano médio",
            angle: "altura dos olhos",
            distance: "meia distância",
            motion: "câmera fixa",
            depth_of_field: "profundidade média, fundo legível",
            lighting: "luz fria difusa com um acento quente",
            beats: [
                "0:00–0:03: a câmera estabelece o espaço.",
                "0:03–0:06: o personagem reage ao que vê.",
                "0:06–fim: a tensão vira na última batida.",
            ],
            performance: [
                "micro-expressão: mandíbula tensa, olhos fixos.",
                "respiração curta antes de qualquer gesto.",
            ],
            vfx: "partículas finas no ar, leve bloom nas luzes",
        },
        Lang::En => Placeholders {
            label: "SINGLE TAKE",
            prose: "A still figure at center frame while the city breathes behind them.",
            shot: "medium shot",
            angle: "eye level",
            distance: "mid distance",
            motion: "static camera",
            depth_of_field: "medium depth of field, readable background",
            lighting: "soft cold light with one warm accent",
            beats: [
                "0:00–0:03: the camera establishes the space.",
                "0:03–0:06: the character reacts to what they see.",
                "0:06–end: the tension turns on the last beat.",
            ],
            performance: [
                "micro-expression: tense jaw, locked eyes.",
                "short breath before any gesture.",
            ],
            vfx: "fine particles in the air, slight bloom on the lights",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_heading_keys_resolve_in_both_languages() {
        let keys = [
            Heading::Prose,
            Heading::Cinematography,
            Heading::Beats,
            Heading::Performance,
            Heading::Vfx,
            Heading::HardRules,
        ];
        for key in keys {
            assert!(!key.label(Lang::Pt).is_empty());
            assert!(!key.label(Lang::En).is_empty());
        }
        assert_eq!(Heading::HardRules.label(Lang::En), "HARD RULES");
        assert_eq!(Heading::Vfx.label(Lang::Pt), "VFX / ATMOSFERA");
    }

    #[test]
    fn format_line_shape() {
        assert_eq!(
            format_line("9:16", "8s", "PG-13"),
            "FORMAT: 4K • 24fps • 9:16 • 8s • PG-13."
        );
    }

    #[test]
    fn placeholders_are_nonempty() {
        for lang in [Lang::Pt, Lang::En] {
            let p = placeholders(lang);
            assert!(!p.prose.is_empty());
            assert!(p.beats.iter().all(|b| !b.is_empty()));
            assert!(p.performance.iter().all(|n| !n.is_empty()));
        }
    }
}
