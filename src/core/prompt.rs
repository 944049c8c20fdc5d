/// Prompt composers: one formatted text block per clip request.
///
/// `take_prompt` serializes an immutable `TakeSpec`; `live_prompt` renders
/// the interactively edited `PromptState`; `auto_build` expands the
/// simple field set into a full `PromptState` via fixed phrase tables.
/// Same section order everywhere: style id, style lock, format, label,
/// prose, cinematography, beats, performance, vfx, hard rules — separated
/// by exactly one blank line.

use crate::core::lang::{
    dialogue_heading, format_line, only_one_movement, placeholders, Heading, Lang, HARD_RULES,
    STYLE_ID, STYLE_LOCK,
};
use crate::core::text::{normalize, resolve};
use crate::schema::prompt::{PromptState, SimpleShotInputs, VfxToggles, Weather};
use crate::schema::prompt::{MoodTone, Pace};
use crate::schema::story::Rating;
use crate::schema::take::TakeSpec;

/// Serialize one take into the final prompt text for the video generator.
pub fn take_prompt(take: &TakeSpec, lang: Lang) -> String {
    let sections = vec![
        STYLE_ID.to_string(),
        STYLE_LOCK.to_string(),
        format_line("9:16", take.duration.label(), "PG-13"),
        take.label.clone(),
        section(Heading::Prose.label(lang), &take.prose),
        section(
            Heading::Cinematography.label(lang),
            &format!(
                "{} • {} ({}).",
                take.shot.label(lang),
                take.motion.label(lang),
                only_one_movement(lang)
            ),
        ),
        list_section(Heading::Beats.label(lang), &take.beats),
        list_section(Heading::Performance.label(lang), &take.performance),
        section(Heading::Vfx.label(lang), &take.vfx),
        section(Heading::HardRules.label(lang), HARD_RULES),
    ];
    normalize(&sections.join("\n\n"))
}

/// Render the live prompt-builder state. Every empty field resolves to
/// its per-language placeholder, so the preview is never broken mid-edit.
pub fn live_prompt(state: &PromptState, lang: Lang) -> String {
    let ph = placeholders(lang);
    let light_label = match lang {
        Lang::Pt => "luz",
        Lang::En => "light",
    };

    let cinematography = format!(
        "{} • {} • {} • {} ({}) • DOF: {} • {}: {}.",
        resolve(&state.shot, ph.shot),
        resolve(&state.angle, ph.angle),
        resolve(&state.distance, ph.distance),
        resolve(&state.motion, ph.motion),
        only_one_movement(lang),
        resolve(&state.depth_of_field, ph.depth_of_field),
        light_label,
        resolve(&state.lighting, ph.lighting),
    );

    let beats: Vec<String> = state
        .beats
        .iter()
        .zip(ph.beats)
        .map(|(b, fallback)| resolve(b, fallback))
        .collect();
    let performance: Vec<String> = state
        .performance
        .iter()
        .zip(ph.performance)
        .map(|(n, fallback)| resolve(n, fallback))
        .collect();

    let mut hard_rules = HARD_RULES.to_string();
    let extra = normalize(&state.extra_rules);
    if !extra.is_empty() {
        hard_rules.push('\n');
        hard_rules.push_str(&extra);
    }

    let mut sections = vec![
        STYLE_ID.to_string(),
        resolve(&state.style_lock, STYLE_LOCK),
        resolve(&state.format_line, &format_line("9:16", "8s", "PG-13")),
        resolve(&state.label, ph.label),
        section(Heading::Prose.label(lang), &resolve(&state.prose, ph.prose)),
        section(Heading::Cinematography.label(lang), &cinematography),
        list_section(Heading::Beats.label(lang), &beats),
        list_section(Heading::Performance.label(lang), &performance),
    ];

    if !state.dialogue.is_empty() {
        let voice = match lang {
            Lang::Pt => "VOZ",
            Lang::En => "VOICE",
        };
        let lines: Vec<String> = state
            .dialogue
            .iter()
            .map(|d| format!("— {}: {}", resolve(&d.speaker, voice), normalize(&d.line)))
            .collect();
        sections.push(section(dialogue_heading(lang), &lines.join("\n")));
    }

    sections.push(section(Heading::Vfx.label(lang), &resolve(&state.vfx, ph.vfx)));
    sections.push(section(Heading::HardRules.label(lang), &hard_rules));

    normalize(&sections.join("\n\n"))
}

/// Expand the simple field set into the advanced one. Every enumerated
/// value maps through a fixed phrase table; nothing is inferred.
pub fn auto_build(simple: &SimpleShotInputs, lang: Lang) -> PromptState {
    let place = resolve(
        &simple.place,
        match lang {
            Lang::Pt => "uma rua estreita da cidade",
            Lang::En => "a narrow city street",
        },
    );
    let time = resolve(
        &simple.time_of_day,
        match lang {
            Lang::Pt => "fim de tarde",
            Lang::En => "late afternoon",
        },
    );
    let weather = weather_phrase(simple.weather, lang);

    let mut vfx_parts = vec![weather.to_string()];
    vfx_parts.extend(toggle_phrases(&simple.vfx, lang).into_iter().map(String::from));

    PromptState {
        format_line: format_line(
            &resolve(&simple.ratio, "9:16"),
            simple.duration.label(),
            simple.rating.label(),
        ),
        prose: format!("{place}, {time}: {weather}."),
        shot: simple.shot.label(lang).to_string(),
        angle: resolve(&simple.angle, placeholders(lang).angle),
        motion: simple.motion.label(lang).to_string(),
        lighting: palette_phrase(simple.mood, lang).to_string(),
        beats: pace_beats(simple.pace, lang),
        performance: mood_performance(simple.mood, lang),
        vfx: vfx_parts.join("; "),
        extra_rules: match simple.rating {
            Rating::Pg => match lang {
                Lang::Pt => "Violência apenas sugerida, sem sangue.".to_string(),
                Lang::En => "Violence only implied, no blood.".to_string(),
            },
            Rating::Pg13 => String::new(),
        },
        ..PromptState::default()
    }
}

fn section(heading: &str, body: &str) -> String {
    format!("{heading}:\n{body}")
}

fn list_section<S: AsRef<str>>(heading: &str, items: &[S]) -> String {
    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect();
    format!("{heading}:\n{}", lines.join("\n"))
}

fn weather_phrase(weather: Weather, lang: Lang) -> &'static str {
    match (weather, lang) {
        (Weather::Clear, Lang::Pt) => "céu limpo, luz direta",
        (Weather::Clear, Lang::En) => "clear sky, direct light",
        (Weather::Rain, Lang::Pt) => "chuva fina, reflexos molhados",
        (Weather::Rain, Lang::En) => "thin rain, wet reflections",
        (Weather::Storm, Lang::Pt) => "tempestade com clarões azul-elétrico",
        (Weather::Storm, Lang::En) => "storm with lightning-blue flashes",
        (Weather::Snow, Lang::Pt) => "neve lenta, som abafado",
        (Weather::Snow, Lang::En) => "slow snow, muffled sound",
        (Weather::Fog, Lang::Pt) => "névoa baixa, silhuetas recortadas",
        (Weather::Fog, Lang::En) => "low fog, cut-out silhouettes",
    }
}

fn palette_phrase(mood: MoodTone, lang: Lang) -> &'static str {
    match (mood, lang) {
        (MoodTone::Tenso, Lang::Pt) => "paleta fria com acentos vermelhos",
        (MoodTone::Tenso, Lang::En) => "cold palette with red accents",
        (MoodTone::Melancolico, Lang::Pt) => "tons dessaturados, azul e cinza",
        (MoodTone::Melancolico, Lang::En) => "desaturated blues and grays",
        (MoodTone::Epico, Lang::Pt) => "contraste alto, dourado contra sombra",
        (MoodTone::Epico, Lang::En) => "high contrast, gold against shadow",
        (MoodTone::Sombrio, Lang::Pt) => "pretos profundos, luz mínima",
        (MoodTone::Sombrio, Lang::En) => "deep blacks, minimal light",
        (MoodTone::Esperancoso, Lang::Pt) => "luz quente suave, ar limpo",
        (MoodTone::Esperancoso, Lang::En) => "soft warm light, clean air",
    }
}

fn pace_beats(pace: Pace, lang: Lang) -> [String; 3] {
    let table: [&str; 3] = match (pace, lang) {
        (Pace::Lento, Lang::Pt) => [
            "0:00–0:04: o quadro respira sem cortes.",
            "0:04–0:08: um único gesto concentra a atenção.",
            "0:08–fim: a mudança chega quase imperceptível.",
        ],
        (Pace::Lento, Lang::En) => [
            "0:00–0:04: the frame breathes without cuts.",
            "0:04–0:08: a single gesture holds the attention.",
            "0:08–end: the change lands almost unnoticed.",
        ],
        (Pace::Medio, Lang::Pt) => [
            "0:00–0:03: a câmera estabelece o espaço.",
            "0:03–0:06: o personagem reage ao que vê.",
            "0:06–fim: a tensão vira na última batida.",
        ],
        (Pace::Medio, Lang::En) => [
            "0:00–0:03: the camera establishes the space.",
            "0:03–0:06: the character reacts to what they see.",
            "0:06–end: the tension turns on the last beat.",
        ],
        (Pace::Rapido, Lang::Pt) => [
            "0:00–0:02: a ação entra em quadro.",
            "0:02–0:04: resposta imediata do oponente.",
            "0:04–fim: corte seco na virada.",
        ],
        (Pace::Rapido, Lang::En) => [
            "0:00–0:02: the action enters the frame.",
            "0:02–0:04: immediate response from the opponent.",
            "0:04–end: hard stop on the turn.",
        ],
    };
    table.map(|s| s.to_string())
}

fn mood_performance(mood: MoodTone, lang: Lang) -> [String; 2] {
    let table: [&str; 2] = match (mood, lang) {
        (MoodTone::Tenso, Lang::Pt) => [
            "ombros travados, maxilar tenso.",
            "o olhar não desgruda da ameaça.",
        ],
        (MoodTone::Tenso, Lang::En) => [
            "locked shoulders, tense jaw.",
            "the gaze never leaves the threat.",
        ],
        (MoodTone::Melancolico, Lang::Pt) => [
            "gestos lentos, meio inacabados.",
            "olhar que se perde antes de responder.",
        ],
        (MoodTone::Melancolico, Lang::En) => [
            "slow, half-finished gestures.",
            "a gaze that drifts before answering.",
        ],
        (MoodTone::Epico, Lang::Pt) => [
            "postura aberta, queixo firme.",
            "respiração funda antes do gesto decisivo.",
        ],
        (MoodTone::Epico, Lang::En) => [
            "open posture, firm chin.",
            "deep breath before the decisive gesture.",
        ],
        (MoodTone::Sombrio, Lang::Pt) => [
            "movimento mínimo, rosto em meia-sombra.",
            "a reação acontece só nos olhos.",
        ],
        (MoodTone::Sombrio, Lang::En) => [
            "minimal movement, face in half-shadow.",
            "the reaction happens only in the eyes.",
        ],
        (MoodTone::Esperancoso, Lang::Pt) => [
            "tensão que se desfaz aos poucos.",
            "um quase-sorriso no fim da batida.",
        ],
        (MoodTone::Esperancoso, Lang::En) => [
            "tension dissolving little by little.",
            "an almost-smile at the end of the beat.",
        ],
    };
    table.map(|s| s.to_string())
}

fn toggle_phrases(toggles: &VfxToggles, lang: Lang) -> Vec<&'static str> {
    let pt = lang == Lang::Pt;
    let mut phrases = Vec::new();
    if toggles.neon_glow {
        phrases.push(if pt { "brilho neon nas bordas" } else { "neon glow on the edges" });
    }
    if toggles.embers {
        phrases.push(if pt { "brasas flutuando" } else { "floating embers" });
    }
    if toggles.smoke {
        phrases.push(if pt { "fumaça baixa no chão" } else { "low smoke along the ground" });
    }
    if toggles.dust {
        phrases.push(if pt { "poeira em suspensão" } else { "suspended dust" });
    }
    if toggles.lens_flare {
        phrases.push(if pt { "lens flare discreto" } else { "subtle lens flare" });
    }
    if toggles.particles {
        phrases.push(if pt { "partículas finas no ar" } else { "fine particles in the air" });
    }
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::prompt::DialogueLine;
    use crate::schema::take::{CameraMotion, ShotType, TakeDuration, TakeId};

    fn sample_take() -> TakeSpec {
        TakeSpec {
            id: TakeId("tk-1".to_string()),
            label: "EP01 C01 T1 — ambiente".to_string(),
            duration: TakeDuration::S8,
            shot: ShotType::Wide,
            motion: CameraMotion::SlowPushIn,
            prose: "Plano de ambientação: pátio vazio.".to_string(),
            beats: [
                "0:00–0:02: abre.".to_string(),
                "0:02–0:05: avança.".to_string(),
                "0:05–fim: fecha.".to_string(),
            ],
            performance: ["nota um.".to_string(), "nota dois.".to_string()],
            vfx: "chuva fina".to_string(),
        }
    }

    #[test]
    fn take_prompt_opens_with_the_style_id() {
        let prompt = take_prompt(&sample_take(), Lang::Pt);
        assert!(prompt.starts_with(STYLE_ID));
    }

    #[test]
    fn take_prompt_section_order() {
        let prompt = take_prompt(&sample_take(), Lang::Pt);
        let markers = [
            STYLE_ID,
            "Premium 2D hand-drawn anime",
            "FORMAT: 4K • 24fps • 9:16 • 8s • PG-13.",
            "EP01 C01 T1",
            "CENA:",
            "CINEMATOGRAFIA:",
            "AÇÕES (BEATS):",
            "ATUAÇÃO (MICRO-ACTING):",
            "VFX / ATMOSFERA:",
            "REGRAS DURAS:",
        ];
        let mut cursor = 0;
        for marker in markers {
            let pos = prompt[cursor..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing {marker}"));
            cursor += pos + marker.len();
        }
    }

    #[test]
    fn take_prompt_sections_separated_by_single_blank_line() {
        let prompt = take_prompt(&sample_take(), Lang::Pt);
        assert!(!prompt.contains("\n\n\n"));
        // Ten sections, nine separators.
        assert_eq!(prompt.matches("\n\n").count(), 9);
    }

    #[test]
    fn take_prompt_annotates_single_movement() {
        let pt = take_prompt(&sample_take(), Lang::Pt);
        assert!(pt.contains("(apenas um movimento)"));
        let en = take_prompt(&sample_take(), Lang::En);
        assert!(en.contains("(only one movement)"));
        assert!(en.contains("CINEMATOGRAPHY:"));
    }

    #[test]
    fn live_prompt_empty_state_uses_placeholders() {
        let prompt = live_prompt(&PromptState::default(), Lang::Pt);
        assert!(prompt.starts_with(STYLE_ID));
        assert!(prompt.contains("TAKE ÚNICO"));
        assert!(prompt.contains("plano médio"));
        assert!(prompt.contains("0:00–0:03"));
        // No dialogue block without dialogue lines.
        assert!(!prompt.contains("DIÁLOGO:"));
    }

    #[test]
    fn live_prompt_includes_dialogue_when_present() {
        let state = PromptState {
            dialogue: vec![DialogueLine {
                speaker: "Akira".to_string(),
                line: "Ainda não acabou.".to_string(),
            }],
            ..PromptState::default()
        };
        let prompt = live_prompt(&state, Lang::Pt);
        assert!(prompt.contains("DIÁLOGO:"));
        assert!(prompt.contains("— Akira: Ainda não acabou."));
    }

    #[test]
    fn live_prompt_appends_extra_rules() {
        let state = PromptState {
            extra_rules: "Sem armas de fogo em quadro.".to_string(),
            ..PromptState::default()
        };
        let prompt = live_prompt(&state, Lang::Pt);
        let rules_at = prompt.find("REGRAS DURAS:").unwrap();
        assert!(prompt[rules_at..].contains("Sem armas de fogo em quadro."));
    }

    #[test]
    fn auto_build_storm_reaches_the_vfx_block() {
        let simple = SimpleShotInputs {
            weather: Weather::Storm,
            ..SimpleShotInputs::default()
        };
        let state = auto_build(&simple, Lang::En);
        assert!(state.vfx.contains("lightning-blue flashes"));
        assert!(state.prose.contains("lightning-blue flashes"));
    }

    #[test]
    fn auto_build_joins_enabled_vfx_with_semicolons() {
        let simple = SimpleShotInputs {
            vfx: VfxToggles {
                neon_glow: true,
                smoke: true,
                ..VfxToggles::default()
            },
            ..SimpleShotInputs::default()
        };
        let state = auto_build(&simple, Lang::Pt);
        assert!(state.vfx.contains("brilho neon nas bordas; fumaça baixa no chão"));
    }

    #[test]
    fn auto_build_carries_format_parameters() {
        let simple = SimpleShotInputs {
            ratio: "16:9".to_string(),
            duration: TakeDuration::S12,
            rating: Rating::Pg,
            ..SimpleShotInputs::default()
        };
        let state = auto_build(&simple, Lang::Pt);
        assert_eq!(state.format_line, "FORMAT: 4K • 24fps • 16:9 • 12s • PG.");
        assert!(state.extra_rules.contains("sem sangue"));
    }

    #[test]
    fn auto_build_then_live_prompt_round_trip() {
        let state = auto_build(&SimpleShotInputs::default(), Lang::Pt);
        let prompt = live_prompt(&state, Lang::Pt);
        assert!(prompt.contains("paleta fria com acentos vermelhos"));
        assert!(prompt.contains("céu limpo, luz direta"));
    }
}
