/// Episode composer: StoryInputs → scene-by-scene script + derived takes.
///
/// All numeric inputs are clamped and all text fields resolved at render
/// time, so this composer is total: malformed input yields a generic but
/// valid document, never an error.

use rand::Rng;

use crate::core::lang::Lang;
use crate::core::scenes::{scene_template, Scene, SceneSeed};
use crate::core::story::fallback;
use crate::core::text::{derive_by_substitution, normalize, resolve};
use crate::schema::story::StoryInputs;
use crate::schema::take::{CameraMotion, ShotType, TakeDuration, TakeId, TakeSpec};

/// Script plus the ordered takes derived from it.
#[derive(Debug, Clone)]
pub struct EpisodeScript {
    pub script: String,
    pub takes: Vec<TakeSpec>,
}

pub const MIN_EPISODE_MINUTES: u32 = 6;
pub const MAX_EPISODE_MINUTES: u32 = 30;

/// Duration pattern cycled by scene position when deriving takes.
const DURATIONS: [TakeDuration; 8] = [
    TakeDuration::S8,
    TakeDuration::S6,
    TakeDuration::S10,
    TakeDuration::S8,
    TakeDuration::S12,
    TakeDuration::S6,
    TakeDuration::S8,
    TakeDuration::S10,
];

/// Term table for the English script variant. Longer terms come first so
/// multi-word labels win over their prefixes.
const SCRIPT_TERMS: &[(&str, &str)] = &[
    ("ROTEIRO EM CENAS", "SCRIPT IN SCENES"),
    ("VIRADA DO MEIO", "MIDPOINT TURN"),
    ("CLIFFHANGER FINAL", "FINAL CLIFFHANGER"),
    ("TUDO PERDIDO", "ALL IS LOST"),
    ("SÉRIE", "SERIES"),
    ("TEMPORADA", "SEASON"),
    ("EPISÓDIO", "EPISODE"),
    ("EPISÓDIOS", "EPISODES"),
    ("MUNDO", "WORLD"),
    ("REGRAS", "RULES"),
    ("CENA", "SCENE"),
    ("OBJETIVO", "GOAL"),
    ("OBSTÁCULO", "OBSTACLE"),
    ("VIRADA", "TURN"),
    ("VISUAL", "VISUALS"),
    ("ATUAÇÃO", "PERFORMANCE"),
    ("PROTAGONISTA", "PROTAGONIST"),
    ("ANTAGONISTA", "ANTAGONIST"),
    ("ESTRUTURA", "STRUCTURE"),
    ("TEMA", "THEME"),
    ("TOM", "TONE"),
    ("GANCHO", "HOOK"),
    ("INCIDENTE", "INCITING INCIDENT"),
    ("CLÍMAX", "CLIMAX"),
];

/// Scene count from clamped episode minutes.
pub fn scene_count_for_minutes(minutes: u32) -> usize {
    let minutes = minutes.clamp(MIN_EPISODE_MINUTES, MAX_EPISODE_MINUTES);
    if minutes <= 10 {
        7
    } else if minutes <= 15 {
        9
    } else {
        11
    }
}

/// Build episode 1: the full script plus 3 takes per scene and one
/// closing take. Ids come from the caller's RNG; everything else is a
/// pure function of the inputs.
pub fn compose_episode<R: Rng>(inputs: &StoryInputs, lang: Lang, rng: &mut R) -> EpisodeScript {
    let seed = SceneSeed::from_inputs(inputs);
    let title = resolve(&inputs.title, fallback::TITLE);
    let premise = resolve(&inputs.premise, fallback::PREMISE);
    let world = resolve(&inputs.world.description, fallback::WORLD);
    let rules = resolve(&inputs.world.rules, fallback::WORLD_RULES);

    let minutes = inputs
        .episode_minutes
        .clamp(MIN_EPISODE_MINUTES, MAX_EPISODE_MINUTES);
    let scene_count = scene_count_for_minutes(minutes);
    let scene_minutes = (f64::from(minutes) / scene_count as f64).max(0.8);

    let scenes: Vec<Scene> = (0..scene_count)
        .map(|i| scene_template(i, &seed))
        .collect();

    let mut doc = String::new();
    doc.push_str(&format!("ROTEIRO EM CENAS — {title} — EPISÓDIO 1\n\n"));
    doc.push_str(&format!("LOGLINE: {premise}\n"));
    doc.push_str(&format!("MUNDO: {world}\n"));
    doc.push_str(&format!("REGRAS: {rules}\n\n"));
    doc.push_str(&format!(
        "PROTAGONISTA: {} — {}. Deseja {}. Teme {}.\n",
        seed.protagonist, seed.core_trait, seed.desire, seed.fear
    ));
    doc.push_str(&format!("ANTAGONISTA: {} — {}.\n", seed.antagonist, seed.force));
    doc.push_str(&format!(
        "TEMA: {} • TOM: {} • {}\n\n",
        seed.theme,
        inputs.tone.label(),
        inputs.rating.label()
    ));

    doc.push_str("ESTRUTURA DO EPISÓDIO:\n");
    doc.push_str("- GANCHO: uma imagem impossível abre o episódio e planta a pergunta central.\n");
    doc.push_str("- INCIDENTE: o protagonista cruza uma linha sem volta.\n");
    doc.push_str("- VIRADA DO MEIO: uma verdade maior muda tudo o que parecia seguro.\n");
    doc.push_str("- TUDO PERDIDO: o plano falha e o custo fica visível.\n");
    doc.push_str("- CLÍMAX: escolha irreversível diante do antagonista.\n");
    doc.push_str("- CLIFFHANGER: a vitória abre uma porta pior que o problema original.\n\n");

    for (i, scene) in scenes.iter().enumerate() {
        let start = i as f64 * scene_minutes;
        let end = (i + 1) as f64 * scene_minutes;
        doc.push_str(&format!(
            "CENA {} ({start:.1}–{end:.1} min) — {}\n",
            i + 1,
            scene.title
        ));
        doc.push_str(&format!("OBJETIVO: {}\n", scene.goal));
        doc.push_str(&format!("OBSTÁCULO: {}\n", scene.obstacle));
        doc.push_str(&format!("VIRADA: {}\n", scene.turn));
        doc.push_str(&format!("VISUAL: {}\n", scene.visuals));
        doc.push_str(&format!("ATUAÇÃO: {}\n\n", scene.acting));
    }

    doc.push_str(&format!(
        "CLIFFHANGER FINAL: {} olha para o céu — um mapa de luz se acende sobre a cidade.\n",
        seed.protagonist
    ));

    let script = match lang {
        Lang::Pt => normalize(&doc),
        Lang::En => normalize(&derive_by_substitution(&doc, SCRIPT_TERMS)),
    };

    let mut takes = Vec::with_capacity(scene_count * 3 + 1);
    for (i, scene) in scenes.iter().enumerate() {
        derive_scene_takes(&mut takes, i + 1, scene, &seed, rng);
    }
    takes.push(closing_take(&seed, rng));

    EpisodeScript { script, takes }
}

/// Three fixed take patterns per scene: establish/mood, acting beat,
/// action/turn. Durations cycle through the 8-entry table by scene
/// position so neighboring scenes do not all ask for the same clip length.
fn derive_scene_takes<R: Rng>(
    takes: &mut Vec<TakeSpec>,
    number: usize,
    scene: &Scene,
    seed: &SceneSeed,
    rng: &mut R,
) {
    let atmosphere = format!("atmosfera de {}; chuva fina e neon difuso", seed.set_piece);

    takes.push(TakeSpec {
        id: TakeId::fresh(rng),
        label: format!("EP01 C{number:02} T1 — ambiente"),
        duration: DURATIONS[(number - 1) % DURATIONS.len()],
        shot: ShotType::Wide,
        motion: CameraMotion::SlowPushIn,
        prose: format!("Plano de ambientação: {}", scene.visuals),
        beats: [
            "0:00–0:02: a câmera revela o espaço.".to_string(),
            format!("0:02–0:05: {}", scene.goal),
            format!("0:05–fim: {}", scene.obstacle),
        ],
        performance: [
            "figuras pequenas no quadro, linguagem corporal legível.".to_string(),
            "nenhum gesto grande; o espaço atua primeiro.".to_string(),
        ],
        vfx: atmosphere.clone(),
    });

    takes.push(TakeSpec {
        id: TakeId::fresh(rng),
        label: format!("EP01 C{number:02} T2 — atuação"),
        duration: DURATIONS[number % DURATIONS.len()],
        shot: ShotType::CloseUp,
        motion: CameraMotion::Static,
        prose: format!("Close de atuação: {}", scene.acting),
        beats: [
            "0:00–0:02: rosto em repouso tenso.".to_string(),
            "0:02–0:05: a emoção muda ao registrar o gatilho.".to_string(),
            "0:05–fim: a decisão aparece no olhar.".to_string(),
        ],
        performance: [
            "micro-expressão: mandíbula tensa, olhos fixos.".to_string(),
            "respiração curta antes da virada.".to_string(),
        ],
        vfx: "luz dura recortando o rosto; fundo fora de foco".to_string(),
    });

    takes.push(TakeSpec {
        id: TakeId::fresh(rng),
        label: format!("EP01 C{number:02} T3 — virada"),
        duration: DURATIONS[(number + 1) % DURATIONS.len()],
        shot: ShotType::Medium,
        motion: CameraMotion::PanRight,
        prose: format!("A virada da cena: {}", scene.turn),
        beats: [
            "0:00–0:02: a ação começa limpa.".to_string(),
            "0:02–0:05: o obstáculo responde à altura.".to_string(),
            format!("0:05–fim: {}", scene.turn),
        ],
        performance: [
            "corpo inteiro comprometido com a ação.".to_string(),
            "reação honesta ao custo do movimento.".to_string(),
        ],
        vfx: atmosphere,
    });
}

/// The single closing take appended after all scene takes.
fn closing_take<R: Rng>(seed: &SceneSeed, rng: &mut R) -> TakeSpec {
    TakeSpec {
        id: TakeId::fresh(rng),
        label: "EP01 — CLIFFHANGER (mapa no céu)".to_string(),
        duration: TakeDuration::S10,
        shot: ShotType::Wide,
        motion: CameraMotion::SlowPullOut,
        prose: format!(
            "{} pequeno no quadro, de costas; um mapa de luz se acende no céu sobre a cidade.",
            seed.protagonist
        ),
        beats: [
            "0:00–0:03: silêncio; só a cidade respira.".to_string(),
            "0:03–0:07: as linhas de luz se conectam no céu.".to_string(),
            "0:07–fim: o mapa completo pulsa uma vez e apaga.".to_string(),
        ],
        performance: [
            "imobilidade total; o peso está na paisagem.".to_string(),
            "um meio passo para trás quando o mapa pulsa.".to_string(),
        ],
        vfx: "céu carregado, linhas de luz formando um mapa, partículas subindo".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn scene_count_thresholds() {
        let cases = [(6, 7), (10, 7), (11, 9), (15, 9), (16, 11), (30, 11)];
        for (minutes, expected) in cases {
            assert_eq!(
                scene_count_for_minutes(minutes),
                expected,
                "minutes = {minutes}"
            );
        }
    }

    #[test]
    fn out_of_range_minutes_clamp() {
        assert_eq!(scene_count_for_minutes(0), 7);
        assert_eq!(scene_count_for_minutes(500), 11);
    }

    #[test]
    fn take_count_is_three_per_scene_plus_one() {
        for minutes in [6u32, 12, 20] {
            let inputs = StoryInputs {
                episode_minutes: minutes,
                ..StoryInputs::default()
            };
            let ep = compose_episode(&inputs, Lang::Pt, &mut rng());
            let scenes = scene_count_for_minutes(minutes);
            assert_eq!(ep.takes.len(), scenes * 3 + 1);
        }
    }

    #[test]
    fn scene_minutes_floor() {
        // 6 minutes over 7 scenes would be ~0.857; the floor only kicks in
        // for degenerate ratios, which clamping already prevents. Verify
        // the window arithmetic lands in the script.
        let inputs = StoryInputs {
            episode_minutes: 6,
            ..StoryInputs::default()
        };
        let ep = compose_episode(&inputs, Lang::Pt, &mut rng());
        assert!(ep.script.contains("CENA 1 (0.0–0.9 min)"));
    }

    #[test]
    fn empty_inputs_still_render_full_document() {
        let inputs = StoryInputs {
            title: String::new(),
            episode_minutes: 12,
            episodes_count: 8,
            ..StoryInputs::default()
        };
        let ep = compose_episode(&inputs, Lang::Pt, &mut rng());
        assert!(ep.script.contains("ROTEIRO EM CENAS"));
        assert!(ep.script.contains("Série"));
        assert_eq!(ep.takes.len(), 28);
    }

    #[test]
    fn script_is_normalized() {
        let inputs = StoryInputs {
            premise: "linha um\r\n\r\n\r\n\r\nlinha dois".to_string(),
            ..StoryInputs::default()
        };
        let ep = compose_episode(&inputs, Lang::Pt, &mut rng());
        assert!(!ep.script.contains('\r'));
        assert!(!ep.script.contains("\n\n\n"));
        assert_eq!(ep.script, normalize(&ep.script));
    }

    #[test]
    fn english_variant_substitutes_headers() {
        let ep = compose_episode(&StoryInputs::default(), Lang::En, &mut rng());
        assert!(ep.script.contains("SCRIPT IN SCENES"));
        assert!(ep.script.contains("GOAL:"));
        assert!(!ep.script.contains("OBJETIVO:"));
    }

    #[test]
    fn durations_cycle_by_scene_position() {
        let ep = compose_episode(&StoryInputs::default(), Lang::Pt, &mut rng());
        // Scene 1 establish take uses table slot 0, scene 2 slot 1.
        assert_eq!(ep.takes[0].duration, DURATIONS[0]);
        assert_eq!(ep.takes[3].duration, DURATIONS[1]);
    }

    #[test]
    fn closing_take_is_wide_pull_out() {
        let ep = compose_episode(&StoryInputs::default(), Lang::Pt, &mut rng());
        let last = ep.takes.last().unwrap();
        assert_eq!(last.shot, ShotType::Wide);
        assert_eq!(last.motion, CameraMotion::SlowPullOut);
        assert!(last.label.contains("CLIFFHANGER"));
    }

    #[test]
    fn take_ids_are_unique() {
        let ep = compose_episode(&StoryInputs::default(), Lang::Pt, &mut rng());
        let mut seen = std::collections::HashSet::new();
        for take in &ep.takes {
            assert!(seen.insert(take.id.0.clone()), "duplicate id {}", take.id.0);
        }
    }
}
