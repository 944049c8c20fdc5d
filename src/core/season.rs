/// Season outline composer: one escalation/hook line per episode.

use crate::core::story::fallback;
use crate::core::text::{derive_by_substitution, normalize, resolve};
use crate::core::lang::Lang;
use crate::schema::story::StoryInputs;

pub const MIN_EPISODES: u32 = 3;
pub const MAX_EPISODES: u32 = 24;

const OUTLINE_TERMS: &[(&str, &str)] = &[
    ("TEMPORADA", "SEASON"),
    ("EPISÓDIOS", "EPISODES"),
    ("EPISÓDIO", "EPISODE"),
    ("SÉRIE", "SERIES"),
];

/// Escalation and hook text for a 1-based episode index.
///
/// Position rules are checked in this fixed order and the first match
/// wins: 1, 2, 3, ceil(N/2), N-1, N, default. With small N several rules
/// can point at the same index (N=4 puts the midpoint on episode 2); the
/// earlier rule is the intended one, never the later.
fn position_text(index: u32, total: u32) -> (&'static str, &'static str) {
    let midpoint = total.div_ceil(2);
    if index == 1 {
        (
            "Apresentação do mundo e do desejo do protagonista;",
            "termina na primeira imagem impossível.",
        )
    } else if index == 2 {
        (
            "O custo do dom aparece;",
            "alguém próximo descobre o segredo.",
        )
    } else if index == 3 {
        (
            "Primeira vitória com preço;",
            "o antagonista aprende o nome do protagonista.",
        )
    } else if index == midpoint {
        (
            "Uma verdade maior muda tudo o que parecia seguro;",
            "um aliado vira suspeito.",
        )
    } else if index == total - 1 {
        (
            "Tudo perdido;",
            "o plano completo do antagonista fica visível.",
        )
    } else if index == total {
        (
            "Confronto final;",
            "a porta errada se abre — gancho para a próxima temporada.",
        )
    } else {
        (
            "A escalada continua e o cerco aperta;",
            "novo gancho no último minuto.",
        )
    }
}

/// Render the outline: header plus one `EP{NN}:` line per episode, with
/// the episode count clamped to [3, 24].
pub fn compose_season(inputs: &StoryInputs, lang: Lang) -> String {
    let title = resolve(&inputs.title, fallback::TITLE);
    let total = inputs.episodes_count.clamp(MIN_EPISODES, MAX_EPISODES);

    let mut doc = String::new();
    doc.push_str(&format!("TEMPORADA — {title} — EPISÓDIOS: {total}\n\n"));
    for index in 1..=total {
        let (escalation, hook) = position_text(index, total);
        doc.push_str(&format!("EP{index:02}: {title} — {escalation} {hook}\n"));
    }

    match lang {
        Lang::Pt => normalize(&doc),
        Lang::En => normalize(&derive_by_substitution(&doc, OUTLINE_TERMS)),
    }
}
