/// Story bible composer: the short structured series summary.

use crate::core::lang::Lang;
use crate::core::story::fallback;
use crate::core::text::{derive_by_substitution, normalize, resolve};
use crate::schema::story::StoryInputs;

/// The whole-word table behind the English bible. The English variant is
/// the Portuguese text with exactly these five terms swapped — identical
/// structure between the two languages is the point.
pub const BIBLE_TERMS: &[(&str, &str)] = &[
    ("SÉRIE", "SERIES"),
    ("TEMPORADA", "SEASON"),
    ("EPISÓDIO", "EPISODE"),
    ("MUNDO", "WORLD"),
    ("REGRAS", "RULES"),
];

pub fn compose_bible(inputs: &StoryInputs, lang: Lang) -> String {
    let title = resolve(&inputs.title, fallback::TITLE);
    let premise = resolve(&inputs.premise, fallback::PREMISE);
    let theme = resolve(&inputs.theme, fallback::THEME);
    let p_name = resolve(&inputs.protagonist.name, fallback::PROTAGONIST_NAME);
    let p_trait = resolve(&inputs.protagonist.core_trait, fallback::PROTAGONIST_TRAIT);
    let desire = resolve(&inputs.protagonist.desire, fallback::PROTAGONIST_DESIRE);
    let fear = resolve(&inputs.protagonist.fear, fallback::PROTAGONIST_FEAR);
    let a_name = resolve(&inputs.antagonist.name, fallback::ANTAGONIST_NAME);
    let force = resolve(&inputs.antagonist.force, fallback::ANTAGONIST_FORCE);
    let world = resolve(&inputs.world.description, fallback::WORLD);
    let rules = resolve(&inputs.world.rules, fallback::WORLD_RULES);
    let minutes = inputs.episode_minutes.clamp(
        crate::core::episode::MIN_EPISODE_MINUTES,
        crate::core::episode::MAX_EPISODE_MINUTES,
    );

    let doc = format!(
        "BÍBLIA DA SÉRIE — {title}\n\
         \n\
         PREMISSA: {premise}\n\
         TOM: {tone} • {rating}\n\
         TEMA: {theme}\n\
         \n\
         PROTAGONISTA: {p_name} — {p_trait}. Deseja {desire}. Teme {fear}.\n\
         ANTAGONISTA: {a_name} — {force}.\n\
         \n\
         MUNDO: {world}\n\
         REGRAS: {rules}\n\
         \n\
         GANCHO DA TEMPORADA: a primeira vitória de {p_name} acorda algo que deveria continuar dormindo.\n\
         EPISÓDIO 1: {minutes} min — termina na imagem que define a temporada.",
        tone = inputs.tone.label(),
        rating = inputs.rating.label(),
    );

    match lang {
        Lang::Pt => normalize(&doc),
        Lang::En => normalize(&derive_by_substitution(&doc, BIBLE_TERMS)),
    }
}
