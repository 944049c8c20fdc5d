/// The one-shot "generate" operation and the shared fallback phrases.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::bible::compose_bible;
use crate::core::episode::compose_episode;
use crate::core::lang::Lang;
use crate::core::season::compose_season;
use crate::schema::story::StoryInputs;
use crate::schema::take::TakeSpec;

/// Fixed fallback phrases substituted for empty fields at render time.
/// Every composer pulls from this table so the language stays coherent
/// across documents.
pub mod fallback {
    pub const TITLE: &str = "Série";
    pub const PREMISE: &str = "Um segredo antigo ameaça a cidade.";
    pub const PROTAGONIST_NAME: &str = "Protagonista";
    pub const PROTAGONIST_TRAIT: &str = "determinação silenciosa";
    pub const PROTAGONIST_DESIRE: &str = "proteger quem ama";
    pub const PROTAGONIST_FEAR: &str = "perder o controle";
    pub const ANTAGONIST_NAME: &str = "Antagonista";
    pub const ANTAGONIST_FORCE: &str = "uma rede que enxerga tudo";
    pub const WORLD: &str = "uma metrópole neon sob chuva fina";
    pub const WORLD_RULES: &str = "todo poder cobra um preço";
    pub const THEME: &str = "lealdade contra ambição";
    pub const SET_PIECE: &str = "um pátio de trens abandonado";
}

/// Aggregate produced once per generation request. Regeneration fully
/// replaces the previous value; there is no merge path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryOutput {
    pub bible: String,
    pub outline: String,
    pub script: String,
    pub takes: Vec<TakeSpec>,
}

/// Run the three document composers over one input record. Pure except
/// for take-id generation, which draws from the caller's RNG.
pub fn compose_story<R: Rng>(inputs: &StoryInputs, lang: Lang, rng: &mut R) -> StoryOutput {
    let bible = compose_bible(inputs, lang);
    let outline = compose_season(inputs, lang);
    let episode = compose_episode(inputs, lang, rng);
    StoryOutput {
        bible,
        outline,
        script: episode.script,
        takes: episode.takes,
    }
}
