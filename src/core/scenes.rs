/// The ordered scene template library.
///
/// Nine authored dramatic positions, instantiated against the resolved
/// story fields. Episodes longer than the library reuse the final
/// template: index ≥ length clamps to the last entry. That plateau is
/// policy, not an out-of-bounds accident.

use crate::core::story::fallback;
use crate::core::text::resolve;
use crate::schema::story::StoryInputs;

/// Story fields a scene template interpolates, already passed through
/// fallback resolution.
#[derive(Debug, Clone)]
pub struct SceneSeed {
    pub protagonist: String,
    pub core_trait: String,
    pub desire: String,
    pub fear: String,
    pub antagonist: String,
    pub force: String,
    pub theme: String,
    pub set_piece: String,
}

impl SceneSeed {
    pub fn from_inputs(inputs: &StoryInputs) -> SceneSeed {
        SceneSeed {
            protagonist: resolve(&inputs.protagonist.name, fallback::PROTAGONIST_NAME),
            core_trait: resolve(&inputs.protagonist.core_trait, fallback::PROTAGONIST_TRAIT),
            desire: resolve(&inputs.protagonist.desire, fallback::PROTAGONIST_DESIRE),
            fear: resolve(&inputs.protagonist.fear, fallback::PROTAGONIST_FEAR),
            antagonist: resolve(&inputs.antagonist.name, fallback::ANTAGONIST_NAME),
            force: resolve(&inputs.antagonist.force, fallback::ANTAGONIST_FORCE),
            theme: resolve(&inputs.theme, fallback::THEME),
            set_piece: resolve(&inputs.set_piece, fallback::SET_PIECE),
        }
    }
}

/// One instantiated scene.
#[derive(Debug, Clone)]
pub struct Scene {
    pub title: String,
    pub goal: String,
    pub obstacle: String,
    pub turn: String,
    pub visuals: String,
    pub acting: String,
}

/// Number of authored templates.
pub const LIBRARY_LEN: usize = 9;

/// Instantiate the template at `index` (0-based). Indices past the
/// library clamp to the last template.
pub fn scene_template(index: usize, seed: &SceneSeed) -> Scene {
    let p = &seed.protagonist;
    let a = &seed.antagonist;
    match index.min(LIBRARY_LEN - 1) {
        0 => Scene {
            title: format!("A rotina que esconde {p}"),
            goal: format!("{p} atravessa um dia comum tentando {}.", seed.desire),
            obstacle: format!("A cidade cobra pequenas violências; {} já observa.", seed.force),
            turn: format!("Um detalhe fora do lugar mostra que {p} foi notado."),
            visuals: format!("Planos fechados de mãos e objetos; {} ao fundo.", seed.set_piece),
            acting: format!("{p} sustenta {} mesmo nos gestos banais.", seed.core_trait),
        },
        1 => Scene {
            title: "O chamado que não podia ser atendido".to_string(),
            goal: format!("{p} recebe um pedido que toca direto em {}.", seed.desire),
            obstacle: format!("Aceitar significa encarar {}.", seed.fear),
            turn: format!("{p} diz não — e a recusa sai mais cara do que o sim."),
            visuals: "Chuva fina, reflexos no chão, enquadramento apertado na porta.".to_string(),
            acting: format!("Hesitação no olhar de {p}; a voz firme chega tarde."),
        },
        2 => Scene {
            title: format!("Primeiro contato com {a}"),
            goal: format!("{p} busca informação sem se expor."),
            obstacle: format!("{a} controla o território: {}.", seed.force),
            turn: format!("{a} sabia que {p} viria; a conversa era uma armadilha."),
            visuals: "Contraluz dura, silhuetas, fumaça cortando o feixe.".to_string(),
            acting: format!("{a} calmo demais; {p} mede cada palavra."),
        },
        3 => Scene {
            title: "A prova de fogo".to_string(),
            goal: format!("{p} tenta uma vitória pequena para ganhar fôlego."),
            obstacle: format!("O plano depende de trair um pouco de {}.", seed.theme),
            turn: "A vitória vem, mas alguém inocente paga o preço.".to_string(),
            visuals: format!("Ação em {}; cortes secos, poeira suspensa.", seed.set_piece),
            acting: format!("Euforia curta de {p} congelando em culpa."),
        },
        4 => Scene {
            title: "A verdade pela metade".to_string(),
            goal: format!("{p} confronta um aliado sobre o que foi escondido."),
            obstacle: "A resposta verdadeira tornaria tudo mais difícil.".to_string(),
            turn: format!("A meia-verdade revela que {} sempre esteve no centro.", seed.theme),
            visuals: "Dois rostos em meia-luz, espelho dividindo o quadro.".to_string(),
            acting: "Pausas longas; quem mente olha para baixo primeiro.".to_string(),
        },
        5 => Scene {
            title: format!("{a} aperta o cerco"),
            goal: format!("{p} tenta proteger o que resta antes do ataque."),
            obstacle: format!("{} chega antes, por dentro.", seed.force),
            turn: format!("O refúgio de {p} já estava comprometido desde o início."),
            visuals: "Luz vermelha intermitente, corredores estreitos, sombras longas.".to_string(),
            acting: format!("{p} engole {} e age mesmo assim.", seed.fear),
        },
        6 => Scene {
            title: "Tudo perdido".to_string(),
            goal: format!("{p} tenta salvar o plano em colapso."),
            obstacle: "Cada saída exige abrir mão de uma pessoa.".to_string(),
            turn: format!("{p} escolhe errado — e sabe disso na hora."),
            visuals: "Chuva forte, neon apagando, quadro cada vez mais vazio.".to_string(),
            acting: format!("O corpo de {p} continua; o olhar já desistiu."),
        },
        7 => Scene {
            title: "A decisão irreversível".to_string(),
            goal: format!("{p} aceita o custo que vinha adiando."),
            obstacle: format!("{a} oferece uma saída limpa — pelo preço exato de {}.", seed.desire),
            turn: format!("{p} recusa a saída e cruza a linha de {}.", seed.fear),
            visuals: format!("{} em silêncio; um único foco de luz.", seed.set_piece),
            acting: "Mãos firmes pela primeira vez; a respiração desacelera.".to_string(),
        },
        _ => Scene {
            title: "O confronto e a porta errada".to_string(),
            goal: format!("{p} enfrenta {a} com tudo o que restou."),
            obstacle: format!("{} não depende mais de {a} para continuar.", seed.force),
            turn: "Vencer abre uma porta pior do que o problema original.".to_string(),
            visuals: "Plano aberto final, cidade inteira como testemunha.".to_string(),
            acting: format!("{p} vence sem alívio; o rosto entende o que vem."),
        },
    }
}
