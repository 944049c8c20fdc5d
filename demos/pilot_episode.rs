/// Generate every artifact for a small cyberpunk series and print the
/// prompt of the first derived take.

use rand::rngs::StdRng;
use rand::SeedableRng;
use roteiro_engine::core::lang::Lang;
use roteiro_engine::core::prompt::take_prompt;
use roteiro_engine::core::story::compose_story;
use roteiro_engine::schema::story::{
    Antagonist, Protagonist, Rating, StoryInputs, Tone, WorldInfo,
};

fn main() {
    let inputs = StoryInputs {
        title: "Cidade de Vidro".to_string(),
        premise: "Uma entregadora descobre que as rotas que memoriza apagam pessoas do mapa."
            .to_string(),
        tone: Tone::Misterioso,
        rating: Rating::Pg13,
        episodes_count: 8,
        episode_minutes: 12,
        protagonist: Protagonist {
            name: "Akira".to_string(),
            core_trait: "memória fotográfica".to_string(),
            desire: "encontrar a irmã apagada".to_string(),
            fear: "esquecer o rosto dela".to_string(),
        },
        antagonist: Antagonist {
            name: "Volk".to_string(),
            force: "o consórcio que redesenha a cidade toda noite".to_string(),
        },
        world: WorldInfo {
            description: "uma metrópole onde os mapas mudam enquanto todos dormem".to_string(),
            rules: "quem decora uma rota antiga carrega o que foi apagado".to_string(),
        },
        theme: "memória contra conveniência".to_string(),
        set_piece: "a estação de trem que não existe mais".to_string(),
    };

    let mut rng = StdRng::seed_from_u64(7);
    let output = compose_story(&inputs, Lang::Pt, &mut rng);

    println!("{}\n", output.bible);
    println!("{}\n", output.outline);
    println!("{}\n", output.script);
    println!("--- primeiro take ---\n");
    println!("{}", take_prompt(&output.takes[0], Lang::Pt));
}
