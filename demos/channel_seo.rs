/// Build the full SEO package for a channel and print it.

use roteiro_engine::core::seo::compose_seo;
use roteiro_engine::schema::seo::{SeoAnswers, SeoFlags};

fn main() {
    let answers = SeoAnswers {
        flags: SeoFlags {
            shonen_action: false,
            ..SeoFlags::default()
        },
        series_name: "CIDADE DE VIDRO".to_string(),
        audience: "Público adulto que gosta de mistério e ficção científica.".to_string(),
        style: "Anime noir cyberpunk, ritmo contido, direção cinematográfica.".to_string(),
        differentiator: "Cada episódio apaga uma parte do mapa — e o público percebe antes dos personagens.".to_string(),
        ep_number: "01".to_string(),
        ep_topic: "A rota que não deveria existir.".to_string(),
    };

    let pack = compose_seo(&answers);
    println!("{}", pack.pack);
}
