/// SEO pack composer: ten yes/no answers plus five short texts in, one
/// copy-paste package out. Pure and total — every missing field resolves
/// through an inline fallback phrase.

use rustc_hash::FxHashSet;

use crate::core::text::{normalize, resolve};
use crate::schema::seo::{SeoAnswers, SeoFlags};

pub const MAX_KEYWORDS: usize = 30;
pub const MAX_TAGS: usize = 35;
const MAX_EXTRA_TOKENS: usize = 20;
const MIN_TOKEN_LEN: usize = 4;

/// Everything the composer derives, plus the concatenated pack.
#[derive(Debug, Clone)]
pub struct SeoPack {
    pub about_short: String,
    pub about_long: String,
    pub keywords: Vec<String>,
    pub titles: Vec<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub pinned: String,
    pub thumbnails: String,
    pub pack: String,
}

/// First-seen-order deduplication; entries are trimmed and empties drop.
fn uniq<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for item in items {
        let trimmed = item.as_ref().trim();
        if !trimmed.is_empty() && seen.insert(trimmed.to_string()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Fixed base list filtered by the flags, unioned with tokens from the
/// three free-text answers, deduplicated, capped at 30.
pub fn make_keywords(audience: &str, style: &str, diff: &str, flags: &SeoFlags) -> Vec<String> {
    let base = [
        "anime",
        "série de anime",
        "episódio",
        "história original",
        if flags.shonen_action { "shonen" } else { "" },
        if flags.adult_18 { "anime adulto" } else { "" },
        if flags.one_universe { "universo" } else { "" },
        if flags.shorts { "shorts" } else { "" },
        if flags.ptbr { "anime em português" } else { "" },
        "cyberpunk",
        "sci-fi",
        "ação",
        "mistério",
        "plot twist",
        "trilha sonora",
        "sakuga",
    ];
    let base = base.iter().filter(|s| !s.is_empty()).map(|s| s.to_string());

    let combined = format!("{audience} {style} {diff}").to_lowercase();
    let extra: Vec<String> = combined
        .split(|c| matches!(c, ',' | '.' | ';' | '\n'))
        .flat_map(str::split_whitespace)
        .map(str::trim)
        .filter(|w| w.chars().count() >= MIN_TOKEN_LEN)
        .take(MAX_EXTRA_TOKENS)
        .map(str::to_string)
        .collect();

    let mut keywords = uniq(base.chain(extra));
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Keyword list with inner whitespace collapsed, capped at 35.
pub fn make_tags(keywords: &[String]) -> Vec<String> {
    let cleaned = keywords
        .iter()
        .map(|k| k.split_whitespace().collect::<Vec<_>>().join(" "));
    let mut tags = uniq(cleaned);
    tags.truncate(MAX_TAGS);
    tags
}

pub fn channel_about_short(answers: &SeoAnswers) -> String {
    let series = if answers.series_name.trim().is_empty() {
        "🎬 Série original".to_string()
    } else {
        format!("🎬 {}", answers.series_name.trim())
    };
    normalize(&format!(
        "{series} — {}.\nPara: {}.\nDiferencial: {}",
        resolve(&answers.style, "anime original"),
        resolve(&answers.audience, "fãs de anime"),
        resolve(
            &answers.differentiator,
            "direção cinematográfica + histórias com viradas."
        ),
    ))
}

pub fn channel_about_long(answers: &SeoAnswers) -> String {
    let flags = &answers.flags;
    let welcome = if answers.series_name.trim().is_empty() {
        "Bem-vindo ao meu canal de anime original.".to_string()
    } else {
        format!("Bem-vindo ao canal de {}.", answers.series_name.trim())
    };
    let lang = if flags.ptbr {
        "Conteúdo em PT-BR."
    } else {
        "Conteúdo pensado para público global."
    };
    let format = if flags.short_episodes {
        "Episódios curtos e objetivos, com ritmo forte."
    } else {
        "Episódios com tempo para drama, construção e impacto."
    };
    let cadence = if flags.fixed_schedule {
        "Postagens em frequência fixa."
    } else {
        "Postagens por temporadas e drops."
    };
    let shorts = if flags.shorts {
        "Shorts de cenas e ganchos para atrair público pros episódios."
    } else {
        "Foco total nos episódios longos."
    };

    normalize(&format!(
        "{welcome}\n\n\
         Aqui você encontra {} com narrativa forte, personagens vivos e cenas marcantes.\n\
         Público: {}.\n\
         Diferencial: {}\n\n\
         {format}\n{cadence}\n{shorts}\n{lang}\n\n\
         Se curtir, se inscreve e acompanha a temporada.",
        resolve(&answers.style, "anime premium"),
        resolve(&answers.audience, "fãs de anime"),
        resolve(
            &answers.differentiator,
            "direção de atuação + cinematografia + cliffhangers."
        ),
    ))
}

/// Ten fixed title templates; the vibe tag follows the shonen flag.
pub fn make_titles(answers: &SeoAnswers) -> Vec<String> {
    let series = resolve(&answers.series_name, "Anime Original");
    let ep = if answers.ep_number.trim().is_empty() {
        "EP".to_string()
    } else {
        format!("EP{}", answers.ep_number.trim())
    };
    let ep_number = resolve(&answers.ep_number, "X");
    let topic = resolve(&answers.ep_topic, "A virada");
    let vibe = if answers.flags.shonen_action {
        "AÇÃO"
    } else {
        "MISTÉRIO"
    };
    let adult = if answers.flags.adult_18 {
        "adulto"
    } else {
        "original"
    };

    let titles = [
        format!("{series} {ep} — {topic} ({vibe})"),
        format!("{ep} — {topic} | {series}"),
        format!("{series}: {topic} (Episódio {ep_number})"),
        format!("{topic} — {series} {ep} (cliffhanger)"),
        format!("Quando tudo muda… | {series} {ep}"),
        format!("{series} {ep}: a decisão que ninguém esperava"),
        format!("{ep} — {topic} (anime {adult})"),
        format!("{series} {ep} — tensão máxima (sem enrolação)"),
        format!("{topic} | {series} {ep} (plot twist)"),
        format!("{series} {ep} — o começo da guerra"),
    ];
    titles
        .into_iter()
        .map(|t| normalize(&t))
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn make_pinned_comment(answers: &SeoAnswers) -> String {
    let series = resolve(&answers.series_name, "a série");
    let topic = resolve(&answers.ep_topic, "este episódio");
    normalize(&format!(
        "🔥 Se você curtiu {topic}, comenta:\n\
         1) Qual foi o momento mais forte?\n\
         2) Qual teoria você tem pro próximo episódio de {series}?\n\n\
         📌 Se inscreve e ativa o sininho pra não perder os próximos."
    ))
}

pub fn make_video_description(answers: &SeoAnswers, keywords: &[String]) -> String {
    let flags = &answers.flags;
    let series = resolve(&answers.series_name, "Série original");
    let ep = if answers.ep_number.trim().is_empty() {
        "Episódio".to_string()
    } else {
        format!("EP{}", answers.ep_number.trim())
    };
    let topic = resolve(&answers.ep_topic, "um capítulo intenso da história");
    let kw_line = keywords
        .iter()
        .take(10)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let hashtags = uniq(
        [
            "#anime",
            if flags.shonen_action { "#shonen" } else { "" },
            "#cyberpunk",
            "#scifi",
            "#acao",
            "#misterio",
            if flags.ptbr { "#animebr" } else { "" },
        ]
        .iter()
        .filter(|s| !s.is_empty()),
    )
    .join(" ");

    normalize(&format!(
        "{series} — {ep}\n\
         {topic}\n\n\
         ⚡ O que você vai ver:\n\
         - Ação + tensão + decisão (sem enrolação)\n\
         - Personagens vivos (micro-acting) + direção cinematográfica\n\
         - Gancho no final\n\n\
         🧠 Pergunta pra você:\n\
         Qual teoria você tem pro próximo episódio?\n\n\
         📌 Inscreva-se no canal e ative o sininho.\n\n\
         🔎 Palavras-chave: {kw_line}\n\
         {hashtags}"
    ))
}

/// Three fixed thumbnail prompts (Impact / Mystery / Emotion), written in
/// English for the image generator.
pub fn thumbnail_prompts(answers: &SeoAnswers) -> String {
    let series = resolve(&answers.series_name, "original anime series");
    let topic = resolve(&answers.ep_topic, "a dramatic turning point");
    let audience = resolve(&answers.audience, "adult shonen anime fans");

    let base_rules = "16:9 thumbnail image. No text in the image. Leave clean negative \
space on the LEFT for the title overlay. High contrast silhouette readability, strong \
subject separation, cinematic lighting.";
    let style = if answers.flags.shonen_action {
        "Pure 2D hand-drawn anime key art, premium cel shading, crisp lineart."
    } else {
        "High-end 2D anime key art, noir mood, premium cel shading, crisp lineart."
    };

    let a = format!(
        "Thumbnail Prompt A (Impact): {base_rules} {style} One main character in extreme \
foreground with intense emotion, dramatic rim light. Background shows the main threat of \
\"{topic}\" as a clear silhouette. Mood: adrenaline, danger, urgency. Target: {audience}. \
Series: {series}."
    );
    let b = format!(
        "Thumbnail Prompt B (Mystery): {base_rules} {style} Close-up face, eyes focused, \
half-shadow. A single mysterious symbol/glitch shape in the background (abstract, no \
letters). Mood: suspense, secrets, plot twist. Target: {audience}. Series: {series}."
    );
    let c = format!(
        "Thumbnail Prompt C (Emotion): {base_rules} {style} Character holding back tears, \
jaw tension, soft but high-contrast key light. Background: burning city / storm sky / \
neon reflections (choose one). Mood: sacrifice, decision, heartbreak. Target: {audience}. \
Series: {series}."
    );

    normalize(&[a, b, c].join("\n\n"))
}

/// Run every derivation and concatenate the full package under its fixed
/// section headers.
pub fn compose_seo(answers: &SeoAnswers) -> SeoPack {
    let keywords = make_keywords(
        &answers.audience,
        &answers.style,
        &answers.differentiator,
        &answers.flags,
    );
    let about_short = channel_about_short(answers);
    let about_long = channel_about_long(answers);
    let titles = make_titles(answers);
    let description = make_video_description(answers, &keywords);
    let tags = make_tags(&keywords);
    let pinned = make_pinned_comment(answers);
    let thumbnails = thumbnail_prompts(answers);

    let pack = normalize(&format!(
        "SEO — PACOTE COMPLETO\n\n\
         CANAL — DESCRIÇÃO CURTA:\n{about_short}\n\n\
         CANAL — DESCRIÇÃO LONGA:\n{about_long}\n\n\
         PALAVRAS-CHAVE DO CANAL (use nas descrições e tags):\n- {kw}\n\n\
         VÍDEO — TÍTULOS SUGERIDOS:\n- {titles_list}\n\n\
         VÍDEO — DESCRIÇÃO (copiar e colar):\n{description}\n\n\
         VÍDEO — TAGS:\n{tag_line}\n\n\
         COMENTÁRIO FIXADO:\n{pinned}\n\n\
         THUMBNAIL (PROMPTS):\n{thumbnails}",
        kw = keywords.join("\n- "),
        titles_list = titles.join("\n- "),
        tag_line = tags.join(", "),
    ));

    SeoPack {
        about_short,
        about_long,
        keywords,
        titles,
        description,
        tags,
        pinned,
        thumbnails,
        pack,
    }
}
