//! WASM bindings for roteiro-engine — powers the browser studio.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use roteiro_engine::core::lang::Lang;
use roteiro_engine::core::prompt::{auto_build, live_prompt, take_prompt};
use roteiro_engine::core::seo::compose_seo;
use roteiro_engine::core::story::{compose_story, StoryOutput};
use roteiro_engine::schema::entitlement::{
    resolve_gate, Entitlement, GateView, InitialView, Session,
};
use roteiro_engine::schema::prompt::{PromptState, SimpleShotInputs};
use roteiro_engine::schema::seo::SeoAnswers;
use roteiro_engine::schema::story::StoryInputs;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Deserialize)]
struct GateInput {
    #[serde(default)]
    loading: bool,
    session: Option<Session>,
    entitlement: Option<Entitlement>,
}

#[derive(serde::Serialize)]
struct SeoPackInfo {
    about_short: String,
    about_long: String,
    keywords: Vec<String>,
    titles: Vec<String>,
    description: String,
    tags: Vec<String>,
    pinned: String,
    thumbnails: String,
    pack: String,
}

fn parse_lang(s: &str) -> Result<Lang, JsError> {
    match s.to_lowercase().as_str() {
        "pt" | "pt-br" => Ok(Lang::Pt),
        "en" => Ok(Lang::En),
        other => Err(JsError::new(&format!("Unknown language: {other}"))),
    }
}

// ---------------------------------------------------------------------------
// Studio — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct Studio {
    rng: StdRng,
    story: StoryInputs,
    output: Option<StoryOutput>,
    prompt: PromptState,
}

#[wasm_bindgen]
impl Studio {
    /// Create a new studio instance. The seed only feeds take-id
    /// generation; document text is deterministic regardless.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Studio {
        Studio {
            rng: StdRng::seed_from_u64(seed),
            story: StoryInputs::default(),
            output: None,
            prompt: PromptState::default(),
        }
    }

    /// Replace the stored story inputs with the given JSON record.
    /// Missing fields take their defaults; nothing is validated here,
    /// out-of-range counts clamp at generation time.
    pub fn set_story(&mut self, story_json: &str) -> Result<(), JsError> {
        self.story = serde_json::from_str(story_json)
            .map_err(|e| JsError::new(&format!("Invalid story JSON: {e}")))?;
        Ok(())
    }

    /// Run every composer over the stored inputs. Returns the full
    /// output (bible, outline, script, takes) as JSON and replaces any
    /// previous generation wholesale.
    pub fn generate(&mut self, lang: &str) -> Result<String, JsError> {
        let lang = parse_lang(lang)?;
        let output = compose_story(&self.story, lang, &mut self.rng);
        let json = serde_json::to_string(&output)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))?;
        self.output = Some(output);
        Ok(json)
    }

    /// Serialize one generated take into its final prompt text.
    pub fn take_prompt(&self, index: usize, lang: &str) -> Result<String, JsError> {
        let lang = parse_lang(lang)?;
        let take = self.take_at(index)?;
        Ok(take_prompt(take, lang))
    }

    /// One-way copy of a generated take into the live prompt builder.
    /// Later edits to the builder never flow back to the take.
    pub fn seed_prompt_from_take(&mut self, index: usize) -> Result<(), JsError> {
        let take = self.take_at(index)?;
        self.prompt = PromptState::seeded_from(take);
        Ok(())
    }

    /// Replace the live prompt-builder state with the given JSON record.
    pub fn set_prompt(&mut self, prompt_json: &str) -> Result<(), JsError> {
        self.prompt = serde_json::from_str(prompt_json)
            .map_err(|e| JsError::new(&format!("Invalid prompt JSON: {e}")))?;
        Ok(())
    }

    /// Render the live prompt-builder state. Empty fields resolve to
    /// per-language placeholders, so the preview is always complete.
    pub fn live_prompt(&self, lang: &str) -> Result<String, JsError> {
        let lang = parse_lang(lang)?;
        Ok(live_prompt(&self.prompt, lang))
    }

    /// Expand a simple field set into the full builder state and store
    /// it. Returns the expanded state as JSON.
    pub fn auto_build(&mut self, simple_json: &str, lang: &str) -> Result<String, JsError> {
        let lang = parse_lang(lang)?;
        let simple: SimpleShotInputs = serde_json::from_str(simple_json)
            .map_err(|e| JsError::new(&format!("Invalid shot JSON: {e}")))?;
        self.prompt = auto_build(&simple, lang);
        serde_json::to_string(&self.prompt)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Build the full SEO package from a JSON answers record.
    pub fn seo_pack(&self, answers_json: &str) -> Result<String, JsError> {
        let answers: SeoAnswers = serde_json::from_str(answers_json)
            .map_err(|e| JsError::new(&format!("Invalid answers JSON: {e}")))?;
        let pack = compose_seo(&answers);
        let info = SeoPackInfo {
            about_short: pack.about_short,
            about_long: pack.about_long,
            keywords: pack.keywords,
            titles: pack.titles,
            description: pack.description,
            tags: pack.tags,
            pinned: pack.pinned,
            thumbnails: pack.thumbnails,
            pack: pack.pack,
        };
        serde_json::to_string(&info)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Resolve which view the host should render from the current
    /// session and entitlement lookups. Returns one of `"loading"`,
    /// `"signed_out"`, `"locked:<status>"`, `"open"`.
    pub fn gate(&self, gate_json: &str) -> Result<String, JsError> {
        let input: GateInput = serde_json::from_str(gate_json)
            .map_err(|e| JsError::new(&format!("Invalid gate JSON: {e}")))?;
        let view = resolve_gate(
            input.loading,
            input.session.as_ref(),
            input.entitlement.as_ref(),
        );
        Ok(match view {
            GateView::Loading => "loading".to_string(),
            GateView::SignedOut => "signed_out".to_string(),
            GateView::Locked { status } => format!("locked:{status}"),
            GateView::Open => "open".to_string(),
        })
    }

    /// Initial tab hint from the URL fragment: `"story"` or `"prompt"`.
    pub fn initial_view(fragment: &str) -> String {
        match InitialView::from_fragment(fragment) {
            InitialView::Story => "story".to_string(),
            InitialView::Prompt => "prompt".to_string(),
        }
    }
}

// Private helpers
impl Studio {
    fn take_at(&self, index: usize) -> Result<&roteiro_engine::schema::take::TakeSpec, JsError> {
        let output = self
            .output
            .as_ref()
            .ok_or_else(|| JsError::new("No generation yet; call generate() first"))?;
        output
            .takes
            .get(index)
            .ok_or_else(|| JsError::new(&format!("Take index out of range: {index}")))
    }
}
