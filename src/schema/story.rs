use serde::{Deserialize, Serialize};

/// The emotional register of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tone {
    #[default]
    Sombrio,
    Epico,
    Misterioso,
    Melancolico,
    Frenetico,
}

impl Tone {
    /// Display form used inside generated documents.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sombrio => "sombrio",
            Self::Epico => "épico",
            Self::Misterioso => "misterioso",
            Self::Melancolico => "melancólico",
            Self::Frenetico => "frenético",
        }
    }
}

/// Content rating for the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Rating {
    Pg,
    #[default]
    Pg13,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pg => "PG",
            Self::Pg13 => "PG-13",
        }
    }
}

/// The lead character of the series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Protagonist {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub core_trait: String,
    #[serde(default)]
    pub desire: String,
    #[serde(default)]
    pub fear: String,
}

/// The opposing force of the series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Antagonist {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub force: String,
}

/// The setting in one line plus its internal rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldInfo {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules: String,
}

/// The full input record for the story composers.
///
/// Every free-text field is optional and may be empty; numeric fields may
/// be out of range. Composers clamp and substitute fallbacks at render
/// time, never here — the raw record is stored as the user typed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryInputs {
    pub title: String,
    pub premise: String,
    pub tone: Tone,
    pub rating: Rating,
    pub episodes_count: u32,
    pub episode_minutes: u32,
    pub protagonist: Protagonist,
    pub antagonist: Antagonist,
    pub world: WorldInfo,
    pub theme: String,
    pub set_piece: String,
}

impl Default for StoryInputs {
    fn default() -> Self {
        Self {
            title: String::new(),
            premise: String::new(),
            tone: Tone::default(),
            rating: Rating::default(),
            episodes_count: 8,
            episode_minutes: 12,
            protagonist: Protagonist::default(),
            antagonist: Antagonist::default(),
            world: WorldInfo::default(),
            theme: String::new(),
            set_piece: String::new(),
        }
    }
}
