use serde::{Deserialize, Serialize};

/// The ten yes/no answers that steer the SEO pack.
///
/// Field names mirror the questionnaire: continuous series, adult
/// audience, shonen-vs-drama, premium tone, short episodes, fixed posting
/// schedule, PT-BR focus, single universe, Shorts funnel, monetization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeoFlags {
    pub series_continuous: bool,
    pub adult_18: bool,
    pub shonen_action: bool,
    pub premium_tone: bool,
    pub short_episodes: bool,
    pub fixed_schedule: bool,
    pub ptbr: bool,
    pub one_universe: bool,
    pub shorts: bool,
    pub monetize: bool,
}

impl Default for SeoFlags {
    fn default() -> Self {
        Self {
            series_continuous: true,
            adult_18: true,
            shonen_action: true,
            premium_tone: true,
            short_episodes: true,
            fixed_schedule: true,
            ptbr: true,
            one_universe: true,
            shorts: true,
            monetize: true,
        }
    }
}

/// Full input record for the SEO pack composer: the ten flags plus the
/// five free-text answers. All text fields are optional; each template
/// substitutes its own fallback phrase inline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoAnswers {
    #[serde(default)]
    pub flags: SeoFlags,
    #[serde(default)]
    pub series_name: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub differentiator: String,
    #[serde(default)]
    pub ep_number: String,
    #[serde(default)]
    pub ep_topic: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_true() {
        let f = SeoFlags::default();
        assert!(f.series_continuous && f.adult_18 && f.shonen_action);
        assert!(f.premium_tone && f.short_episodes && f.fixed_schedule);
        assert!(f.ptbr && f.one_universe && f.shorts && f.monetize);
    }

    #[test]
    fn default_answers_empty_text() {
        let a = SeoAnswers::default();
        assert!(a.series_name.is_empty());
        assert!(a.ep_topic.is_empty());
    }
}
