//! Roteiro Engine — deterministic text assembly for episodic video production.
//!
//! Turns a small structured input record into long-form text artifacts at
//! request time without any model inference: a series bible, a season
//! outline, a scene-by-scene episode script with derived camera takes,
//! finished prompts for an external video generator, and a YouTube SEO pack.
//! Every composer is a pure function of its input record.

pub mod core;
pub mod schema;
