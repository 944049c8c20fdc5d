pub mod bible;
pub mod episode;
pub mod lang;
pub mod prompt;
pub mod scenes;
pub mod season;
pub mod seo;
pub mod story;
pub mod text;
