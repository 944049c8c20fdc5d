pub mod entitlement;
pub mod preset;
pub mod prompt;
pub mod seo;
pub mod story;
pub mod take;
