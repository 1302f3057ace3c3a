pub mod language;
pub mod manifest;

// manifest is accessed as crate::models::manifest::{load, ensure, ...}
pub use language::{parse_language, Language};
