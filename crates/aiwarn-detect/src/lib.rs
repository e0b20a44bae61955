pub mod classify;

pub use classify::{classify_tags, AI_TAG, KNOWN_CATEGORIES};
