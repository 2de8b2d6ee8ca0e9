#![warn(missing_docs)]
//! `cm-embed-prefs` - preference handling for `cm-embed`.
//!
//! This crate provides a small key/value [`PreferenceStore`] abstraction (with an in-memory,
//! JSON-backed implementation) and the synchronizer that copies user preferences (theme,
//! folding, hover, mark occurrences, browser engine) into a
//! [`CmBuilder`](cm_embed::CmBuilder).

mod error;
mod store;
pub mod sync;

pub use error::PreferenceError;
pub use store::{MemoryPreferenceStore, PreferenceStore, PreferenceValue};
pub use sync::{
    BROWSER_PREFERENCE_NAME, HOVER_DELAY_PREFERENCE_NAME, HOVER_ENABLED_PREFERENCE_NAME,
    THEME_PREFERENCE_NAME, initialize, initialize_mode,
};
