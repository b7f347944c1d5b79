//! # Application State
//!
//! Core business state for a live search session. This module contains
//! domain logic only - no TUI-specific types. Presentation lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── engine: Arc<SearchEngine>   // lexicon + remote search
//! ├── query: String               // what the user has typed
//! ├── results: Vec<String>        // emojis for the current query
//! ├── selected_index: usize       // highlighted result
//! ├── skin_tone: u8               // 0 (none) to 5 (darkest)
//! ├── stage: Stage                // session lifecycle
//! ├── status_message: String      // dim notice under the results
//! └── copied_emoji: Option<String> // what the session ended with
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::search::engine::SearchEngine;

/// Lifecycle of a live search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Connectivity probe still in flight. Input already works.
    Initializing,
    /// Normal operation: typing, selecting, committing.
    Searching,
    /// The probe failed. Lexicon search keeps working; remote is skipped.
    Offline,
    /// An emoji was committed; the session is about to end.
    Copied,
}

pub struct App {
    pub engine: Arc<SearchEngine>,
    pub query: String,
    pub results: Vec<String>,
    pub selected_index: usize,
    pub skin_tone: u8,
    pub stage: Stage,
    pub status_message: String,
    pub copied_emoji: Option<String>,
}

impl App {
    pub fn new(engine: Arc<SearchEngine>, skin_tone: u8) -> Self {
        Self {
            engine,
            query: String::new(),
            results: Vec::new(),
            selected_index: 0,
            skin_tone,
            stage: Stage::Initializing,
            status_message: String::new(),
            copied_emoji: None,
        }
    }

    /// Buffer length in characters, not bytes.
    pub fn query_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Selection and skin tone keys only respond once the buffer is long
    /// enough to have triggered a search.
    pub fn search_active(&self) -> bool {
        self.query_len() > 1
    }

    /// Every buffer mutation starts a fresh pending state: stale results,
    /// selection, and notices must not outlive the query they belong to.
    pub(crate) fn reset_results(&mut self) {
        self.results.clear();
        self.selected_index = 0;
        self.status_message.clear();
    }
}
