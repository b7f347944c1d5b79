//! Shared helpers for unit tests.
//!
//! Fake [`RemoteSearch`] implementations and a ready-made [`App`] so tests
//! can drive the state machine without a network or a terminal. This module
//! is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::state::App;
use crate::search::engine::SearchEngine;
use crate::search::lexicon::LEXICON;
use crate::search::remote::{RemoteError, RemoteSearch};

/// Always answers with the same fixed suggestions.
pub struct StaticRemote {
    results: Vec<String>,
}

impl StaticRemote {
    pub fn new(results: Vec<&str>) -> Self {
        Self {
            results: results.into_iter().map(str::to_string).collect(),
        }
    }
}

#[async_trait]
impl RemoteSearch for StaticRemote {
    fn name(&self) -> &str {
        "static"
    }

    async fn search(&self, _query: &str) -> Result<Vec<String>, RemoteError> {
        Ok(self.results.clone())
    }
}

/// Always fails with a network error.
pub struct FailingRemote;

#[async_trait]
impl RemoteSearch for FailingRemote {
    fn name(&self) -> &str {
        "failing"
    }

    async fn search(&self, _query: &str) -> Result<Vec<String>, RemoteError> {
        Err(RemoteError::Network("connection reset by fake".to_string()))
    }
}

/// Counts how often it is queried; can be built to succeed or to fail.
pub struct CountingRemote {
    results: Option<Vec<String>>,
    calls: AtomicUsize,
}

impl CountingRemote {
    pub fn new(results: Vec<&str>) -> Self {
        Self {
            results: Some(results.into_iter().map(str::to_string).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            results: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSearch for CountingRemote {
    fn name(&self) -> &str {
        "counting"
    }

    async fn search(&self, _query: &str) -> Result<Vec<String>, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.results {
            Some(results) => Ok(results.clone()),
            None => Err(RemoteError::Network("counting fake set to fail".to_string())),
        }
    }
}

/// An [`App`] over the real lexicon and a quiet remote, with default settings.
pub fn test_app() -> App {
    let remote = Arc::new(StaticRemote::new(Vec::new()));
    let engine = Arc::new(SearchEngine::new(LEXICON, remote, 7));
    App::new(engine, 0)
}
