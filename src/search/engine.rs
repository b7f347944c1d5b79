//! Search orchestration.
//!
//! The engine owns one search: lexicon matching first, then the remote
//! lookup, then a merge that keeps local hits ahead of remote suggestions.
//! Remote failures are soft as long as the lexicon produced anything; they
//! only surface as [`SearchUnavailable`] when there is nothing at all to
//! show. Merged results are memoized per query for the lifetime of the
//! engine, so retyping a prefix never refetches.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use super::lexicon::EmojiDef;
use super::matcher;
use super::remote::{RemoteError, RemoteSearch};

/// A query produced no local matches and the remote lookup failed too.
#[derive(Debug)]
pub struct SearchUnavailable {
    cause: RemoteError,
}

impl SearchUnavailable {
    fn new(cause: RemoteError) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> &RemoteError {
        &self.cause
    }
}

impl fmt::Display for SearchUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search is unavailable ({})", self.cause)
    }
}

impl std::error::Error for SearchUnavailable {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

pub struct SearchEngine {
    lexicon: &'static [EmojiDef],
    remote: Arc<dyn RemoteSearch>,
    limit: usize,
    offline: AtomicBool,
    cache: Mutex<HashMap<String, Vec<String>>>,
}

impl SearchEngine {
    pub fn new(lexicon: &'static [EmojiDef], remote: Arc<dyn RemoteSearch>, limit: usize) -> Self {
        Self {
            lexicon,
            remote,
            limit,
            offline: AtomicBool::new(false),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Marks the session offline. Remote lookups are skipped from here on;
    /// lexicon search keeps working.
    pub fn set_offline(&self) {
        self.offline.store(true, Ordering::Relaxed);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::Relaxed)
    }

    /// Runs a full search for `query`.
    ///
    /// An empty or punctuation-only query resolves to no results without
    /// touching the network. Successful searches are cached; a query answered
    /// purely locally because the remote failed is not, so a later retry can
    /// still pick up remote suggestions.
    pub async fn search(&self, query: &str) -> Result<Vec<String>, SearchUnavailable> {
        if matcher::tokenize(query).is_empty() {
            return Ok(Vec::new());
        }

        if let Some(hit) = self.cached(query) {
            debug!("Cache hit for {query:?}");
            return Ok(hit);
        }

        let local = matcher::search_lexicon(self.lexicon, query);

        let remote = if self.is_offline() {
            Err(RemoteError::Offline)
        } else {
            self.remote.search(query).await
        };

        let merged = match remote {
            Ok(suggestions) => {
                let merged = merge_capped(local, suggestions, self.limit);
                self.remember(query, &merged);
                merged
            }
            Err(err) if local.is_empty() => {
                debug!("Search for {query:?} failed with no local fallback: {err}");
                return Err(SearchUnavailable::new(err));
            }
            Err(err) => {
                debug!("Remote search for {query:?} failed, using lexicon only: {err}");
                merge_capped(local, Vec::new(), self.limit)
            }
        };

        Ok(merged)
    }

    fn cached(&self, query: &str) -> Option<Vec<String>> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(query)
            .cloned()
    }

    fn remember(&self, query: &str, results: &[String]) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(query.to_string(), results.to_vec());
    }
}

/// Local hits first, then remote suggestions, duplicates removed before the
/// list is cut down to `limit`.
fn merge_capped(local: Vec<String>, remote: Vec<String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged: Vec<String> = local
        .into_iter()
        .chain(remote)
        .filter(|emoji| seen.insert(emoji.clone()))
        .collect();
    merged.truncate(limit);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::lexicon::LEXICON;
    use crate::test_support::{CountingRemote, FailingRemote, StaticRemote};
    use tokio_test::block_on;

    const NO_SUCH_QUERY: &str = "xyzzyplugh";

    const TOOLS: &[EmojiDef] = &[
        EmojiDef { character: "🔧", name: "wrench", keywords: &["tool"] },
        EmojiDef { character: "🔨", name: "hammer", keywords: &["tool"] },
        EmojiDef { character: "🔩", name: "nut_and_bolt", keywords: &["tool"] },
    ];

    fn engine_with(remote: Arc<dyn RemoteSearch>, limit: usize) -> SearchEngine {
        SearchEngine::new(LEXICON, remote, limit)
    }

    #[test]
    fn local_hits_come_before_remote_suggestions() {
        let remote = Arc::new(StaticRemote::new(vec!["🌈", "✨"]));
        let engine = engine_with(remote, 7);

        let results = block_on(engine.search("unicorn")).expect("search succeeds");
        assert_eq!(results, vec!["🦄", "🌈", "✨"]);
    }

    #[test]
    fn duplicates_are_removed_before_the_cap() {
        let remote = Arc::new(StaticRemote::new(vec!["🔧", "🎉", "🎈"]));
        let engine = SearchEngine::new(TOOLS, remote, 4);

        let results = block_on(engine.search("tool")).expect("search succeeds");
        // 🔧 appears locally and remotely; the cap still admits four distinct
        // characters.
        assert_eq!(results, vec!["🔧", "🔨", "🔩", "🎉"]);
    }

    #[test]
    fn results_never_exceed_the_limit() {
        let remote = Arc::new(StaticRemote::new(vec!["🎉", "🎈", "🎊", "🎁"]));
        let engine = SearchEngine::new(TOOLS, remote, 3);

        let results = block_on(engine.search("tool")).expect("search succeeds");
        assert_eq!(results, vec!["🔧", "🔨", "🔩"]);
    }

    #[test]
    fn remote_failure_is_soft_when_the_lexicon_matches() {
        let engine = engine_with(Arc::new(FailingRemote), 7);

        let results = block_on(engine.search("unicorn")).expect("local fallback");
        assert_eq!(results, vec!["🦄"]);
    }

    #[test]
    fn remote_failure_is_hard_without_local_matches() {
        let engine = engine_with(Arc::new(FailingRemote), 7);

        let err = block_on(engine.search(NO_SUCH_QUERY)).expect_err("no fallback");
        assert!(matches!(err.cause(), RemoteError::Network(_)));
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn empty_queries_skip_the_remote_entirely() {
        let remote = Arc::new(CountingRemote::new(vec!["🌈"]));
        let engine = engine_with(remote.clone(), 7);

        assert!(block_on(engine.search("")).expect("empty ok").is_empty());
        assert!(block_on(engine.search("   ")).expect("blank ok").is_empty());
        assert!(block_on(engine.search("!!!")).expect("punctuation ok").is_empty());
        assert_eq!(remote.calls(), 0);
    }

    #[test]
    fn repeated_queries_are_served_from_cache() {
        let remote = Arc::new(CountingRemote::new(vec!["🌈"]));
        let engine = engine_with(remote.clone(), 7);

        let first = block_on(engine.search("unicorn")).expect("search succeeds");
        let second = block_on(engine.search("unicorn")).expect("cache hit");
        assert_eq!(first, second);
        assert_eq!(remote.calls(), 1);
    }

    #[test]
    fn failed_remote_lookups_are_not_cached() {
        let remote = Arc::new(CountingRemote::failing());
        let engine = engine_with(remote.clone(), 7);

        let first = block_on(engine.search("unicorn")).expect("local fallback");
        assert_eq!(first, vec!["🦄"]);
        let _ = block_on(engine.search("unicorn"));
        assert_eq!(remote.calls(), 2);
    }

    #[test]
    fn offline_engine_still_answers_from_the_lexicon() {
        let remote = Arc::new(CountingRemote::new(vec!["🌈"]));
        let engine = engine_with(remote.clone(), 7);
        engine.set_offline();

        let results = block_on(engine.search("unicorn")).expect("lexicon only");
        assert_eq!(results, vec!["🦄"]);
        assert_eq!(remote.calls(), 0);
    }

    #[test]
    fn offline_engine_reports_unavailable_without_local_matches() {
        let engine = engine_with(Arc::new(StaticRemote::new(vec!["🌈"])), 7);
        engine.set_offline();

        let err = block_on(engine.search(NO_SUCH_QUERY)).expect_err("offline, no lexicon hit");
        assert!(matches!(err.cause(), RemoteError::Offline));
    }

    #[test]
    fn merge_capped_preserves_first_occurrence_order() {
        let local = vec!["🔧".to_string(), "🔨".to_string()];
        let remote = vec!["🔨".to_string(), "🔧".to_string(), "🎉".to_string()];
        assert_eq!(merge_capped(local, remote, 10), vec!["🔧", "🔨", "🎉"]);
    }
}
