//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! User presses a key? That's `Action::Input(c)`.
//! A background fetch lands? That's `Action::FetchArrived { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the event loop
//! should perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and effect.
//! And debuggable: log every action, replay the exact session.

use log::debug;

use crate::core::state::{App, Stage};
use crate::search::skin_tone::{self, MAX_SKIN_TONE};

/// Notice shown under the results when a query could not be answered at all.
pub const SEARCH_UNAVAILABLE_NOTICE: &str = "Search is unavailable right now";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A printable character was typed into the query buffer.
    Input(char),
    /// Remove the last buffer character.
    Backspace,
    /// Wipe the whole buffer (Ctrl+U).
    ClearQuery,
    /// Darker skin tone (Up).
    SkinToneUp,
    /// Lighter skin tone (Down).
    SkinToneDown,
    /// Move the selection right, wrapping at the end.
    SelectNext,
    /// Move the selection left, wrapping at the start.
    SelectPrev,
    /// A digit key; commits result `n` when it exists, otherwise ignored.
    Digit(u8),
    /// Commit the highlighted result (Enter).
    Commit,
    /// Leave without committing (Esc / Ctrl+C).
    Quit,
    /// A background fetch finished. `query` echoes what was searched so
    /// stale completions can be recognized and dropped.
    FetchArrived { query: String, results: Vec<String> },
    /// A background fetch failed with nothing to show.
    FetchFailed { query: String },
    /// The startup connectivity probe resolved.
    ProbeFinished { online: bool },
}

/// I/O the event loop must carry out after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Arm (or re-arm) the debounced fetch for the current buffer.
    ScheduleFetch,
    /// Drop any pending fetch; the buffer is too short to search.
    CancelFetch,
    /// Tell the engine to stop trying the remote.
    MarkOffline,
    /// Put the string on the clipboard and end the session.
    CopyAndExit(String),
    /// End the session without copying.
    Exit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    // A committed session is already shutting down; only a quit still counts.
    if app.stage == Stage::Copied {
        return match action {
            Action::Quit => Effect::Exit,
            _ => Effect::None,
        };
    }

    match action {
        Action::Input(c) => {
            app.query.push(c);
            app.reset_results();
            schedule_or_cancel(app)
        }
        Action::Backspace => {
            app.query.pop();
            app.reset_results();
            schedule_or_cancel(app)
        }
        Action::ClearQuery => {
            app.query.clear();
            app.reset_results();
            Effect::CancelFetch
        }
        Action::SkinToneUp => {
            if app.search_active() && app.skin_tone < MAX_SKIN_TONE {
                app.skin_tone += 1;
            }
            Effect::None
        }
        Action::SkinToneDown => {
            if app.search_active() && app.skin_tone > 0 {
                app.skin_tone -= 1;
            }
            Effect::None
        }
        Action::SelectNext => {
            if app.search_active() && !app.results.is_empty() {
                app.selected_index = (app.selected_index + 1) % app.results.len();
            }
            Effect::None
        }
        Action::SelectPrev => {
            if app.search_active() && !app.results.is_empty() {
                app.selected_index = app
                    .selected_index
                    .checked_sub(1)
                    .unwrap_or(app.results.len() - 1);
            }
            Effect::None
        }
        Action::Digit(n) => {
            let n = usize::from(n);
            if n >= 1 && n <= app.results.len() {
                app.selected_index = n - 1;
                commit_selection(app)
            } else {
                Effect::None
            }
        }
        Action::Commit => {
            if app.results.is_empty() {
                Effect::None
            } else {
                commit_selection(app)
            }
        }
        Action::Quit => Effect::Exit,
        Action::FetchArrived { query, results } => {
            if query == app.query {
                app.results = results;
                if app.selected_index >= app.results.len() {
                    app.selected_index = 0;
                }
                app.status_message.clear();
            } else {
                debug!("Discarding stale results for {query:?}");
            }
            Effect::None
        }
        Action::FetchFailed { query } => {
            if query == app.query {
                app.status_message = SEARCH_UNAVAILABLE_NOTICE.to_string();
            }
            Effect::None
        }
        Action::ProbeFinished { online } => {
            if online {
                if app.stage == Stage::Initializing {
                    app.stage = Stage::Searching;
                }
                Effect::None
            } else {
                app.stage = Stage::Offline;
                Effect::MarkOffline
            }
        }
    }
}

fn schedule_or_cancel(app: &App) -> Effect {
    if app.query_len() > 1 {
        Effect::ScheduleFetch
    } else {
        Effect::CancelFetch
    }
}

fn commit_selection(app: &mut App) -> Effect {
    let toned = skin_tone::apply(&app.results[app.selected_index], app.skin_tone);
    app.copied_emoji = Some(toned.clone());
    app.stage = Stage::Copied;
    Effect::CopyAndExit(toned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn searching_app_with(results: Vec<&str>) -> App {
        let mut app = test_app();
        app.stage = Stage::Searching;
        app.query = "unicorn".to_string();
        app.results = results.into_iter().map(str::to_string).collect();
        app
    }

    #[test]
    fn typing_schedules_a_fetch_once_two_chars_are_in() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Input('u')), Effect::CancelFetch);
        assert_eq!(update(&mut app, Action::Input('n')), Effect::ScheduleFetch);
        assert_eq!(app.query, "un");
    }

    #[test]
    fn typing_clears_previous_results_and_selection() {
        let mut app = searching_app_with(vec!["🦄", "🌈"]);
        app.selected_index = 1;

        update(&mut app, Action::Input('s'));
        assert!(app.results.is_empty());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn backspace_below_two_chars_cancels_the_fetch() {
        let mut app = test_app();
        update(&mut app, Action::Input('u'));
        update(&mut app, Action::Input('n'));
        assert_eq!(update(&mut app, Action::Backspace), Effect::CancelFetch);
        assert_eq!(app.query, "u");
    }

    #[test]
    fn backspace_on_an_empty_buffer_is_harmless() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Backspace), Effect::CancelFetch);
        assert!(app.query.is_empty());
    }

    #[test]
    fn clear_query_wipes_the_buffer() {
        let mut app = searching_app_with(vec!["🦄"]);
        assert_eq!(update(&mut app, Action::ClearQuery), Effect::CancelFetch);
        assert!(app.query.is_empty());
        assert!(app.results.is_empty());
    }

    #[test]
    fn matching_fetch_results_are_applied() {
        let mut app = test_app();
        app.stage = Stage::Searching;
        app.query = "unicorn".to_string();

        let effect = update(
            &mut app,
            Action::FetchArrived {
                query: "unicorn".to_string(),
                results: vec!["🦄".to_string(), "🌈".to_string()],
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.results, vec!["🦄", "🌈"]);
    }

    #[test]
    fn stale_fetch_results_are_discarded() {
        let mut app = test_app();
        app.stage = Stage::Searching;
        app.query = "unicorns".to_string();

        update(
            &mut app,
            Action::FetchArrived {
                query: "unicorn".to_string(),
                results: vec!["🦄".to_string()],
            },
        );
        assert!(app.results.is_empty(), "stale results must not apply");
    }

    #[test]
    fn fetch_failure_sets_the_notice_only_for_the_live_query() {
        let mut app = test_app();
        app.stage = Stage::Searching;
        app.query = "zzzz".to_string();

        update(&mut app, Action::FetchFailed { query: "zzz".to_string() });
        assert!(app.status_message.is_empty());

        update(&mut app, Action::FetchFailed { query: "zzzz".to_string() });
        assert_eq!(app.status_message, SEARCH_UNAVAILABLE_NOTICE);
    }

    #[test]
    fn skin_tone_clamps_at_both_ends() {
        let mut app = searching_app_with(vec!["👍"]);
        for _ in 0..10 {
            update(&mut app, Action::SkinToneUp);
        }
        assert_eq!(app.skin_tone, MAX_SKIN_TONE);
        for _ in 0..10 {
            update(&mut app, Action::SkinToneDown);
        }
        assert_eq!(app.skin_tone, 0);
    }

    #[test]
    fn skin_tone_keys_are_ignored_for_short_queries() {
        let mut app = test_app();
        app.query = "u".to_string();
        update(&mut app, Action::SkinToneUp);
        assert_eq!(app.skin_tone, 0);
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut app = searching_app_with(vec!["🦄", "🌈", "✨"]);

        update(&mut app, Action::SelectPrev);
        assert_eq!(app.selected_index, 2);
        update(&mut app, Action::SelectNext);
        assert_eq!(app.selected_index, 0);
        update(&mut app, Action::SelectNext);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn selection_keys_do_nothing_without_results() {
        let mut app = test_app();
        app.stage = Stage::Searching;
        app.query = "unicorn".to_string();
        update(&mut app, Action::SelectNext);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn commit_copies_the_highlighted_result() {
        let mut app = searching_app_with(vec!["🦄", "🌈"]);
        app.selected_index = 1;

        let effect = update(&mut app, Action::Commit);
        assert_eq!(effect, Effect::CopyAndExit("🌈".to_string()));
        assert_eq!(app.stage, Stage::Copied);
        assert_eq!(app.copied_emoji.as_deref(), Some("🌈"));
    }

    #[test]
    fn commit_applies_the_session_skin_tone() {
        let mut app = searching_app_with(vec!["👍"]);
        app.skin_tone = 5;

        let effect = update(&mut app, Action::Commit);
        assert_eq!(effect, Effect::CopyAndExit("👍🏿".to_string()));
    }

    #[test]
    fn commit_with_no_results_is_a_no_op() {
        let mut app = test_app();
        app.stage = Stage::Searching;
        app.query = "unicorn".to_string();

        assert_eq!(update(&mut app, Action::Commit), Effect::None);
        assert_eq!(app.stage, Stage::Searching);
    }

    #[test]
    fn digits_commit_when_in_range_and_are_swallowed_otherwise() {
        let mut app = searching_app_with(vec!["🦄", "🌈", "✨"]);

        assert_eq!(update(&mut app, Action::Digit(9)), Effect::None);
        assert_eq!(app.query, "unicorn", "digits never reach the buffer");
        assert_eq!(update(&mut app, Action::Digit(0)), Effect::None);

        let effect = update(&mut app, Action::Digit(3));
        assert_eq!(effect, Effect::CopyAndExit("✨".to_string()));
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn a_failed_probe_marks_the_session_offline() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ProbeFinished { online: false });
        assert_eq!(effect, Effect::MarkOffline);
        assert_eq!(app.stage, Stage::Offline);
    }

    #[test]
    fn a_successful_probe_moves_into_searching() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ProbeFinished { online: true });
        assert_eq!(effect, Effect::None);
        assert_eq!(app.stage, Stage::Searching);
    }

    #[test]
    fn typing_still_works_while_offline() {
        let mut app = test_app();
        update(&mut app, Action::ProbeFinished { online: false });
        assert_eq!(update(&mut app, Action::Input('o')), Effect::CancelFetch);
        assert_eq!(update(&mut app, Action::Input('k')), Effect::ScheduleFetch);
        assert_eq!(app.stage, Stage::Offline);
    }

    #[test]
    fn committing_is_allowed_while_offline() {
        let mut app = searching_app_with(vec!["🦄"]);
        app.stage = Stage::Offline;

        let effect = update(&mut app, Action::Commit);
        assert_eq!(effect, Effect::CopyAndExit("🦄".to_string()));
    }

    #[test]
    fn input_after_commit_is_ignored() {
        let mut app = searching_app_with(vec!["🦄"]);
        update(&mut app, Action::Commit);

        assert_eq!(update(&mut app, Action::Input('x')), Effect::None);
        assert_eq!(app.query, "unicorn");
        assert_eq!(update(&mut app, Action::Quit), Effect::Exit);
    }

    #[test]
    fn quit_always_exits() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Exit);
    }
}
