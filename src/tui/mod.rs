//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the inline viewport, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! The viewport is inline (a few rows below the shell prompt) rather than
//! the alternate screen, so the last frame stays in the scrollback after
//! exit.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws when something changed (a key event or a
//! background action). The poll timeout is normally 500ms, shortened to
//! whatever remains of the debounce window so a pending fetch fires on
//! schedule instead of waiting for the next key press.

mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use ratatui::{DefaultTerminal, TerminalOptions, Viewport};

use crate::clipboard;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::debounce::{DEBOUNCE_WINDOW, Debouncer};
use crate::core::state::App;
use crate::search::remote::probe_connectivity;
use crate::search::{HttpRemoteSearch, LEXICON, SearchEngine};
use crate::tui::event::{InputEvent, poll_event, poll_event_immediate};

/// Poll timeout when no fetch deadline is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Build a search engine from a resolved config's API URL and result limit.
pub fn build_engine(config: &ResolvedConfig) -> Arc<SearchEngine> {
    let remote = Arc::new(HttpRemoteSearch::new(config.api_url.clone()));
    Arc::new(SearchEngine::new(LEXICON, remote, config.limit))
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let engine = build_engine(config);
    let mut app = App::new(engine, config.skin_tone);

    let mut terminal = ratatui::init_with_options(TerminalOptions {
        viewport: Viewport::Inline(ui::VIEWPORT_HEIGHT),
    });

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Resolve connectivity in the background so the prompt appears immediately
    spawn_probe(config.api_url.clone(), tx.clone());

    let result = event_loop(&mut terminal, &mut app, tx, rx);
    let _ = terminal.show_cursor();
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tx: mpsc::Sender<Action>,
    rx: mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app))?;
            needs_redraw = false;
        }

        // Checked after the draw so the exit frame reaches the screen
        if should_quit {
            break;
        }

        // Dynamic poll timeout: never sleep past the debounce deadline
        let timeout = match debouncer.time_left() {
            Some(left) => left.min(IDLE_POLL),
            None => IDLE_POLL,
        };
        let first_event = poll_event(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for input in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match input {
                InputEvent::Char(c) => Action::Input(c),
                InputEvent::Digit(n) => Action::Digit(n),
                InputEvent::Backspace => Action::Backspace,
                InputEvent::Enter => Action::Commit,
                InputEvent::Clear => Action::ClearQuery,
                InputEvent::Up => Action::SkinToneUp,
                InputEvent::Down => Action::SkinToneDown,
                InputEvent::Left => Action::SelectPrev,
                InputEvent::Right => Action::SelectNext,
                InputEvent::Escape | InputEvent::ForceQuit => Action::Quit,
            };
            let effect = update(app, action);
            apply_effect(effect, app, &mut debouncer, &mut should_quit);
        }

        if should_quit {
            // One more pass so the exit frame reaches the screen
            continue;
        }

        // Fire the pending fetch once the debounce window closes
        if debouncer.poll_expired() {
            spawn_fetch(app.query.clone(), app.engine.clone(), tx.clone());
        }

        // Handle background task actions (search results, probe outcome)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(app, action);
            apply_effect(effect, app, &mut debouncer, &mut should_quit);
        }
    }

    Ok(())
}

fn apply_effect(effect: Effect, app: &App, debouncer: &mut Debouncer, should_quit: &mut bool) {
    match effect {
        Effect::None => {}
        Effect::ScheduleFetch => debouncer.note_mutation(),
        Effect::CancelFetch => debouncer.cancel(),
        Effect::MarkOffline => app.engine.set_offline(),
        Effect::CopyAndExit(emoji) => {
            clipboard::copy(&emoji);
            *should_quit = true;
        }
        Effect::Exit => *should_quit = true,
    }
}

fn spawn_probe(api_url: String, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let online = probe_connectivity(&api_url).await;
        info!("Connectivity probe finished: online={}", online);
        if tx.send(Action::ProbeFinished { online }).is_err() {
            warn!("Failed to send probe result: receiver dropped");
        }
    });
}

fn spawn_fetch(query: String, engine: Arc<SearchEngine>, tx: mpsc::Sender<Action>) {
    info!("Spawning search fetch for {:?}", query);
    tokio::spawn(async move {
        let action = match engine.search(&query).await {
            Ok(results) => Action::FetchArrived { query, results },
            Err(e) => {
                warn!("Search failed for {:?}: {}", query, e);
                Action::FetchFailed { query }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send search outcome: receiver dropped");
        }
    });
}
