use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Decoded keyboard input.
///
/// Raw crossterm events are translated into these exactly once, at the input
/// boundary; everything past this point pattern-matches on tags instead of
/// inspecting key codes. Digits get their own variant because they select
/// results and never reach the query buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Digit(u8),
    Backspace,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// Ctrl+U wipes the query buffer.
    Clear,
    /// Ctrl+C always leaves, whatever the stage.
    ForceQuit,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event(timeout: Duration) -> Option<InputEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(InputEvent::ForceQuit),
                    (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(InputEvent::Clear),
                    // Other control chords must not leak into the query
                    (KeyModifiers::CONTROL, _) => None,
                    (_, KeyCode::Char(c)) if c.is_ascii_digit() => {
                        Some(InputEvent::Digit(c as u8 - b'0'))
                    }
                    (_, KeyCode::Char(c)) => Some(InputEvent::Char(c)),
                    (_, KeyCode::Backspace) => Some(InputEvent::Backspace),
                    (_, KeyCode::Enter) => Some(InputEvent::Enter),
                    (_, KeyCode::Esc) => Some(InputEvent::Escape),
                    (_, KeyCode::Up) => Some(InputEvent::Up),
                    (_, KeyCode::Down) => Some(InputEvent::Down),
                    (_, KeyCode::Left) => Some(InputEvent::Left),
                    (_, KeyCode::Right) => Some(InputEvent::Right),
                    _ => None,
                }
            }
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<InputEvent> {
    poll_event(Duration::ZERO)
}
