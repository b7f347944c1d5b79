//! Emoji search: lexicon matching, remote suggestions, and the engine that
//! merges the two.

pub mod engine;
pub mod lexicon;
pub mod matcher;
pub mod remote;
pub mod skin_tone;

pub use engine::{SearchEngine, SearchUnavailable};
pub use lexicon::{EmojiDef, LEXICON};
pub use remote::{HttpRemoteSearch, RemoteError, RemoteSearch, DEFAULT_API_URL};
