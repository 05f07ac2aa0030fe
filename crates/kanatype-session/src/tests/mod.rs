
use super::{KeyResponse, TypingSession};

pub(super) fn session_with(word: &str) -> TypingSession {
    let mut session = TypingSession::new();
    session.set_word(word);
    session
}

// Helper: feed a string one key at a time
pub(super) fn type_str(session: &mut TypingSession, keys: &str) -> Vec<KeyResponse> {
    keys.chars().map(|c| session.process_key(c)).collect()
}
