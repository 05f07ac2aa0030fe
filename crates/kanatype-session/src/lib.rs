//! Stateful typing session over one target word.
//!
//! `TypingSession` owns one `CharacterMatcher` per kana unit of the target
//! and processes each keystroke, returning snapshots the game frontend
//! renders from. The nasal lookahead lives here, not in the matcher,
//! because committing a bare "n" needs to peek at the next unit.

mod response;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use kanatype_core::matcher::CharacterMatcher;
use kanatype_core::nasal;
use kanatype_core::table::ConversionTable;

pub use response::{KeyResponse, Progress, UnitState};

/// Matching state for one target word. Rebuilt by `set_word`; driven
/// key-by-key; exclusively owned by one gameplay session.
pub struct TypingSession {
    matchers: Vec<CharacterMatcher>,
    /// First non-completed unit. Everything before it is completed.
    /// Never decreases between two `set_word` calls.
    active: usize,
    completed: bool,
    /// Open after a word-final ん was completed with a single "n": the
    /// immediately following extra n is absorbed as the nn spelling
    /// instead of counting as a miss.
    absorb_extra_n: bool,
}

impl TypingSession {
    pub fn new() -> Self {
        TypingSession {
            matchers: Vec::new(),
            active: 0,
            completed: false,
            absorb_extra_n: false,
        }
    }

    /// Reinitialize for a new target string, segmenting it into kana units
    /// with the conversion table. Discards all prior state.
    pub fn set_word(&mut self, target: &str) {
        let units = ConversionTable::global().segment(target);
        self.set_units(units);
    }

    /// Same as `set_word` for a pre-split unit list.
    pub fn set_units<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = String>,
    {
        let table = ConversionTable::global();
        self.matchers = units
            .into_iter()
            .map(|unit| {
                let candidates = table.candidates_for(&unit);
                CharacterMatcher::new(unit, candidates)
            })
            .collect();
        self.active = 0;
        self.completed = false;
        self.absorb_extra_n = false;
    }

    /// Feed one keystroke. Fails soft: before any `set_word` and after
    /// completion every key is rejected with no state change.
    pub fn process_key(&mut self, key: char) -> KeyResponse {
        let _span = debug_span!("process_key", %key).entered();

        if self.completed {
            return self.process_after_completion(key);
        }
        if self.active >= self.matchers.len() {
            // No word set
            return self.response(false);
        }

        // Nasal lookahead runs before normal processing and short-circuits
        // it: the same key is never counted twice.
        if self.bare_n_merge_applies(key) {
            debug!(%key, "bare-n commit, replaying key into next unit");
            self.matchers[self.active].force_switch_to(nasal::BARE_N);
            self.active += 1;
            let accepted = self.matchers[self.active].process_key(key);
            debug_assert!(accepted, "merge key must start the next unit");
            self.after_accepted_key();
            return self.response(accepted);
        }

        let accepted = self.matchers[self.active].process_key(key);
        if accepted {
            self.after_accepted_key();
        }
        self.response(accepted)
    }

    pub fn progress(&self) -> Progress {
        let total = self.matchers.len();
        let current = self.active.min(total);
        let percentage = if total == 0 {
            0.0
        } else {
            current as f64 * 100.0 / total as f64
        };
        Progress {
            current,
            total,
            percentage,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The target word as set, unit texts concatenated.
    pub fn word(&self) -> String {
        self.matchers.iter().map(|m| m.kana()).collect()
    }

    /// Everything typed and accepted so far, across all units.
    pub fn accepted_text(&self) -> String {
        self.matchers.iter().map(|m| m.typed()).collect()
    }

    /// What is left to type, spelled with each unit's displayed candidate.
    pub fn remaining_text(&self) -> String {
        self.matchers[self.active.min(self.matchers.len())..]
            .iter()
            .map(|m| m.remaining_display())
            .collect()
    }

    /// Per-unit states, aligned with the segmented units.
    pub fn unit_states(&self) -> Vec<UnitState> {
        self.matchers
            .iter()
            .enumerate()
            .map(|(i, m)| {
                if m.is_completed() {
                    UnitState::Completed
                } else if i == self.active {
                    UnitState::Active
                } else {
                    UnitState::Pending
                }
            })
            .collect()
    }

    /// True when the active unit is the nasal with exactly "n" typed and
    /// `key` may start the next unit instead.
    fn bare_n_merge_applies(&self, key: char) -> bool {
        let m = &self.matchers[self.active];
        if !nasal::is_nasal(m.kana()) || m.is_completed() || m.typed() != nasal::BARE_N {
            return false;
        }
        if !m.candidates().iter().any(|c| c == nasal::BARE_N) {
            return false;
        }
        match self.matchers.get(self.active + 1) {
            Some(next) => nasal::bare_n_commit_allowed(key, next.candidates()),
            None => false,
        }
    }

    /// Housekeeping after an accepted key: finish a word-final bare-n
    /// nasal, advance past completed units, raise the completion flag.
    fn after_accepted_key(&mut self) {
        self.finish_trailing_nasal();
        while self.active < self.matchers.len() && self.matchers[self.active].is_completed() {
            self.active += 1;
        }
        if self.active >= self.matchers.len() && !self.matchers.is_empty() && !self.completed {
            self.completed = true;
            debug!(word = %self.word(), "word completed");
        }
    }

    /// End-of-string imposes no lookahead constraint, so a word-final ん
    /// with "n" typed completes immediately on the bare-n candidate.
    fn finish_trailing_nasal(&mut self) {
        if self.active + 1 != self.matchers.len() {
            return;
        }
        let m = &mut self.matchers[self.active];
        if !nasal::is_nasal(m.kana()) || m.is_completed() || m.typed() != nasal::BARE_N {
            return;
        }
        if !m.candidates().iter().any(|c| c == nasal::BARE_N) {
            return;
        }
        let can_upgrade = m.candidates().iter().any(|c| c == nasal::DOUBLE_N);
        m.force_switch_to(nasal::BARE_N);
        self.absorb_extra_n = can_upgrade;
        debug!("word-final nasal completed as bare n");
    }

    /// One extra n right after a bare-n word ending upgrades the final
    /// unit to its nn spelling; anything else is a plain rejection and
    /// closes the absorb window.
    fn process_after_completion(&mut self, key: char) -> KeyResponse {
        if self.absorb_extra_n && key == 'n' {
            self.absorb_extra_n = false;
            if let Some(last) = self.matchers.last_mut() {
                last.force_switch_to(nasal::DOUBLE_N);
                last.process_key('n');
                last.process_key('n');
                debug!("absorbed redundant n, word-final nasal spelled nn");
                return self.response(true);
            }
        }
        self.absorb_extra_n = false;
        self.response(false)
    }

    fn response(&self, accepted: bool) -> KeyResponse {
        KeyResponse {
            accepted,
            active_index: self.active,
            accepted_text: self.accepted_text(),
            remaining_text: self.remaining_text(),
            word_completed: self.completed,
        }
    }
}

impl Default for TypingSession {
    fn default() -> Self {
        Self::new()
    }
}
