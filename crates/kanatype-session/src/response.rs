/// Per-unit state as seen by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitState {
    Pending,
    Active,
    Completed,
}

/// Snapshot returned from every `process_key` call. The frontend renders
/// directly from this — accepted text on the left, remaining text on the
/// right, a miss sound when `accepted` is false.
#[derive(Debug, Clone)]
pub struct KeyResponse {
    pub accepted: bool,
    pub active_index: usize,
    pub accepted_text: String,
    pub remaining_text: String,
    pub word_completed: bool,
}

/// Read-only progress snapshot. `current` counts completed units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub percentage: f64,
}
