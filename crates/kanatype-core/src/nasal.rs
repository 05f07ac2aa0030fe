//! Disambiguation policy for the moraic nasal ん/ン.
//!
//! A lone "n" keystroke on the nasal is ambiguous: it may be the bare-n
//! spelling of ん itself, or the first letter of nn/xn. The session
//! resolves it with one unit of lookahead; the eligibility rules live
//! here as pure functions.

/// Bare-n spelling of the nasal, committed on a successful merge.
pub const BARE_N: &str = "n";

/// Double-n spelling, the default display candidate for ん.
pub const DOUBLE_N: &str = "nn";

pub fn is_nasal(unit: &str) -> bool {
    matches!(unit, "ん" | "ン")
}

/// Keys before which the bare-n spelling is never committed. Typing ん as
/// a single n before あ行 or や行 would collide with the な/にゃ readings
/// of the same letters, so those units require nn or xn.
pub fn blocks_bare_n(key: char) -> bool {
    matches!(key, 'a' | 'i' | 'u' | 'e' | 'o' | 'y')
}

/// Whether a pending bare "n" may be committed so that `key` starts the
/// next unit instead. Consonant-initial followers — the な-row included —
/// allow the commit; vowel- and y-initial keys are blocked.
pub fn bare_n_commit_allowed(key: char, next_candidates: &[String]) -> bool {
    !blocks_bare_n(key) && next_candidates.iter().any(|c| c.starts_with(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cands(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_nasal() {
        assert!(is_nasal("ん"));
        assert!(is_nasal("ン"));
        assert!(!is_nasal("な"));
        assert!(!is_nasal("に"));
    }

    #[test]
    fn test_consonant_follower_allows_commit() {
        assert!(bare_n_commit_allowed('k', &cands(&["ka", "ca"])));
        assert!(bare_n_commit_allowed('t', &cands(&["ti", "chi"])));
        // な-row followers allow it too — "konnitiha" spells こんにちは
        assert!(bare_n_commit_allowed('n', &cands(&["ni"])));
    }

    #[test]
    fn test_vowel_and_y_followers_blocked() {
        assert!(!bare_n_commit_allowed('a', &cands(&["a"])));
        assert!(!bare_n_commit_allowed('i', &cands(&["i"])));
        assert!(!bare_n_commit_allowed('y', &cands(&["ya"])));
    }

    #[test]
    fn test_key_must_start_next_unit() {
        assert!(!bare_n_commit_allowed('k', &cands(&["sa"])));
        // Unknown-unit fallback candidates are non-ASCII and never match
        assert!(!bare_n_commit_allowed('k', &cands(&["漢"])));
    }
}
