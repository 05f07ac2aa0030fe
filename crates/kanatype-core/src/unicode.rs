//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098) but these never appear in typing targets,
/// so the simpler block-level check is preferred over an exact range.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes rarely-used symbols
/// (゠ U+30A0, ヿ U+30FF) but no unassigned codepoints.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Convert a katakana string to hiragana.
///
/// Only the main syllabic range (ァ U+30A1 .. ヶ U+30F6) is shifted; the
/// prolonged sound mark ー and everything outside the block pass through
/// unchanged, so mixed targets like "ラーメン" fold to "らーめん".
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Check if a string is kana text a typing target may be built from.
///
/// Accepts hiragana, katakana (folded before table lookup) and the prolonged
/// sound mark ー (U+30FC, technically katakana) which appears in targets like
/// "らーめん".
pub fn is_kana_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || is_katakana(c) || c == 'ー')
}
