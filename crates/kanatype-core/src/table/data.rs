//! Built-in kana→romanization table.
//!
//! Candidate order is the display-preference tiebreak only; any listed
//! spelling is accepted. ん carries bare "n" last — whether it is usable
//! depends on the following unit and is decided by the session, not here.

pub(super) const DEFAULT_TOML: &str = r#"
[spellings]
# Vowels
"あ" = "a"
"い" = "i"
"う" = ["u", "wu"]
"え" = "e"
"お" = "o"

# K row
"か" = ["ka", "ca"]
"き" = "ki"
"く" = ["ku", "cu"]
"け" = "ke"
"こ" = ["ko", "co"]

# S row
"さ" = "sa"
"し" = ["si", "shi", "ci"]
"す" = "su"
"せ" = ["se", "ce"]
"そ" = "so"

# T row
"た" = "ta"
"ち" = ["ti", "chi"]
"つ" = ["tu", "tsu"]
"て" = "te"
"と" = "to"

# N row
"な" = "na"
"に" = "ni"
"ぬ" = "nu"
"ね" = "ne"
"の" = "no"

# H row
"は" = "ha"
"ひ" = "hi"
"ふ" = ["fu", "hu"]
"へ" = "he"
"ほ" = "ho"

# M row
"ま" = "ma"
"み" = "mi"
"む" = "mu"
"め" = "me"
"も" = "mo"

# Y row
"や" = "ya"
"ゆ" = "yu"
"よ" = "yo"

# R row
"ら" = "ra"
"り" = "ri"
"る" = "ru"
"れ" = "re"
"ろ" = "ro"

# W row and the moraic nasal
"わ" = "wa"
"を" = "wo"
"ん" = ["nn", "xn", "n"]

# Voiced rows
"が" = "ga"
"ぎ" = "gi"
"ぐ" = "gu"
"げ" = "ge"
"ご" = "go"
"ざ" = "za"
"じ" = ["zi", "ji"]
"ず" = "zu"
"ぜ" = "ze"
"ぞ" = "zo"
"だ" = "da"
"ぢ" = "di"
"づ" = "du"
"で" = "de"
"ど" = "do"
"ば" = "ba"
"び" = "bi"
"ぶ" = "bu"
"べ" = "be"
"ぼ" = "bo"
"ぱ" = "pa"
"ぴ" = "pi"
"ぷ" = "pu"
"ぺ" = "pe"
"ぽ" = "po"
"ゔ" = "vu"

# Small kana
"ぁ" = ["xa", "la"]
"ぃ" = ["xi", "li"]
"ぅ" = ["xu", "lu"]
"ぇ" = ["xe", "le"]
"ぉ" = ["xo", "lo"]
"ゃ" = ["xya", "lya"]
"ゅ" = ["xyu", "lyu"]
"ょ" = ["xyo", "lyo"]
"ゎ" = ["xwa", "lwa"]
"っ" = ["xtu", "ltu", "xtsu", "ltsu"]

# Yōon digraphs
"きゃ" = "kya"
"きゅ" = "kyu"
"きょ" = "kyo"
"しゃ" = ["sya", "sha"]
"しゅ" = ["syu", "shu"]
"しょ" = ["syo", "sho"]
"しぇ" = ["sye", "she"]
"ちゃ" = ["tya", "cha", "cya"]
"ちゅ" = ["tyu", "chu", "cyu"]
"ちょ" = ["tyo", "cho", "cyo"]
"ちぇ" = ["tye", "che", "cye"]
"にゃ" = "nya"
"にゅ" = "nyu"
"にょ" = "nyo"
"ひゃ" = "hya"
"ひゅ" = "hyu"
"ひょ" = "hyo"
"みゃ" = "mya"
"みゅ" = "myu"
"みょ" = "myo"
"りゃ" = "rya"
"りゅ" = "ryu"
"りょ" = "ryo"
"ぎゃ" = "gya"
"ぎゅ" = "gyu"
"ぎょ" = "gyo"
"じゃ" = ["zya", "ja", "jya"]
"じゅ" = ["zyu", "ju", "jyu"]
"じょ" = ["zyo", "jo", "jyo"]
"じぇ" = ["zye", "je", "jye"]
"ぢゃ" = "dya"
"ぢゅ" = "dyu"
"ぢょ" = "dyo"
"びゃ" = "bya"
"びゅ" = "byu"
"びょ" = "byo"
"ぴゃ" = "pya"
"ぴゅ" = "pyu"
"ぴょ" = "pyo"
"ふぁ" = "fa"
"ふぃ" = "fi"
"ふぇ" = "fe"
"ふぉ" = "fo"

# Symbols
"ー" = "-"
"。" = "."
"、" = ","
"#;
