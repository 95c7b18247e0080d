//! Emoji detection and skin-tone normalization for keyword tokens.
//!
//! Classification is a substring search against a fixed table of Unicode
//! ranges (pictographs, dingbats, enclosed alphanumerics, arrows and other
//! symbol blocks). Anything outside the table is not an emoji, even if a
//! font would render it as one.

use regex::Regex;
use std::sync::LazyLock;

/// Skin-tone modifiers U+1F3FB..U+1F3FF (Fitzpatrick types 1-2 through 6).
pub const SKIN_TONE_MODIFIERS: [char; 5] = [
    '\u{1F3FB}', // skin type 1-2
    '\u{1F3FC}', // skin type 3
    '\u{1F3FD}', // skin type 4
    '\u{1F3FE}', // skin type 5
    '\u{1F3FF}', // skin type 6
];

/// Presentation selectors, dropped before matching a single emoji.
const VARIATION_SELECTORS: [char; 2] = [
    '\u{FE0E}', // text presentation selector
    '\u{FE0F}', // emoji presentation selector
];

/// Alternatives of the emoji pattern, one per range or sequence.
const EMOJI_PATTERNS: &[&str] = &[
    r"[\x{2700}-\x{27BF}]",
    r"[\x{1F1E6}-\x{1F1FF}]{2}",
    // Any supplementary-plane code point.
    r"[\x{10000}-\x{10FFFF}]",
    r"[\x{23}-\x{39}]\x{FE0F}?\x{20E3}",
    r"[\x{3299}\x{3297}\x{303D}\x{3030}\x{24C2}]",
    r"[\x{1F170}-\x{1F171}]",
    r"[\x{1F17E}-\x{1F17F}]",
    r"\x{1F18E}",
    r"[\x{1F191}-\x{1F19A}]",
    r"[\x{1F1E6}-\x{1F1FF}]",
    r"[\x{1F201}-\x{1F202}]",
    r"\x{1F21A}",
    r"\x{1F22F}",
    r"[\x{1F232}-\x{1F23A}]",
    r"[\x{1F250}-\x{1F251}]",
    r"[\x{203C}\x{2049}]",
    r"[\x{25AA}-\x{25AB}]",
    r"[\x{25B6}\x{25C0}]",
    r"[\x{25FB}-\x{25FE}]",
    r"[\x{00A9}\x{00AE}\x{2122}\x{2139}]",
    r"\x{1F004}",
    r"[\x{2600}-\x{26FF}]",
    r"[\x{2B05}\x{2B06}\x{2B07}\x{2B1B}\x{2B1C}\x{2B50}\x{2B55}]",
    r"[\x{231A}\x{231B}\x{2328}\x{23CF}]",
    r"[\x{23E9}-\x{23F3}]",
    r"[\x{23F8}-\x{23FA}]",
    r"\x{1F0CF}",
    r"[\x{2934}\x{2935}]",
    r"[\x{2190}-\x{21FF}]",
];

static EMOJI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&EMOJI_PATTERNS.join("|")).expect("emoji range table is a valid pattern")
});

/// One emoji at the start of the input: a unit with an optional skin tone,
/// followed by any zero width joiner continuations.
static SINGLE_EMOJI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let unit = format!(
        r"(?:{})[\x{{1F3FB}}-\x{{1F3FF}}]?",
        EMOJI_PATTERNS.join("|")
    );
    Regex::new(&format!(r"^{unit}(?:\x{{200D}}{unit})*"))
        .expect("emoji range table is a valid pattern")
});

/// Returns true if the token contains at least one emoji anywhere in it.
///
/// ```
/// use sheetsync::core::emoji::is_emoji;
///
/// assert!(is_emoji("😀"));
/// assert!(is_emoji("say 👋"));
/// assert!(!is_emoji("hello"));
/// ```
pub fn is_emoji(token: &str) -> bool {
    EMOJI_REGEX.is_match(token)
}

/// Replace every skin-tone modifier in `token` with `replacement`.
///
/// The modifiers are removed one code point at a time, in table order.
pub fn strip_modifier(token: &str, replacement: &str) -> String {
    SKIN_TONE_MODIFIERS
        .iter()
        .fold(token.to_string(), |acc, modifier| {
            acc.replace(*modifier, replacement)
        })
}

/// Remove all skin-tone modifiers from `token`.
pub fn strip_skin_tone(token: &str) -> String {
    strip_modifier(token, "")
}

/// Emoji tokens lose their skin-tone modifiers; other tokens pass through.
pub fn canonical_token(token: &str) -> String {
    if is_emoji(token) {
        strip_skin_tone(token)
    } else {
        token.to_string()
    }
}

/// Returns true if the token starts with one emoji and has anything after it.
///
/// Presentation selectors are dropped first. A token that does not start
/// with an emoji is never flagged, so `"hi 👋"` passes while `"👍foo"` and
/// `"👍👍"` do not.
pub fn has_text_besides_emoji(token: &str) -> bool {
    let token: String = token
        .chars()
        .filter(|c| !VARIATION_SELECTORS.contains(c))
        .collect();
    SINGLE_EMOJI_REGEX
        .find(&token)
        .is_some_and(|m| m.end() < token.len())
}
