//! Helpers for comparing and parsing reaction emoji.
//!
//! Discord reports unicode emoji as plain text and custom guild emoji as an
//! id/name pair. The same unicode emoji may arrive with or without the emoji
//! presentation selector (U+FE0F) depending on the client, so comparisons strip it.

use serenity::all::ReactionType;

const VARIATION_SELECTOR: char = '\u{fe0f}';
const ZERO_WIDTH_JOINER: char = '\u{200d}';
const KEYCAP: char = '\u{20e3}';

/// Returns true when both reactions refer to the same emoji.
///
/// Unicode emoji are compared by text ignoring the variation selector, custom
/// emoji by their id only since names can be edited by guild moderators.
pub fn same_emoji(a: &ReactionType, b: &ReactionType) -> bool {
    match (a, b) {
        (ReactionType::Unicode(a), ReactionType::Unicode(b)) => {
            a.trim_end_matches(VARIATION_SELECTOR) == b.trim_end_matches(VARIATION_SELECTOR)
        }
        (ReactionType::Custom { id: a, .. }, ReactionType::Custom { id: b, .. }) => a == b,
        _ => false,
    }
}

/// Returns the text used to look up an emoji inside message content.
///
/// For unicode emoji this is the emoji itself (without variation selector), for
/// custom emoji it is the emoji name, which appears inside the `<:name:id>` markup.
pub fn emoji_name(emoji: &ReactionType) -> Option<&str> {
    let name = match emoji {
        ReactionType::Unicode(text) => Some(text.trim_end_matches(VARIATION_SELECTOR)),
        ReactionType::Custom { name, .. } => name.as_deref(),
        _ => None,
    };

    name.filter(|name| !name.is_empty())
}

/// Parses an emoji token as written in config files or role messages.
///
/// Accepts custom emoji markup (`<:name:id>` / `<a:name:id>`) and unicode emoji.
/// Unicode tokens must consist of emoji code points only, so words and punctuation
/// such as "React", "•" or "--" are rejected.
pub fn parse_emoji(token: &str) -> Option<ReactionType> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if token.starts_with('<') {
        return ReactionType::try_from(token)
            .ok()
            .filter(|emoji| matches!(emoji, ReactionType::Custom { .. }));
    }

    is_unicode_emoji(token).then(|| ReactionType::Unicode(token.to_string()))
}

/// Returns true when the text is a sequence of emoji.
///
/// At least one pictograph, regional indicator or keycap is required. Joiners,
/// presentation selectors, skin tone modifiers and tag characters may accompany them.
fn is_unicode_emoji(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    let mut has_base = false;

    while let Some(c) = chars.next() {
        match c {
            '0'..='9' | '#' | '*' => {
                chars.next_if_eq(&VARIATION_SELECTOR);
                if chars.next() != Some(KEYCAP) {
                    return false;
                }
                has_base = true;
            }
            c if is_pictographic(c) => has_base = true,
            ZERO_WIDTH_JOINER | VARIATION_SELECTOR | '\u{e0020}'..='\u{e007f}' => {}
            _ => return false,
        }
    }

    has_base
}

/// Pictographic code points, including regional indicators and skin tone modifiers.
fn is_pictographic(c: char) -> bool {
    matches!(
        c,
        '\u{1f000}'..='\u{1faff}'
            | '\u{2600}'..='\u{27bf}'
            | '\u{2b00}'..='\u{2bff}'
            | '\u{2300}'..='\u{23ff}'
            | '\u{2194}'..='\u{2199}'
            | '\u{21a9}'..='\u{21aa}'
            | '\u{25aa}'..='\u{25fe}'
            | '\u{2934}'..='\u{2935}'
            | '\u{00a9}'
            | '\u{00ae}'
            | '\u{203c}'
            | '\u{2049}'
            | '\u{2122}'
            | '\u{2139}'
            | '\u{24c2}'
            | '\u{3030}'
            | '\u{303d}'
            | '\u{3297}'
            | '\u{3299}'
    )
}
