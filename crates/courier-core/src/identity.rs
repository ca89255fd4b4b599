//! Conversation identity derivation.
//!
//! A conversation is identified by its two participants: the names are
//! sorted lexicographically and joined with [`SEPARATOR`], so the id does
//! not depend on argument order.
//!
//! A name that itself contains the separator can produce the same id as a
//! different pair (`"a-b" + "c"` and `"a" + "b-c"` both give `a-b-c`). The
//! function stays total; callers that need an unambiguous id must reject
//! such names (see [`contains_separator`]).

/// Character joining the two sorted participant names.
pub const SEPARATOR: char = '-';

/// Derive the conversation id for a pair of participants.
pub fn conversation_id(a: &str, b: &str) -> String {
    let (first, second) = sorted_pair(a, b);
    format!("{first}{SEPARATOR}{second}")
}

/// Order two names the way [`conversation_id`] does.
pub fn sorted_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

/// True when `name` would make a derived id ambiguous.
pub fn contains_separator(name: &str) -> bool {
    name.contains(SEPARATOR)
}
