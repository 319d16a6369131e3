//! Case folding for dispatch keys and keywords.
//!
//! Folding is per character and never changes the length of a word: a
//! character whose upper-case form is more than one character (`ß`) folds
//! to itself.

use std::borrow::Cow;

/// Upper-case `c` when that yields exactly one character.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Fold every character of `word` with [`fold_char`].
///
/// Borrows when nothing changes.
pub fn fold_word(word: &str) -> Cow<'_, str> {
    if word.chars().all(|c| fold_char(c) == c) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.chars().map(fold_char).collect())
    }
}
