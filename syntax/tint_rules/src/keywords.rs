//! Keyword tables.
//!
//! A [`KeywordMap`] maps literal words to the token they highlight as. Case
//! sensitivity is fixed at construction; an insensitive map stores folded
//! keys and folds every lookup.
//!
//! The map also tracks which non-alphanumeric characters appear in any of
//! its words (`-` in `case-lambda`, `#` in `#include`). Those characters must
//! count as word characters when the editor looks for word boundaries, or
//! such keywords could never be selected as one word.

use rustc_hash::FxHashMap;
use tint_ir::TokenId;

use crate::case::fold_word;

/// Literal words mapped to tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordMap {
    ignore_case: bool,
    words: FxHashMap<Box<str>, TokenId>,
    /// Each character at most once, in first-seen order.
    non_alphanumeric: String,
}

impl KeywordMap {
    pub fn new(ignore_case: bool) -> Self {
        KeywordMap {
            ignore_case,
            words: FxHashMap::default(),
            non_alphanumeric: String::new(),
        }
    }

    #[inline]
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Add `keyword`, replacing any previous token for it.
    ///
    /// Empty keywords are ignored.
    pub fn add(&mut self, keyword: &str, id: TokenId) {
        if keyword.is_empty() {
            return;
        }
        self.note_non_alphanumeric(keyword);
        let key = self.key_for(keyword);
        self.words.insert(key.into(), id);
    }

    /// Token for `text`, if it is a keyword.
    pub fn lookup(&self, text: &str) -> Option<TokenId> {
        if text.is_empty() {
            return None;
        }
        if self.ignore_case {
            let folded = fold_word(text);
            self.words.get(&*folded).copied()
        } else {
            self.words.get(text).copied()
        }
    }

    /// Union `other` into this map.
    ///
    /// Words from `other` win on conflict. Keys are re-folded under this
    /// map's case mode, so merging a sensitive map into an insensitive one
    /// folds its words.
    pub fn merge(&mut self, other: &KeywordMap) {
        self.note_non_alphanumeric(&other.non_alphanumeric);
        self.words.reserve(other.words.len());
        for (word, &id) in &other.words {
            let key = self.key_for(word);
            self.words.insert(key.into(), id);
        }
    }

    /// Non-alphanumeric characters appearing in any keyword.
    #[inline]
    pub fn non_alphanumeric_chars(&self) -> &str {
        &self.non_alphanumeric
    }

    /// Stored words (folded when the map ignores case) with their tokens.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, TokenId)> + '_ {
        self.words.iter().map(|(word, &id)| (word.as_ref(), id))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn key_for(&self, word: &str) -> String {
        if self.ignore_case {
            fold_word(word).into_owned()
        } else {
            word.to_owned()
        }
    }

    fn note_non_alphanumeric(&mut self, text: &str) {
        for c in text.chars() {
            if !c.is_alphanumeric() && !self.non_alphanumeric.contains(c) {
                self.non_alphanumeric.push(c);
            }
        }
    }
}

#[cfg(test)]
mod tests;
