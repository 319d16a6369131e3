//! Leading-character dispatch index.
//!
//! Rules are bucketed by the folded characters they can start with. Rules
//! without hints live in the wildcard bucket and are candidates at every
//! position. A lookup hands back the character's bucket followed by the
//! wildcard bucket, so specific rules are always tried before generic ones.

use std::borrow::Cow;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::case::fold_char;
use crate::rule::RuleRef;

#[derive(Clone, Default)]
pub(crate) struct DispatchIndex {
    wildcard: Vec<RuleRef>,
    by_char: FxHashMap<char, Vec<RuleRef>>,
}

impl DispatchIndex {
    /// Append `rule` to the bucket of each distinct folded hint, or to the
    /// wildcard bucket when it has none.
    pub(crate) fn insert(&mut self, rule: &RuleRef) {
        let hints = rule.hash_chars();
        if hints.is_empty() {
            self.wildcard.push(Arc::clone(rule));
            return;
        }

        let mut keys: SmallVec<[char; 4]> = SmallVec::new();
        for &hint in hints {
            let key = fold_char(hint);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        for key in keys {
            self.by_char.entry(key).or_default().push(Arc::clone(rule));
        }
    }

    /// Candidate rules for a position whose next character is `key`.
    ///
    /// `None` asks for the wildcard bucket alone. A single non-empty bucket
    /// is borrowed; two are concatenated into a fresh vector.
    #[inline]
    pub(crate) fn lookup(&self, key: Option<char>) -> Cow<'_, [RuleRef]> {
        let generic = self.wildcard.as_slice();
        let specific = key
            .and_then(|c| self.by_char.get(&fold_char(c)))
            .map_or(&[][..], Vec::as_slice);

        match (specific.is_empty(), generic.is_empty()) {
            (true, true) => Cow::Borrowed(&[]),
            (true, false) => Cow::Borrowed(generic),
            (false, true) => Cow::Borrowed(specific),
            (false, false) => {
                let mut mixed = Vec::with_capacity(specific.len() + generic.len());
                mixed.extend_from_slice(specific);
                mixed.extend_from_slice(generic);
                Cow::Owned(mixed)
            }
        }
    }

    /// Number of rules in one bucket, without the wildcard bucket merged in.
    #[cfg(test)]
    pub(crate) fn bucket_len(&self, key: Option<char>) -> usize {
        match key {
            None => self.wildcard.len(),
            Some(c) => self.by_char.get(&fold_char(c)).map_or(0, Vec::len),
        }
    }

    /// Number of non-empty buckets, wildcard included.
    #[cfg(test)]
    pub(crate) fn bucket_count(&self) -> usize {
        self.by_char.len() + usize::from(!self.wildcard.is_empty())
    }
}
