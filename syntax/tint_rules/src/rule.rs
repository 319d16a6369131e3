//! The rule seam between the dispatch table and the tokenizer.
//!
//! A [`Rule`] is opaque here: the dispatch table only needs to know which
//! characters a match can start with. Everything about how a rule matches
//! belongs to the tokenizer.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use tint_ir::TokenId;

/// A lexical rule as seen by the dispatch index.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Characters any match must start with.
    ///
    /// Empty means the rule may match at any character and is indexed in
    /// the wildcard bucket. Case does not matter; the index folds hints.
    fn hash_chars(&self) -> &[char];

    /// Token assigned to text this rule matches.
    fn token(&self) -> TokenId;

    /// Short label for traces and diagnostics.
    fn describe(&self) -> &str;
}

/// Shared handle to a rule. One rule may live in many buckets and many sets.
pub type RuleRef = Arc<dyn Rule>;

/// A data-only rule: a literal start sequence and the token it produces.
///
/// This is the shape mode files produce for `SEQ`, `SPAN` and `EOL_SPAN`
/// declarations before the tokenizer attaches matching behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserRule {
    start: Box<str>,
    token: TokenId,
    hash_chars: SmallVec<[char; 2]>,
}

impl ParserRule {
    /// Rule hinted by the first character of `start`.
    ///
    /// An empty start sequence has no hint.
    pub fn seq(start: impl Into<Box<str>>, token: TokenId) -> Self {
        let start = start.into();
        let hash_chars = start.chars().next().into_iter().collect();
        ParserRule {
            start,
            token,
            hash_chars,
        }
    }

    /// Rule with no hint, tried at every position.
    pub fn any(start: impl Into<Box<str>>, token: TokenId) -> Self {
        ParserRule {
            start: start.into(),
            token,
            hash_chars: SmallVec::new(),
        }
    }

    /// Rule with an explicit hint list, e.g. a regexp rule declaring
    /// `HASH_CHARS="0123456789"`.
    pub fn with_hash_chars(
        start: impl Into<Box<str>>,
        token: TokenId,
        hash_chars: impl IntoIterator<Item = char>,
    ) -> Self {
        ParserRule {
            start: start.into(),
            token,
            hash_chars: hash_chars.into_iter().collect(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn into_ref(self) -> RuleRef {
        Arc::new(self)
    }
}

impl Rule for ParserRule {
    fn hash_chars(&self) -> &[char] {
        &self.hash_chars
    }

    fn token(&self) -> TokenId {
        self.token
    }

    fn describe(&self) -> &str {
        &self.start
    }
}
