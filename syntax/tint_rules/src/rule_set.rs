//! Named collections of highlighting rules.
//!
//! A [`RuleSet`] is built by the mode loader, finalized by one call to
//! [`RuleSet::resolve_imports`], and then only read. Each tokenizer queries
//! [`RuleSet::rules`] for every input position, so that path takes `&self`
//! and does no locking.
//!
//! # Lifecycle
//!
//! ```text
//! RuleSet::new ─▶ add_rule / add_rule_set / set_* ─▶ resolve_imports ─▶ rules(key) ...
//!      (load phase, single writer)                    (once)          (any number of readers)
//! ```
//!
//! Sets that other sets import are wrapped in a [`SharedRuleSet`] so the
//! import graph can hold them (and cycles between them) without owning them.

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use regex::Regex;
use rustc_hash::FxHashMap;
use tint_ir::TokenId;

use crate::dispatch::DispatchIndex;
use crate::keywords::KeywordMap;
use crate::rule::RuleRef;
use crate::word_sep::NoWordSepCache;

/// Process-unique identity of a rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleSetId(u32);

impl RuleSetId {
    fn fresh() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        RuleSetId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A named set of rules with its dispatch index and per-set properties.
pub struct RuleSet {
    id: RuleSetId,
    mode_name: Option<Box<str>>,
    set_name: Option<Box<str>>,
    built_in: bool,

    index: DispatchIndex,
    /// Every added rule once, in `add_rule` order.
    rules: Vec<RuleRef>,
    /// Sets waiting to be merged by `resolve_imports`.
    pub(crate) imports: Vec<SharedRuleSet>,

    keywords: Option<KeywordMap>,
    ignore_case: bool,
    /// `-1` means unlimited.
    terminate_at: i32,
    default_token: TokenId,
    escape_rule: Option<RuleRef>,
    highlight_digits: bool,
    digit_pattern: Option<Regex>,
    properties: FxHashMap<String, String>,
    no_word_sep: Option<String>,
    derived_no_word_sep: NoWordSepCache,
}

impl RuleSet {
    /// Empty, case-insensitive set with no terminate limit.
    pub fn new(mode_name: impl Into<Box<str>>, set_name: impl Into<Box<str>>) -> Self {
        Self::build(Some(mode_name.into()), Some(set_name.into()), false)
    }

    /// Unnamed built-in set classifying everything as `token`.
    pub(crate) fn standard(token: TokenId) -> Self {
        let mut set = Self::build(None, None, true);
        set.default_token = token;
        set
    }

    fn build(mode_name: Option<Box<str>>, set_name: Option<Box<str>>, built_in: bool) -> Self {
        RuleSet {
            id: RuleSetId::fresh(),
            mode_name,
            set_name,
            built_in,
            index: DispatchIndex::default(),
            rules: Vec::new(),
            imports: Vec::new(),
            keywords: None,
            ignore_case: true,
            terminate_at: -1,
            default_token: TokenId::Null,
            escape_rule: None,
            highlight_digits: false,
            digit_pattern: None,
            properties: FxHashMap::default(),
            no_word_sep: None,
            derived_no_word_sep: NoWordSepCache::default(),
        }
    }

    // Identity

    /// Identity used to detect import cycles. Never reused within a process.
    #[inline]
    pub fn id(&self) -> RuleSetId {
        self.id
    }

    /// Name of the mode this set belongs to; `None` for standard sets.
    pub fn mode_name(&self) -> Option<&str> {
        self.mode_name.as_deref()
    }

    /// Name of the set within its mode (`MAIN`, `COMMENT`, ...); `None` for
    /// standard sets.
    pub fn set_name(&self) -> Option<&str> {
        self.set_name.as_deref()
    }

    /// `"<mode>::<set>"`; missing parts render empty.
    pub fn name(&self) -> String {
        format!(
            "{}::{}",
            self.mode_name().unwrap_or_default(),
            self.set_name().unwrap_or_default()
        )
    }

    /// Whether this set came from the standard registry.
    #[inline]
    pub fn is_built_in(&self) -> bool {
        self.built_in
    }

    // Rules

    /// Add `rule` to the set and index it under its leading characters.
    pub fn add_rule(&mut self, rule: RuleRef) {
        self.index.insert(&rule);
        self.rules.push(rule);
    }

    /// Rules to try at a position whose next character is `key`.
    ///
    /// Rules hinted with `key` (compared case-insensitively) come first, in
    /// the order they were added, followed by the rules without hints.
    /// `None` yields only the latter.
    ///
    /// Imported rules appear only after [`RuleSet::resolve_imports`]; before
    /// that the result reflects rules added directly.
    #[inline]
    pub fn rules(&self, key: Option<char>) -> Cow<'_, [RuleRef]> {
        self.index.lookup(key)
    }

    /// Number of `add_rule` calls, including those made while merging
    /// imports. A rule indexed under several characters counts once.
    #[inline]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// All rules in the order they were added.
    pub fn all_rules(&self) -> &[RuleRef] {
        &self.rules
    }

    /// Queue `other` to be merged by the next [`RuleSet::resolve_imports`].
    pub fn add_rule_set(&mut self, other: SharedRuleSet) {
        self.imports.push(other);
    }

    /// Whether imports are still waiting to be merged.
    pub fn has_pending_imports(&self) -> bool {
        !self.imports.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn bucket_len(&self, key: Option<char>) -> usize {
        self.index.bucket_len(key)
    }

    #[cfg(test)]
    pub(crate) fn bucket_count(&self) -> usize {
        self.index.bucket_count()
    }

    // Keywords and word characters

    /// Keyword map consulted for words no rule claims, including keywords
    /// merged from imports once resolved.
    pub fn keywords(&self) -> Option<&KeywordMap> {
        self.keywords.as_ref()
    }

    /// Replace the keyword map. Invalidates [`RuleSet::no_word_sep`].
    pub fn set_keywords(&mut self, keywords: Option<KeywordMap>) {
        self.keywords = keywords;
        self.derived_no_word_sep.invalidate();
    }

    /// Keyword map to merge imported keywords into, created with this set's
    /// case mode if missing.
    pub(crate) fn keywords_for_merge(&mut self) -> &mut KeywordMap {
        self.derived_no_word_sep.invalidate();
        let ignore_case = self.ignore_case;
        self.keywords.get_or_insert_with(|| KeywordMap::new(ignore_case))
    }

    /// Free-form string properties attached by the mode loader.
    pub fn properties(&self) -> &FxHashMap<String, String> {
        &self.properties
    }

    /// Single property value, if present.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Replace the whole property map. Invalidates [`RuleSet::no_word_sep`].
    pub fn set_properties(&mut self, properties: FxHashMap<String, String>) {
        self.properties = properties;
        self.derived_no_word_sep.invalidate();
    }

    /// Explicitly configured non-alphanumeric word characters.
    /// Invalidates [`RuleSet::no_word_sep`].
    pub fn set_no_word_sep(&mut self, chars: Option<String>) {
        self.no_word_sep = chars;
        self.derived_no_word_sep.invalidate();
    }

    /// Non-alphanumeric characters that belong to words in this set.
    ///
    /// The explicit value followed by every non-alphanumeric character of
    /// the keywords. Computed on first read and again after any input changes.
    pub fn no_word_sep(&self) -> Arc<str> {
        self.derived_no_word_sep.get_or_compute(|| {
            let mut chars = self
                .no_word_sep
                .as_deref()
                .unwrap_or_default()
                .to_owned();
            if let Some(keywords) = &self.keywords {
                chars.push_str(keywords.non_alphanumeric_chars());
            }
            chars
        })
    }

    // Plain properties

    /// Whether keyword maps created by this set ignore case. Defaults to
    /// `true`.
    #[inline]
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Case mode for keyword maps this set creates. An existing keyword map
    /// keeps its own mode.
    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
    }

    /// Characters a rule may scan before matching stops; `-1` if unlimited.
    #[inline]
    pub fn terminate_at(&self) -> i32 {
        self.terminate_at
    }

    /// Set the terminate limit. Any negative value means unlimited.
    pub fn set_terminate_at(&mut self, at: i32) {
        self.terminate_at = if at >= 0 { at } else { -1 };
    }

    /// The terminate limit as an optional length.
    pub fn terminate_limit(&self) -> Option<usize> {
        usize::try_from(self.terminate_at).ok()
    }

    /// Token for text no rule matches.
    #[inline]
    pub fn default_token(&self) -> TokenId {
        self.default_token
    }

    /// Set the token for text no rule matches.
    pub fn set_default_token(&mut self, token: TokenId) {
        self.default_token = token;
    }

    /// Rule for escape sequences. Stored only; it is never returned by
    /// [`RuleSet::rules`].
    pub fn escape_rule(&self) -> Option<&RuleRef> {
        self.escape_rule.as_ref()
    }

    /// Set or clear the escape rule.
    pub fn set_escape_rule(&mut self, rule: Option<RuleRef>) {
        self.escape_rule = rule;
    }

    /// Whether the tokenizer highlights numbers as [`TokenId::Digit`].
    #[inline]
    pub fn highlight_digits(&self) -> bool {
        self.highlight_digits
    }

    /// Enable or disable digit highlighting.
    pub fn set_highlight_digits(&mut self, highlight_digits: bool) {
        self.highlight_digits = highlight_digits;
    }

    /// Pattern a word must match to count as a number, when digit
    /// highlighting is on. `None` means the tokenizer's default test.
    pub fn digit_pattern(&self) -> Option<&Regex> {
        self.digit_pattern.as_ref()
    }

    /// Set or clear the digit pattern.
    pub fn set_digit_pattern(&mut self, pattern: Option<Regex>) {
        self.digit_pattern = pattern;
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet[{}]", self.name())
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("built_in", &self.built_in)
            .field("rule_count", &self.rules.len())
            .field("imports", &self.imports)
            .field("default_token", &self.default_token)
            .finish_non_exhaustive()
    }
}

/// A rule set other sets can import.
///
/// The set's id is kept outside the lock: import resolution checks it to
/// detect cycles without touching a set that is already locked further up
/// the resolution path.
#[derive(Clone)]
pub struct SharedRuleSet {
    id: RuleSetId,
    cell: Arc<RwLock<RuleSet>>,
}

impl SharedRuleSet {
    /// Wrap `set` so other sets can import it.
    pub fn new(set: RuleSet) -> Self {
        SharedRuleSet {
            id: set.id,
            cell: Arc::new(RwLock::new(set)),
        }
    }

    /// Id of the wrapped set, readable without locking.
    #[inline]
    pub fn id(&self) -> RuleSetId {
        self.id
    }

    /// Shared access to the wrapped set.
    pub fn read(&self) -> RwLockReadGuard<'_, RuleSet> {
        self.cell.read()
    }

    /// Exclusive access, for the load phase.
    pub fn write(&self) -> RwLockWriteGuard<'_, RuleSet> {
        self.cell.write()
    }

    /// Resolve the wrapped set's imports in place.
    pub fn resolve_imports(&self) {
        self.cell.write().resolve_imports();
    }

    /// Whether both handles wrap the same set.
    pub fn ptr_eq(&self, other: &SharedRuleSet) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl From<RuleSet> for SharedRuleSet {
    fn from(set: RuleSet) -> Self {
        SharedRuleSet::new(set)
    }
}

impl fmt::Debug for SharedRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRuleSet").field(&self.id).finish()
    }
}
