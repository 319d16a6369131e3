//! Standard rule sets, one per token.
//!
//! Each standard set is unnamed, has no rules and classifies all text as
//! its token. Modes use them as the target of delegations such as
//! `DELEGATE="COMMENT1"` and tokenizers use them as a fallback.
//!
//! The table is built on first use and never changes afterwards.

use std::sync::OnceLock;

use tint_ir::{InvalidTokenId, TokenId};

use crate::rule_set::RuleSet;

/// Error looking up a standard rule set by raw index.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidTokenId(#[from] InvalidTokenId),
}

static STANDARD_RULE_SETS: OnceLock<[RuleSet; TokenId::COUNT]> = OnceLock::new();

/// The whole table, in token index order.
pub fn standard_rule_sets() -> &'static [RuleSet; TokenId::COUNT] {
    STANDARD_RULE_SETS.get_or_init(|| {
        tracing::debug!(count = TokenId::COUNT, "building standard rule sets");
        TokenId::ALL.map(RuleSet::standard)
    })
}

/// Rule set highlighting everything as `id`.
#[inline]
pub fn standard_rule_set(id: TokenId) -> &'static RuleSet {
    &standard_rule_sets()[id.index()]
}

/// [`standard_rule_set`] for a raw token index, as stored in mode caches.
pub fn standard_rule_set_at(index: u8) -> Result<&'static RuleSet, RegistryError> {
    let id = TokenId::try_from(index)?;
    Ok(standard_rule_set(id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
