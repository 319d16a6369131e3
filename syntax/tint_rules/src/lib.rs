//! Tint rule sets - the dispatch table behind syntax highlighting.
//!
//! A tokenizer walking a line asks a [`RuleSet`] which [`Rule`]s may match
//! at the current position. This crate owns everything around that query:
//!
//! - the leading-character dispatch index and its ordering contract
//! - keyword maps and the word characters derived from them
//! - import resolution between rule sets, cycles included
//! - the table of [standard rule sets](standard_rule_set), one per token
//!
//! How a rule matches, and how modes are loaded, live elsewhere.
//!
//! # Tracing
//!
//! Import resolution and cache recomputation emit `tracing` events. Call
//! [`init_tracing`] and run with `RUST_LOG=tint_rules=debug` to see them.

mod case;
mod dispatch;
mod keywords;
mod resolve;
mod rule;
mod rule_set;
mod standard;
mod word_sep;

pub use case::{fold_char, fold_word};
pub use keywords::KeywordMap;
pub use rule::{ParserRule, Rule, RuleRef};
pub use rule_set::{RuleSet, RuleSetId, SharedRuleSet};
pub use standard::{standard_rule_set, standard_rule_set_at, standard_rule_sets, RegistryError};
pub use tint_ir::{InvalidTokenId, TokenId};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if let Err(err) = installed {
                // the host already installed a global subscriber
                tracing::debug!(%err, "kept existing tracing subscriber");
            }
        }
    });
}
