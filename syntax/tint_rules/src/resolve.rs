//! Import resolution.
//!
//! Flattens the import graph below a rule set into the set itself. The walk
//! is depth first: an import that has imports of its own is resolved before
//! its rules and keywords are merged into the receiver.
//!
//! # Cycles
//!
//! The sets on the current resolution path form the `visiting` set, which
//! always contains the receiver. An edge into the path closes a cycle and
//! is skipped: every rule of the target is already being collected by the
//! frame that put it on the path. This covers self-imports, the common
//! `A ↔ B` pair and longer loops alike.
//!
//! Every set on the path is write-locked by its frame, and the path check
//! happens before locking, so resolution never waits on a lock it holds.
//!
//! Edges are consumed as they are walked; resolving twice is a no-op.

use std::sync::Arc;

use parking_lot::RwLockWriteGuard;
use rustc_hash::FxHashSet;
use tint_stack::with_stack_headroom;

use crate::rule_set::{RuleSet, RuleSetId};

impl RuleSet {
    /// Merge every imported set, transitively, into this one.
    ///
    /// Afterwards the dispatch index and keyword map hold the union of all
    /// reachable sets and no imports remain.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(set = %self.name(), imports = self.imports.len())
    )]
    pub fn resolve_imports(&mut self) {
        if self.imports.is_empty() {
            return;
        }
        let mut visiting = FxHashSet::default();
        visiting.insert(self.id());
        self.resolve_within(&mut visiting);
        tracing::debug!(rule_count = self.rule_count(), "imports resolved");
    }

    fn resolve_within(&mut self, visiting: &mut FxHashSet<RuleSetId>) {
        let imports = std::mem::take(&mut self.imports);

        for import in imports {
            if visiting.contains(&import.id()) {
                tracing::debug!(
                    into = %self.name(),
                    import = ?import.id(),
                    "skipping import that closes a cycle"
                );
                continue;
            }

            let mut source = import.write();
            if source.has_pending_imports() {
                visiting.insert(import.id());
                with_stack_headroom(|| source.resolve_within(visiting));
                visiting.remove(&import.id());
            }
            let source = RwLockWriteGuard::downgrade(source);

            for rule in source.all_rules() {
                self.add_rule(Arc::clone(rule));
            }
            if let Some(keywords) = source.keywords() {
                self.keywords_for_merge().merge(keywords);
            }

            tracing::debug!(
                into = %self.name(),
                from = %source.name(),
                rules = source.rule_count(),
                "merged import"
            );
        }
    }
}
