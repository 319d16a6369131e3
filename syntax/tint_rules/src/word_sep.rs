//! Lazily derived no-word-separator string.
//!
//! The derived value depends on inputs that only change through `&mut`
//! setters, so invalidation never races with a read. Reads take `&self`
//! and may run concurrently once the owning set is published; two readers
//! finding the cache empty both compute the same string and the first
//! store wins.

use std::sync::Arc;

use parking_lot::RwLock;

#[derive(Clone, Debug, Default)]
enum CacheState {
    /// Never computed.
    #[default]
    Unset,
    /// Computed once, then an input changed.
    Stale,
    Valid(Arc<str>),
}

#[derive(Debug, Default)]
pub(crate) struct NoWordSepCache {
    state: RwLock<CacheState>,
}

impl NoWordSepCache {
    pub(crate) fn invalidate(&mut self) {
        let state = self.state.get_mut();
        if matches!(state, CacheState::Valid(_)) {
            *state = CacheState::Stale;
        }
    }

    /// Cached value, computing it with `compute` when unset or stale.
    pub(crate) fn get_or_compute(&self, compute: impl FnOnce() -> String) -> Arc<str> {
        if let CacheState::Valid(value) = &*self.state.read() {
            return Arc::clone(value);
        }

        let computed: Arc<str> = compute().into();
        let mut state = self.state.write();
        match &*state {
            CacheState::Valid(existing) => return Arc::clone(existing),
            CacheState::Stale => {
                tracing::trace!(value = %computed, "recomputed stale no-word-separator set");
            }
            CacheState::Unset => {}
        }
        *state = CacheState::Valid(Arc::clone(&computed));
        computed
    }

    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        matches!(&*self.state.read(), CacheState::Valid(_))
    }

    #[cfg(test)]
    pub(crate) fn is_stale(&self) -> bool {
        matches!(&*self.state.read(), CacheState::Stale)
    }
}
