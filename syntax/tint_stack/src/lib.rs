//! Stack growth for recursive rule-set resolution.
//!
//! Import chains between rule sets are resolved depth first. A mode that
//! pulls in a long chain of delegated sets (generated modes can nest
//! thousands deep) must not overflow the thread stack, so every recursive
//! step goes through [`with_stack_headroom`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack drops below [`MIN_HEADROOM`]. On `wasm32` the closure is
//! called directly.

/// Remaining stack below which a new segment is allocated.
pub const MIN_HEADROOM: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`MIN_HEADROOM`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_HEADROOM, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    f()
}
