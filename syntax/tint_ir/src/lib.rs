//! Tint IR - token identifiers for syntax highlighting.
//!
//! Every highlighted span carries a [`TokenId`]. The set of identifiers is
//! closed and dense (`0..TokenId::COUNT`), so per-token tables can be plain
//! arrays indexed by [`TokenId::index`].
//!
//! This crate has no knowledge of colors or styles; it only names the
//! classes a tokenizer can assign.

mod token_id;

pub use token_id::{InvalidTokenId, TokenId};
