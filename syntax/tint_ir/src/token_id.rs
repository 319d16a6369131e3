//! Highlight classes assigned to matched input.

use std::fmt;

/// Raw token index outside `0..TokenId::COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid token id {index}: expected a value below {count}")]
pub struct InvalidTokenId {
    pub index: u8,
    pub count: usize,
}

/// Highlight class of a span of input.
///
/// Discriminants are dense and start at zero. `Null` is the class of text
/// no rule claimed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum TokenId {
    #[default]
    Null = 0,
    Comment1 = 1,
    Comment2 = 2,
    Comment3 = 3,
    Comment4 = 4,
    Digit = 5,
    Function = 6,
    Invalid = 7,
    Keyword1 = 8,
    Keyword2 = 9,
    Keyword3 = 10,
    Keyword4 = 11,
    Label = 12,
    Literal1 = 13,
    Literal2 = 14,
    Literal3 = 15,
    Literal4 = 16,
    Markup = 17,
    Operator = 18,
}

impl TokenId {
    /// Number of identifiers. Valid indexes are `0..COUNT`.
    pub const COUNT: usize = 19;

    /// Every identifier in index order.
    pub const ALL: [TokenId; Self::COUNT] = [
        TokenId::Null,
        TokenId::Comment1,
        TokenId::Comment2,
        TokenId::Comment3,
        TokenId::Comment4,
        TokenId::Digit,
        TokenId::Function,
        TokenId::Invalid,
        TokenId::Keyword1,
        TokenId::Keyword2,
        TokenId::Keyword3,
        TokenId::Keyword4,
        TokenId::Label,
        TokenId::Literal1,
        TokenId::Literal2,
        TokenId::Literal3,
        TokenId::Literal4,
        TokenId::Markup,
        TokenId::Operator,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: u8) -> Option<TokenId> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Upper-case name used by mode files (`KEYWORD1`, `LITERAL2`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            TokenId::Null => "NULL",
            TokenId::Comment1 => "COMMENT1",
            TokenId::Comment2 => "COMMENT2",
            TokenId::Comment3 => "COMMENT3",
            TokenId::Comment4 => "COMMENT4",
            TokenId::Digit => "DIGIT",
            TokenId::Function => "FUNCTION",
            TokenId::Invalid => "INVALID",
            TokenId::Keyword1 => "KEYWORD1",
            TokenId::Keyword2 => "KEYWORD2",
            TokenId::Keyword3 => "KEYWORD3",
            TokenId::Keyword4 => "KEYWORD4",
            TokenId::Label => "LABEL",
            TokenId::Literal1 => "LITERAL1",
            TokenId::Literal2 => "LITERAL2",
            TokenId::Literal3 => "LITERAL3",
            TokenId::Literal4 => "LITERAL4",
            TokenId::Markup => "MARKUP",
            TokenId::Operator => "OPERATOR",
        }
    }

    /// Inverse of [`TokenId::name`]. Matching is exact.
    pub fn from_name(name: &str) -> Option<TokenId> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl TryFrom<u8> for TokenId {
    type Error = InvalidTokenId;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        TokenId::from_index(index).ok_or(InvalidTokenId {
            index,
            count: TokenId::COUNT,
        })
    }
}

impl From<TokenId> for u8 {
    #[inline]
    fn from(id: TokenId) -> u8 {
        id as u8
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
