use super::*;
use pretty_assertions::assert_eq;

#[test]
fn sensitive_lookup_is_exact() {
    let mut map = KeywordMap::new(false);
    map.add("while", TokenId::Keyword1);
    assert_eq!(map.lookup("while"), Some(TokenId::Keyword1));
    assert_eq!(map.lookup("WHILE"), None);
    assert_eq!(map.lookup("whil"), None);
}

#[test]
fn insensitive_lookup_folds() {
    let mut map = KeywordMap::new(true);
    map.add("Select", TokenId::Keyword1);
    assert_eq!(map.lookup("select"), Some(TokenId::Keyword1));
    assert_eq!(map.lookup("SELECT"), Some(TokenId::Keyword1));
    assert_eq!(map.keywords().collect::<Vec<_>>(), vec![("SELECT", TokenId::Keyword1)]);
}

#[test]
fn later_add_replaces_token() {
    let mut map = KeywordMap::new(false);
    map.add("int", TokenId::Keyword3);
    map.add("int", TokenId::Keyword2);
    assert_eq!(map.lookup("int"), Some(TokenId::Keyword2));
    assert_eq!(map.len(), 1);
}

#[test]
fn empty_keyword_is_ignored() {
    let mut map = KeywordMap::new(false);
    map.add("", TokenId::Keyword1);
    assert!(map.is_empty());
    assert_eq!(map.lookup(""), None);
}

#[test]
fn non_alphanumeric_chars_are_collected_once_in_order() {
    let mut map = KeywordMap::new(false);
    map.add("case-lambda", TokenId::Keyword1);
    map.add("#include", TokenId::Keyword2);
    map.add("set-car!", TokenId::Keyword1);
    map.add("plain", TokenId::Keyword1);
    assert_eq!(map.non_alphanumeric_chars(), "-#!");
}

#[test]
fn unicode_letters_are_alphanumeric() {
    let mut map = KeywordMap::new(false);
    map.add("größe", TokenId::Keyword1);
    assert_eq!(map.non_alphanumeric_chars(), "");
}

#[test]
fn merge_unions_words_and_chars() {
    let mut left = KeywordMap::new(false);
    left.add("if", TokenId::Keyword1);
    left.add("a-b", TokenId::Keyword2);

    let mut right = KeywordMap::new(false);
    right.add("else", TokenId::Keyword1);
    right.add("x.y", TokenId::Keyword3);
    right.add("c-d", TokenId::Keyword3);

    left.merge(&right);
    assert_eq!(left.len(), 5);
    assert_eq!(left.lookup("else"), Some(TokenId::Keyword1));
    assert_eq!(left.lookup("x.y"), Some(TokenId::Keyword3));
    assert_eq!(left.non_alphanumeric_chars(), "-.");
}

#[test]
fn merge_refolds_under_receiver_case_mode() {
    let mut receiver = KeywordMap::new(true);
    let mut source = KeywordMap::new(false);
    source.add("Begin", TokenId::Keyword1);

    receiver.merge(&source);
    assert_eq!(receiver.lookup("BEGIN"), Some(TokenId::Keyword1));
    assert_eq!(receiver.lookup("begin"), Some(TokenId::Keyword1));
}

#[test]
fn merge_source_wins_conflicts() {
    let mut receiver = KeywordMap::new(false);
    receiver.add("null", TokenId::Keyword1);
    let mut source = KeywordMap::new(false);
    source.add("null", TokenId::Literal2);

    receiver.merge(&source);
    assert_eq!(receiver.lookup("null"), Some(TokenId::Literal2));
}
