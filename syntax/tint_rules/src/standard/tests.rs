use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_slot_defaults_to_its_token() {
    for id in TokenId::ALL {
        let set = standard_rule_set(id);
        assert_eq!(set.default_token(), id);
        assert_eq!(set.rule_count(), 0);
        assert!(set.is_built_in());
        assert!(set.rules(Some('a')).is_empty());
        assert!(set.rules(None).is_empty());
    }
}

#[test]
fn slots_are_unnamed() {
    let set = standard_rule_set(TokenId::Comment1);
    assert_eq!(set.mode_name(), None);
    assert_eq!(set.set_name(), None);
    assert_eq!(set.name(), "::");
    assert_eq!(set.to_string(), "RuleSet[::]");
}

#[test]
fn table_is_built_once() {
    let first = standard_rule_sets();
    let second = standard_rule_sets();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(
        standard_rule_set(TokenId::Markup),
        &first[TokenId::Markup.index()]
    ));
}

#[test]
fn slots_have_default_properties() {
    let set = standard_rule_set(TokenId::Literal3);
    assert_eq!(set.terminate_at(), -1);
    assert!(set.ignore_case());
    assert!(set.keywords().is_none());
    assert_eq!(&*set.no_word_sep(), "");
}

#[test]
fn raw_index_lookup() {
    let set = standard_rule_set_at(8).unwrap();
    assert_eq!(set.default_token(), TokenId::Keyword1);

    let err = standard_rule_set_at(19).unwrap_err();
    assert_eq!(
        err,
        RegistryError::InvalidTokenId(InvalidTokenId {
            index: 19,
            count: TokenId::COUNT
        })
    );
    assert_eq!(
        err.to_string(),
        "invalid token id 19: expected a value below 19"
    );
}

#[test]
fn readable_from_many_threads() {
    use rayon::prelude::*;

    let tokens: Vec<TokenId> = (0..256)
        .into_par_iter()
        .map(|i| standard_rule_set(TokenId::ALL[i % TokenId::COUNT]).default_token())
        .collect();
    assert_eq!(tokens[20], TokenId::Comment1);
}
