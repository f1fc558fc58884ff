use crate::language::{
    Direction, IdentityLemmatizer, LEMMA_CAPACITY, Language, LemmaError, LemmaSet, Lemmatizer,
};

#[test]
fn test_lemma_set_keeps_insertion_order_and_dedups() {
    let mut set = LemmaSet::single("running");
    assert!(set.insert("run"));
    assert!(!set.insert("running"));
    assert!(!set.insert(""));

    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["running", "run"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_lemma_set_is_bounded() {
    let mut set = LemmaSet::new();
    for form in ["a", "b", "c", "d"] {
        set.insert(form);
    }

    assert_eq!(set.len(), LEMMA_CAPACITY);
    assert!(!set.contains("d"));
}

#[test]
fn test_identity_lemmatizer() {
    let lemmatizer = IdentityLemmatizer::new(Language::Fr);

    let set = lemmatizer.lemmas("pommes").unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["pommes"]);
    assert!(matches!(lemmatizer.lemmas(""), Err(LemmaError::EmptyInput)));
}

#[test]
fn test_direction_labels() {
    assert_eq!(Direction::EnFr.tag("a {n} :: b"), "EN -> FR: a {n} :: b");
    assert_eq!(Direction::FrEn.to_string(), "FR -> EN");
    assert_eq!(Language::Fr.direction(), Direction::FrEn);
    assert_eq!(Direction::EnFr.source(), Language::En);
}
