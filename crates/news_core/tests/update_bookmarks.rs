use news_core::{update, AppState, BookmarkSet, Effect, Msg};

#[test]
fn toggle_twice_returns_original_set() {
    let original: BookmarkSet = vec!["a".to_string(), "b".to_string()].into_iter().collect();

    let (once, first) = original.clone().toggle("x");
    let (twice, second) = once.clone().toggle("x");

    assert!(first);
    assert!(!second);
    assert!(once.contains("x"));
    assert_eq!(twice, original);
}

#[test]
fn toggle_removes_existing_id() {
    let set: BookmarkSet = vec!["world/2024/x".to_string()].into_iter().collect();
    let (set, bookmarked) = set.toggle("world/2024/x");

    assert!(!bookmarked);
    assert!(set.is_empty());
}

#[test]
fn bookmark_toggle_emits_persist_then_changed() {
    let (state, effects) = update(AppState::new(), Msg::BookmarkToggled("a".to_string()));

    let expected_set: BookmarkSet = vec!["a".to_string()].into_iter().collect();
    assert!(state.is_bookmarked("a"));
    assert_eq!(
        effects,
        vec![
            Effect::PersistBookmarks(expected_set),
            Effect::BookmarkChanged {
                id: "a".to_string(),
                bookmarked: true,
            },
        ]
    );

    let (state, effects) = update(state, Msg::BookmarkToggled("a".to_string()));
    assert!(!state.is_bookmarked("a"));
    assert_eq!(
        effects,
        vec![
            Effect::PersistBookmarks(BookmarkSet::new()),
            Effect::BookmarkChanged {
                id: "a".to_string(),
                bookmarked: false,
            },
        ]
    );
}

#[test]
fn bookmark_toggle_does_not_touch_search_state() {
    let state = AppState::new();
    let search_before = state.search().clone();

    let (state, effects) = update(state, Msg::BookmarkToggled("a".to_string()));

    assert_eq!(state.search(), &search_before);
    assert!(!effects.contains(&Effect::Refresh));
}

#[test]
fn decode_round_trips_encoded_set() {
    let set: BookmarkSet = vec!["b".to_string(), "a".to_string()].into_iter().collect();

    assert_eq!(set.encode(), r#"["a","b"]"#);
    assert_eq!(BookmarkSet::decode(&set.encode()).unwrap(), set);
}

#[test]
fn decode_rejects_corrupt_data() {
    assert!(BookmarkSet::decode("{not json").is_err());
    assert!(BookmarkSet::decode(r#"{"a":1}"#).is_err());
    assert!(BookmarkSet::decode("[1,2]").is_err());
}

#[test]
fn decode_collapses_duplicates() {
    let set = BookmarkSet::decode(r#"["a","a","b"]"#).unwrap();
    assert_eq!(set.len(), 2);
}
