//! Property-Based Tests for the Store Module

use proptest::prelude::*;

use crate::store::{PostChanges, PostStore, DEFAULT_AUTHOR_ID};

// == Strategies ==
/// Generates valid titles (non-blank, within length limit)
fn valid_title_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ]{0,63}"
}

/// Generates valid descriptions
fn valid_description_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}"
}

fn changes_strategy() -> impl Strategy<Value = PostChanges> {
    (
        prop::option::of(valid_title_strategy()),
        prop::option::of(valid_description_strategy()),
    )
        .prop_map(|(title, description)| PostChanges { title, description })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every successful create is visible through `all` and `find`.
    #[test]
    fn prop_created_posts_are_listed(
        posts in prop::collection::vec((valid_title_strategy(), valid_description_strategy()), 0..30)
    ) {
        let mut store = PostStore::default();
        let mut ids = Vec::new();

        for (title, description) in &posts {
            let post = store
                .create(PostChanges {
                    title: Some(title.clone()),
                    description: Some(description.clone()),
                })
                .unwrap();
            prop_assert_eq!(post.author_id, DEFAULT_AUTHOR_ID);
            ids.push(post.id);
        }

        prop_assert_eq!(store.all().len(), posts.len());
        for (id, (title, description)) in ids.iter().zip(&posts) {
            let post = store.find(*id).unwrap();
            prop_assert_eq!(&post.title, title);
            prop_assert_eq!(&post.description, description);
        }
    }

    // Applying the same update twice yields the same field values as applying it once.
    #[test]
    fn prop_update_is_idempotent(
        title in valid_title_strategy(),
        description in valid_description_strategy(),
        update in changes_strategy(),
    ) {
        let mut store = PostStore::default();
        let id = store
            .create(PostChanges { title: Some(title), description: Some(description) })
            .unwrap()
            .id;

        let once = store.update(id, update.clone()).unwrap().clone();
        let twice = store.update(id, update).unwrap().clone();

        prop_assert_eq!(once.title, twice.title);
        prop_assert_eq!(once.description, twice.description);
        prop_assert_eq!(once.id, twice.id);
    }

    // Fields absent from an update keep their stored value.
    #[test]
    fn prop_update_preserves_absent_fields(
        title in valid_title_strategy(),
        description in valid_description_strategy(),
        update in changes_strategy(),
    ) {
        let mut store = PostStore::default();
        let id = store
            .create(PostChanges {
                title: Some(title.clone()),
                description: Some(description.clone()),
            })
            .unwrap()
            .id;

        let post = store.update(id, update.clone()).unwrap();

        prop_assert_eq!(&post.title, update.title.as_ref().unwrap_or(&title));
        prop_assert_eq!(&post.description, update.description.as_ref().unwrap_or(&description));
        prop_assert_eq!(post.author_id, DEFAULT_AUTHOR_ID);
    }

    // Rejected creates never change the record count.
    #[test]
    fn prop_blank_titles_rejected(blank in "[ \t]{0,8}", description in valid_description_strategy()) {
        let mut store = PostStore::default();

        let result = store.create(PostChanges {
            title: Some(blank),
            description: Some(description),
        });

        prop_assert!(result.is_err());
        prop_assert!(store.is_empty());
    }
}
