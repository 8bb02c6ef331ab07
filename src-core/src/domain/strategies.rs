//! Proptest strategies for domain values.

use proptest::prelude::*;

use super::{Idea, Scene};

/// Free text: arbitrary unicode, quote/backslash-heavy strings, or empty
pub(crate) fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[\"'\\\\ a-zé😀]{0,12}",
        Just(String::new()),
    ]
}

pub(crate) fn arb_tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_text(), 0..4)
}

pub(crate) fn arb_scene() -> impl Strategy<Value = Scene> {
    (arb_text(), arb_text(), any::<bool>()).prop_map(|(description, location, filmed)| Scene {
        description,
        location,
        filmed,
    })
}

pub(crate) fn arb_idea() -> impl Strategy<Value = Idea> {
    (
        arb_text(),
        arb_text(),
        arb_tags(),
        arb_text(),
        prop::collection::vec(arb_scene(), 0..4),
    )
        .prop_map(|(title, description, tags, category, scenes)| Idea {
            title,
            description,
            tags,
            category,
            scenes,
        })
}

pub(crate) fn arb_ideas() -> impl Strategy<Value = Vec<Idea>> {
    prop::collection::vec(arb_idea(), 0..6)
}
