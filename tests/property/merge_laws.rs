//! Deep merge laws over arbitrary documents

use super::strategies::document;
use clawmerge::merge::deep_merge;
use clawmerge::Document;
use proptest::prelude::*;

proptest! {
    #[test]
    fn merge_with_empty_overlay_is_identity(base in document()) {
        prop_assert_eq!(deep_merge(&base, &Document::new()), base);
    }

    #[test]
    fn merge_into_empty_base_is_overlay(overlay in document()) {
        prop_assert_eq!(deep_merge(&Document::new(), &overlay), overlay);
    }

    #[test]
    fn merge_keeps_every_key(base in document(), overlay in document()) {
        let merged = deep_merge(&base, &overlay);
        for key in base.keys().chain(overlay.keys()) {
            prop_assert!(merged.contains_key(key));
        }
        prop_assert!(merged.keys().all(|k| base.contains_key(k) || overlay.contains_key(k)));
    }

    #[test]
    fn merge_follows_override_rule(base in document(), overlay in document()) {
        let merged = deep_merge(&base, &overlay);
        for (key, overlay_value) in &overlay {
            match (base.get(key), overlay_value) {
                (Some(serde_json::Value::Object(bv)), serde_json::Value::Object(ov)) => {
                    let expected = serde_json::Value::Object(deep_merge(bv, ov));
                    prop_assert_eq!(&merged[key], &expected);
                }
                _ => prop_assert_eq!(&merged[key], overlay_value),
            }
        }
        for (key, base_value) in &base {
            if !overlay.contains_key(key) {
                prop_assert_eq!(&merged[key], base_value);
            }
        }
    }

    #[test]
    fn merge_is_idempotent(base in document(), fragment in document()) {
        let once = deep_merge(&base, &fragment);
        let twice = deep_merge(&once, &fragment);
        prop_assert_eq!(twice, once);
    }
}

/// Inputs are never modified by a merge
#[test]
fn test_merge_does_not_mutate_inputs() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(document(), document()), |(base, overlay)| {
            let base_before = base.clone();
            let overlay_before = overlay.clone();

            let _ = deep_merge(&base, &overlay);

            assert_eq!(base, base_before);
            assert_eq!(overlay, overlay_before);
            Ok(())
        })
        .unwrap();
}
