//! Property tests for the field differ.

use proptest::prelude::*;
use serde_json::{Map, Value};

use cmd_adapter::domain::services::diff_fields;

fn object() -> impl Strategy<Value = Value> {
    proptest::collection::btree_map("[a-e]", 0u8..3, 0..5).prop_map(|m| {
        let map: Map<String, Value> = m.into_iter().map(|(k, v)| (k, Value::from(v))).collect();
        Value::Object(map)
    })
}

proptest! {
    /// PROPERTY: An object never differs from itself.
    #[test]
    fn property_diff_is_reflexive(a in object()) {
        prop_assert!(diff_fields(&a, &a).is_empty());
    }

    /// PROPERTY: Swapping sides swaps added and removed; changed stays.
    #[test]
    fn property_diff_is_antisymmetric(a in object(), b in object()) {
        let forward = diff_fields(&a, &b);
        let backward = diff_fields(&b, &a);
        prop_assert_eq!(&forward.added, &backward.removed);
        prop_assert_eq!(&forward.removed, &backward.added);

        let mut f = forward.changed.clone();
        let mut r = backward.changed.clone();
        f.sort();
        r.sort();
        prop_assert_eq!(f, r);
    }

    /// PROPERTY: Every key lands in at most one bucket, and only differing keys appear.
    #[test]
    fn property_buckets_are_disjoint(a in object(), b in object()) {
        let diff = diff_fields(&a, &b);
        let (a, b) = (a.as_object().unwrap(), b.as_object().unwrap());
        for key in &diff.added {
            prop_assert!(!a.contains_key(key) && b.contains_key(key));
        }
        for key in &diff.removed {
            prop_assert!(a.contains_key(key) && !b.contains_key(key));
        }
        for key in &diff.changed {
            prop_assert!(a[key] != b[key]);
        }
    }
}
