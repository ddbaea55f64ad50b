//! Property tests for the IR builder.

use proptest::prelude::*;
use serde_json::{json, Value};

use cmd_adapter::domain::services::{build_ir, build_prompt, normalize_arguments};

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map(
                prop_oneof![
                    Just("name".to_string()),
                    Just("id".to_string()),
                    Just("prompt".to_string()),
                    Just("system".to_string()),
                    Just("user".to_string()),
                    Just("messages".to_string()),
                    Just("arguments".to_string()),
                    Just("params".to_string()),
                    "[a-z]{1,6}",
                ],
                inner,
                0..5
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Building never panics and always yields a non-empty name.
    #[test]
    fn property_build_never_panics(input in json_value()) {
        let ir = build_ir(&input);
        prop_assert!(!ir.name.is_empty());
        prop_assert!(ir.metadata.is_object());
        prop_assert!(ir.arguments.iter().all(|a| !a.name.is_empty()));
    }

    /// PROPERTY: Only entries with a name survive normalization, in order.
    #[test]
    fn property_nameless_arguments_are_dropped(
        entries in proptest::collection::vec(
            prop_oneof![
                "[a-z]{1,6}".prop_map(|n| json!({ "name": n })),
                "[a-z]{1,6}".prop_map(|n| json!({ "key": n })),
                Just(json!({ "type": "string" })),
                Just(json!({ "name": "" })),
                Just(json!("bare string")),
            ],
            0..10
        )
    ) {
        let expected: Vec<String> = entries
            .iter()
            .filter_map(|e| {
                e.get("name")
                    .or_else(|| e.get("key"))
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
            .collect();

        let names: Vec<String> = normalize_arguments(&Value::Array(entries))
            .into_iter()
            .map(|a| a.name)
            .collect();
        prop_assert_eq!(names, expected);
    }

    /// PROPERTY: An explicit prompt string wins verbatim over every other source.
    #[test]
    fn property_explicit_prompt_wins(
        prompt in "(?s).{0,40}",
        system in "[a-z ]{1,10}",
        user in "[a-z ]{1,10}",
    ) {
        let input = json!({ "prompt": prompt.clone(), "system": system, "user": user });
        prop_assert_eq!(build_prompt(&input), prompt);
    }

    /// PROPERTY: Without a prompt, the assembled prompt is trimmed.
    #[test]
    fn property_assembled_prompt_is_trimmed(
        system in "[a-z \n]{0,10}",
        user in "[a-z \n]{0,10}",
    ) {
        let built = build_prompt(&json!({ "system": system, "user": user }));
        prop_assert_eq!(built.trim(), built.as_str());
    }
}
