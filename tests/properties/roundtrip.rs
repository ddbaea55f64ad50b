//! Property tests for converter/importer round trips.

use std::path::PathBuf;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use cmd_adapter::domain::services::build_ir;
use cmd_adapter::infrastructure::get_converter;
use cmd_adapter::{Argument, ClaudeFormat, CommandIr, Platform};

// Generated text carries a word prefix so YAML never reads it as a bool,
// null or number, and avoids `-` and `#` so no line looks like a list item,
// a frontmatter fence or a heading.

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

fn phrase(prefix: &'static str) -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9 ,.]{0,20}")
        .unwrap()
        .prop_map(move |s| format!("{prefix} {s}").trim().to_string())
}

fn prompt() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::string::string_regex("[A-Za-z0-9 ,.]{0,30}").unwrap(), 0..=5)
        .prop_map(|lines| lines.join("\n").trim().to_string())
}

fn default_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        word().prop_map(|w| Some(json!(format!("v{w}")))),
        (0u8..100).prop_map(|n| Some(json!(n))),
        any::<bool>().prop_map(|b| Some(json!(b))),
    ]
}

fn argument() -> impl Strategy<Value = Argument> {
    (
        word(),
        prop_oneof![Just("string"), Just("number"), Just("boolean")],
        any::<bool>(),
        default_value(),
        phrase("Hint"),
    )
        .prop_map(|(name, kind, required, default, hint)| Argument {
            name: format!("a{name}"),
            kind: kind.to_string(),
            required,
            default,
            hint,
        })
}

fn bag() -> impl Strategy<Value = Value> {
    proptest::collection::btree_map(word(), word(), 0..=3).prop_map(|entries| {
        let map: Map<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (format!("k{k}"), json!(format!("m{v}"))))
            .collect();
        Value::Object(map)
    })
}

fn command_ir() -> impl Strategy<Value = CommandIr> {
    (
        word(),
        phrase("Desc"),
        proptest::collection::vec(argument(), 0..=3),
        prompt(),
        proptest::collection::vec(word().prop_map(|w| format!("/{w} arg")), 0..=3),
        bag(),
        bag(),
    )
        .prop_map(
            |(name, description, arguments, prompt, examples, metadata, runtime)| CommandIr {
                name: format!("cmd{name}"),
                description,
                arguments,
                prompt,
                examples,
                metadata,
                runtime,
            },
        )
}

// Raw source objects, shaped the way hand-written command files are: field
// aliases, numeric and float values, and nested (null-free) bags.

fn scalar() -> BoxedStrategy<Value> {
    prop_oneof![
        word().prop_map(|w| json!(format!("s{w}"))),
        (-1000i32..1000).prop_map(|n| json!(n)),
        (-50i32..50).prop_map(|n| json!(f64::from(n) / 10.0)),
        any::<bool>().prop_map(|b| json!(b)),
    ]
    .boxed()
}

fn nested_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        scalar(),
        proptest::collection::vec(word().prop_map(|w| json!(format!("s{w}"))), 0..3)
            .prop_map(Value::Array),
        proptest::collection::vec((-100i32..100).prop_map(|n| json!(n)), 0..3)
            .prop_map(Value::Array),
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        proptest::collection::btree_map(word(), inner, 1..=3).prop_map(keyed)
    })
}

fn keyed(entries: std::collections::BTreeMap<String, Value>) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (format!("k{k}"), v))
            .collect(),
    )
}

fn nested_bag() -> impl Strategy<Value = Value> {
    proptest::collection::btree_map(word(), nested_value(), 1..=3).prop_map(keyed)
}

fn raw_default() -> impl Strategy<Value = Value> {
    prop_oneof![
        word().prop_map(|w| json!(format!("v{w}"))),
        (0i32..100).prop_map(|n| json!(n)),
        (1i32..100).prop_map(|n| json!(f64::from(n) / 10.0)),
        any::<bool>().prop_map(|b| json!(b)),
    ]
}

fn raw_argument() -> impl Strategy<Value = Value> {
    (
        prop_oneof![Just("name"), Just("key")],
        word(),
        proptest::option::of((
            prop_oneof![Just("type"), Just("kind")],
            prop_oneof![Just("string"), Just("number"), Just("boolean")],
        )),
        prop_oneof![Just(json!(true)), Just(json!(false)), Just(json!(1)), Just(json!(0))],
        proptest::option::of(raw_default()),
        prop_oneof![Just("hint"), Just("help"), Just("description")],
        phrase("Hint"),
    )
        .prop_map(|(name_key, name, kind, required, default, hint_key, hint)| {
            let mut arg = Map::new();
            arg.insert(name_key.to_string(), json!(format!("a{name}")));
            if let Some((key, kind)) = kind {
                arg.insert(key.to_string(), json!(kind));
            }
            arg.insert("required".to_string(), required);
            if let Some(default) = default {
                arg.insert("default".to_string(), default);
            }
            arg.insert(hint_key.to_string(), json!(hint));
            Value::Object(arg)
        })
}

fn raw_prompt() -> impl Strategy<Value = Vec<(&'static str, Value)>> {
    prop_oneof![
        prompt().prop_map(|p| vec![("prompt", json!(p))]),
        (phrase("Sys"), phrase("Ask")).prop_map(|(system, user)| {
            vec![("system", json!(system)), ("user", json!(user))]
        }),
    ]
}

fn raw_runtime() -> impl Strategy<Value = Vec<(&'static str, Value)>> {
    prop_oneof![
        Just(Vec::<(&'static str, Value)>::new()),
        nested_bag().prop_map(|bag| vec![("runtime", bag)]),
        (
            word().prop_map(|w| json!(format!("m{w}"))),
            (0i32..20).prop_map(|n| json!(f64::from(n) / 10.0)),
        )
            .prop_map(|(model, temperature)| vec![("model", model), ("temperature", temperature)]),
    ]
}

fn source_object() -> impl Strategy<Value = Value> {
    (
        (prop_oneof![Just("name"), Just("id")], word()),
        proptest::option::of((prop_oneof![Just("description"), Just("desc")], phrase("Desc"))),
        (
            prop_oneof![Just("arguments"), Just("params"), Just("parameters")],
            proptest::collection::vec(raw_argument(), 0..=3),
        ),
        raw_prompt(),
        proptest::option::of(proptest::collection::vec(word().prop_map(|w| format!("/{w} arg")), 0..=3)),
        proptest::option::of(prop_oneof![
            (0i32..10).prop_map(|n| json!(n)),
            word().prop_map(|w| json!(format!("v{w}"))),
        ]),
        proptest::option::of(phrase("By")),
        proptest::option::of(proptest::collection::vec(word().prop_map(|w| format!("tag_{w}")), 0..=3)),
        proptest::option::of((prop_oneof![Just("metadata"), Just("meta")], nested_bag())),
        raw_runtime(),
    )
        .prop_map(
            |((name_key, name), description, (args_key, args), prompt, examples, version, author, tags, meta, runtime)| {
                let mut obj = Map::new();
                obj.insert(name_key.to_string(), json!(format!("cmd{name}")));
                if let Some((key, text)) = description {
                    obj.insert(key.to_string(), json!(text));
                }
                obj.insert(args_key.to_string(), Value::Array(args));
                for (key, value) in prompt.into_iter().chain(runtime) {
                    obj.insert(key.to_string(), value);
                }
                if let Some(examples) = examples {
                    obj.insert("examples".to_string(), json!(examples));
                }
                if let Some(version) = version {
                    obj.insert("version".to_string(), version);
                }
                if let Some(author) = author {
                    obj.insert("author".to_string(), json!(author));
                }
                if let Some(tags) = tags {
                    obj.insert("tags".to_string(), json!(tags));
                }
                if let Some((key, bag)) = meta {
                    obj.insert(key.to_string(), bag);
                }
                Value::Object(obj)
            },
        )
}

fn artifact_path(platform: Platform, filename: &str) -> PathBuf {
    PathBuf::from("out")
        .join(platform.directory_name())
        .join(platform.artifact_dir())
        .join(filename)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: import(convert(ir)) == ir for every platform.
    #[test]
    fn property_round_trip_is_lossless(ir in command_ir()) {
        for platform in Platform::ALL {
            let converter = get_converter(platform, ClaudeFormat::Json);
            let artifact = converter.convert(&ir).unwrap();
            let path = artifact_path(platform, &artifact.filename);
            let back = converter.import(&path, &artifact.content).unwrap();
            prop_assert_eq!(&back, &ir, "platform {}", platform);
        }
    }

    /// PROPERTY: Any IR the builder produces from a source object survives
    /// every platform, including nested bags, floats and numeric defaults.
    #[test]
    fn property_built_ir_round_trips(raw in source_object()) {
        let ir = build_ir(&raw);
        for (platform, format) in [
            (Platform::Gemini, ClaudeFormat::Json),
            (Platform::Codex, ClaudeFormat::Json),
            (Platform::Claude, ClaudeFormat::Json),
            (Platform::Claude, ClaudeFormat::Yaml),
        ] {
            let converter = get_converter(platform, format);
            let artifact = converter.convert(&ir).unwrap();
            let back = converter
                .import(&artifact_path(platform, &artifact.filename), &artifact.content)
                .unwrap();
            prop_assert_eq!(&back, &ir, "platform {} ({:?})\n{}", platform, format, artifact.content);
        }
    }

    /// PROPERTY: Claude YAML round-trips too.
    #[test]
    fn property_claude_yaml_round_trip(ir in command_ir()) {
        let converter = get_converter(Platform::Claude, ClaudeFormat::Yaml);
        let artifact = converter.convert(&ir).unwrap();
        prop_assert!(artifact.filename.ends_with(".yaml"));
        let back = converter
            .import(&artifact_path(Platform::Claude, &artifact.filename), &artifact.content)
            .unwrap();
        prop_assert_eq!(back, ir);
    }

    /// PROPERTY: Converting the same IR twice yields identical bytes.
    #[test]
    fn property_conversion_is_deterministic(ir in command_ir()) {
        for platform in Platform::ALL {
            let converter = get_converter(platform, ClaudeFormat::Json);
            let first = converter.convert(&ir).unwrap();
            let second = converter.convert(&ir.clone()).unwrap();
            prop_assert_eq!(first.content, second.content);
            prop_assert_eq!(first.filename, format!("{}.{}", ir.name, converter.extension()));
        }
    }

    /// PROPERTY: Every artifact validates against its platform schema.
    #[test]
    fn property_artifacts_match_their_schema(ir in command_ir()) {
        let schemas = cmd_adapter::SchemaSet::embedded().unwrap();
        for platform in Platform::ALL {
            let converter = get_converter(platform, ClaudeFormat::Json);
            let artifact = converter.convert(&ir).unwrap();
            let document = converter
                .document(&artifact_path(platform, &artifact.filename), &artifact.content)
                .unwrap();
            prop_assert!(
                schemas.for_platform(platform).is_valid(&document),
                "{} artifact failed its schema: {}",
                platform,
                document
            );
        }
    }
}
