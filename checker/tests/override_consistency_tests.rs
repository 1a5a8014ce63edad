//! Integration tests for the override-consistency checker

use checker::{check, ClassDecl, ClassGraph, ConfigurationError, OverrideChecker};
use diagnostics::DiagnosticSeverity;

/// The motivating scenario: Dog correctly overrides make_sound, Cat claims
/// to override make_noise which no ancestor declares.
#[test]
fn test_animal_dog_cat_scenario() {
    checker::logging::init_test();

    let diagnostics = check(vec![
        ClassDecl::new("Animal").method("make_sound"),
        ClassDecl::new("Dog")
            .parent("Animal")
            .override_method("make_sound"),
        ClassDecl::new("Cat")
            .parent("Animal")
            .override_method("make_noise"),
    ])
    .unwrap();

    assert_eq!(diagnostics.len(), 1, "exactly one diagnostic expected");

    let d = &diagnostics.diagnostics[0];
    assert_eq!(d.severity, DiagnosticSeverity::Error);
    assert_eq!(d.class_name, "Cat");
    assert_eq!(d.method_name, "make_noise");
    assert!(d.message.contains("does not override any ancestor method"));
}

#[test]
fn test_deterministic_order_and_idempotence() {
    let decls = || {
        vec![
            ClassDecl::new("Base").method("run"),
            ClassDecl::new("First")
                .parent("Base")
                .override_method("walk")
                .override_method("jump"),
            ClassDecl::new("Second")
                .parent("Base")
                .override_method("crawl"),
        ]
    };

    let first = check(decls()).unwrap();
    let second = check(decls()).unwrap();

    // Classes in input order, methods in declaration order
    let names: Vec<(&str, &str)> = first
        .iter()
        .map(|d| (d.class_name.as_str(), d.method_name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![("First", "walk"), ("First", "jump"), ("Second", "crawl")]
    );

    // Same input, same sequence
    assert_eq!(first, second);
}

#[test]
fn test_deep_chain_override_matched_at_any_depth() {
    let diagnostics = check(vec![
        ClassDecl::new("A").method("method1"),
        ClassDecl::new("B").parent("A").override_method("method1"),
        ClassDecl::new("C").parent("B").override_method("method1"),
        ClassDecl::new("D").parent("C").override_method("method2"),
    ])
    .unwrap();

    // method1 resolves through every level; method2 resolves nowhere
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.diagnostics[0].class_name, "D");
    assert_eq!(diagnostics.diagnostics[0].method_name, "method2");
}

#[test]
fn test_sibling_methods_do_not_satisfy_overrides() {
    // A method declared only on a sibling is not an ancestor method.
    let diagnostics = check(vec![
        ClassDecl::new("Animal"),
        ClassDecl::new("Dog").parent("Animal").method("fetch"),
        ClassDecl::new("Cat").parent("Animal").override_method("fetch"),
    ])
    .unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.diagnostics[0].class_name, "Cat");
}

#[test]
fn test_own_method_does_not_satisfy_override() {
    // Declaring the method on the class itself is exactly the case the
    // override marker exists to catch on a root class.
    let diagnostics = check(vec![
        ClassDecl::new("Animal")
            .method("make_sound")
            .override_method("make_sound"),
    ])
    .unwrap();

    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_classes_without_claims_are_silent() {
    let diagnostics = check(vec![
        ClassDecl::new("Animal").method("make_sound"),
        ClassDecl::new("Dog").parent("Animal").method("make_sound"),
    ])
    .unwrap();

    assert!(diagnostics.is_empty());
}

#[test]
fn test_unresolved_parent_is_configuration_error() {
    let result = check(vec![
        ClassDecl::new("Dog")
            .parent("Animal")
            .override_method("make_sound"),
    ]);

    match result {
        Err(ConfigurationError::UnresolvedParent { class, parent }) => {
            assert_eq!(class, "Dog");
            assert_eq!(parent, "Animal");
        }
        other => panic!("expected UnresolvedParent, got {:?}", other),
    }
}

#[test]
fn test_inheritance_cycle_is_configuration_error() {
    let result = check(vec![
        ClassDecl::new("A").parent("B"),
        ClassDecl::new("B").parent("C"),
        ClassDecl::new("C").parent("A"),
    ]);

    match result {
        Err(ConfigurationError::InheritanceCycle { path }) => {
            assert_eq!(path.first().map(String::as_str), Some("A"));
            assert_eq!(path.last().map(String::as_str), Some("A"));
            assert_eq!(path.len(), 4);
        }
        other => panic!("expected InheritanceCycle, got {:?}", other),
    }
}

#[test]
fn test_self_parent_cycle() {
    let result = check(vec![ClassDecl::new("A").parent("A")]);

    assert!(matches!(
        result,
        Err(ConfigurationError::InheritanceCycle { .. })
    ));
}

#[test]
fn test_empty_input_is_clean() {
    let diagnostics = check(Vec::<ClassDecl>::new()).unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn test_checker_over_prebuilt_graph() {
    let graph = ClassGraph::build(vec![
        ClassDecl::new("Shape").method("draw").method("area"),
        ClassDecl::new("Rect")
            .parent("Shape")
            .override_method("draw")
            .override_method("area"),
    ])
    .unwrap();

    let checker = OverrideChecker::new(&graph);
    assert!(checker.check().unwrap().is_empty());
    // Graph is untouched by the check
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_declarations_loaded_from_json() {
    let json = r#"[
        {"name": "Animal", "methods": ["make_sound"]},
        {"name": "Dog", "parent": "Animal",
         "methods": ["make_sound"], "claimed_overrides": ["make_sound"]},
        {"name": "Cat", "parent": "Animal",
         "methods": ["make_noise"], "claimed_overrides": ["make_noise"]}
    ]"#;

    let decls: Vec<ClassDecl> = serde_json::from_str(json).unwrap();
    let diagnostics = check(decls).unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.diagnostics[0].class_name, "Cat");
    assert_eq!(diagnostics.diagnostics[0].method_name, "make_noise");
}
