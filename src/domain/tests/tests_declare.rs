#![allow(clippy::unwrap_used)]
use crate::base::ObjectType;
use crate::diagnostics::{Severity, codes};

use super::super::*;

fn function_options(sig: &str) -> DeclareOptions {
    DeclareOptions {
        sig: Some(sig.to_string()),
        ..DeclareOptions::default()
    }
}

#[test]
fn test_declare_module_sets_anchor_and_context() {
    let mut domain = ElixirDomain::new();
    let declared = domain
        .declare(
            "enum-doc",
            ObjectType::Module,
            "Enum",
            &DeclareOptions::default(),
        )
        .unwrap();

    assert_eq!(declared.fullname, "Enum");
    assert_eq!(declared.anchor, "module-Enum");
    assert_eq!(declared.index_text.as_deref(), Some("Enum (module)"));
    assert_eq!(domain.ambient_module(), Some("Enum"));
    assert_eq!(domain.find_module_docname("Enum"), Some("enum-doc"));
}

#[test]
fn test_declare_module_noindex() {
    let mut domain = ElixirDomain::new();
    let declared = domain
        .declare(
            "enum-doc",
            ObjectType::Module,
            "Enum",
            &DeclareOptions {
                noindex: true,
                ..DeclareOptions::default()
            },
        )
        .unwrap();
    assert!(declared.index_text.is_none());
}

/// Function declarations take their display signature from the sig option
/// and register under the ambient module with their arity.
#[test]
fn test_declare_function_in_module_context() {
    let mut domain = ElixirDomain::new();
    domain
        .declare(
            "enum-doc",
            ObjectType::Module,
            "Enum",
            &DeclareOptions::default(),
        )
        .unwrap();

    let declared = domain
        .declare(
            "enum-doc",
            ObjectType::Function,
            "map/2",
            &function_options("map(enumerable, fun)"),
        )
        .unwrap();

    assert_eq!(declared.fullname, "Enum:map/2");
    assert_eq!(declared.anchor, "Enum:map/2");
    assert_eq!(declared.display_name, "map(enumerable, fun)");
    assert_eq!(declared.annotation, Some("(function)"));
    assert_eq!(
        declared.index_text.as_deref(),
        Some("map/2() (in module Enum)")
    );

    let target = domain.registry().function_target("Enum:map", Some(2)).unwrap();
    assert_eq!(target.targetname, "Enum:map/2");
    assert!(domain.registry().object("Enum:map/2").is_some());
}

#[test]
fn test_declare_function_without_module_context() {
    let mut domain = ElixirDomain::new();
    let declared = domain
        .declare(
            "kernel-doc",
            ObjectType::Function,
            "is_binary/1",
            &function_options("is_binary(term)"),
        )
        .unwrap();

    assert_eq!(declared.fullname, "is_binary/1");
    assert_eq!(
        declared.index_text.as_deref(),
        Some("is_binary/1() (built-in function)")
    );
}

#[test]
fn test_declare_function_requires_sig_option() {
    let mut domain = ElixirDomain::new();
    let err = domain
        .declare(
            "doc",
            ObjectType::Function,
            "map/2",
            &DeclareOptions::default(),
        )
        .unwrap_err();
    assert!(matches!(err, DeclareError::MissingSignature { kind: "function", .. }));
}

/// Callbacks and macros carry their own annotation and no index text.
#[test]
fn test_declare_callback_and_macro_annotations() {
    let mut domain = ElixirDomain::new();
    let callback = domain
        .declare(
            "genserver-doc",
            ObjectType::Callback,
            "init/1",
            &function_options("init(args)"),
        )
        .unwrap();
    assert_eq!(callback.annotation, Some("(callback)"));
    assert!(callback.index_text.is_none());

    let mac = domain
        .declare(
            "kernel-doc",
            ObjectType::Macro,
            "defstruct/1",
            &function_options("defstruct(fields)"),
        )
        .unwrap();
    assert_eq!(mac.annotation, Some("(macro)"));
    assert!(mac.index_text.is_none());
}

#[test]
fn test_declare_function_malformed_arity() {
    let mut domain = ElixirDomain::new();
    let err = domain
        .declare(
            "doc",
            ObjectType::Function,
            "map/two",
            &function_options("map(enumerable, fun)"),
        )
        .unwrap_err();
    assert!(matches!(err, DeclareError::MalformedArity { .. }));
}

#[test]
fn test_declare_empty_name() {
    let mut domain = ElixirDomain::new();
    let err = domain
        .declare("doc", ObjectType::Module, "   ", &DeclareOptions::default())
        .unwrap_err();
    assert_eq!(err, DeclareError::EmptyName);
}

#[test]
fn test_declare_type_display_name() {
    let mut domain = ElixirDomain::new();
    let declared = domain
        .declare(
            "mod-doc",
            ObjectType::Type,
            "Mod.Sub.keyword/0",
            &DeclareOptions::default(),
        )
        .unwrap();

    assert_eq!(declared.fullname, "Mod.Sub.keyword/0");
    assert_eq!(declared.anchor, "Mod.Sub.keyword/0");
    assert_eq!(declared.display_name, "keyword");
    assert!(declared.annotation.is_none());
    assert!(domain.registry().object("Mod.Sub.keyword/0").is_some());
}

/// Registering the same fullname from two documents keeps the newest entry
/// and emits exactly one warning naming both locations.
#[test]
fn test_duplicate_declaration_warns_once() {
    let mut domain = ElixirDomain::new();
    domain
        .declare(
            "doc-a",
            ObjectType::Type,
            "Mod.t/0",
            &DeclareOptions::default(),
        )
        .unwrap();
    domain
        .declare(
            "doc-b",
            ObjectType::Type,
            "Mod.t/0",
            &DeclareOptions::default(),
        )
        .unwrap();

    assert_eq!(domain.registry().object_count(), 1);
    assert_eq!(domain.registry().object("Mod.t/0").unwrap().docname, "doc-b");

    let diagnostics = domain.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].code.as_deref(), Some(codes::DUPLICATE_OBJECT));
    assert_eq!(diagnostics[0].docname, "doc-b");
    assert_eq!(diagnostics[0].related_docname.as_deref(), Some("doc-a"));
}

#[test]
fn test_module_reregistration_from_other_doc_warns() {
    let mut domain = ElixirDomain::new();
    domain
        .declare("doc-a", ObjectType::Module, "IO", &DeclareOptions::default())
        .unwrap();
    domain
        .declare("doc-b", ObjectType::Module, "IO", &DeclareOptions::default())
        .unwrap();

    assert_eq!(domain.find_module_docname("IO"), Some("doc-b"));
    let diagnostics = domain.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.as_deref(), Some(codes::DUPLICATE_MODULE));
}
