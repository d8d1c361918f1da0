#![allow(clippy::unwrap_used)]
use exref::{DeclareOptions, ElixirDomain, ObjectType, RefRole, SearchOrder, process_link};

fn options_with_sig(sig: &str) -> DeclareOptions {
    DeclareOptions {
        sig: Some(sig.to_string()),
        ..DeclareOptions::default()
    }
}

fn enum_domain() -> ElixirDomain {
    let mut domain = ElixirDomain::new();
    domain
        .declare(
            "enum-doc",
            ObjectType::Module,
            "Enum",
            &DeclareOptions {
                synopsis: Some("Working with enumerables".to_string()),
                ..DeclareOptions::default()
            },
        )
        .unwrap();
    domain
        .declare(
            "enum-doc",
            ObjectType::Function,
            "map/2",
            &options_with_sig("map(enumerable, fun)"),
        )
        .unwrap();
    domain
        .declare(
            "enum-doc",
            ObjectType::Function,
            "reduce/3",
            &options_with_sig("reduce(enumerable, acc, fun)"),
        )
        .unwrap();
    domain
}

/// Declared functions resolve through the generic lookup using the ambient
/// module recorded at the reference site.
#[test]
fn test_declared_function_resolves() {
    let domain = enum_domain();

    let resolved = domain
        .resolve(
            RefRole::Any,
            "map/2",
            Some("Enum"),
            "other-doc",
            SearchOrder::default(),
        )
        .unwrap();
    assert_eq!(resolved.docname, "enum-doc");
    assert_eq!(resolved.anchor, "Enum:map/2");
}

/// Without an explicit arity the minimum registered arity is linked.
#[test]
fn test_arity_defaulting_end_to_end() {
    let mut domain = enum_domain();
    domain
        .declare(
            "enum-doc",
            ObjectType::Function,
            "reduce/2",
            &options_with_sig("reduce(enumerable, fun)"),
        )
        .unwrap();

    let resolved = domain
        .resolve(
            RefRole::Any,
            "reduce",
            Some("Enum"),
            "other-doc",
            SearchOrder::default(),
        )
        .unwrap();
    assert_eq!(resolved.anchor, "Enum:reduce/2");
}

/// Module round trip: platform, synopsis, and deprecation compose the link
/// title.
#[test]
fn test_module_reference_round_trip() {
    let mut domain = ElixirDomain::new();
    domain
        .declare(
            "io-doc",
            ObjectType::Module,
            "IO",
            &DeclareOptions {
                platform: Some("posix".to_string()),
                synopsis: Some("I/O".to_string()),
                deprecated: true,
                ..DeclareOptions::default()
            },
        )
        .unwrap();

    let resolved = domain
        .resolve(RefRole::Mod, "IO", None, "from-doc", SearchOrder::default())
        .unwrap();
    assert_eq!(resolved.docname, "io-doc");
    assert_eq!(resolved.anchor, "module-IO");
    assert_eq!(resolved.title, "(posix) I/O (deprecated)");
}

/// A dotted type reference resolves iff its module prefix is registered.
#[test]
fn test_dotted_type_reference_gated_on_module() {
    let domain = enum_domain();

    let hit = domain
        .resolve(
            RefRole::Type,
            "Enum.t/0",
            None,
            "from-doc",
            SearchOrder::default(),
        )
        .unwrap();
    assert_eq!(hit.docname, "enum-doc");
    assert_eq!(hit.anchor, "Enum.t/0");
    assert_eq!(hit.title, "Enum.t");

    let miss = domain.resolve(
        RefRole::Type,
        "Stream.t/0",
        None,
        "from-doc",
        SearchOrder::default(),
    );
    assert!(miss.is_none());
}

/// Unresolvable references and malformed arities degrade to "no link"
/// without failing the build.
#[test]
fn test_resolution_failures_are_silent() {
    let domain = enum_domain();

    assert!(
        domain
            .resolve(
                RefRole::Any,
                "missing/9",
                Some("Enum"),
                "from-doc",
                SearchOrder::default()
            )
            .is_none()
    );
    assert!(
        domain
            .resolve(
                RefRole::Any,
                "map/two",
                Some("Enum"),
                "from-doc",
                SearchOrder::default()
            )
            .is_none()
    );
}

/// The tilde convention shows only the member name while the full target
/// still drives resolution.
#[test]
fn test_tilde_display_with_resolution() {
    let domain = enum_domain();

    let (title, target) = process_link("~Enum:map/2", "~Enum:map/2", false);
    assert_eq!(title, "map/2");
    assert_eq!(target, "Enum:map/2");

    let resolved = domain
        .resolve(
            RefRole::Any,
            &target,
            None,
            "from-doc",
            SearchOrder::default(),
        )
        .unwrap();
    assert_eq!(resolved.anchor, "Enum:map/2");
}
