#![allow(clippy::unwrap_used)]
use std::collections::HashSet;

use exref::{DeclareOptions, DomainConfig, ElixirDomain, ObjectType};

fn declare_module(domain: &mut ElixirDomain, docname: &str, modname: &str) {
    domain
        .declare(docname, ObjectType::Module, modname, &DeclareOptions::default())
        .unwrap();
}

/// Full pass through the facade: declarations in, grouped index out.
#[test]
fn test_module_index_through_domain() {
    let mut domain = ElixirDomain::new();
    declare_module(&mut domain, "a-doc", "A");
    declare_module(&mut domain, "ab-doc", "A:b");
    declare_module(&mut domain, "ac-doc", "A:c");
    declare_module(&mut domain, "z-doc", "Z");

    let index = domain.module_index(None);
    assert_eq!(index.groups.len(), 2);

    let codes: Vec<u8> = index.groups[0]
        .entries
        .iter()
        .map(|entry| entry.kind.code())
        .collect();
    assert_eq!(codes, vec![1, 2, 2]);
    assert!(!index.collapse);
}

/// Common prefixes from the configuration drive the grouping letters.
#[test]
fn test_module_index_uses_configured_prefixes() {
    let config = DomainConfig {
        common_prefixes: vec!["Exl.".to_string()],
        ..DomainConfig::default()
    };
    let mut domain = ElixirDomain::with_config(config);
    declare_module(&mut domain, "io-doc", "Exl.IO");
    declare_module(&mut domain, "str-doc", "Exl.String");

    let index = domain.module_index(None);
    let letters: Vec<&str> = index
        .groups
        .iter()
        .map(|group| group.letter.as_str())
        .collect();
    assert_eq!(letters, vec!["i", "s"]);
}

/// Incremental regeneration only lists modules from the given documents.
#[test]
fn test_module_index_incremental_subset() {
    let mut domain = ElixirDomain::new();
    declare_module(&mut domain, "a-doc", "A");
    declare_module(&mut domain, "z-doc", "Z");

    let filter: HashSet<String> = ["a-doc".to_string()].into_iter().collect();
    let index = domain.module_index(Some(&filter));

    let names: Vec<&str> = index
        .groups
        .iter()
        .flat_map(|group| &group.entries)
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["A"]);
}

/// Deprecated modules carry the configured qualifier into the index.
#[test]
fn test_module_index_deprecation_qualifier() {
    let mut domain = ElixirDomain::new();
    domain
        .declare(
            "old-doc",
            ObjectType::Module,
            "Old",
            &DeclareOptions {
                deprecated: true,
                ..DeclareOptions::default()
            },
        )
        .unwrap();

    let index = domain.module_index(None);
    assert_eq!(index.groups[0].entries[0].qualifier, "Deprecated");
}
