use std::collections::{BTreeMap, HashSet};

use tracing::trace;

use crate::base::module_anchor;
use crate::registry::{ModuleEntry, SymbolRegistry};

use super::entry::{IndexEntry, IndexEntryKind, IndexGroup, ModuleIndex};

/// Builds the module index from a registry snapshot.
pub struct ModuleIndexBuilder<'a> {
    registry: &'a SymbolRegistry,
    common_prefixes: Vec<String>,
    deprecated_label: String,
}

impl<'a> ModuleIndexBuilder<'a> {
    pub fn new(registry: &'a SymbolRegistry) -> Self {
        Self {
            registry,
            common_prefixes: Vec::new(),
            deprecated_label: "Deprecated".to_string(),
        }
    }

    /// Common prefixes to strip from module names before grouping.
    pub fn with_common_prefixes(mut self, prefixes: &[String]) -> Self {
        self.common_prefixes = prefixes.to_vec();
        self
    }

    /// Localized qualifier attached to deprecated modules.
    pub fn with_deprecated_label(mut self, label: impl Into<String>) -> Self {
        self.deprecated_label = label.into();
        self
    }

    /// Build the index, optionally restricted to a subset of documents
    /// (incremental regeneration).
    pub fn build(&self, docnames: Option<&HashSet<String>>) -> ModuleIndex {
        let mut modules: Vec<(&str, &ModuleEntry)> = self.registry.modules().collect();
        modules.sort_by(|a, b| {
            a.0.to_lowercase()
                .cmp(&b.0.to_lowercase())
                .then_with(|| a.0.cmp(b.0))
        });
        build_sorted(
            &modules,
            &self.common_prefixes,
            &self.deprecated_label,
            docnames,
        )
    }
}

/// Group an already-sorted module list into the index structure.
///
/// Submodule detection is order-sensitive: a module named `Pkg:sub`
/// immediately following `Pkg` marks `Pkg` as a group head; a submodule
/// whose parent is absent from the list gets a synthesized placeholder
/// parent. The collapse hint is set when submodule entries outnumber
/// top-level entries.
pub fn build_sorted(
    modules: &[(&str, &ModuleEntry)],
    common_prefixes: &[String],
    deprecated_label: &str,
    docnames: Option<&HashSet<String>>,
) -> ModuleIndex {
    // Longest prefix first, so "Elixir.Foo." wins over "Elixir."
    let mut prefixes: Vec<&str> = common_prefixes.iter().map(String::as_str).collect();
    prefixes.sort_by_key(|prefix| std::cmp::Reverse(prefix.len()));

    let mut buckets: BTreeMap<String, Vec<IndexEntry>> = BTreeMap::new();
    let mut prev_modname = "";
    let mut num_toplevels = 0usize;
    let mut num_submodules = 0usize;

    for (raw_name, module) in modules {
        if let Some(filter) = docnames {
            if !filter.contains(&module.docname) {
                continue;
            }
        }

        let (mut modname, mut stripped) = strip_common_prefix(raw_name, &prefixes);
        if modname.is_empty() {
            // The prefix consumed the whole name: treat the prefix itself
            // as the module name.
            (modname, stripped) = (stripped, "");
        }
        let Some(first) = modname.chars().next() else {
            continue;
        };

        let letter: String = first.to_lowercase().collect();
        let entries = buckets.entry(letter).or_default();

        let package = modname.split(':').next().unwrap_or(modname);
        let kind = if package != modname {
            if prev_modname == package {
                // First submodule after its parent: promote the parent to a
                // group head.
                if let Some(parent) = entries.last_mut() {
                    parent.kind = IndexEntryKind::GroupHead;
                }
            } else if !prev_modname.starts_with(package) {
                // Submodule without its parent in this build
                trace!("[MODINDEX] placeholder parent '{}{}'", stripped, package);
                entries.push(IndexEntry::placeholder(format!("{stripped}{package}")));
            }
            num_submodules += 1;
            IndexEntryKind::Sub
        } else {
            num_toplevels += 1;
            IndexEntryKind::Normal
        };

        let qualifier = if module.deprecated {
            deprecated_label.to_string()
        } else {
            String::new()
        };
        let full_name = format!("{stripped}{modname}");
        entries.push(IndexEntry {
            anchor: module_anchor(&full_name),
            name: full_name,
            kind,
            docname: module.docname.clone(),
            platform: module.platform.clone(),
            qualifier,
            synopsis: module.synopsis.clone(),
        });
        prev_modname = modname;
    }

    // Collapse only when submodules are the majority of the index
    let collapse = num_submodules > num_toplevels;

    ModuleIndex {
        groups: buckets
            .into_iter()
            .map(|(letter, entries)| IndexGroup { letter, entries })
            .collect(),
        collapse,
    }
}

/// Strip the first matching prefix, returning `(rest, stripped_prefix)`.
fn strip_common_prefix<'n>(name: &'n str, prefixes: &[&'n str]) -> (&'n str, &'n str) {
    for &prefix in prefixes {
        if let Some(rest) = name.strip_prefix(prefix) {
            return (rest, prefix);
        }
    }
    (name, "")
}
