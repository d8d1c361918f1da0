use std::collections::HashSet;

use crate::base::{RefRole, SearchOrder};
use crate::index::{ModuleIndex, ModuleIndexBuilder};
use crate::resolver::{ResolvedRef, Resolver};

use super::core::ElixirDomain;

impl ElixirDomain {
    /// Resolve a reference against the registry.
    ///
    /// `ambient_module` is the module context the host recorded at the
    /// reference's source location (usually [`ElixirDomain::ambient_module`]
    /// at the time the reference was read); `fromdoc` is the document
    /// containing the reference. Returns `None` when nothing matches, in
    /// which case the host renders the reference as plain text.
    pub fn resolve(
        &self,
        role: RefRole,
        target: &str,
        ambient_module: Option<&str>,
        fromdoc: &str,
        search_order: SearchOrder,
    ) -> Option<ResolvedRef> {
        Resolver::new(&self.registry).resolve(role, target, ambient_module, fromdoc, search_order)
    }

    /// Build the module index, optionally restricted to a subset of
    /// documents for incremental regeneration.
    pub fn module_index(&self, docnames: Option<&HashSet<String>>) -> ModuleIndex {
        ModuleIndexBuilder::new(&self.registry)
            .with_common_prefixes(&self.config.common_prefixes)
            .with_deprecated_label(self.config.deprecated_label.clone())
            .build(docnames)
    }
}
