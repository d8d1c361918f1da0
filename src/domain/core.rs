use std::collections::HashSet;

use crate::base::ObjectType;
use crate::diagnostics::Diagnostic;
use crate::registry::SymbolRegistry;

use super::config::DomainConfig;

/// The Elixir language domain: registry, configuration, ambient module
/// context, and registration diagnostics, owned by the surrounding build.
pub struct ElixirDomain {
    pub(super) registry: SymbolRegistry,
    pub(super) config: DomainConfig,
    /// Module context established by the most recent module declaration.
    pub(super) ambient_module: Option<String>,
    /// The document that established the ambient module context.
    pub(super) ambient_docname: Option<String>,
    /// Fullnames excluded from the general index by `noindex`.
    pub(super) noindex: HashSet<String>,
    pub(super) diagnostics: Vec<Diagnostic>,
}

impl ElixirDomain {
    pub fn new() -> Self {
        Self::with_config(DomainConfig::default())
    }

    pub fn with_config(config: DomainConfig) -> Self {
        Self {
            registry: SymbolRegistry::new(),
            config,
            ambient_module: None,
            ambient_docname: None,
            noindex: HashSet::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Read-only access to the underlying registry.
    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// The module context recorded for declarations and references that
    /// follow the most recent module declaration.
    pub fn ambient_module(&self) -> Option<&str> {
        self.ambient_module.as_deref()
    }

    /// Override the ambient module context (the host restores it when it
    /// re-enters a partially processed document).
    pub fn set_ambient_module(&mut self, docname: &str, modname: Option<String>) {
        self.ambient_docname = modname.is_some().then(|| docname.to_string());
        self.ambient_module = modname;
    }

    /// The owning document of a module, or `None`.
    pub fn find_module_docname(&self, modname: &str) -> Option<&str> {
        self.registry.find_module_docname(modname)
    }

    /// Diagnostics collected during registration, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the collected diagnostics (the host reports them per pass).
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Remove every registration owned by `docname`, before its
    /// declarations are replayed on a rebuild.
    pub fn clear_doc(&mut self, docname: &str) {
        self.registry.clear_doc(docname);

        let registry = &self.registry;
        self.noindex.retain(|fullname| registry.object(fullname).is_some());
        self.diagnostics.retain(|diagnostic| diagnostic.docname != docname);

        if self.ambient_docname.as_deref() == Some(docname) {
            self.ambient_module = None;
            self.ambient_docname = None;
        }
    }

    /// Enumerate indexable objects for the host's general index, in
    /// registration order. `noindex` declarations are skipped.
    pub fn objects(&self) -> impl Iterator<Item = ObjectRecord<'_>> {
        self.registry
            .objects()
            .filter(|(fullname, _)| !self.noindex.contains(*fullname))
            .map(|(fullname, entry)| ObjectRecord {
                name: fullname,
                dispname: fullname,
                objtype: entry.objtype,
                docname: &entry.docname,
                anchor: fullname,
                priority: 1,
            })
    }
}

impl Default for ElixirDomain {
    fn default() -> Self {
        Self::new()
    }
}

/// One row of the host's general object index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectRecord<'a> {
    pub name: &'a str,
    pub dispname: &'a str,
    pub objtype: ObjectType,
    pub docname: &'a str,
    pub anchor: &'a str,
    /// Relative ranking in search results (1 = default).
    pub priority: u8,
}
