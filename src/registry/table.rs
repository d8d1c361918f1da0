use std::collections::BTreeMap;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::base::ObjectType;

use super::entry::{DuplicateObject, FunctionTarget, ModuleEntry, ObjectEntry};

/// Build-wide registry of declared symbols.
///
/// Three tables are kept in lockstep:
/// - `objects`: fullname → owning document + object kind. Insertion-ordered
///   so the host's general index enumerates deterministically.
/// - `functions`: base name → arity → link target. `BTreeMap` keeps arities
///   sorted, so the minimum registered arity is the first key.
/// - `modules`: module name → module metadata.
///
/// The registry is a pure data structure: it never logs conflicts or skips
/// registrations. Conflict reports are returned to the caller.
pub struct SymbolRegistry {
    objects: IndexMap<String, ObjectEntry>,
    functions: FxHashMap<String, BTreeMap<u32, FunctionTarget>>,
    modules: FxHashMap<String, ModuleEntry>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self {
            objects: IndexMap::new(),
            functions: FxHashMap::default(),
            modules: FxHashMap::default(),
        }
    }

    // ============================================================
    // Registration pass
    // ============================================================

    /// Insert or overwrite an object entry.
    ///
    /// Re-registering a fullname from a different document is a non-fatal
    /// conflict: the latest registration wins and the displaced owner is
    /// reported back for the caller to warn about.
    pub fn register_object(
        &mut self,
        fullname: impl Into<String>,
        docname: &str,
        objtype: ObjectType,
    ) -> Option<DuplicateObject> {
        let fullname = fullname.into();
        let previous = self.objects.insert(
            fullname.clone(),
            ObjectEntry {
                docname: docname.to_string(),
                objtype,
            },
        );
        trace!("[REGISTRY] object '{}' registered by {}", fullname, docname);

        match previous {
            Some(previous) if previous.docname != docname => Some(DuplicateObject {
                fullname,
                previous_docname: previous.docname,
                new_docname: docname.to_string(),
            }),
            _ => None,
        }
    }

    /// Insert one arity of a function, macro, or callback overload set.
    ///
    /// The arity map is created on first use; an existing arity is
    /// overwritten (rebuild of the same declaration).
    pub fn register_function(
        &mut self,
        fname: impl Into<String>,
        arity: u32,
        targetname: impl Into<String>,
        docname: &str,
    ) {
        let fname = fname.into();
        trace!("[REGISTRY] function '{}/{}' registered by {}", fname, arity, docname);
        self.functions.entry(fname).or_default().insert(
            arity,
            FunctionTarget {
                targetname: targetname.into(),
                docname: docname.to_string(),
            },
        );
    }

    /// Insert or overwrite a module entry.
    ///
    /// Returns the replaced entry so the caller can detect an owner change.
    pub fn register_module(
        &mut self,
        modname: impl Into<String>,
        entry: ModuleEntry,
    ) -> Option<ModuleEntry> {
        let modname = modname.into();
        trace!("[REGISTRY] module '{}' registered by {}", modname, entry.docname);
        self.modules.insert(modname, entry)
    }

    // ============================================================
    // Invalidation
    // ============================================================

    /// Remove every entry owned by `docname` from all three tables.
    ///
    /// Any function whose arity map becomes empty is removed entirely, so
    /// no residual empty sub-maps are left behind.
    pub fn clear_doc(&mut self, docname: &str) {
        self.objects.retain(|_, entry| entry.docname != docname);
        self.modules.retain(|_, entry| entry.docname != docname);
        self.functions.retain(|_, arities| {
            arities.retain(|_, target| target.docname != docname);
            !arities.is_empty()
        });
    }

    // ============================================================
    // Lookup (resolution and index passes)
    // ============================================================

    /// The owning document of a module, if registered.
    ///
    /// Empty module names never match.
    pub fn find_module_docname(&self, modname: &str) -> Option<&str> {
        if modname.is_empty() {
            return None;
        }
        self.modules.get(modname).map(|entry| entry.docname.as_str())
    }

    /// Full metadata of a registered module.
    pub fn module(&self, modname: &str) -> Option<&ModuleEntry> {
        self.modules.get(modname)
    }

    /// Exact object lookup by fully qualified name.
    pub fn object(&self, fullname: &str) -> Option<&ObjectEntry> {
        self.objects.get(fullname)
    }

    /// Look up one arity of an overload set.
    ///
    /// With no explicit arity, the minimum registered arity is used.
    pub fn function_target(&self, fname: &str, arity: Option<u32>) -> Option<&FunctionTarget> {
        let arities = self.functions.get(fname)?;
        match arity {
            Some(arity) => arities.get(&arity),
            None => arities.first_key_value().map(|(_, target)| target),
        }
    }

    /// All objects in registration order.
    pub fn objects(&self) -> impl Iterator<Item = (&str, &ObjectEntry)> {
        self.objects.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// All modules, in no particular order.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &ModuleEntry)> {
        self.modules.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Number of distinct overload-set base names.
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
