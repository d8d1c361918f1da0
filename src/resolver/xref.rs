use tracing::{trace, warn};

use crate::base::{RefRole, SearchOrder, module_anchor, qualify_member, split_arity, split_module_prefix};
use crate::registry::SymbolRegistry;

/// A successfully resolved reference: where to link and what to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    /// The document containing the target.
    pub docname: String,
    /// The anchor id inside that document.
    pub anchor: String,
    /// The link title (tooltip text in HTML output).
    pub title: String,
}

/// Resolver provides reference resolution against a registry snapshot.
///
/// All lookups are read-only; the registration pass must be complete before
/// resolution starts.
pub struct Resolver<'a> {
    registry: &'a SymbolRegistry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a SymbolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SymbolRegistry {
        self.registry
    }

    // ============================================================
    // Primary Resolution API
    // ============================================================

    /// Resolve a reference to a link target, or `None` when no registered
    /// symbol matches.
    ///
    /// `ambient_module` is the module context recorded at the reference's
    /// source location; `fromdoc` is the document containing the reference.
    pub fn resolve(
        &self,
        role: RefRole,
        target: &str,
        ambient_module: Option<&str>,
        fromdoc: &str,
        search_order: SearchOrder,
    ) -> Option<ResolvedRef> {
        trace!(
            "[RESOLVE] role={} target='{}' ambient={:?} from={}",
            role.as_str(),
            target,
            ambient_module,
            fromdoc
        );
        match role {
            RefRole::Type => self.resolve_dotted(target, ambient_module, fromdoc, true),
            RefRole::Func | RefRole::Macro => {
                self.resolve_dotted(target, ambient_module, fromdoc, false)
            }
            RefRole::Mod => self.resolve_module(target),
            RefRole::Callb | RefRole::Any => {
                self.resolve_object(target, ambient_module, search_order)
            }
        }
    }

    // ============================================================
    // Role-specific algorithms
    // ============================================================

    /// Dotted resolution for `type`, `func`, and `macro` references.
    ///
    /// A module-qualified target (`Mod.Sub.name/1`) links into the document
    /// owning `Mod.Sub`; an unqualified target is assumed to be declared in
    /// the referencing document itself, qualified with the ambient module.
    /// `strip_arity_in_title` drops the `/arity` suffix from the displayed
    /// title (type references show `keyword`, not `keyword/0`).
    fn resolve_dotted(
        &self,
        target: &str,
        ambient_module: Option<&str>,
        fromdoc: &str,
        strip_arity_in_title: bool,
    ) -> Option<ResolvedRef> {
        let (docname, anchor) = match split_module_prefix(target) {
            Some((prefix, _local)) => {
                let docname = self.registry.find_module_docname(prefix)?;
                (docname.to_string(), target.to_string())
            }
            None => {
                // No module prefix: the symbol lives in the referencing
                // document. A missing ambient module degrades to the bare
                // name rather than failing.
                let anchor = match ambient_module {
                    Some(modname) => format!("{modname}.{target}"),
                    None => target.to_string(),
                };
                (fromdoc.to_string(), anchor)
            }
        };

        let title = if strip_arity_in_title {
            split_arity(target).map_or(target, |(name, _)| name).to_string()
        } else {
            target.to_string()
        };

        Some(ResolvedRef {
            docname,
            anchor,
            title,
        })
    }

    /// Direct module lookup for `mod` references.
    ///
    /// The title is composed as `"(platform) synopsis (deprecated)"` with
    /// each part included only when present.
    fn resolve_module(&self, target: &str) -> Option<ResolvedRef> {
        let entry = self.registry.module(target)?;

        let mut title = String::new();
        if !entry.platform.is_empty() {
            title.push_str(&format!("({}) ", entry.platform));
        }
        title.push_str(&entry.synopsis);
        if entry.deprecated {
            title.push_str(" (deprecated)");
        }

        Some(ResolvedRef {
            docname: entry.docname.clone(),
            anchor: module_anchor(target),
            title,
        })
    }

    /// Generic object/function lookup, used for `callb` and catch-all roles.
    ///
    /// An unqualified target is tried both under the ambient module and
    /// bare, in the order given by `search_order`. A direct object hit wins
    /// over the overload-set lookup; the overload-set lookup defaults a
    /// missing arity to the minimum registered one.
    fn resolve_object(
        &self,
        target: &str,
        ambient_module: Option<&str>,
        search_order: SearchOrder,
    ) -> Option<ResolvedRef> {
        if target.is_empty() {
            return None;
        }

        let qualified = qualify_member(ambient_module, target);
        let mut candidates: Vec<&str> = match search_order {
            SearchOrder::LocalFirst => vec![qualified.as_str(), target],
            SearchOrder::GlobalFirst => vec![target, qualified.as_str()],
        };
        candidates.dedup();

        for name in &candidates {
            if let Some(entry) = self.registry.object(name) {
                trace!("[RESOLVE] direct object hit '{}'", name);
                return Some(ResolvedRef {
                    docname: entry.docname.clone(),
                    anchor: (*name).to_string(),
                    title: (*name).to_string(),
                });
            }
        }

        let (base, arity) = match split_arity(target) {
            Some((base, text)) => match text.parse::<u32>() {
                Ok(arity) => (base, Some(arity)),
                Err(_) => {
                    warn!("[RESOLVE] malformed arity suffix in '{}'", target);
                    return None;
                }
            },
            None => (target, None),
        };

        let qualified_base = qualify_member(ambient_module, base);
        let mut fname_candidates: Vec<&str> = match search_order {
            SearchOrder::LocalFirst => vec![qualified_base.as_str(), base],
            SearchOrder::GlobalFirst => vec![base, qualified_base.as_str()],
        };
        fname_candidates.dedup();

        for fname in &fname_candidates {
            if let Some(function) = self.registry.function_target(fname, arity) {
                trace!("[RESOLVE] overload hit '{}' arity={:?}", fname, arity);
                return Some(ResolvedRef {
                    docname: function.docname.clone(),
                    anchor: function.targetname.clone(),
                    title: function.targetname.clone(),
                });
            }
        }

        None
    }
}
