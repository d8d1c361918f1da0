use thiserror::Error;
use tracing::warn;

use crate::base::{ObjectType, module_anchor, qualify_member, split_arity};
use crate::diagnostics::{Diagnostic, codes};
use crate::registry::ModuleEntry;
use crate::signature::parse_type_signature;

use super::core::ElixirDomain;

/// Options recognized by a declaration.
#[derive(Debug, Clone, Default)]
pub struct DeclareOptions {
    /// Explicit display signature for function-kind declarations. The
    /// declared argument list is only used as the indexable name.
    pub sig: Option<String>,
    /// Module grouping override; accepted for host compatibility, not
    /// consumed by the core.
    pub mtype: Option<String>,
    pub platform: Option<String>,
    pub synopsis: Option<String>,
    pub deprecated: bool,
    /// Register the symbol but keep it out of generated indexes.
    pub noindex: bool,
}

/// What a declaration contributes to the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declared {
    /// The name registered in the object/module tables.
    pub fullname: String,
    /// Anchor id to attach to the description (modules use the
    /// `module-` prefix).
    pub anchor: String,
    /// Short name shown in the description.
    pub display_name: String,
    /// Pretty kind annotation (`"(function)"` etc.), when the kind has one.
    pub annotation: Option<&'static str>,
    /// Entry text for the host's general index, unless suppressed.
    pub index_text: Option<String>,
}

/// A declaration the host must skip (local failure, never fatal).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclareError {
    #[error("empty declaration name")]
    EmptyName,
    #[error("{kind} declaration '{signature}' requires an explicit display signature")]
    MissingSignature {
        kind: &'static str,
        signature: String,
    },
    #[error("malformed arity suffix in declaration '{signature}'")]
    MalformedArity { signature: String },
}

impl ElixirDomain {
    /// Process one declaration from `docname`.
    ///
    /// Registers the symbol and returns the anchor, display name, and
    /// index text the host attaches to the rendered description. Errors
    /// are local to the one declaration.
    pub fn declare(
        &mut self,
        docname: &str,
        kind: ObjectType,
        signature: &str,
        options: &DeclareOptions,
    ) -> Result<Declared, DeclareError> {
        let signature = signature.trim();
        if signature.is_empty() {
            return Err(DeclareError::EmptyName);
        }

        match kind {
            ObjectType::Module => Ok(self.declare_module(docname, signature, options)),
            ObjectType::Type => Ok(self.declare_type(docname, signature, options)),
            ObjectType::Function | ObjectType::Callback | ObjectType::Macro => {
                self.declare_function(docname, kind, signature, options)
            }
        }
    }

    fn declare_module(
        &mut self,
        docname: &str,
        modname: &str,
        options: &DeclareOptions,
    ) -> Declared {
        let entry = ModuleEntry {
            docname: docname.to_string(),
            synopsis: options.synopsis.clone().unwrap_or_default(),
            platform: options.platform.clone().unwrap_or_default(),
            deprecated: options.deprecated,
        };
        if let Some(previous) = self.registry.register_module(modname, entry) {
            if previous.docname != docname {
                warn!(
                    "[DECLARE] module '{}' re-registered by {} (was {})",
                    modname, docname, previous.docname
                );
                self.diagnostics.push(
                    Diagnostic::warning(
                        docname,
                        format!(
                            "module {modname} already documented in {}",
                            previous.docname
                        ),
                    )
                    .with_code(codes::DUPLICATE_MODULE)
                    .with_related_docname(previous.docname),
                );
            }
        }

        self.ambient_module = Some(modname.to_string());
        self.ambient_docname = Some(docname.to_string());

        let index_text = (!options.noindex).then(|| format!("{modname} (module)"));

        Declared {
            fullname: modname.to_string(),
            anchor: module_anchor(modname),
            display_name: modname.to_string(),
            annotation: None,
            index_text,
        }
    }

    fn declare_type(&mut self, docname: &str, signature: &str, options: &DeclareOptions) -> Declared {
        let parsed = parse_type_signature(signature);
        self.register_object_entry(docname, &parsed.full_name, ObjectType::Type, options);

        Declared {
            anchor: parsed.full_name.clone(),
            fullname: parsed.full_name,
            display_name: parsed.display_name,
            annotation: None,
            index_text: None,
        }
    }

    fn declare_function(
        &mut self,
        docname: &str,
        kind: ObjectType,
        signature: &str,
        options: &DeclareOptions,
    ) -> Result<Declared, DeclareError> {
        let display_name =
            options
                .sig
                .clone()
                .ok_or_else(|| DeclareError::MissingSignature {
                    kind: kind.as_str(),
                    signature: signature.to_string(),
                })?;

        let fullname = qualify_member(self.ambient_module.as_deref(), signature);

        // A `name/arity` signature also joins the overload set for the
        // base name; arity-less signatures index as plain objects only.
        if let Some((fname, arity_text)) = split_arity(&fullname) {
            let arity =
                arity_text
                    .parse::<u32>()
                    .map_err(|_| DeclareError::MalformedArity {
                        signature: signature.to_string(),
                    })?;
            self.registry
                .register_function(fname, arity, fullname.clone(), docname);
        }

        self.register_object_entry(docname, &fullname, kind, options);

        let index_text = match kind {
            ObjectType::Function if !options.noindex => Some(match self.ambient_module.as_deref() {
                Some(modname) => format!("{signature}() (in module {modname})"),
                None => format!("{signature}() (built-in function)"),
            }),
            _ => None,
        };

        Ok(Declared {
            anchor: fullname.clone(),
            fullname,
            display_name,
            annotation: kind.annotation(),
            index_text,
        })
    }

    /// Shared object-table registration with duplicate reporting and
    /// `noindex` bookkeeping.
    fn register_object_entry(
        &mut self,
        docname: &str,
        fullname: &str,
        kind: ObjectType,
        options: &DeclareOptions,
    ) {
        if let Some(conflict) = self.registry.register_object(fullname, docname, kind) {
            warn!(
                "[DECLARE] duplicate object description of '{}' in {} (other instance in {})",
                conflict.fullname, conflict.new_docname, conflict.previous_docname
            );
            self.diagnostics.push(
                Diagnostic::warning(
                    docname,
                    format!(
                        "duplicate object description of {}, other instance in {}, use noindex for one of them",
                        conflict.fullname, conflict.previous_docname
                    ),
                )
                .with_code(codes::DUPLICATE_OBJECT)
                .with_related_docname(conflict.previous_docname),
            );
        }

        if options.noindex {
            self.noindex.insert(fullname.to_string());
        } else {
            self.noindex.remove(fullname);
        }
    }
}
