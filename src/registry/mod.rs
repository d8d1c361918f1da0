//! # Symbol Registry
//!
//! Build-wide tables of declared symbols: one table of objects keyed by
//! fully qualified name, one table of function overload sets keyed by base
//! name and arity, and one table of modules. Populated during the
//! registration pass, read by the resolver and the module index builder,
//! and pruned per document when the host invalidates a rebuilt document.

mod entry;
mod table;

pub use entry::{DuplicateObject, FunctionTarget, ModuleEntry, ObjectEntry};
pub use table::SymbolRegistry;
