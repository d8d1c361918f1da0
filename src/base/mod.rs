//! Foundation types for the exref domain core.
//!
//! This module provides the primitives used throughout the crate:
//! - [`ObjectType`] - Kinds of declarable objects (function, macro, module, ...)
//! - [`RefRole`] - Reference roles as they appear in content (`func:`, `mod:`, ...)
//! - [`SearchOrder`] - Lookup preference for module-relative references
//! - Name splitting helpers (`Name/Arity`, dotted module paths, `Mod:member`)
//! - Anchor construction (the `module-` prefix for module targets)
//!
//! This module has NO dependencies on other exref modules.

mod name;
mod object_type;

pub use name::{
    MODULE_ANCHOR_PREFIX, module_anchor, qualify_member, split_arity, split_module_prefix,
};
pub use object_type::{ObjectType, RefRole, SearchOrder};
