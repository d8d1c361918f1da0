//! # Signature parsing
//!
//! Declared signatures carry two names: the full name used for indexing and
//! anchors, and the short name shown in the rendered description. Type
//! signatures follow the `Name/Arity` convention, optionally prefixed with a
//! dotted module path (`Mod.Sub.typename/0`); the display name drops both
//! the arity and the module prefix. Function-kind declarations instead take
//! their display signature verbatim from the `sig` declaration option, so
//! only the kind annotation is computed here.

use crate::base::{split_arity, split_module_prefix};

/// A declared signature split into its indexable and displayable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSignature {
    /// The name registered in the object table, exactly as declared.
    pub full_name: String,
    /// The short name shown in the rendered description.
    pub display_name: String,
}

/// Parse a type declaration signature (`Mod.Sub.typename/0`).
///
/// The arity suffix is discarded for display; the part after the final dot
/// becomes the display name. A signature with no dotted prefix is already a
/// short name, and a signature with no arity suffix is used as-is.
pub fn parse_type_signature(sig: &str) -> ParsedSignature {
    let name = match split_arity(sig) {
        Some((name, _arity)) => name,
        None => sig,
    };
    let display_name = match split_module_prefix(name) {
        Some((_prefix, short)) => short,
        None => name,
    };
    ParsedSignature {
        full_name: sig.to_string(),
        display_name: display_name.to_string(),
    }
}
