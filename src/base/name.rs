//! Name splitting for Elixir symbol references.
//!
//! Three separators appear in indexed names:
//! - `.` joins module path segments (`Mod.Sub`)
//! - `:` joins a module name to a member name (`Mod.Sub:member/1`)
//! - `/` joins a base name to its arity (`member/1`)

/// Anchor prefix for module targets (`module-Foo.Bar`).
pub const MODULE_ANCHOR_PREFIX: &str = "module-";

/// Build the anchor id for a module name.
pub fn module_anchor(modname: &str) -> String {
    format!("{MODULE_ANCHOR_PREFIX}{modname}")
}

/// Split a name at the last `.` into `(module_prefix, local_name)`.
///
/// Returns `None` when the name carries no dotted prefix.
pub fn split_module_prefix(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once('.')
}

/// Split a name at the last `/` into `(base_name, arity_text)`.
///
/// The arity text is unparsed; callers decide how to treat non-numeric
/// suffixes. Returns `None` when the name carries no arity suffix.
pub fn split_arity(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once('/')
}

/// Qualify a member name with its module (`Mod:member`).
///
/// A name that already contains a `:` separator, or a missing module
/// context, leaves the name unchanged.
pub fn qualify_member(modname: Option<&str>, name: &str) -> String {
    match modname {
        Some(modname) if !name.contains(':') => format!("{modname}:{name}"),
        _ => name.to_string(),
    }
}
