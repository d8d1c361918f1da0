/// Kind of a declarable object in the Elixir domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Function,
    Callback,
    Macro,
    Type,
    Module,
}

impl ObjectType {
    /// The directive name used by the host (`function`, `callback`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Function => "function",
            ObjectType::Callback => "callback",
            ObjectType::Macro => "macro",
            ObjectType::Type => "type",
            ObjectType::Module => "module",
        }
    }

    /// Parse a directive name back into an object type.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "function" => Some(ObjectType::Function),
            "callback" => Some(ObjectType::Callback),
            "macro" => Some(ObjectType::Macro),
            "type" => Some(ObjectType::Type),
            "module" => Some(ObjectType::Module),
            _ => None,
        }
    }

    /// Pretty kind annotation rendered next to the display name.
    ///
    /// Types and modules carry no annotation; their rendering is owned by
    /// the host.
    pub fn annotation(&self) -> Option<&'static str> {
        match self {
            ObjectType::Function => Some("(function)"),
            ObjectType::Callback => Some("(callback)"),
            ObjectType::Macro => Some("(macro)"),
            ObjectType::Type | ObjectType::Module => None,
        }
    }

    /// The reference role that links to objects of this type.
    pub fn role(&self) -> RefRole {
        match self {
            ObjectType::Function => RefRole::Func,
            ObjectType::Callback => RefRole::Callb,
            ObjectType::Macro => RefRole::Macro,
            ObjectType::Type => RefRole::Type,
            ObjectType::Module => RefRole::Mod,
        }
    }

    /// Whether objects of this type need an argument list in signatures.
    pub fn needs_arglist(&self) -> bool {
        matches!(self, ObjectType::Function)
    }
}

/// Role of a reference as written in content (`role:target`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefRole {
    Func,
    Callb,
    Macro,
    Type,
    Mod,
    /// Catch-all role resolved through the generic object/function lookup.
    Any,
}

impl RefRole {
    /// The role name used by the host (`func`, `callb`, `macro`, `type`, `mod`).
    pub fn as_str(&self) -> &'static str {
        match self {
            RefRole::Func => "func",
            RefRole::Callb => "callb",
            RefRole::Macro => "macro",
            RefRole::Type => "type",
            RefRole::Mod => "mod",
            RefRole::Any => "any",
        }
    }

    /// Parse a role name back into a role. Unknown names map to [`RefRole::Any`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "func" => RefRole::Func,
            "callb" => RefRole::Callb,
            "macro" => RefRole::Macro,
            "type" => RefRole::Type,
            "mod" => RefRole::Mod,
            _ => RefRole::Any,
        }
    }
}

/// Candidate order for module-relative lookups in the generic fallback.
///
/// `LocalFirst` tries the ambient-module-qualified name before the bare
/// name; `GlobalFirst` is the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    #[default]
    LocalFirst,
    GlobalFirst,
}
