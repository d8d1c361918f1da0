/// Position of an entry in the module hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexEntryKind {
    /// A module with no parent/child relationship in the index.
    Normal,
    /// A module listed with its submodules grouped beneath it.
    GroupHead,
    /// A submodule, hidden when the index is collapsed.
    Sub,
}

impl IndexEntryKind {
    /// Numeric subtype code used by the host's index template (0/1/2).
    pub fn code(&self) -> u8 {
        match self {
            IndexEntryKind::Normal => 0,
            IndexEntryKind::GroupHead => 1,
            IndexEntryKind::Sub => 2,
        }
    }
}

/// One row of the module index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Display name, with any stripped common prefix re-attached.
    pub name: String,
    pub kind: IndexEntryKind,
    /// Owning document; empty for synthesized placeholder parents.
    pub docname: String,
    /// Anchor id inside the owning document; empty for placeholders.
    pub anchor: String,
    pub platform: String,
    /// Localized deprecation qualifier, or empty.
    pub qualifier: String,
    pub synopsis: String,
}

impl IndexEntry {
    /// A synthesized parent row for a submodule whose parent module is not
    /// part of this build.
    pub(super) fn placeholder(name: String) -> Self {
        Self {
            name,
            kind: IndexEntryKind::GroupHead,
            docname: String::new(),
            anchor: String::new(),
            platform: String::new(),
            qualifier: String::new(),
            synopsis: String::new(),
        }
    }
}

/// All entries bucketed under one initial letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGroup {
    /// Lowercased first character of the (stripped) module names.
    pub letter: String,
    pub entries: Vec<IndexEntry>,
}

/// The generated module index: letter groups plus the collapse hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleIndex {
    pub groups: Vec<IndexGroup>,
    /// Whether the renderer should start with submodules hidden.
    pub collapse: bool,
}
