/// Build-level configuration for the domain.
#[derive(Debug, Clone)]
pub struct DomainConfig {
    /// Common module-name prefixes stripped in the module index before
    /// grouping (the host's `modindex_common_prefix` setting).
    pub common_prefixes: Vec<String>,
    /// Localized qualifier attached to deprecated modules in the index.
    pub deprecated_label: String,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            common_prefixes: Vec::new(),
            deprecated_label: "Deprecated".to_string(),
        }
    }
}
