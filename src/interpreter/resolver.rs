use linked_hash_map::LinkedHashMap;

/// Translates user-facing table names to the tables that hold them
pub trait TableNameResolver {
    /// Physical name, or `None` when the name is not an alias
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Resolver backed by the configured alias table; lookups ignore case
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    aliases: LinkedHashMap<String, String>,
}

impl AliasResolver {
    pub fn new(aliases: &LinkedHashMap<String, String>) -> Self {
        Self {
            aliases: aliases
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.clone()))
                .collect(),
        }
    }
}

impl TableNameResolver for AliasResolver {
    fn resolve(&self, name: &str) -> Option<String> {
        self.aliases.get(&name.to_lowercase()).cloned()
    }
}

/// Resolver that knows no aliases
pub struct IdentityResolver;

impl TableNameResolver for IdentityResolver {
    fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}
