use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::debug;

/// A named agent mapping with its (insertion-ordered) options,
/// as registered in an [`AgentRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMapping {
    /// Name of the agent this mapping applies to.
    pub name: SmolStr,
    /// Options of the mapping, in insertion order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<SmolStr, SmolStr>,
}

impl AgentMapping {
    /// Create a new [`AgentMapping`] without options.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            options: IndexMap::new(),
        }
    }

    /// Add an option to this [`AgentMapping`],
    /// overwriting the value of an existing option with the same key.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Returns the value of the given option, if set.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(SmolStr::as_str)
    }
}

/// Append-only, ordered list of [`AgentMapping`]s.
///
/// The registry is plain configuration owned by the caller
/// (usually through a [`UserAgentClassifier`](crate::UserAgentClassifier)).
/// Registered mappings are kept for callers to look up,
/// they do not influence how user agents are classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentRegistry {
    mappings: Vec<AgentMapping>,
}

impl AgentRegistry {
    /// Create a new empty [`AgentRegistry`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an [`AgentMapping`], appending it after all earlier ones.
    pub fn register(&mut self, mapping: AgentMapping) -> &mut Self {
        debug!(
            name = %mapping.name,
            options = mapping.options.len(),
            "register agent mapping"
        );
        self.mappings.push(mapping);
        self
    }

    /// Register an [`AgentMapping`], consuming and returning the registry.
    #[must_use]
    pub fn with_mapping(mut self, mapping: AgentMapping) -> Self {
        self.register(mapping);
        self
    }

    /// Returns the first registered mapping with the given name,
    /// compared ASCII case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AgentMapping> {
        self.mappings
            .iter()
            .find(|mapping| mapping.name.eq_ignore_ascii_case(name))
    }

    /// Iterate over all registered mappings, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentMapping> {
        self.mappings.iter()
    }

    /// Returns the number of registered mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns `true` if no mappings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl<'a> IntoIterator for &'a AgentRegistry {
    type Item = &'a AgentMapping;
    type IntoIter = std::slice::Iter<'a, AgentMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}

impl Extend<AgentMapping> for AgentRegistry {
    fn extend<T: IntoIterator<Item = AgentMapping>>(&mut self, iter: T) {
        for mapping in iter {
            self.register(mapping);
        }
    }
}

impl FromIterator<AgentMapping> for AgentRegistry {
    fn from_iter<T: IntoIterator<Item = AgentMapping>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}
