use super::{AgentRegistry, Classification, ParsedUserAgent, classify};
use std::sync::Arc;
use tracing::trace;

/// Classifier of user-agent strings, holding the caller's [`AgentRegistry`].
///
/// Classification itself is stateless: this type exists so that
/// agent mappings are owned together with the classifier using them,
/// instead of living in process-wide mutable state.
#[derive(Debug, Clone, Default)]
pub struct UserAgentClassifier {
    registry: AgentRegistry,
}

impl UserAgentClassifier {
    /// Create a new [`UserAgentClassifier`] with an empty [`AgentRegistry`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [`AgentRegistry`] of this classifier.
    #[must_use]
    pub fn with_registry(mut self, registry: AgentRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Returns a reference to the [`AgentRegistry`].
    #[must_use]
    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Returns a mutable reference to the [`AgentRegistry`].
    pub fn registry_mut(&mut self) -> &mut AgentRegistry {
        &mut self.registry
    }

    /// Resolve all attributes of the given user-agent string.
    #[must_use]
    pub fn classify(&self, ua: &str) -> Classification {
        trace!(mappings = self.registry.len(), "classify user-agent");
        classify(ua)
    }

    /// Create a [`ParsedUserAgent`] record for the given user-agent string.
    pub fn parse(&self, ua: impl Into<Arc<str>>) -> ParsedUserAgent {
        let ua = ParsedUserAgent::new(ua);
        trace!(mappings = self.registry.len(), len = ua.as_str().len(), "parse user-agent");
        ua
    }
}
