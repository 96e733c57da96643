use std::sync::Arc;

use crate::resume::dictionary::SpellDictionary;
use crate::resume::store::ResumeStore;
use crate::resume::suggestions::SuggestionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The only shared mutable resource. Never persisted.
    pub store: Arc<ResumeStore>,
    /// Pluggable text-generation backend. Default: `LlmClient`.
    pub suggester: Arc<dyn SuggestionProvider>,
    /// Pluggable spellcheck dictionary. Default: `WordFrequencyDictionary`.
    pub dictionary: Arc<dyn SpellDictionary>,
}
