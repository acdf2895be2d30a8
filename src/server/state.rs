use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::placeholder::PlaceholderProvider;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub provider: Arc<PlaceholderProvider>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let provider = PlaceholderProvider::system(settings.placeholders.clone());
        Self::with_provider(settings, provider)
    }

    /// State with a custom provider (fixed clock, fake host metrics, ...)
    pub fn with_provider(settings: Settings, provider: PlaceholderProvider) -> Self {
        Self {
            settings: Arc::new(settings),
            provider: Arc::new(provider),
            start_time: Instant::now(),
        }
    }
}
