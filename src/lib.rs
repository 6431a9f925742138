pub mod api;
pub mod config;
pub mod error;
pub mod keyword_log;
pub mod keywords;
pub mod tagger;

use std::sync::Arc;
use keyword_log::KeywordLog;
use tagger::NounTagger;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub tagger: Arc<dyn NounTagger>,
    pub log: Arc<KeywordLog>,
}

impl AppState {
    pub fn new(tagger: Arc<dyn NounTagger>, log: KeywordLog) -> Self {
        Self {
            tagger,
            log: Arc::new(log),
        }
    }
}
