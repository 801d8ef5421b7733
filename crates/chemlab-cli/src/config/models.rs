use chemlab::engine::config::SessionConfig;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationSettings {
    pub model: String,
    pub endpoint: String,
    pub language: String,
    pub timeout: Duration,
    /// `None` selects the offline explainer.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub explanation: ExplanationSettings,
    pub session: SessionConfig,
}
