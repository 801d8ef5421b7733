//! Backends that turn explanation requests into text.
//!
//! An explainer never fails from the caller's point of view: transport problems,
//! rejected requests and empty answers all resolve to the request's fallback text.

mod gemini;

pub use gemini::GeminiExplainer;

use crate::config::ExplanationSettings;
use crate::error::Result;
use async_trait::async_trait;
use chemlab::engine::explain::{ExplanationRequest, UnavailableReason};
use std::sync::Arc;
use tracing::info;

#[async_trait]
pub trait Explainer: Send + Sync {
    fn name(&self) -> &str;

    async fn explain(&self, request: &ExplanationRequest) -> String;
}

/// Used when no API key is configured; answers every request with its fallback.
pub struct OfflineExplainer;

#[async_trait]
impl Explainer for OfflineExplainer {
    fn name(&self) -> &str {
        "offline"
    }

    async fn explain(&self, request: &ExplanationRequest) -> String {
        request.fallback(UnavailableReason::NotConfigured).to_string()
    }
}

/// Picks the backend for the configured settings.
pub fn from_settings(settings: &ExplanationSettings) -> Result<Arc<dyn Explainer>> {
    match &settings.api_key {
        Some(api_key) => {
            info!("Explanations provided by model '{}'.", settings.model);
            Ok(Arc::new(GeminiExplainer::new(settings, api_key.clone())?))
        }
        None => {
            info!("No API key configured; explanations are unavailable.");
            Ok(Arc::new(OfflineExplainer))
        }
    }
}
