pub mod catalog;
pub mod lab;
pub mod process;
pub mod react;

use crate::config::AppConfig;
use crate::explainer::Explainer;
use crate::ui::UiHandle;
use chemlab::core::catalog::Catalog;
use chemlab::engine::explain::ExplanationRequest;
use std::sync::Arc;
use std::time::Duration;

/// Everything a command needs besides its own arguments.
pub struct CommandContext {
    pub catalog: &'static Catalog,
    pub config: AppConfig,
    pub explainer: Arc<dyn Explainer>,
    pub ui: UiHandle,
}

impl CommandContext {
    /// Fetches an explanation behind a spinner that stays up for at least `min_duration`.
    pub async fn explain(
        &self,
        request: &ExplanationRequest,
        message: String,
        min_duration: Duration,
    ) -> String {
        self.ui.wait_started(message);
        let (text, ()) = tokio::join!(
            self.explainer.explain(request),
            tokio::time::sleep(min_duration)
        );
        self.ui.wait_finished();
        text
    }
}
