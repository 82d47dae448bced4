use std::sync::Arc;

use services::QuizFlowService;

pub trait UiApp: Send + Sync {
    fn quiz_flow(&self) -> Arc<QuizFlowService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_flow: Arc<QuizFlowService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_flow: app.quiz_flow(),
        }
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
