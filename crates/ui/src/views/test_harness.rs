use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use quiz_core::model::{
    AnswerFeedback, DocumentUpload, QuestionId, QuizResult, SessionId,
};
use services::{ApiError, QuizApi, QuizFlowService, QuizPayload};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz_flow::{QuizFlowView, QuizTestHandles};

/// Scripted stand-in for the quiz service.
pub struct StubQuizApi {
    pub payload_json: &'static str,
    pub feedback_json: &'static str,
    pub results_json: &'static str,
    pub fail_submit_with: Option<&'static str>,
}

impl Default for StubQuizApi {
    fn default() -> Self {
        Self {
            payload_json: r#"{
                "session_id": "abc123",
                "mcq_questions": [
                    {"type": "mcq", "id": "mcq_0", "question": "Pick one", "options": ["a", "b"], "difficulty": "Easy"}
                ],
                "tf_questions": [],
                "total_questions": 1,
                "filename": "notes.pdf",
                "analysis_method": "AI"
            }"#,
            feedback_json: r#"{"is_correct": true, "correct_answer": 0}"#,
            results_json:
                r#"{"score_percentage": 75.0, "correct_answers": 3, "total_questions": 4}"#,
            fail_submit_with: None,
        }
    }
}

#[async_trait]
impl QuizApi for StubQuizApi {
    async fn upload_file(&self, _upload: &DocumentUpload) -> Result<QuizPayload, ApiError> {
        Ok(serde_json::from_str(self.payload_json).expect("payload json"))
    }

    async fn submit_answer(
        &self,
        _session_id: &SessionId,
        _question_id: &QuestionId,
        _answer: &str,
    ) -> Result<AnswerFeedback, ApiError> {
        if let Some(message) = self.fail_submit_with {
            return Err(ApiError::Service {
                message: message.to_string(),
            });
        }
        Ok(serde_json::from_str(self.feedback_json).expect("feedback json"))
    }

    async fn get_results(&self, _session_id: &SessionId) -> Result<QuizResult, ApiError> {
        Ok(serde_json::from_str(self.results_json).expect("results json"))
    }
}

struct TestApp {
    quiz_flow: Arc<QuizFlowService>,
}

impl UiApp for TestApp {
    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! {
        QuizFlowView {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(api: StubQuizApi) -> ViewHarness {
    let quiz_flow = Arc::new(QuizFlowService::new(Arc::new(api)));
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp { quiz_flow });

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
