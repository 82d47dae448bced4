use dioxus::prelude::*;

use quiz_core::model::{QuizResult, format_score};

use crate::views::ViewError;
use crate::vm::QuizIntent;

#[component]
pub(crate) fn ResultsPanel(
    result: QuizResult,
    error: Option<ViewError>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let band = result.band();
    let score = format_score(result.score_percentage);

    rsx! {
        section { class: "results-section",
            div { class: "score-display",
                div { class: "score-circle score-{band.style_key()}", "{score}%" }
                h3 { "{band.label()}" }
                p {
                    "You answered "
                    strong { "{result.correct_answers}" }
                    " out of "
                    strong { "{result.total_questions}" }
                    " questions correctly."
                }
            }
            if let Some(err) = error {
                p { class: "error", "{err.message()}" }
            }
            div { class: "results-actions",
                button {
                    class: "btn btn-primary",
                    id: "restart-quiz",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Restart Quiz"
                }
                button {
                    class: "btn btn-secondary",
                    id: "new-quiz",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::NewQuiz),
                    "New Quiz"
                }
            }
        }
    }
}
