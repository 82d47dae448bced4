use quiz_core::model::{
    Difficulty, Question, QuestionId, QuizSession, SelectedAnswer, SessionId,
};
use services::{QuizSource, StartedQuiz};

use super::test_harness::{StubQuizApi, drive_dom, setup_view_harness};
use crate::vm::{QuizIntent, QuizVm};

fn mcq(options: &[&str]) -> Question {
    Question::MultipleChoice {
        id: QuestionId::text("mcq_0"),
        question: "Pick one".into(),
        options: options.iter().map(ToString::to_string).collect(),
        difficulty: Difficulty::Easy,
    }
}

fn tf() -> Question {
    Question::TrueFalse {
        id: QuestionId::text("tf_0"),
        statement: "Water is wet".into(),
        difficulty: Difficulty::Medium,
    }
}

fn quiz_vm(mcq_batch: Vec<Question>, tf_batch: Vec<Question>) -> QuizVm {
    QuizVm::new(StartedQuiz {
        session: QuizSession::new(SessionId::new("abc123"), mcq_batch, tf_batch)
            .expect("non-empty quiz"),
        source: QuizSource {
            filename: "notes.pdf".into(),
            analysis_method: "AI".into(),
            warning: None,
        },
    })
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_smoke_renders_controls() {
    let mut harness = setup_view_harness(StubQuizApi::default());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Generate Quiz"), "missing generate button in {html}");
    assert!(
        html.contains("Choose a PDF, DOCX, or TXT"),
        "missing upload hint in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(StubQuizApi::default());
    harness.rebuild();

    harness
        .handles
        .start()
        .call(quiz_vm(vec![mcq(&["a", "b"])], vec![tf()]));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing counter in {html}");
    assert!(html.contains("A) a"), "missing first option in {html}");
    assert!(html.contains("B) b"), "missing second option in {html}");
    assert!(html.contains("difficulty-easy"), "missing badge in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_marks_options_and_shows_feedback() {
    let api = StubQuizApi {
        feedback_json: r#"{"is_correct": false, "correct_answer": 0}"#,
        ..StubQuizApi::default()
    };
    let mut harness = setup_view_harness(api);
    harness.rebuild();

    harness
        .handles
        .start()
        .call(quiz_vm(vec![mcq(&["a", "b"])], Vec::new()));
    drive_dom(&mut harness.dom);

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuizIntent::Select(SelectedAnswer::Choice(1)));
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Submit);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("option-button correct"), "missing correct mark in {html}");
    assert!(
        html.contains("option-button selected incorrect"),
        "missing incorrect mark in {html}"
    );
    assert!(html.contains("❌ Incorrect!"), "missing headline in {html}");
    assert!(html.contains("Correct answer: A) a"), "missing correction in {html}");
    assert!(html.contains("Finish Quiz"), "missing finish button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_shows_band_and_score() {
    let mut harness = setup_view_harness(StubQuizApi::default());
    harness.rebuild();

    harness
        .handles
        .start()
        .call(quiz_vm(vec![mcq(&["a", "b"])], Vec::new()));
    drive_dom(&mut harness.dom);

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuizIntent::Select(SelectedAnswer::Choice(0)));
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Submit);
    harness.drive_async().await;
    harness.drive_async().await;
    dispatch.call(QuizIntent::Finish);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("75%"), "missing score in {html}");
    assert!(html.contains("score-good"), "missing score class in {html}");
    assert!(html.contains("Good Job!"), "missing band label in {html}");
    assert!(html.contains("out of"), "missing summary line in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart in {html}");
    assert!(html.contains("New Quiz"), "missing new quiz in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn restart_returns_to_the_first_question() {
    let mut harness = setup_view_harness(StubQuizApi::default());
    harness.rebuild();

    harness
        .handles
        .start()
        .call(quiz_vm(vec![mcq(&["a", "b"])], Vec::new()));
    drive_dom(&mut harness.dom);

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuizIntent::Select(SelectedAnswer::Choice(0)));
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Submit);
    harness.drive_async().await;
    dispatch.call(QuizIntent::Finish);
    harness.drive_async().await;
    harness.drive_async().await;

    dispatch.call(QuizIntent::Restart);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Question 1 of 1"), "missing counter in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submit_shows_the_service_message_verbatim() {
    let api = StubQuizApi {
        fail_submit_with: Some("Invalid session"),
        ..StubQuizApi::default()
    };
    let mut harness = setup_view_harness(api);
    harness.rebuild();

    harness
        .handles
        .start()
        .call(quiz_vm(vec![mcq(&["a", "b"])], Vec::new()));
    drive_dom(&mut harness.dom);

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuizIntent::Select(SelectedAnswer::Choice(0)));
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Submit);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Invalid session"), "missing error in {html}");
    // The question stays answerable.
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
}
