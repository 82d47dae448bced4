use dioxus::prelude::*;

use quiz_core::model::{Question, QuizResult, SelectedAnswer};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::results::ResultsPanel;
use crate::views::upload::UploadPanel;
use crate::vm::{QuizIntent, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Which of the three screens is on display.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Stage {
    Upload,
    Quiz,
    Results(QuizResult),
}

#[component]
pub fn QuizFlowView() -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.quiz_flow();
    let stage = use_signal(|| Stage::Upload);
    let vm = use_signal(|| None::<QuizVm>);
    let error = use_signal(|| None::<ViewError>);
    let in_flight = use_signal(|| false);

    let dispatch_intent = {
        let flow = flow.clone();
        use_callback(move |intent: QuizIntent| {
            let mut stage = stage;
            let mut vm = vm;
            let mut error = error;
            let mut in_flight = in_flight;

            match intent {
                QuizIntent::Select(answer) => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.select(answer);
                    }
                }
                QuizIntent::Submit => {
                    let flow = flow.clone();
                    spawn(async move {
                        in_flight.set(true);
                        let taken = {
                            let mut guard = vm.write();
                            guard.take()
                        };
                        let Some(mut vm_value) = taken else {
                            error.set(Some(ViewError::Unknown));
                            in_flight.set(false);
                            return;
                        };

                        let result = vm_value.submit(&flow).await;

                        // Always put the quiz back so the UI remains usable after errors.
                        {
                            let mut guard = vm.write();
                            *guard = Some(vm_value);
                        }

                        match result {
                            Ok(()) => error.set(None),
                            Err(err) => error.set(Some(err)),
                        }
                        in_flight.set(false);
                    });
                }
                QuizIntent::Next => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.advance();
                    }
                    error.set(None);
                }
                QuizIntent::Finish => {
                    let flow = flow.clone();
                    spawn(async move {
                        in_flight.set(true);
                        let snapshot = { vm.read().clone() };
                        let Some(vm_value) = snapshot else {
                            error.set(Some(ViewError::Unknown));
                            in_flight.set(false);
                            return;
                        };

                        match vm_value.finish(&flow).await {
                            Ok(result) => {
                                error.set(None);
                                stage.set(Stage::Results(result));
                            }
                            Err(err) => error.set(Some(err)),
                        }
                        in_flight.set(false);
                    });
                }
                QuizIntent::Restart => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.restart();
                    }
                    error.set(None);
                    stage.set(Stage::Quiz);
                }
                QuizIntent::NewQuiz => {
                    vm.set(None);
                    error.set(None);
                    stage.set(Stage::Upload);
                }
            }
        })
    };

    let on_started = use_callback(move |started: QuizVm| {
        let mut stage = stage;
        let mut vm = vm;
        let mut error = error;
        vm.set(Some(started));
        error.set(None);
        stage.set(Stage::Quiz);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, on_started, vm, stage);
            }
        }
    }

    let stage_value = stage.read().clone();
    let vm_value = vm.read().clone();
    let error_value = error.read().clone();

    rsx! {
        div { class: "page quiz-page",
            match stage_value {
                Stage::Upload => rsx! {
                    UploadPanel { on_started }
                },
                Stage::Quiz => rsx! {
                    if let Some(vm_value) = vm_value {
                        QuizPanel {
                            vm: vm_value,
                            error: error_value,
                            in_flight: in_flight(),
                            on_intent: dispatch_intent,
                        }
                    } else {
                        p { "Loading..." }
                    }
                },
                Stage::Results(result) => rsx! {
                    ResultsPanel { result, error: error_value, on_intent: dispatch_intent }
                },
            }
        }
    }
}

#[component]
fn QuizPanel(
    vm: QuizVm,
    error: Option<ViewError>,
    in_flight: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let progress = vm.progress();
    let counter = progress.label();
    let fill_style = format!("width: {}%", progress.percent());
    let question = vm.question().clone();
    let revealed = vm.is_revealed();
    let feedback = vm.feedback();
    let feedback_class = feedback.as_ref().map(|feedback| {
        if feedback.is_correct {
            "answer-feedback feedback-correct"
        } else {
            "answer-feedback feedback-incorrect"
        }
    });

    rsx! {
        section { class: "quiz-section",
            div { class: "quiz-progress",
                span { class: "question-counter", "{counter}" }
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "{fill_style}" }
                }
            }
            div { class: "current-question",
                div { class: "question-text",
                    "{question.prompt()}"
                    span {
                        class: "difficulty-badge difficulty-{question.difficulty().style_key()}",
                        "{question.difficulty().label()}"
                    }
                }
                match &question {
                    Question::MultipleChoice { options, .. } => rsx! {
                        div { class: "question-options",
                            for (index, option) in options.iter().enumerate() {
                                OptionButton {
                                    key: "{index}",
                                    label: vm.option_label(index, option),
                                    class: vm.option_class(index),
                                    index,
                                    locked: revealed,
                                    on_intent,
                                }
                            }
                        }
                    },
                    Question::TrueFalse { .. } => rsx! {
                        div { class: "true-false-options",
                            TrueFalseButton {
                                label: "✓ True",
                                value: true,
                                class: vm.tf_class(true),
                                locked: revealed,
                                on_intent,
                            }
                            TrueFalseButton {
                                label: "✗ False",
                                value: false,
                                class: vm.tf_class(false),
                                locked: revealed,
                                on_intent,
                            }
                        }
                    },
                }
            }
            if let (Some(feedback), Some(feedback_class)) = (feedback, feedback_class) {
                div { class: "{feedback_class}",
                    p { strong { "{feedback.headline}" } }
                    if let Some(line) = feedback.correct_line {
                        p { "{line}" }
                    }
                }
            }
            if let Some(err) = error {
                p { class: "error", "{err.message()}" }
            }
            div { class: "quiz-actions",
                if !revealed {
                    button {
                        class: "btn btn-primary",
                        id: "submit-answer",
                        r#type: "button",
                        disabled: !vm.can_submit() || in_flight,
                        onclick: move |_| on_intent.call(QuizIntent::Submit),
                        "Submit Answer"
                    }
                } else if !vm.is_last() {
                    button {
                        class: "btn btn-primary",
                        id: "next-question",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "Next Question"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        id: "finish-quiz",
                        r#type: "button",
                        disabled: in_flight,
                        onclick: move |_| on_intent.call(QuizIntent::Finish),
                        "Finish Quiz"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    label: String,
    class: String,
    index: usize,
    locked: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_intent.call(QuizIntent::Select(SelectedAnswer::Choice(index))),
            "{label}"
        }
    }
}

#[component]
fn TrueFalseButton(
    label: &'static str,
    value: bool,
    class: String,
    locked: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_intent.call(QuizIntent::Select(SelectedAnswer::Truth(value))),
            "{label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    start: Rc<RefCell<Option<Callback<QuizVm>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
    stage: Rc<RefCell<Option<Signal<Stage>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        start: Callback<QuizVm>,
        vm: Signal<Option<QuizVm>>,
        stage: Signal<Stage>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.start.borrow_mut() = Some(start);
        *self.vm.borrow_mut() = Some(vm);
        *self.stage.borrow_mut() = Some(stage);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn start(&self) -> Callback<QuizVm> {
        (*self.start.borrow()).expect("quiz start registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }

    pub(crate) fn stage(&self) -> Signal<Stage> {
        (*self.stage.borrow()).expect("quiz stage registered")
    }
}
