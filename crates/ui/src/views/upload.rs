use std::path::PathBuf;
use std::time::Duration;

use dioxus::prelude::*;

use services::DocumentLoadError;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::QuizVm;

#[derive(Clone, Debug, PartialEq, Eq)]
enum FileStatus {
    Processing(String),
    Success(String),
    Error(String),
}

impl FileStatus {
    fn class(&self) -> &'static str {
        match self {
            Self::Processing(_) => "file-status processing",
            Self::Success(_) => "file-status success",
            Self::Error(_) => "file-status error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Processing(text) | Self::Success(text) | Self::Error(text) => text,
        }
    }
}

fn load_error_text(err: DocumentLoadError) -> String {
    match err {
        // The local validation messages stand on their own.
        DocumentLoadError::Invalid(inner) => inner.to_string(),
        other => format!("❌ Error: {other}"),
    }
}

#[component]
pub(crate) fn UploadPanel(on_started: EventHandler<QuizVm>) -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.quiz_flow();
    let mut path = use_signal(String::new);
    let status = use_signal(|| None::<FileStatus>);
    let busy = matches!(*status.read(), Some(FileStatus::Processing(_)));

    let on_generate = {
        let flow = flow.clone();
        use_callback(move |()| {
            let flow = flow.clone();
            let mut status = status;
            let chosen = path.read().trim().to_string();
            if chosen.is_empty() {
                return;
            }

            spawn(async move {
                let file = PathBuf::from(&chosen);
                let display_name = file
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(chosen.as_str())
                    .to_string();
                status.set(Some(FileStatus::Processing(format!(
                    "Processing {display_name}..."
                ))));

                let upload = match flow.load_document(&file).await {
                    Ok(upload) => upload,
                    Err(err) => {
                        status.set(Some(FileStatus::Error(load_error_text(err))));
                        return;
                    }
                };

                match flow.start_quiz(&upload).await {
                    Ok(started) => {
                        let mut message = format!(
                            "✅ Quiz generated from {} using {} analysis!",
                            started.source.filename, started.source.analysis_method
                        );
                        if let Some(warning) = &started.source.warning {
                            message.push_str(&format!(" ({warning})"));
                        }
                        status.set(Some(FileStatus::Success(message)));
                        // Let the confirmation register before the quiz takes over.
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        on_started.call(QuizVm::new(started));
                    }
                    Err(err) => {
                        let message = ViewError::from_flow(err).message().to_string();
                        status.set(Some(FileStatus::Error(format!("❌ Error: {message}"))));
                    }
                }
            });
        })
    };

    rsx! {
        section { class: "upload-section",
            h2 { "Generate a Quiz" }
            p { class: "upload-hint",
                "Choose a PDF, DOCX, or TXT document to turn into a quiz."
            }
            div { class: "upload-controls",
                input {
                    class: "upload-path",
                    r#type: "text",
                    placeholder: "Path to your document...",
                    value: "{path()}",
                    oninput: move |evt| path.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    id: "generate-quiz",
                    r#type: "button",
                    disabled: path.read().trim().is_empty() || busy,
                    onclick: move |_| on_generate.call(()),
                    "Generate Quiz"
                }
            }
            if let Some(status) = status.read().clone() {
                div { class: "{status.class()}", "{status.text()}" }
            }
        }
    }
}
