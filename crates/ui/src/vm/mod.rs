mod quiz_vm;

pub use quiz_vm::{FeedbackVm, QuizIntent, QuizVm};
