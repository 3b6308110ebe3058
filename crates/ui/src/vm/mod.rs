mod catalog_vm;
mod chat_vm;
mod progress_vm;
mod quiz_vm;
mod time_fmt;

pub use catalog_vm::{QuizCardVm, map_quiz_cards, registration_label};
pub use chat_vm::{ChatMessageVm, INPUT_PLACEHOLDER, LOADING_LABEL, map_chat_messages};
pub use progress_vm::{ProgressVm, map_progress};
pub use quiz_vm::{OptionVm, QuizResultVm, QuizStep, QuizVm, option_letter, start_quiz};
pub use time_fmt::format_time;
