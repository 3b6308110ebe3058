mod chat;
mod courses;
mod home;
mod info;
mod olympiads;
mod quiz_list;
mod quiz_player;
mod state;
mod teachers;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatWidget;
pub use courses::{CourseDetailView, CoursesView};
pub use home::HomeView;
pub use info::{AboutView, ContactView, DownloadView, SUPPORT_EMAIL};
pub use olympiads::OlympiadsView;
pub use quiz_list::TestsView;
pub use quiz_player::QuizPlayerView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use teachers::TeachersView;
