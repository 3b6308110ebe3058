use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quantum_core::Catalog;
use quantum_core::model::Progress;
use quantum_core::time::fixed_clock;
use services::{
    AppServices, AssistantClient, AssistantError, ChatService, ProgressLedger, QuizService,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context, use_progress_provider};
use crate::views::{
    AboutView, ChatWidget, ContactView, CourseDetailView, CoursesView, DownloadView, HomeView,
    OlympiadsView, QuizPlayerView, TeachersView, TestsView,
};

/// Assistant that always answers with the same line.
pub struct CannedAssistant(pub &'static str);

#[async_trait]
impl AssistantClient for CannedAssistant {
    async fn ask(&self, _prompt: &str) -> Result<String, AssistantError> {
        Ok(self.0.to_string())
    }
}

struct TestApp {
    services: AppServices,
    initial_progress: Progress,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn ledger(&self) -> Arc<ProgressLedger> {
        self.services.ledger()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn chat(&self) -> Arc<ChatService> {
        self.services.chat()
    }

    fn initial_progress(&self) -> Progress {
        self.initial_progress.clone()
    }

    fn assistant_enabled(&self) -> bool {
        self.services.assistant_enabled()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Courses,
    CourseDetail(String),
    Olympiads,
    Teachers,
    About,
    Contact,
    Download,
    Tests,
    Quiz(String),
    /// Quiz player whose id prop changes after the first render.
    QuizSwitch(String, String),
    Chat,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_progress_provider();
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::CourseDetail(course_id) => rsx! { CourseDetailView { course_id } },
        ViewKind::Olympiads => rsx! { OlympiadsView {} },
        ViewKind::Teachers => rsx! { TeachersView {} },
        ViewKind::About => rsx! { AboutView {} },
        ViewKind::Contact => rsx! { ContactView {} },
        ViewKind::Download => rsx! { DownloadView {} },
        ViewKind::Tests => rsx! { TestsView {} },
        ViewKind::Quiz(quiz_id) => rsx! { QuizPlayerView { quiz_id } },
        ViewKind::QuizSwitch(first, second) => rsx! { QuizSwitcher { first, second } },
        ViewKind::Chat => rsx! { ChatWidget { start_open: true } },
    }
}

#[component]
fn QuizSwitcher(first: String, second: String) -> Element {
    let mut quiz_id = use_signal(|| first);
    use_hook(move || {
        spawn(async move {
            quiz_id.set(second);
        })
    });
    rsx! { QuizPlayerView { quiz_id: quiz_id() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: AppServices,
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

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory()).await
}

pub async fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let services = AppServices::from_storage(
        &storage,
        fixed_clock(),
        Arc::new(CannedAssistant("Ответ ядра.")),
        true,
    )
    .await
    .expect("services");
    let initial_progress = services.ledger().snapshot().await;

    let app = Arc::new(TestApp {
        services: services.clone(),
        initial_progress,
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        services,
    }
}
