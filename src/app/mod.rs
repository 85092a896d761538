use crate::api::{ApiClient, NotesService};
use crate::components::{ComponentRegistry, Mount, NotesList};
use crate::notify::ToastNotifier;
use crate::orchestrator::{NoteEvent, NoteEvents, NotesController};
use icons::{Archive, StickyNote};
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub(crate) type AppController = NotesController<ApiClient, ToastNotifier>;

pub(crate) const ACTIVE_EMPTY_MESSAGE: &str = "No notes available. Create your first note!";
pub(crate) const ARCHIVED_EMPTY_MESSAGE: &str = "No archived notes yet";

#[component]
pub fn App() -> impl IntoView {
    let notifier = ToastNotifier::new();
    let controller: AppController =
        NotesController::new(NotesService::new(ApiClient::from_env(), notifier));

    // Every component event ends up here: backend call, then a full re-render.
    let dispatcher = controller.clone();
    let events = NoteEvents(Callback::new(move |event: NoteEvent| {
        dispatcher.dispatch(event)
    }));

    let registry = ComponentRegistry::with_defaults().unwrap_or_else(|e| {
        error!("component registry: {e}");
        ComponentRegistry::default()
    });
    log!(
        "registered components: {}",
        registry.tags().collect::<Vec<_>>().join(", ")
    );

    provide_context(notifier);
    provide_context(controller);
    provide_context(events);
    provide_context(registry);

    // One page only: any other path (e.g. a sub-path deploy) shows it too.
    view! {
        <Router>
            <Routes fallback=|| view! { <NotesPage /> }>
                <Route path=path!("") view=NotesPage />
            </Routes>
        </Router>
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let controller = expect_context::<AppController>();

    let initial = controller.clone();
    Effect::new(move |_| initial.refresh());

    view! {
        <div class="min-h-screen bg-background">
            <Mount tag="app-header" />

            <main class="mx-auto flex w-full max-w-[1080px] flex-col gap-8 px-4 py-8">
                <section>
                    <Mount tag="note-form" />
                </section>

                <section class="flex flex-col gap-4" id="notesContainer">
                    <h2 class="flex items-center gap-2 text-xl font-semibold">
                        <StickyNote class="size-5 text-primary" />
                        "Active Notes"
                    </h2>
                    <NotesList state=controller.active empty_message=ACTIVE_EMPTY_MESSAGE />
                </section>

                <section class="flex flex-col gap-4" id="archivedNotesContainer">
                    <h2 class="flex items-center gap-2 text-xl font-semibold">
                        <Archive class="size-5 text-archive" />
                        "Archived Notes"
                    </h2>
                    <NotesList
                        state=controller.archived
                        empty_message=ARCHIVED_EMPTY_MESSAGE
                        archived=true
                    />
                </section>
            </main>

            <Mount tag="toast-stack" />
        </div>
    }
}
