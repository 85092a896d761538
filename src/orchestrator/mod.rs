use crate::api::{NotesBackend, NotesService};
use crate::models::Note;
use crate::notify::{Notification, Notifier};
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

pub(crate) const LOAD_FAILED_TEXT: &str = "Failed to load notes";

/// Events raised by the note form and note cards.
///
/// Cards carry the note id in the event itself.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub(crate) enum NoteEvent {
    #[strum(serialize = "note-added")]
    Added(Note),
    #[strum(serialize = "archive-note")]
    Archive { id: String },
    #[strum(serialize = "restore-note")]
    Restore { id: String },
    #[strum(serialize = "delete-note")]
    Delete { id: String },
}

impl NoteEvent {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// What one list container shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListState {
    Loading,
    Empty,
    Notes(Vec<Note>),
    Failed,
}

impl ListState {
    fn from_notes(notes: Vec<Note>) -> Self {
        if notes.is_empty() {
            ListState::Empty
        } else {
            ListState::Notes(notes)
        }
    }

    pub fn notes(&self) -> &[Note] {
        match self {
            ListState::Notes(notes) => notes,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NoteLists {
    pub active: ListState,
    pub archived: ListState,
}

// Membership comes from the call that returned the note, not from its flag: the flag
// is overwritten to match and repeated ids are dropped.
fn sanitize(notes: Vec<Note>, archived: bool) -> Vec<Note> {
    let mut seen = HashSet::new();
    notes
        .into_iter()
        .filter(|n| seen.insert(n.id.clone()))
        .map(|mut n| {
            n.archived = archived;
            n
        })
        .collect()
}

/// Forwards one event to the backend. The outcome is not reported back: the caller
/// re-renders both lists either way.
pub(crate) async fn apply_event<B: NotesBackend, N: Notifier>(
    service: &NotesService<B, N>,
    event: NoteEvent,
) {
    log!("handling {}", event.name());
    match event {
        NoteEvent::Added(note) => {
            service.create_note(&note.title, &note.body).await;
        }
        NoteEvent::Archive { id } => {
            service.archive_note(&id).await;
        }
        NoteEvent::Restore { id } => {
            service.unarchive_note(&id).await;
        }
        NoteEvent::Delete { id } => {
            service.delete_note(&id).await;
        }
    }
}

/// Fetches both lists concurrently.
///
/// A list that failed to load becomes `Failed` instead of keeping stale cards, and one
/// extra generic notice is raised. No id ends up in both lists.
pub(crate) async fn load_lists<B: NotesBackend, N: Notifier>(
    service: &NotesService<B, N>,
) -> NoteLists {
    let (active, archived) = tokio::join!(service.list_notes(), service.list_archived_notes());

    if active.is_none() || archived.is_none() {
        service
            .notifier()
            .notify(Notification::error("Oops...", LOAD_FAILED_TEXT));
    }

    let archived = archived.map(|notes| sanitize(notes, true));
    let active = active.map(|notes| {
        let mut notes = sanitize(notes, false);
        // A note reported by both calls is shown in the archive only.
        if let Some(archived) = &archived {
            let archived_ids: HashSet<&str> = archived.iter().map(|n| n.id.as_str()).collect();
            notes.retain(|n| !archived_ids.contains(n.id.as_str()));
        }
        notes
    });

    NoteLists {
        active: active.map(ListState::from_notes).unwrap_or(ListState::Failed),
        archived: archived.map(ListState::from_notes).unwrap_or(ListState::Failed),
    }
}

/// Reactive state of the two containers plus the service that feeds them.
#[derive(Clone)]
pub(crate) struct NotesController<B, N> {
    service: NotesService<B, N>,
    pub active: RwSignal<ListState>,
    pub archived: RwSignal<ListState>,

    /// Bumped by every render; results from an older render are dropped.
    render_generation: RwSignal<u64>,
}

impl<B: NotesBackend, N: Notifier> NotesController<B, N> {
    pub fn new(service: NotesService<B, N>) -> Self {
        Self {
            service,
            active: RwSignal::new(ListState::Loading),
            archived: RwSignal::new(ListState::Loading),
            render_generation: RwSignal::new(0),
        }
    }

    /// Shows loading in both containers, then replaces both with fresh data.
    pub async fn render(&self) {
        let generation = self.render_generation.get_untracked() + 1;
        self.render_generation.set(generation);

        self.active.set(ListState::Loading);
        self.archived.set(ListState::Loading);

        let lists = load_lists(&self.service).await;

        if self.render_generation.get_untracked() != generation {
            warn!("dropping stale render #{generation}");
            return;
        }

        log!(
            "rendered {} active / {} archived notes",
            lists.active.notes().len(),
            lists.archived.notes().len()
        );
        self.active.set(lists.active);
        self.archived.set(lists.archived);
    }

    pub async fn handle(&self, event: NoteEvent) {
        apply_event(&self.service, event).await;
        self.render().await;
    }
}

impl<B, N> NotesController<B, N>
where
    B: NotesBackend + Clone + 'static,
    N: Notifier + Clone + 'static,
{
    pub fn refresh(&self) {
        let this = self.clone();
        spawn_local(async move { this.render().await });
    }

    pub fn dispatch(&self, event: NoteEvent) {
        let this = self.clone();
        spawn_local(async move { this.handle(event).await });
    }
}

/// The app-wide event sink components emit into.
#[derive(Clone, Copy)]
pub(crate) struct NoteEvents(pub Callback<NoteEvent>);

impl NoteEvents {
    pub fn emit(&self, event: NoteEvent) {
        self.0.run(event);
    }
}
