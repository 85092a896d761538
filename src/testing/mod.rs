//! In-memory stand-ins for the notes API and the toast layer.

use crate::api::{ApiError, ApiResult, NotesBackend};
use crate::models::Note;
use crate::notify::{Notification, Notifier};
use crate::orchestrator::{NoteEvent, NoteEvents};
use leptos::prelude::Callback;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

pub(crate) fn note(id: &str, title: &str, archived: bool) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        body: format!("{title} body text"),
        created_at: "2022-07-28T10:03:12.594Z".to_string(),
        archived,
    }
}

#[derive(Default)]
struct Store {
    notes: Vec<Note>,
    next_id: u32,
}

/// Behaves like the remote API: server-assigned ids (`n1`, `n2`, ...) and 404 for unknown ids.
#[derive(Clone, Default)]
pub(crate) struct InMemoryBackend {
    store: Rc<RefCell<Store>>,
    fail_reads: Rc<Cell<bool>>,
    fail_archived_reads: Rc<Cell<bool>>,
    // Returned verbatim by both list calls when set, bypassing the store.
    rigged_lists: Rc<RefCell<Option<(Vec<Note>, Vec<Note>)>>>,
    // Scheduler turns each list call waits before answering, one entry per call.
    read_lag: Rc<RefCell<VecDeque<u32>>>,
}

impl InMemoryBackend {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let backend = Self::default();
        backend.store.borrow_mut().notes = notes;
        backend
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.set(on);
    }

    pub fn fail_archived_reads(&self, on: bool) {
        self.fail_archived_reads.set(on);
    }

    pub fn rig_lists(&self, active: Vec<Note>, archived: Vec<Note>) {
        *self.rigged_lists.borrow_mut() = Some((active, archived));
    }

    /// The next list calls answer late, after `turns` yields each. The data is read
    /// when the call starts, like a request already in flight.
    pub fn lag_reads(&self, turns: impl IntoIterator<Item = u32>) {
        self.read_lag.borrow_mut().extend(turns);
    }

    pub fn push_note(&self, note: Note) {
        self.store.borrow_mut().notes.push(note);
    }

    pub fn notes(&self) -> Vec<Note> {
        self.store.borrow().notes.clone()
    }

    fn not_found() -> ApiError {
        ApiError::http(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"status":"fail","message":"Note not found"}"#.to_string(),
            "Request failed",
        )
    }

    fn unavailable() -> ApiError {
        ApiError::http(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
            String::new(),
            "Request failed",
        )
    }

    fn list(&self, archived: bool) -> ApiResult<Vec<Note>> {
        if self.fail_reads.get() || (archived && self.fail_archived_reads.get()) {
            return Err(Self::unavailable());
        }
        if let Some((active, rigged_archived)) = self.rigged_lists.borrow().as_ref() {
            return Ok(if archived {
                rigged_archived.clone()
            } else {
                active.clone()
            });
        }
        Ok(self
            .store
            .borrow()
            .notes
            .iter()
            .filter(|n| n.archived == archived)
            .cloned()
            .collect())
    }

    async fn lag(&self) {
        let turns = self.read_lag.borrow_mut().pop_front().unwrap_or(0);
        for _ in 0..turns {
            tokio::task::yield_now().await;
        }
    }

    fn set_archived(&self, id: &str, archived: bool) -> ApiResult<()> {
        let mut store = self.store.borrow_mut();
        let note = store
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(Self::not_found)?;
        note.archived = archived;
        Ok(())
    }
}

impl NotesBackend for InMemoryBackend {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let res = self.list(false);
        self.lag().await;
        res
    }

    async fn list_archived_notes(&self) -> ApiResult<Vec<Note>> {
        let res = self.list(true);
        self.lag().await;
        res
    }

    async fn create_note(&self, title: &str, body: &str) -> ApiResult<Note> {
        let mut store = self.store.borrow_mut();
        store.next_id += 1;
        let created = Note {
            id: format!("n{}", store.next_id),
            title: title.to_string(),
            body: body.to_string(),
            created_at: "2022-07-28T10:03:12.594Z".to_string(),
            archived: false,
        };
        store.notes.push(created.clone());
        Ok(created)
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        let mut store = self.store.borrow_mut();
        let before = store.notes.len();
        store.notes.retain(|n| n.id != id);
        if store.notes.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn archive_note(&self, id: &str) -> ApiResult<()> {
        self.set_archived(id, true)
    }

    async fn unarchive_note(&self, id: &str) -> ApiResult<()> {
        self.set_archived(id, false)
    }
}

/// Collects notifications instead of showing them.
#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    seen: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.seen.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.borrow_mut().push(notification);
    }
}

/// An event sink that keeps everything emitted into it.
pub(crate) fn recording_events() -> (NoteEvents, Arc<Mutex<Vec<NoteEvent>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let events = NoteEvents(Callback::new(move |event: NoteEvent| {
        if let Ok(mut seen) = sink.lock() {
            seen.push(event);
        }
    }));
    (events, seen)
}
