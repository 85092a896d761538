use super::{ApiResult, NotesBackend};
use crate::models::Note;
use crate::notify::{Notification, Notifier};
use leptos::logging::warn;

/// Backend operations as seen by the user, each with its fixed messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum Operation {
    ListNotes,
    ListArchivedNotes,
    CreateNote,
    DeleteNote,
    ArchiveNote,
    UnarchiveNote,
}

impl Operation {
    pub fn error_title(self) -> &'static str {
        match self {
            Operation::ListNotes | Operation::ListArchivedNotes => "Oops!",
            Operation::CreateNote => "Failed to add!",
            Operation::DeleteNote => "Failed to delete!",
            Operation::ArchiveNote => "Failed to archive!",
            Operation::UnarchiveNote => "Failed to restore!",
        }
    }

    pub fn error_text(self) -> &'static str {
        match self {
            Operation::ListNotes => "Failed to fetch notes",
            Operation::ListArchivedNotes => "Failed to fetch archived notes",
            Operation::CreateNote => "Failed to add a new note",
            Operation::DeleteNote => "Failed to delete the note",
            Operation::ArchiveNote => "Failed to archive the note",
            Operation::UnarchiveNote => "Failed to restore the note from the archive",
        }
    }

    /// Reads succeed silently.
    pub fn success_text(self) -> Option<&'static str> {
        match self {
            Operation::ListNotes | Operation::ListArchivedNotes => None,
            Operation::CreateNote => Some("Note added."),
            Operation::DeleteNote => Some("Note deleted."),
            Operation::ArchiveNote => Some("Note archived."),
            Operation::UnarchiveNote => Some("Note restored."),
        }
    }
}

/// Wraps a backend with the app's error policy: failures are reported through the
/// notifier and swallowed, so every call yields `Some(payload)` or `None`.
#[derive(Clone)]
pub(crate) struct NotesService<B, N> {
    backend: B,
    notifier: N,
}

impl<B: NotesBackend, N: Notifier> NotesService<B, N> {
    pub fn new(backend: B, notifier: N) -> Self {
        Self { backend, notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn list_notes(&self) -> Option<Vec<Note>> {
        let res = self.backend.list_notes().await;
        self.settle(Operation::ListNotes, res)
    }

    pub async fn list_archived_notes(&self) -> Option<Vec<Note>> {
        let res = self.backend.list_archived_notes().await;
        self.settle(Operation::ListArchivedNotes, res)
    }

    pub async fn create_note(&self, title: &str, body: &str) -> Option<Note> {
        let res = self.backend.create_note(title, body).await;
        self.settle(Operation::CreateNote, res)
    }

    pub async fn delete_note(&self, id: &str) -> Option<()> {
        let res = self.backend.delete_note(id).await;
        self.settle(Operation::DeleteNote, res)
    }

    pub async fn archive_note(&self, id: &str) -> Option<()> {
        let res = self.backend.archive_note(id).await;
        self.settle(Operation::ArchiveNote, res)
    }

    pub async fn unarchive_note(&self, id: &str) -> Option<()> {
        let res = self.backend.unarchive_note(id).await;
        self.settle(Operation::UnarchiveNote, res)
    }

    fn settle<T>(&self, op: Operation, res: ApiResult<T>) -> Option<T> {
        match res {
            Ok(value) => {
                if let Some(text) = op.success_text() {
                    self.notifier.notify(Notification::success(text));
                }
                Some(value)
            }
            Err(e) => {
                let name: &'static str = op.into();
                warn!("{name} failed ({:?}): {e}", e.kind);
                self.notifier
                    .notify(Notification::error(op.error_title(), op.error_text()));
                None
            }
        }
    }
}
