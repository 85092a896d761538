mod header;
mod loading;
mod note_card;
mod note_form;
mod notes_list;
mod registry;
mod toast;
pub mod ui;

pub(crate) use header::AppHeader;
pub(crate) use loading::LoadingIndicator;
pub(crate) use note_card::NoteCard;
pub(crate) use note_form::NoteForm;
pub(crate) use notes_list::NotesList;
pub(crate) use registry::{ComponentRegistry, Mount};
pub(crate) use toast::ToastStack;
