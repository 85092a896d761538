mod validation;

pub(crate) use validation::{validate_body, validate_title, FormErrors, BODY_ERROR, TITLE_ERROR};

use crate::util::{new_note_id, now_rfc3339};
use serde::{Deserialize, Serialize};

/// A note as returned by the notes API.
///
/// The server owns every note; the client only keeps the copy from the latest fetch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Note {
    pub id: String,
    pub title: String,
    pub body: String,

    /// ISO-8601 timestamp assigned by whoever created the note.
    #[serde(rename = "createdAt")]
    pub created_at: String,

    #[serde(default)]
    pub archived: bool,
}

impl Note {
    /// Builds the provisional note the form emits.
    ///
    /// The id is client-generated and never sent; the server assigns the real one
    /// on create and the next fetch replaces this value.
    pub fn provisional(title: &str, body: &str) -> Self {
        Self {
            id: new_note_id(),
            title: title.trim().to_string(),
            body: body.trim().to_string(),
            created_at: now_rfc3339(),
            archived: false,
        }
    }

    /// Validates raw form input and returns the provisional note, or which fields failed.
    pub fn from_form(title: &str, body: &str) -> Result<Self, FormErrors> {
        let errors = FormErrors::check(title, body);
        if errors.is_empty() {
            Ok(Self::provisional(title, body))
        } else {
            Err(errors)
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct CreateNoteRequest {
    pub title: String,
    pub body: String,
}
