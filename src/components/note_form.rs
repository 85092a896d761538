use crate::components::ui::{
    Button, Card, CardContent, CardHeader, CardTitle, FieldError, Input, Label, Textarea,
};
use crate::models::{validate_body, validate_title, Note, BODY_ERROR, TITLE_ERROR};
use crate::orchestrator::{NoteEvent, NoteEvents};
use icons::Plus;
use leptos::logging::log;
use leptos::prelude::*;

/// Emits `note-added` for valid input and reports whether it did.
pub(crate) fn submit(title: &str, body: &str, events: NoteEvents) -> bool {
    match Note::from_form(title, body) {
        Ok(note) => {
            events.emit(NoteEvent::Added(note));
            true
        }
        Err(errors) => {
            log!("note form blocked: {errors:?}");
            false
        }
    }
}

/// Note-creation form.
///
/// A field is validated on every input once touched, and both fields are validated on
/// submit. Only a fully valid submit emits `note-added`, after which the form resets.
#[component]
pub fn NoteForm() -> impl IntoView {
    let events = expect_context::<NoteEvents>();

    let title: RwSignal<String> = RwSignal::new(String::new());
    let body: RwSignal<String> = RwSignal::new(String::new());
    let title_touched: RwSignal<bool> = RwSignal::new(false);
    let body_touched: RwSignal<bool> = RwSignal::new(false);

    let title_invalid =
        Signal::derive(move || title_touched.get() && !validate_title(&title.get()));
    let body_invalid = Signal::derive(move || body_touched.get() && !validate_body(&body.get()));

    let reset = move || {
        title.set(String::new());
        body.set(String::new());
        title_touched.set(false);
        body_touched.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        title_touched.set(true);
        body_touched.set(true);

        if submit(&title.get_untracked(), &body.get_untracked(), events) {
            reset();
        }
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-lg">"Add New Note"</CardTitle>
            </CardHeader>
            <CardContent>
                <form class="flex flex-col gap-4" on:submit=on_submit novalidate=true>
                    <div class="flex flex-col gap-2">
                        <Label html_for="note-title">"Title"</Label>
                        <Input
                            id="note-title"
                            name="title"
                            required=true
                            invalid=title_invalid
                            bind_value=title
                            on_change=Callback::new(move |_: String| title_touched.set(true))
                        />
                        <FieldError id="note-title-error" visible=title_invalid message=TITLE_ERROR />
                    </div>

                    <div class="flex flex-col gap-2">
                        <Label html_for="note-body">"Note Content"</Label>
                        <Textarea
                            id="note-body"
                            name="body"
                            required=true
                            invalid=body_invalid
                            bind_value=body
                            on_change=Callback::new(move |_: String| body_touched.set(true))
                        />
                        <FieldError id="note-body-error" visible=body_invalid message=BODY_ERROR />
                    </div>

                    <Button>
                        <Plus />
                        "Add Note"
                    </Button>
                </form>
            </CardContent>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_events;

    #[test]
    fn test_valid_submit_emits_one_note_added() {
        let (events, seen) = recording_events();
        assert!(submit("  Groceries ", "Buy milk and eggs", events));

        let seen = seen.lock().expect("lock");
        assert_eq!(seen.len(), 1);
        match &seen[0] {
            NoteEvent::Added(note) => {
                assert_eq!(note.title, "Groceries");
                assert_eq!(note.body, "Buy milk and eggs");
                assert!(!note.archived);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_blocked_submit_emits_nothing() {
        let (events, seen) = recording_events();
        assert!(!submit("Hi", "Buy milk and eggs", events));
        assert!(!submit("Groceries", "too short", events));
        assert!(!submit("", "", events));
        assert!(seen.lock().expect("lock").is_empty());
    }
}
