use crate::components::ui::{Button, ButtonSize, ButtonVariant, NoteCardActions, NoteCardShell};
use crate::models::Note;
use crate::orchestrator::{NoteEvent, NoteEvents};
use crate::util::format_created;
use icons::{Archive, Calendar, StickyNote, Trash2, Undo2};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CardAction {
    Archive,
    Restore,
    Delete,
}

impl CardAction {
    /// Buttons shown on a card, primary action first.
    pub fn for_note(archived: bool) -> [CardAction; 2] {
        if archived {
            [CardAction::Restore, CardAction::Delete]
        } else {
            [CardAction::Archive, CardAction::Delete]
        }
    }

    pub fn emit(self, events: NoteEvents, id: String) {
        let event = match self {
            CardAction::Archive => NoteEvent::Archive { id },
            CardAction::Restore => NoteEvent::Restore { id },
            CardAction::Delete => NoteEvent::Delete { id },
        };
        events.emit(event);
    }
}

/// One note. The whole card is rebuilt whenever `note` changes.
///
/// Active notes offer Archive + Delete, archived ones Restore + Delete. Every action
/// emits its event with the note id attached.
#[component]
pub fn NoteCard(#[prop(into)] note: Signal<Note>) -> impl IntoView {
    let events = expect_context::<NoteEvents>();

    let note_id = move || note.with_untracked(|n| n.id.clone());
    let on_archive = move |_| CardAction::Archive.emit(events, note_id());
    let on_restore = move |_| CardAction::Restore.emit(events, note_id());
    let on_delete = move |_| CardAction::Delete.emit(events, note_id());

    move || {
        let n = note.get();
        let accent = if n.archived {
            "border-l-archive"
        } else {
            "border-l-primary"
        };
        let title_class = if n.archived {
            "flex items-center gap-2 text-lg font-semibold text-archive"
        } else {
            "flex items-center gap-2 text-lg font-semibold text-primary"
        };

        let [primary, _] = CardAction::for_note(n.archived);
        let primary_action = if primary == CardAction::Restore {
            view! {
                <Button variant=ButtonVariant::Success size=ButtonSize::Sm on:click=on_restore>
                    <Undo2 />
                    "Restore"
                </Button>
            }
            .into_any()
        } else {
            view! {
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on:click=on_archive>
                    <Archive />
                    "Archive"
                </Button>
            }
            .into_any()
        };

        let icon = if n.archived {
            view! { <Archive class="size-4" /> }.into_any()
        } else {
            view! { <StickyNote class="size-4" /> }.into_any()
        };

        view! {
            <NoteCardShell class=accent attr:data-id={n.id.clone()} attr:data-archived={n.archived.to_string()}>
                <h3 class=title_class>
                    {icon}
                    {n.title.clone()}
                </h3>
                <p class="flex-grow whitespace-pre-wrap text-sm">{n.body.clone()}</p>
                <p class="flex items-center gap-2 text-xs text-muted-foreground">
                    <Calendar class="size-3.5" />
                    {format_created(&n.created_at)}
                </p>
                <NoteCardActions>
                    {primary_action}
                    <Button variant=ButtonVariant::Destructive size=ButtonSize::Sm on:click=on_delete>
                        <Trash2 />
                        "Delete"
                    </Button>
                </NoteCardActions>
            </NoteCardShell>
        }
    }
}
