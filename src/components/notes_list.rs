use crate::components::ui::{Alert, AlertDescription, EmptyState, NoteGrid};
use crate::components::{Mount, NoteCard};
use crate::orchestrator::ListState;
use icons::{Archive, StickyNote};
use leptos::prelude::*;

/// A list container. Every state change throws away the previous cards and builds new ones.
#[component]
pub fn NotesList(
    #[prop(into)] state: Signal<ListState>,
    empty_message: &'static str,
    #[prop(optional)] archived: bool,
) -> impl IntoView {
    move || match state.get() {
        ListState::Loading => view! { <Mount tag="loading-spinner" /> }.into_any(),
        ListState::Empty => {
            let icon = if archived {
                view! { <Archive class="size-8" /> }.into_any()
            } else {
                view! { <StickyNote class="size-8" /> }.into_any()
            };
            view! {
                <EmptyState>
                    {icon}
                    <p>{empty_message}</p>
                </EmptyState>
            }
            .into_any()
        }
        ListState::Failed => view! {
            <Alert class="border-destructive/30">
                <AlertDescription class="text-destructive">
                    "Could not load these notes. Try again later."
                </AlertDescription>
            </Alert>
        }
        .into_any(),
        ListState::Notes(notes) => view! {
            <NoteGrid>
                {notes
                    .into_iter()
                    .map(|note| view! { <NoteCard note=note /> })
                    .collect_view()}
            </NoteGrid>
        }
        .into_any(),
    }
}
