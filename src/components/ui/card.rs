use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}

    // Note cards: accent stripe on the left, actions pinned to the bottom.
    clx! {NoteCardShell, article, "bg-card text-card-foreground flex h-full flex-col gap-3 rounded-lg border border-l-4 p-5 shadow-sm transition-transform hover:-translate-y-1 hover:shadow-md"}
    clx! {NoteCardActions, div, "mt-auto flex items-center justify-between pt-2"}
    clx! {NoteGrid, div, "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3"}
    clx! {EmptyState, div, "flex flex-col items-center gap-2 rounded-lg border border-dashed px-4 py-10 text-center text-sm text-muted-foreground"}
}

pub use components::*;
