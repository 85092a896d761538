use icons::BookOpen;
use leptos::prelude::*;

#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <header class="flex items-center justify-center gap-4 bg-primary px-4 py-5 text-primary-foreground shadow-sm">
            <BookOpen class="size-7" />
            <h1 class="text-2xl font-medium">"Notes App"</h1>
        </header>
    }
}
