use crate::components::ui::{Alert, AlertDescription, AlertTitle, Button, ButtonSize, ButtonVariant};
use crate::notify::{NotificationLevel, Toast, ToastNotifier};
use icons::{Check, X};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Fixed stack of notifications in the corner. Escape clears all of them.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();

    let handle = window_event_listener(ev::keydown, move |e: web_sys::KeyboardEvent| {
        if e.key() == "Escape" {
            notifier.dismiss_all();
        }
    });
    on_cleanup(move || handle.remove());

    let render_toast = move |toast: Toast| {
        let id = toast.id;
        let n = toast.notification;
        let (frame, tone) = match n.level {
            NotificationLevel::Success => ("border-success/40 bg-background", "text-success"),
            NotificationLevel::Error => ("border-destructive/40 bg-background", "text-destructive"),
        };

        let dismiss = match n.level {
            // Success toasts close on their own timer.
            NotificationLevel::Success => view! { <Check class="size-4 text-success" /> }.into_any(),
            NotificationLevel::Error => view! {
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    on:click=move |_| notifier.dismiss(id)
                >
                    <X />
                    "OK"
                </Button>
            }
            .into_any(),
        };

        view! {
            <li role="alert">
                <Alert class={format!("pointer-events-auto flex items-start justify-between gap-3 shadow-lg {frame}")}>
                    <div>
                        <AlertTitle class=tone>{n.title}</AlertTitle>
                        <AlertDescription>{n.text}</AlertDescription>
                    </div>
                    {dismiss}
                </Alert>
            </li>
        }
    };

    view! {
        <ul class="pointer-events-none fixed right-3 bottom-3 z-50 flex w-full max-w-sm flex-col gap-2">
            {move || notifier.toasts.get().into_iter().map(render_toast).collect_view()}
        </ul>
    }
}
