use leptos::prelude::*;
use tw_merge::tw_merge;

pub(crate) const FIELD_CLASS: &str = "placeholder:text-muted-foreground border-input w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2 aria-invalid:border-destructive aria-invalid:ring-destructive/20";

#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,

    // Marks the field `aria-invalid` (styled red) while true.
    #[prop(into, optional)] invalid: Signal<bool>,

    // Manual two-way binding; `bind:value` has shifted across Leptos versions.
    #[prop(into)] bind_value: RwSignal<String>,

    // Fires after `bind_value` has been updated.
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let merged_class = tw_merge!("h-9", FIELD_CLASS, class);

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        bind_value.set(value.clone());
        if let Some(cb) = on_change {
            cb.run(value);
        }
    };

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            required=required
            aria-invalid=move || invalid.get().then_some("true")
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
}
