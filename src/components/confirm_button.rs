//! Confirm Button Component
//!
//! Inline confirmation for destructive actions (resets).

use leptos::prelude::*;

/// Inline confirmation button
///
/// Shows the action label first. When clicked, shows the prompt with
/// Yes / Cancel buttons; only Yes runs `on_confirm`.
///
/// # Arguments
/// * `label` - Text of the initial button
/// * `prompt` - Question shown while confirming
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="btn danger"
                id=id.clone()
                on:click=move |_| set_confirming.set(true)
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="confirm">
                <span class="confirm-text">{prompt.clone()}</span>
                <button
                    class="btn danger"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button class="btn" on:click=move |_| set_confirming.set(false)>
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
