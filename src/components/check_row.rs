//! Check Row Component
//!
//! Large tap-target checkbox row bound to one `checks` entry.

use leptos::prelude::*;
use planner_core::CheckKey;

use crate::context::use_app_context;

/// Checkbox row; `children` render under the title (e.g. a price input)
#[component]
pub fn CheckRow(
    check: CheckKey,
    #[prop(into)] title: String,
    #[prop(optional, into)] meta: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = check.to_string();

    let is_on = {
        let check = check.clone();
        move || ctx.is_checked(&check)
    };
    let toggle = move |_| ctx.toggle_check(&check);

    view! {
        <div class="row" style="margin-bottom:10px">
            <button
                class=move || if is_on() { "check on" } else { "check" }
                data-check=id
                aria-label="toggle"
                on:click=toggle
            >
                <span class="checkMark"></span>
            </button>
            <div class="item">
                <p class="itemTitle">{title}</p>
                {(!meta.is_empty()).then(|| view! { <p class="itemMeta">{meta}</p> })}
                {children.map(|children| children())}
            </div>
        </div>
    }
}
