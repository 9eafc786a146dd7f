//! Storage Checklist Component
//!
//! Put-away confirmations for one bucket, plus its reset button.

use leptos::prelude::*;
use planner_core::{StorageBucket, StorageSlot};

use crate::components::ConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn StorageChecklist(bucket: StorageBucket) -> impl IntoView {
    view! {
        <div class="h2">"Storage Checklist"</div>
        <p class="sub">{bucket.intro()}</p>
        {bucket
            .slots()
            .iter()
            .map(|slot| view! { <StorageToggleRow bucket=bucket entry=*slot /> })
            .collect_view()}
    }
}

#[component]
fn StorageToggleRow(bucket: StorageBucket, entry: StorageSlot) -> impl IntoView {
    let ctx = use_app_context();
    let id = format!("storage:{}:{}", bucket.as_str(), entry.key);

    view! {
        <div class="row" style="margin-bottom:10px">
            <button
                class=move || if ctx.is_stored(bucket, entry.key) { "check on" } else { "check" }
                data-storage=id
                aria-label="toggle"
                on:click=move |_| ctx.toggle_stored(bucket, entry.key)
            >
                <span class="checkMark"></span>
            </button>
            <div class="item">
                <p class="itemTitle">{entry.label}</p>
                {entry.hint.map(|hint| view! { <p class="itemMeta">{hint}</p> })}
            </div>
        </div>
    }
}

/// "Reset storage checklist" for one bucket
#[component]
pub fn ResetStorageButton(bucket: StorageBucket, #[prop(into)] id: String) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ConfirmButton
            id=id
            label="Reset storage checklist"
            prompt=bucket.reset_prompt()
            on_confirm=Callback::new(move |_: ()| ctx.reset_bucket(bucket))
        />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::context::AppContext;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_renders_one_toggle_per_slot() {
        mount_to_body(|| {
            provide_context(AppContext::new(AppConfig {
                storage_key: "master_planner_state_rows_test".to_string(),
                ..AppConfig::default()
            }));
            view! { <StorageChecklist bucket=StorageBucket::Grocery /> }
        });

        let html = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.inner_html())
            .unwrap_or_default();
        let rows = html.matches("data-storage=\"storage:grocery:").count();
        assert_eq!(rows, StorageBucket::Grocery.slots().len());
    }
}
