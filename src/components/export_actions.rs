//! Grocery Export Actions
//!
//! Share / Copy / Download CSV for the checked grocery items.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use planner_core::export::build_csv;
use planner_core::ReferenceData;

use crate::commands;
use crate::context::use_app_context;

const SHARE_TITLE: &str = "Grocery List";

#[component]
pub fn GroceryExportActions(data: Arc<ReferenceData>) -> impl IntoView {
    let ctx = use_app_context();

    let share_data = data.clone();
    let on_share = move |_| {
        let export = ctx.grocery_export(&share_data.grocery);
        spawn_local(async move {
            if commands::share_text(SHARE_TITLE, &export.text).await {
                return;
            }
            let copied = commands::copy_to_clipboard(&export.text).await;
            commands::alert(if copied {
                "Share not available — copied instead."
            } else {
                "Share not available — try Copy."
            });
        });
    };

    let copy_data = data.clone();
    let on_copy = move |_| {
        let export = ctx.grocery_export(&copy_data.grocery);
        spawn_local(async move {
            let copied = commands::copy_to_clipboard(&export.text).await;
            commands::alert(if copied {
                "Copied! Paste into Instacart / Notes / Messages."
            } else {
                "Couldn’t copy automatically — try again."
            });
        });
    };

    let on_csv = move |_| {
        let export = ctx.grocery_export(&data.grocery);
        let filename = ctx.config.with_value(|c| c.csv_filename.clone());
        let result = build_csv(&export.items)
            .map_err(|e| e.to_string())
            .and_then(|csv| commands::download_text(&filename, &csv, "text/csv"));
        if let Err(e) = result {
            log::warn!("Failed to export grocery CSV: {}", e);
        }
    };

    view! {
        <button class="btn" id="exportShare" on:click=on_share>"Share checked list"</button>
        <button class="btn" id="exportCopy" on:click=on_copy>"Copy checked list"</button>
        <button class="btn" id="exportCSV" on:click=on_csv>"Download CSV"</button>
    }
}
