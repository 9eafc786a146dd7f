//! Day Page
//!
//! Checklist for one schedule day.

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{CheckKey, ReferenceData, Route};

use crate::components::{BackToAppendix, Card, CheckRow, LinkButton};
use crate::context::use_app_context;

/// Rows keyed by day name and entry index
#[component]
pub fn DayPage(data: Arc<ReferenceData>, day: String) -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header(day.clone(), "Tap the checkbox area (big) to mark complete.");

    let rows = data
        .day(&day)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            view! {
                <CheckRow
                    check=CheckKey::schedule(day.clone(), idx)
                    title=entry.title()
                    meta=entry.meta()
                />
            }
        })
        .collect_view();

    view! {
        <Card>
            <div class="h1">{day.clone()}</div>
            {rows}
        </Card>
        <Card>
            <div class="toolbar">
                <BackToAppendix />
                <LinkButton route=Route::Schedule label="All Days" />
            </div>
        </Card>
        <div class="footerSpace"></div>
    }
}
