//! Schedule Page

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{ReferenceData, Route};

use crate::components::{BackToAppendix, Card, Pill};
use crate::context::use_app_context;

#[component]
pub fn SchedulePage(data: Arc<ReferenceData>) -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header("Schedule", "Choose a day");

    let pills = data
        .schedule
        .keys()
        .map(|day| view! { <Pill route=Route::Day(day.clone()) label=day.clone() /> })
        .collect_view();

    view! {
        <Card>
            <div class="h1">"Days"</div>
            <div class="pillRow">{pills}</div>
            <div class="toolbar">
                <BackToAppendix />
            </div>
        </Card>
    }
}
