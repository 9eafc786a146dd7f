//! Workouts Page

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{ReferenceData, Route};

use crate::components::{Card, Pill};
use crate::context::use_app_context;

#[component]
pub fn WorkoutsPage(data: Arc<ReferenceData>) -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header("Workouts", "Tap a workout. Check sets as you go.");

    let pills = data
        .workouts
        .keys()
        .map(|name| view! { <Pill route=Route::Workout(name.clone()) label=name.clone() /> })
        .collect_view();

    view! {
        <Card>
            <div class="h1">"Choose"</div>
            <div class="pillRow">
                {pills}
                <Pill route=Route::Appendix label="Back to Appendix" />
            </div>
        </Card>
    }
}
