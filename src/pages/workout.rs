//! Workout Page
//!
//! Per-exercise checkboxes for one workout.

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{CheckKey, ReferenceData, Route};

use crate::components::{BackToAppendix, Card, CheckRow, LinkButton};
use crate::context::use_app_context;

/// One check row per exercise: "<name> — <sets>" with cues underneath
#[component]
pub fn WorkoutPage(data: Arc<ReferenceData>, name: String) -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header(name.clone(), "Big tap checkboxes for each movement.");

    let rows = data
        .workout(&name)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(idx, exercise)| {
            view! {
                <CheckRow
                    check=CheckKey::workout(name.clone(), idx)
                    title=format!("{} — {}", exercise.name, exercise.sets)
                    meta=exercise.cues.clone()
                />
            }
        })
        .collect_view();

    view! {
        <Card>
            <div class="h1">{name.clone()}</div>
            {rows}
            <div class="toolbar">
                <LinkButton route=Route::Workouts label="Back to Workouts" />
                <BackToAppendix />
            </div>
        </Card>
        <div class="footerSpace"></div>
    }
}
