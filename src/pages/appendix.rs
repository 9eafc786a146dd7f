//! Appendix Page
//!
//! Index of every section, built from the reference data.

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{ReferenceData, Route};

use crate::components::{Card, Pill};
use crate::context::use_app_context;

#[component]
pub fn AppendixPage(data: Arc<ReferenceData>) -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header("Appendix", "Tap any section. (Designed for thumb tapping.)");

    let day_pills = data
        .schedule
        .keys()
        .map(|day| view! { <Pill route=Route::Day(day.clone()) label=day.clone() /> })
        .collect_view();
    let recipe_pills = data
        .nutrition
        .recipes
        .keys()
        .map(|name| view! { <Pill route=Route::Recipe(name.clone()) label=name.clone() /> })
        .collect_view();
    let workout_pills = data
        .workouts
        .keys()
        .map(|name| view! { <Pill route=Route::Workout(name.clone()) label=name.clone() /> })
        .collect_view();

    view! {
        <Card>
            <div class="h1">"Schedule"</div>
            <div class="pillRow">{day_pills}</div>
        </Card>
        <Card>
            <div class="h1">"Lists"</div>
            <div class="pillRow">
                <Pill route=Route::Grocery label="Master Grocery List" />
                <Pill route=Route::Supplements label="Supplement & Skincare List" />
            </div>
        </Card>
        <Card>
            <div class="h1">"Nutrition / Recipes"</div>
            <div class="pillRow">
                <Pill route=Route::Nutrition label="Daily Nutrition Summary" />
                {recipe_pills}
            </div>
        </Card>
        <Card>
            <div class="h1">"Fitness"</div>
            <div class="pillRow">{workout_pills}</div>
        </Card>
    }
}
