//! Nutrition Page

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{ReferenceData, Route};

use crate::components::{BackToAppendix, Card, LinkButton};
use crate::context::use_app_context;

#[component]
pub fn NutritionPage(data: Arc<ReferenceData>) -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header("Meal Plan", "Summary + recipes. Tap to open recipe cards.");

    let summary = data
        .nutrition
        .summary
        .iter()
        .map(|line| view! { <li style="margin:8px 0;color:var(--muted)">{line.clone()}</li> })
        .collect_view();
    let recipes = data
        .nutrition
        .recipes
        .keys()
        .map(|name| view! { <LinkButton route=Route::Recipe(name.clone()) label=name.clone() /> })
        .collect_view();

    view! {
        <Card>
            <div class="h1">"Daily Nutrition Summary"</div>
            <ul style="margin:0; padding-left:18px">{summary}</ul>
            <div class="toolbar">
                {recipes}
                <BackToAppendix />
            </div>
        </Card>
        <div class="footerSpace"></div>
    }
}
