//! Recipe Page
//!
//! One recipe card: ingredients, instructions and notes.

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{ReferenceData, Route};

use crate::components::{BackToAppendix, Card, LinkButton};
use crate::context::use_app_context;

fn bullet_list(items: &[String]) -> impl IntoView {
    view! {
        <ul style="margin:0; padding-left:18px">
            {items
                .iter()
                .map(|x| view! { <li style="margin:8px 0;color:var(--muted)">{x.clone()}</li> })
                .collect_view()}
        </ul>
    }
}

/// Recipe card; the router guarantees the recipe exists
#[component]
pub fn RecipePage(data: Arc<ReferenceData>, name: String) -> impl IntoView {
    let ctx = use_app_context();
    let recipe = data.recipe(&name).cloned().unwrap_or_default();
    let subtitle = recipe
        .yield_amount
        .as_ref()
        .map(|y| format!("Yield: {}", y))
        .unwrap_or_default();
    ctx.set_header(name.clone(), subtitle);

    view! {
        <Card>
            <div class="h1">{name}</div>
            {recipe.ingredients.map(|items| view! {
                <div class="h2">"Ingredients"</div>
                {bullet_list(&items)}
            })}
            {recipe.instructions.map(|items| view! {
                <div class="h2" style="margin-top:12px">"Instructions"</div>
                {bullet_list(&items)}
            })}
            {recipe.storage.map(|text| view! {
                <p class="sub" style="margin-top:12px"><b>"Storage:"</b> " " {text}</p>
            })}
            {recipe.nutrition.map(|text| view! {
                <p class="sub"><b>"Nutrition:"</b> " " {text}</p>
            })}
            <div class="toolbar">
                <LinkButton route=Route::Nutrition label="Back to Meal Plan" />
                <BackToAppendix />
            </div>
        </Card>
        <div class="footerSpace"></div>
    }
}
