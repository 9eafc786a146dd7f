//! More Page

use leptos::prelude::*;
use planner_core::Route;

use crate::components::{Card, Pill};
use crate::context::use_app_context;

#[component]
pub fn MorePage() -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header("More", "Supplements, Meal Plan, Recipes, and Workouts.");

    view! {
        <Card>
            <div class="h1">"More Sections"</div>
            <div class="pillRow">
                <Pill route=Route::Supplements label="Supplements" />
                <Pill route=Route::Nutrition label="Meal Plan" />
                <Pill route=Route::Workouts label="Workouts" />
                <Pill route=Route::Appendix label="Back to Appendix" />
            </div>
            <p class="sub" style="margin-top:10px">
                "Tip: Use the bottom tabs for one-handed navigation."
            </p>
        </Card>
    }
}
