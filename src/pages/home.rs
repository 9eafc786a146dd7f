//! Home Page
//!
//! Quick-access grid and the global reset.

use leptos::prelude::*;
use planner_core::Route;

use crate::components::{Card, ConfirmButton};
use crate::context::use_app_context;

const QUICK_LINKS: [(Route, &str); 6] = [
    (Route::Appendix, "Appendix"),
    (Route::Schedule, "Schedule"),
    (Route::Grocery, "Grocery"),
    (Route::Supplements, "Supplements"),
    (Route::Nutrition, "Meal Plan"),
    (Route::Workouts, "Workouts"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header("Master Planner", "iPhone-native (PWA). Add to Home Screen for app mode.");

    view! {
        <Card>
            <div class="h1">"Quick Access"</div>
            <div class="navRow">
                {QUICK_LINKS
                    .into_iter()
                    .map(|(route, label)| view! { <a class="navBtn" href=route.href()>{label}</a> })
                    .collect_view()}
            </div>
            <div class="toolbar">
                <ConfirmButton
                    id="reset"
                    label="Reset all checkmarks & prices"
                    prompt="Reset all checkmarks and saved prices?"
                    on_confirm=Callback::new(move |_: ()| ctx.reset_all())
                />
            </div>
            <p class="sub" style="margin-top:10px">
                "Tip: In Safari, tap Share → " <b>"Add to Home Screen"</b> " to install."
            </p>
        </Card>
    }
}
