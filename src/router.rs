//! Hash Router
//!
//! Maps the current route to a page. Unknown pages go to `#home`; deep links
//! to a missing day, recipe or workout go to that section's listing page.

use std::sync::Arc;

use leptos::prelude::*;
use log::debug;
use planner_core::{ReferenceData, Route};

use crate::components::Card;
use crate::context::use_app_context;
use crate::pages::*;

#[component]
pub fn Router() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.track_revision();

        let Some(route) = ctx.route() else {
            debug!("unknown page, going home");
            ctx.navigate(&Route::Home);
            return ().into_any();
        };

        match route {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::More => view! { <MorePage /> }.into_any(),
            route => match ctx.data.get() {
                None => view! {
                    <Card>
                        <p class="sub">"Loading…"</p>
                    </Card>
                }
                .into_any(),
                Some(Err(message)) => view! {
                    <Card>
                        <div class="h1">"Couldn’t load planner data"</div>
                        <p class="sub">{message}</p>
                        <div class="toolbar">
                            <button class="btn" on:click=move |_| ctx.data.refetch()>
                                "Retry"
                            </button>
                        </div>
                    </Card>
                }
                .into_any(),
                Some(Ok(data)) => match data.redirect_for(&route) {
                    Some(target) => {
                        debug!("{} not found, showing {}", route, target);
                        ctx.navigate(&target);
                        ().into_any()
                    }
                    None => data_page(route, data),
                },
            },
        }
    }
}

fn data_page(route: Route, data: Arc<ReferenceData>) -> AnyView {
    match route {
        Route::Appendix => view! { <AppendixPage data=data /> }.into_any(),
        Route::Schedule => view! { <SchedulePage data=data /> }.into_any(),
        Route::Day(day) => view! { <DayPage data=data day=day /> }.into_any(),
        Route::Grocery => view! { <GroceryPage data=data /> }.into_any(),
        Route::Supplements => view! { <SupplementsPage data=data /> }.into_any(),
        Route::Nutrition => view! { <NutritionPage data=data /> }.into_any(),
        Route::Recipe(name) => view! { <RecipePage data=data name=name /> }.into_any(),
        Route::Workouts => view! { <WorkoutsPage data=data /> }.into_any(),
        Route::Workout(name) => view! { <WorkoutPage data=data name=name /> }.into_any(),
        // Rendered without reference data
        Route::Home | Route::More => ().into_any(),
    }
}
