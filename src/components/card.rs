//! Card and Link Components
//!
//! Layout primitives shared by every page.

use leptos::prelude::*;
use planner_core::Route;

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <section class="card">{children()}</section> }
}

/// Rounded link pill
#[component]
pub fn Pill(route: Route, #[prop(into)] label: String) -> impl IntoView {
    view! { <a class="pill" href=route.href()>{label}</a> }
}

/// Toolbar-style link button
#[component]
pub fn LinkButton(route: Route, #[prop(into)] label: String) -> impl IntoView {
    view! { <a class="btn" href=route.href()>{label}</a> }
}

#[component]
pub fn BackToAppendix() -> impl IntoView {
    view! { <LinkButton route=Route::Appendix label="Back to Appendix" /> }
}
