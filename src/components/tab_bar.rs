//! Tab Bar Component
//!
//! Bottom navigation; the tab for the current page carries `active`.

use leptos::prelude::*;
use planner_core::NavTab;

use crate::context::use_app_context;

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();
    let active_tab = move || ctx.route().map(|r| r.tab()).unwrap_or(NavTab::Home);

    view! {
        <nav class="tabs">
            {NavTab::ALL
                .into_iter()
                .map(|tab| {
                    let tab_class = move || {
                        if active_tab() == tab { "tab active" } else { "tab" }
                    };
                    view! {
                        <a id=tab.dom_id() class=tab_class href=tab.route().href()>
                            {tab.label()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
