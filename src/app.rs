//! Master Planner App
//!
//! Shell layout: header with connectivity badge, the routed page, and the
//! bottom tab bar.

use leptos::ev;
use leptos::prelude::*;

use crate::commands;
use crate::components::TabBar;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::router::Router;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Offline cache, registered once the app is mounted
    commands::register_service_worker(&config.service_worker_path);

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Back/forward, typed URLs and our own navigate() all land here
    let on_hash = window_event_listener(ev::hashchange, move |_| ctx.sync_fragment());
    let on_online = window_event_listener(ev::online, move |_| ctx.set_online(true));
    let on_offline = window_event_listener(ev::offline, move |_| ctx.set_online(false));
    on_cleanup(move || {
        on_hash.remove();
        on_online.remove();
        on_offline.remove();
    });

    let title = move || ctx.header().title;
    let subtitle = move || ctx.header().subtitle;
    let badge = move || if ctx.is_online() { "Online" } else { "Offline" };

    view! {
        <header class="top">
            <div>
                <div id="title" class="title">{title}</div>
                <div id="subtitle" class="subtitle">{subtitle}</div>
            </div>
            <span id="badge" class="badge">{badge}</span>
        </header>
        <main id="app">
            <Router />
        </main>
        <TabBar />
    }
}
