//! Application Context
//!
//! Shared state provided via Leptos Context API: the state store, the
//! memoised reference data, the current route and the shell header.

use std::sync::Arc;

use leptos::prelude::*;
use log::warn;
use planner_core::export::{build_grocery_export, GroceryExport};
use planner_core::{
    CheckKey, PriceKey, PriceLedger, ReferenceData, Route, StateStore, StorageBucket,
};

use crate::commands::{self, BrowserStorage};
use crate::config::AppConfig;

/// Reference data, fetched once and shared for the app lifetime
pub type DataResource = LocalResource<Result<Arc<ReferenceData>, String>>;

/// Title and subtitle shown in the shell header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageHeader {
    pub title: String,
    pub subtitle: String,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Persisted document plus its localStorage backend
    store: RwSignal<StateStore<BrowserStorage>>,
    /// Reference data (loaded on first use, then cached)
    pub data: DataResource,
    pub config: StoredValue<AppConfig>,
    /// Raw `location.hash`
    fragment: RwSignal<String>,
    route: Memo<Option<Route>>,
    /// Bumped to force the current page to re-mount
    revision: RwSignal<u32>,
    online: RwSignal<bool>,
    header: RwSignal<PageHeader>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let store = RwSignal::new(StateStore::load_with_key(BrowserStorage, &config.storage_key));

        let data_url = config.data_url.clone();
        let data = LocalResource::new(move || {
            let url = data_url.clone();
            async move { commands::fetch_reference_data(&url).await.map(Arc::new) }
        });

        let fragment = RwSignal::new(commands::current_fragment());
        let route = Memo::new(move |_| Route::parse(&fragment.get()));

        Self {
            store,
            data,
            config: StoredValue::new(config),
            fragment,
            route,
            revision: RwSignal::new(0),
            online: RwSignal::new(commands::is_online()),
            header: RwSignal::new(PageHeader::default()),
        }
    }

    // ========================
    // Routing
    // ========================

    /// Parsed current route; `None` for unknown pages
    pub fn route(&self) -> Option<Route> {
        self.route.get()
    }

    /// Re-read `location.hash` (hashchange)
    pub fn sync_fragment(&self) {
        self.fragment.set(commands::current_fragment());
    }

    pub fn navigate(&self, route: &Route) {
        if let Err(e) = commands::set_fragment(route) {
            warn!("Failed to navigate to {}: {}", route, e);
        }
    }

    /// Force the current page to render again from the store
    pub fn rerender(&self) {
        self.revision.update(|v| *v = v.wrapping_add(1));
    }

    pub fn track_revision(&self) {
        self.revision.track();
    }

    pub fn is_online(&self) -> bool {
        self.online.get()
    }

    /// Connectivity changed: update the badge and re-render the page
    pub fn set_online(&self, online: bool) {
        self.online.set(online);
        self.rerender();
    }

    // ========================
    // Header
    // ========================

    pub fn set_header(&self, title: impl Into<String>, subtitle: impl Into<String>) {
        self.header.set(PageHeader {
            title: title.into(),
            subtitle: subtitle.into(),
        });
    }

    pub fn header(&self) -> PageHeader {
        self.header.get()
    }

    // ========================
    // Persisted state
    // ========================

    pub fn is_checked(&self, key: &CheckKey) -> bool {
        self.store.with(|store| store.state().is_checked(key))
    }

    pub fn toggle_check(&self, key: &CheckKey) {
        self.store.update(|store| {
            if let Err(e) = store.toggle_check(key) {
                warn!("Failed to save checkmark {}: {}", key, e);
            }
        });
    }

    /// Price text for pre-filling an input; not reactive
    pub fn price_untracked(&self, key: &PriceKey) -> String {
        self.store
            .with_untracked(|store| store.state().price(key).to_string())
    }

    pub fn set_price(&self, key: &PriceKey, raw: &str) {
        self.store.update(|store| {
            if let Err(e) = store.set_price(key, raw) {
                warn!("Failed to save price {}: {}", key, e);
            }
        });
    }

    /// Running total of a price ledger
    pub fn total(&self, ledger: PriceLedger) -> f64 {
        self.store.with(|store| store.state().total(ledger))
    }

    pub fn is_stored(&self, bucket: StorageBucket, key: &str) -> bool {
        self.store.with(|store| store.state().is_stored(bucket, key))
    }

    pub fn toggle_stored(&self, bucket: StorageBucket, key: &str) {
        self.store.update(|store| {
            if let Err(e) = store.toggle_stored(bucket, key) {
                warn!("Failed to save storage checklist {}:{}: {}", bucket.as_str(), key, e);
            }
        });
    }

    /// Clear one storage checklist and re-render the page
    pub fn reset_bucket(&self, bucket: StorageBucket) {
        self.store.update(|store| {
            if let Err(e) = store.reset_bucket(bucket) {
                warn!("Failed to save storage checklist reset: {}", e);
            }
        });
        self.rerender();
    }

    /// Replace everything with defaults and re-render the page
    pub fn reset_all(&self) {
        self.store.update(|store| {
            if let Err(e) = store.reset() {
                warn!("Failed to save reset state: {}", e);
            }
        });
        self.rerender();
    }

    /// Snapshot export of the checked grocery items
    pub fn grocery_export(&self, grocery: &[String]) -> GroceryExport {
        let generated_at = commands::local_timestamp();
        self.store
            .with_untracked(|store| build_grocery_export(grocery, store.state(), &generated_at))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
