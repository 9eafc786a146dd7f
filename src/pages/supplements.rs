//! Supplements Page
//!
//! Supplement and skincare checklists with prices.

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{PriceKey, PriceLedger, ReferenceData, StorageBucket};

use crate::components::{
    BackToAppendix, Card, CheckRow, EstimatedTotal, PriceField, ResetStorageButton,
    StorageChecklist,
};
use crate::context::use_app_context;

#[component]
pub fn SupplementsPage(data: Arc<ReferenceData>) -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header("Supplements", "Check items + (optional) enter estimated prices.");

    view! {
        <Card>
            <div class="h1">"Supplement & Skincare List"</div>
            <StorageChecklist bucket=StorageBucket::Supplements />
            {price_section("SUPPLEMENTS", &data.supplements.supplements, PriceKey::Supplement)}
            {price_section("SKINCARE", &data.supplements.skincare, PriceKey::Skincare)}
            <div class="toolbar">
                <ResetStorageButton bucket=StorageBucket::Supplements id="resetSStorage" />
                <EstimatedTotal ledger=PriceLedger::Supplements />
                <BackToAppendix />
            </div>
        </Card>
        <div class="footerSpace"></div>
    }
}

/// Titled list of check rows, each with a price input keyed by `price_key`
fn price_section(title: &'static str, items: &[String], price_key: fn(usize) -> PriceKey) -> impl IntoView {
    let rows = items
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let price = price_key(idx);
            view! {
                <CheckRow check=price.check_key() title=name.clone()>
                    <PriceField price=price />
                </CheckRow>
            }
        })
        .collect_view();

    view! {
        <div class="h2">{title}</div>
        {rows}
    }
}
