//! Grocery Page
//!
//! Master grocery list with prices, storage checklist and export.

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{CheckKey, PriceKey, PriceLedger, ReferenceData, StorageBucket};

use crate::components::{
    BackToAppendix, Card, CheckRow, EstimatedTotal, GroceryExportActions, PriceField,
    ResetStorageButton, StorageChecklist,
};
use crate::context::use_app_context;

#[component]
pub fn GroceryPage(data: Arc<ReferenceData>) -> impl IntoView {
    let ctx = use_app_context();
    ctx.set_header("Grocery", "Prices + checkmarks save on your phone (offline).");

    let rows = data
        .grocery
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            view! {
                <CheckRow check=CheckKey::Grocery(idx) title=name.clone()>
                    <PriceField price=PriceKey::Grocery(idx) />
                </CheckRow>
            }
        })
        .collect_view();

    view! {
        <Card>
            <div class="h1">"Master Grocery List"</div>
            <p class="sub">"Enter prices if you want; they’ll auto-total below."</p>
            <StorageChecklist bucket=StorageBucket::Grocery />
            {rows}
            <div class="toolbar">
                <GroceryExportActions data=data.clone() />
                <ResetStorageButton bucket=StorageBucket::Grocery id="resetGStorage" />
                <EstimatedTotal ledger=PriceLedger::Grocery />
                <BackToAppendix />
            </div>
        </Card>
        <div class="footerSpace"></div>
    }
}
