//! Price Field Component

use leptos::prelude::*;
use planner_core::price::format_money;
use planner_core::{PriceKey, PriceLedger};

use crate::context::use_app_context;

/// Free-text price input; every keystroke is stored verbatim
#[component]
pub fn PriceField(price: PriceKey) -> impl IntoView {
    let ctx = use_app_context();
    let initial = ctx.price_untracked(&price);

    view! {
        <div class="priceRow">
            <label class="itemMeta" style="min-width:90px">"Price ($)"</label>
            <input
                class="input"
                inputmode="decimal"
                placeholder="0.00"
                value=initial
                data-price=price.to_string()
                on:input=move |ev| ctx.set_price(&price, &event_target_value(&ev))
            />
        </div>
    }
}

/// Live total of every parseable price in a ledger
#[component]
pub fn EstimatedTotal(ledger: PriceLedger) -> impl IntoView {
    let ctx = use_app_context();
    let id = match ledger {
        PriceLedger::Grocery => "gTotal",
        PriceLedger::Supplements => "sTotal",
    };

    view! {
        <div class="btn" style="flex:1">
            "Estimated Total: $"
            <span id=id>{move || format_money(ctx.total(ledger))}</span>
        </div>
    }
}
