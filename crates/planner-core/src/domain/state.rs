//! Persisted Document
//!
//! The user's checkmarks, prices and storage-checklist state. Stored as one
//! JSON object under a single key-value storage entry.

use std::collections::BTreeMap;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::bucket::StorageBucket;
use super::keys::{CheckKey, PriceKey, PriceLedger};
use crate::price::sum_prices;

/// Storage key for the persisted document
pub const STORAGE_KEY: &str = "master_planner_state_v1";

/// Estimated prices shipped with a fresh install, by grocery index
const DEFAULT_GROCERY_PRICES: [&str; 24] = [
    "9.99", "6.49", "2.79", "1.99", "1.89", "3.99", "4.49", "5.49", "6.99", "3.49", "5.99", "4.29",
    "2.29", "3.79", "0.89", "0.79", "0.69", "3.49", "4.29", "2.49", "2.99", "2.19", "1.29", "3.29",
];

const DEFAULT_SUPPLEMENT_PRICES: [&str; 13] = [
    "19.99", "14.99", "18.99", "15.99", "12.99", "13.99", "21.99", "17.99", "9.99", "16.99",
    "29.99", "7.99", "39.99",
];

const DEFAULT_SKINCARE_PRICES: [&str; 4] = ["8.99", "9.99", "14.99", "10.99"];

/// The whole persisted document
///
/// `#[serde(default)]` gives the forward-compatible shallow merge: any
/// top-level field missing from a saved document is filled from
/// `PersistedState::default()`, while fields that are present replace the
/// default wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedState {
    /// Checkbox id -> checked
    pub checks: BTreeMap<String, bool>,
    /// `grocPrice:<idx>` -> raw price text
    pub grocery_prices: BTreeMap<String, String>,
    /// `suppPrice:<idx>` / `skinPrice:<idx>` -> raw price text
    pub supplement_prices: BTreeMap<String, String>,
    /// Bucket name -> slot key -> put away
    pub storage_checklists: BTreeMap<String, BTreeMap<String, bool>>,
    /// Reserved, not rendered anywhere yet
    pub notes: BTreeMap<String, String>,
    /// Top-level fields this version does not know about, kept for write-back
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for PersistedState {
    fn default() -> Self {
        let grocery_prices = DEFAULT_GROCERY_PRICES
            .iter()
            .enumerate()
            .map(|(i, p)| (PriceKey::Grocery(i).to_string(), p.to_string()))
            .collect();

        let supplement_prices = DEFAULT_SUPPLEMENT_PRICES
            .iter()
            .enumerate()
            .map(|(i, p)| (PriceKey::Supplement(i).to_string(), p.to_string()))
            .chain(
                DEFAULT_SKINCARE_PRICES
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (PriceKey::Skincare(i).to_string(), p.to_string())),
            )
            .collect();

        let storage_checklists = StorageBucket::ALL
            .iter()
            .map(|bucket| {
                let slots = bucket
                    .slots()
                    .iter()
                    .map(|slot| (slot.key.to_string(), false))
                    .collect();
                (bucket.as_str().to_string(), slots)
            })
            .collect();

        Self {
            checks: BTreeMap::new(),
            grocery_prices,
            supplement_prices,
            storage_checklists,
            notes: BTreeMap::new(),
            extra: Map::new(),
        }
    }
}

/// Overwrite `slot` with `value` when it has the right shape
fn replace_field<T: DeserializeOwned>(slot: &mut T, value: Value) -> serde_json::Result<()> {
    *slot = serde_json::from_value(value)?;
    Ok(())
}

impl PersistedState {
    /// Decode a saved document field by field.
    ///
    /// The document must be a JSON object. A known field with the wrong shape
    /// falls back to its default without discarding the others.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let fields: Map<String, Value> = serde_json::from_str(raw)?;
        let mut state = Self::default();

        for (name, value) in fields {
            let applied = match name.as_str() {
                "checks" => replace_field(&mut state.checks, value),
                "groceryPrices" => replace_field(&mut state.grocery_prices, value),
                "supplementPrices" => replace_field(&mut state.supplement_prices, value),
                "storageChecklists" => replace_field(&mut state.storage_checklists, value),
                "notes" => replace_field(&mut state.notes, value),
                _ => {
                    state.extra.insert(name, value);
                    continue;
                }
            };
            if let Err(e) = applied {
                warn!("saved field {} is malformed, using its default: {}", name, e);
            }
        }
        Ok(state)
    }

    pub fn is_checked(&self, key: &CheckKey) -> bool {
        self.checks.get(&key.to_string()).copied().unwrap_or(false)
    }

    /// Flip a checkbox, returning the new value
    pub fn toggle_check(&mut self, key: &CheckKey) -> bool {
        let slot = self.checks.entry(key.to_string()).or_insert(false);
        *slot = !*slot;
        *slot
    }

    pub fn prices(&self, ledger: PriceLedger) -> &BTreeMap<String, String> {
        match ledger {
            PriceLedger::Grocery => &self.grocery_prices,
            PriceLedger::Supplements => &self.supplement_prices,
        }
    }

    fn prices_mut(&mut self, ledger: PriceLedger) -> &mut BTreeMap<String, String> {
        match ledger {
            PriceLedger::Grocery => &mut self.grocery_prices,
            PriceLedger::Supplements => &mut self.supplement_prices,
        }
    }

    /// Raw text of a price input, empty when never entered
    pub fn price(&self, key: &PriceKey) -> &str {
        self.prices(key.ledger())
            .get(&key.to_string())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Store price text verbatim; validation only happens when totalling
    pub fn set_price(&mut self, key: &PriceKey, raw: impl Into<String>) {
        self.prices_mut(key.ledger()).insert(key.to_string(), raw.into());
    }

    /// Running total of every parseable price in a ledger
    pub fn total(&self, ledger: PriceLedger) -> f64 {
        sum_prices(self.prices(ledger).values())
    }

    pub fn is_stored(&self, bucket: StorageBucket, key: &str) -> bool {
        self.storage_checklists
            .get(bucket.as_str())
            .and_then(|slots| slots.get(key))
            .copied()
            .unwrap_or(false)
    }

    /// Flip a storage-checklist slot, creating the bucket or slot if missing
    pub fn toggle_stored(&mut self, bucket: StorageBucket, key: &str) -> bool {
        let slot = self
            .storage_checklists
            .entry(bucket.as_str().to_string())
            .or_default()
            .entry(key.to_string())
            .or_insert(false);
        *slot = !*slot;
        *slot
    }

    /// Clear every slot in one bucket; other buckets, checks and prices are untouched
    pub fn clear_bucket(&mut self, bucket: StorageBucket) {
        if let Some(slots) = self.storage_checklists.get_mut(bucket.as_str()) {
            slots.values_mut().for_each(|v| *v = false);
        }
    }
}
