//! Storage Checklist Buckets
//!
//! Post-purchase "put it away" confirmations, grouped per shopping list.

use serde::{Deserialize, Serialize};

/// A single toggle inside a storage checklist bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageSlot {
    /// Sub-key under `storageChecklists[bucket]`
    pub key: &'static str,
    pub label: &'static str,
    pub hint: Option<&'static str>,
}

const fn slot(key: &'static str, label: &'static str) -> StorageSlot {
    StorageSlot { key, label, hint: None }
}

const GROCERY_SLOTS: &[StorageSlot] = &[
    slot("pantry", "Pantry / Dry goods"),
    slot("fridge", "Fridge / Fresh"),
    slot("freezer", "Freezer"),
    slot("condiments", "Condiments / Sauces"),
    slot("snacks", "Snacks / Grab-and-go"),
];

const SUPPLEMENT_SLOTS: &[StorageSlot] = &[
    slot("medicine_cabinet", "Medicine cabinet / Supplement shelf"),
    slot("bathroom", "Bathroom / Skincare station"),
    slot("travel_bag", "Travel bag / On-the-go kit"),
    StorageSlot {
        key: "reorder_soon",
        label: "Reorder soon",
        hint: Some("Mark if anything is low so you remember later."),
    },
];

/// Named sub-collection of `PersistedState::storage_checklists`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBucket {
    Grocery,
    Supplements,
}

impl StorageBucket {
    pub const ALL: [StorageBucket; 2] = [StorageBucket::Grocery, StorageBucket::Supplements];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBucket::Grocery => "grocery",
            StorageBucket::Supplements => "supplements",
        }
    }

    pub fn slots(&self) -> &'static [StorageSlot] {
        match self {
            StorageBucket::Grocery => GROCERY_SLOTS,
            StorageBucket::Supplements => SUPPLEMENT_SLOTS,
        }
    }

    pub fn intro(&self) -> &'static str {
        match self {
            StorageBucket::Grocery => {
                "Quick check after shopping: put items away + confirm areas are stocked."
            }
            StorageBucket::Supplements => {
                "Quick check after restock: confirm items are stored + set reorder reminder if needed."
            }
        }
    }

    /// Prompt shown before the bucket is cleared
    pub fn reset_prompt(&self) -> &'static str {
        match self {
            StorageBucket::Grocery => "Reset ONLY the Grocery storage checklist?",
            StorageBucket::Supplements => "Reset ONLY the Supplements storage checklist?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_names() {
        assert_eq!(StorageBucket::Grocery.as_str(), "grocery");
        assert_eq!(StorageBucket::Supplements.as_str(), "supplements");
    }

    #[test]
    fn test_slot_keys_unique_per_bucket() {
        for bucket in StorageBucket::ALL {
            let mut keys: Vec<_> = bucket.slots().iter().map(|s| s.key).collect();
            let len = keys.len();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), len, "duplicate slot in {}", bucket.as_str());
        }
    }
}
