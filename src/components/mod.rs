//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod card;
mod check_row;
mod price_field;
mod storage_checklist;
mod confirm_button;
mod export_actions;
mod tab_bar;

pub use card::{BackToAppendix, Card, LinkButton, Pill};
pub use check_row::CheckRow;
pub use price_field::{EstimatedTotal, PriceField};
pub use storage_checklist::{ResetStorageButton, StorageChecklist};
pub use confirm_button::ConfirmButton;
pub use export_actions::GroceryExportActions;
pub use tab_bar::TabBar;
