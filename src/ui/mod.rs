//! View models backing the settings UI

pub mod upgrade_presenter;

pub use upgrade_presenter::{pricing_display_state, PricingDisplayState, UpgradePresenter};
