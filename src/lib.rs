// Root module exports
pub mod config;
pub mod error;
pub mod launcher;
pub mod localization;
pub mod logging;
pub mod preferences;
pub mod subscription;
pub mod ui;

// Re-export common items for convenience
pub use config::{AppConfig, BuildMode, LogLevel};
pub use error::{Result, SettingsError};
pub use launcher::{
    AppIcon, AppIconType, ComponentEnabledState, ComponentName, ComponentRegistry,
    LoggingComponentRegistry,
};
pub use localization::{localize, localize_args, StringId};
pub use logging::init_logger;
pub use preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, PREFERENCE_APP_ICON,
};
pub use subscription::{ProductCatalogState, ProductDetails, Subscription};
pub use ui::{pricing_display_state, PricingDisplayState, UpgradePresenter};
