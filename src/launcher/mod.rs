//! Home-screen launcher icon selection
//!
//! This module holds the fixed catalog of launcher icon variants, the
//! persisted "active icon" state, and the registry seam used to flip the
//! OS-level launcher component aliases so the chosen icon actually shows.

mod app_icon;
mod icon_catalog;
mod registry;

pub use app_icon::{AppIcon, DEBUG_PACKAGE, RELEASE_PACKAGE};
pub use icon_catalog::AppIconType;
pub use registry::{
    ComponentEnabledState, ComponentError, ComponentName, ComponentRegistry,
    LoggingComponentRegistry,
};
