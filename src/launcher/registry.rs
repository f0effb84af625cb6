//! OS launcher component registry seam
//!
//! The real registry lives in the OS package manager. The trait keeps the
//! icon selector testable and lets the desktop demo run against a logging
//! stand-in.

use std::fmt;

use thiserror::Error;

/// Fully qualified name of a launcher component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName {
    /// Package the component lives in
    pub package: String,

    /// Fully qualified class of the component
    pub class: String,
}

impl ComponentName {
    /// Create a component name
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    /// Flattened "package/class" form used in logs and error messages
    pub fn flatten(&self) -> String {
        format!("{}/{}", self.package, self.class)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

/// Enabled state of a launcher component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEnabledState {
    /// Component is enabled and visible to the launcher
    Enabled,
    /// Component is disabled and hidden from the launcher
    Disabled,
}

/// Component registry error type
#[derive(Debug, Error)]
pub enum ComponentError {
    /// The OS refused or failed the component state change
    #[error("Failed to set state of component {component}: {message}")]
    SetStateFailed {
        /// Flattened component name
        component: String,
        /// OS-provided failure detail
        message: String,
    },
}

/// Registry of launcher components keyed by (package, class) pairs
pub trait ComponentRegistry {
    /// Set the enabled state of a launcher component
    fn set_component_enabled(
        &mut self,
        component: &ComponentName,
        state: ComponentEnabledState,
    ) -> Result<(), ComponentError>;
}

/// Registry stand-in that only logs the requested state changes
///
/// Used by the demo binary, where no OS package manager is available.
#[derive(Debug, Default)]
pub struct LoggingComponentRegistry;

impl ComponentRegistry for LoggingComponentRegistry {
    fn set_component_enabled(
        &mut self,
        component: &ComponentName,
        state: ComponentEnabledState,
    ) -> Result<(), ComponentError> {
        log::info!("Component {} -> {:?}", component.flatten(), state);
        Ok(())
    }
}
