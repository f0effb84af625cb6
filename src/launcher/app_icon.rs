//! Active launcher icon state and alias switching

use crate::config::BuildMode;
use crate::launcher::icon_catalog::AppIconType;
use crate::launcher::registry::{
    ComponentEnabledState, ComponentError, ComponentName, ComponentRegistry,
};
use crate::preferences::{PreferenceError, PreferenceStore, PREFERENCE_APP_ICON};

/// Launcher component package in release builds
pub const RELEASE_PACKAGE: &str = "com.rustcasts.app";

/// Launcher component package in debug builds
pub const DEBUG_PACKAGE: &str = "com.rustcasts.app.debug";

/// Class path prefix the alias suffixes attach to
const CLASS_PATH: &str = "com.rustcasts.app";

/// Manager for the active launcher icon
///
/// Holds the in-memory selection, persists it on change, and resyncs the OS
/// component aliases on request. The persisted id is resolved eagerly at
/// construction; an unrecognized id silently resolves to the default icon.
///
/// Persisting the selection and toggling the aliases are two separate steps;
/// callers sequence them. Not internally synchronized, intended for use from
/// the UI thread.
pub struct AppIcon<S: PreferenceStore, R: ComponentRegistry> {
    /// Currently active icon
    active: AppIconType,

    /// Preference store holding the persisted selection
    store: S,

    /// OS launcher component registry
    registry: R,

    /// Build mode, selects the component package
    build_mode: BuildMode,
}

impl<S: PreferenceStore, R: ComponentRegistry> AppIcon<S, R> {
    /// Create a manager, restoring the persisted selection
    pub fn new(store: S, registry: R, build_mode: BuildMode) -> Self {
        let persisted_id = store.get_string(PREFERENCE_APP_ICON, AppIconType::Default.id());
        let active = AppIconType::from_id(&persisted_id);
        if active.id() != persisted_id {
            log::warn!(
                "Unknown persisted app icon id '{}', falling back to default",
                persisted_id
            );
        }

        Self {
            active,
            store,
            registry,
            build_mode,
        }
    }

    /// The currently active icon
    pub fn active_icon(&self) -> AppIconType {
        self.active
    }

    /// Change the active icon, persisting the new selection synchronously
    pub fn set_active_icon(&mut self, icon: AppIconType) -> Result<(), PreferenceError> {
        self.active = icon;
        self.store.put_string(PREFERENCE_APP_ICON, icon.id())
    }

    /// All icon variants, in settings display order
    pub fn all_icons(&self) -> &'static [AppIconType] {
        &AppIconType::ALL
    }

    /// Bring the OS component aliases in line with `selected`
    ///
    /// Every catalog entry is written on every call, not just the delta, so a
    /// single call always leaves the registry in a known state: exactly the
    /// selected alias enabled, or all aliases disabled when the default icon
    /// is selected (the default icon is the package's own launcher entry).
    pub fn enable_selected_alias(&mut self, selected: AppIconType) -> Result<(), ComponentError> {
        let package = match self.build_mode {
            BuildMode::Debug => DEBUG_PACKAGE,
            BuildMode::Release => RELEASE_PACKAGE,
        };

        for icon in AppIconType::ALL {
            let component =
                ComponentName::new(package, format!("{}{}", CLASS_PATH, icon.alias_name()));
            let state = if icon == selected && selected != AppIconType::Default {
                ComponentEnabledState::Enabled
            } else {
                ComponentEnabledState::Disabled
            };
            self.registry.set_component_enabled(&component, state)?;
        }

        log::debug!("Resynced launcher aliases for '{}'", selected.id());
        Ok(())
    }

    /// The underlying preference store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying component registry
    pub fn registry(&self) -> &R {
        &self.registry
    }
}
