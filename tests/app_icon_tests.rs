//! Tests for the launcher icon selector

use std::collections::HashMap;

use mockall::mock;
use pretty_assertions::assert_eq;

use rustcasts::config::BuildMode;
use rustcasts::launcher::{
    AppIcon, AppIconType, ComponentEnabledState, ComponentError, ComponentName, ComponentRegistry,
    DEBUG_PACKAGE, RELEASE_PACKAGE,
};
use rustcasts::preferences::{MemoryPreferenceStore, PreferenceStore, PREFERENCE_APP_ICON};

/// Registry that records the last state written for each component
#[derive(Debug, Default)]
struct RecordingRegistry {
    states: HashMap<String, ComponentEnabledState>,
}

impl RecordingRegistry {
    fn enabled_components(&self) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, state)| **state == ComponentEnabledState::Enabled)
            .map(|(component, _)| component.as_str())
            .collect()
    }

    fn disabled_count(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state == ComponentEnabledState::Disabled)
            .count()
    }
}

impl ComponentRegistry for RecordingRegistry {
    fn set_component_enabled(
        &mut self,
        component: &ComponentName,
        state: ComponentEnabledState,
    ) -> Result<(), ComponentError> {
        self.states.insert(component.flatten(), state);
        Ok(())
    }
}

mock! {
    Registry {}

    impl ComponentRegistry for Registry {
        fn set_component_enabled(
            &mut self,
            component: &ComponentName,
            state: ComponentEnabledState,
        ) -> Result<(), ComponentError>;
    }
}

/// Helper to create a store pre-seeded with a persisted icon id
fn store_with_icon_id(id: &str) -> MemoryPreferenceStore {
    let mut values = HashMap::new();
    values.insert(PREFERENCE_APP_ICON.to_string(), id.to_string());
    MemoryPreferenceStore::with_values(values)
}

#[test]
fn test_active_icon_defaults_when_nothing_persisted() {
    let app_icon = AppIcon::new(
        MemoryPreferenceStore::new(),
        RecordingRegistry::default(),
        BuildMode::Release,
    );

    assert_eq!(app_icon.active_icon(), AppIconType::Default);
}

#[test]
fn test_active_icon_restored_from_preferences() {
    let app_icon = AppIcon::new(
        store_with_icon_id("redvelvet"),
        RecordingRegistry::default(),
        BuildMode::Release,
    );

    assert_eq!(app_icon.active_icon(), AppIconType::RedVelvet);
}

#[test]
fn test_unknown_persisted_id_falls_back_to_default() {
    let app_icon = AppIcon::new(
        store_with_icon_id("not-a-real-id"),
        RecordingRegistry::default(),
        BuildMode::Release,
    );

    assert_eq!(app_icon.active_icon(), AppIconType::Default);
}

#[test]
fn test_set_active_icon_persists_id() {
    let mut app_icon = AppIcon::new(
        MemoryPreferenceStore::new(),
        RecordingRegistry::default(),
        BuildMode::Release,
    );

    app_icon.set_active_icon(AppIconType::ElectricBlue).unwrap();

    assert_eq!(app_icon.active_icon(), AppIconType::ElectricBlue);
    assert_eq!(
        app_icon.store().get_string(PREFERENCE_APP_ICON, "default"),
        "electricBlue"
    );
}

#[test]
fn test_all_icons_returns_full_catalog() {
    let app_icon = AppIcon::new(
        MemoryPreferenceStore::new(),
        RecordingRegistry::default(),
        BuildMode::Release,
    );

    let icons = app_icon.all_icons();
    assert_eq!(icons.len(), 13);
    assert_eq!(icons[0], AppIconType::Default);
}

#[test]
fn test_enable_selected_alias_enables_exactly_one() {
    let mut app_icon = AppIcon::new(
        MemoryPreferenceStore::new(),
        RecordingRegistry::default(),
        BuildMode::Release,
    );

    app_icon.enable_selected_alias(AppIconType::Cat).unwrap();

    let registry = app_icon.registry();
    assert_eq!(registry.states.len(), 13);
    assert_eq!(
        registry.enabled_components(),
        vec!["com.rustcasts.app/com.rustcasts.app.ui.MainActivity_10"]
    );
    assert_eq!(registry.disabled_count(), 12);
}

#[test]
fn test_enable_selected_alias_default_disables_all() {
    let mut app_icon = AppIcon::new(
        MemoryPreferenceStore::new(),
        RecordingRegistry::default(),
        BuildMode::Release,
    );

    app_icon.enable_selected_alias(AppIconType::Default).unwrap();

    let registry = app_icon.registry();
    assert_eq!(registry.states.len(), 13);
    assert!(registry.enabled_components().is_empty());
    assert_eq!(registry.disabled_count(), 13);
}

#[test]
fn test_enable_selected_alias_uses_debug_package_in_debug_builds() {
    let mut app_icon = AppIcon::new(
        MemoryPreferenceStore::new(),
        RecordingRegistry::default(),
        BuildMode::Debug,
    );

    app_icon.enable_selected_alias(AppIconType::Dark).unwrap();

    let registry = app_icon.registry();
    assert!(registry
        .states
        .keys()
        .all(|component| component.starts_with(DEBUG_PACKAGE)));
    assert!(!DEBUG_PACKAGE.is_empty() && DEBUG_PACKAGE != RELEASE_PACKAGE);
}

#[test]
fn test_enable_selected_alias_resync_is_idempotent() {
    let mut app_icon = AppIcon::new(
        MemoryPreferenceStore::new(),
        RecordingRegistry::default(),
        BuildMode::Release,
    );

    app_icon.enable_selected_alias(AppIconType::Rose).unwrap();
    app_icon.enable_selected_alias(AppIconType::Rose).unwrap();

    let registry = app_icon.registry();
    assert_eq!(registry.enabled_components().len(), 1);
    assert_eq!(registry.disabled_count(), 12);
}

#[test]
fn test_enable_selected_alias_writes_every_component() {
    let mut mock_registry = MockRegistry::new();
    mock_registry
        .expect_set_component_enabled()
        .times(13)
        .returning(|_, _| Ok(()));

    let mut app_icon = AppIcon::new(
        MemoryPreferenceStore::new(),
        mock_registry,
        BuildMode::Release,
    );

    app_icon.enable_selected_alias(AppIconType::Classic).unwrap();
}

#[test]
fn test_enable_selected_alias_propagates_registry_errors() {
    let mut mock_registry = MockRegistry::new();
    mock_registry
        .expect_set_component_enabled()
        .returning(|component, _| {
            Err(ComponentError::SetStateFailed {
                component: component.flatten(),
                message: "permission denied".to_string(),
            })
        });

    let mut app_icon = AppIcon::new(
        MemoryPreferenceStore::new(),
        mock_registry,
        BuildMode::Release,
    );

    let result = app_icon.enable_selected_alias(AppIconType::Plus);
    assert!(result.is_err());
}
