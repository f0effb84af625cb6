//! Localized string resources
//!
//! Lookup service mapping stable string ids to display templates. Templates
//! use `{0}`, `{1}`, ... as positional placeholders. Only English resources
//! are bundled; the id indirection keeps call sites translation-ready.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Identifier for a localized string resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringId {
    /// "Default" app icon label
    SettingsAppIconDefault,
    /// "Dark" app icon label
    SettingsAppIconDark,
    /// "Round Light" app icon label
    SettingsAppIconRoundLight,
    /// "Round Dark" app icon label
    SettingsAppIconRoundDark,
    /// "Indigo" app icon label
    SettingsAppIconIndigo,
    /// "Rose" app icon label
    SettingsAppIconRose,
    /// "Pocket Cats" app icon label
    SettingsAppIconCat,
    /// "Red Velvet" app icon label
    SettingsAppIconRedVelvet,
    /// "Plus" app icon label
    SettingsAppIconPlus,
    /// "Classic" app icon label
    SettingsAppIconClassic,
    /// "Electric Blue" app icon label
    SettingsAppIconElectricBlue,
    /// "Electric Pink" app icon label
    SettingsAppIconElectricPink,
    /// "Radioactivity" app icon label
    SettingsAppIconRadioactive,
    /// Upgrade screen feature label when a free trial is offered; arg 0 is the trial period
    ProfileFeatureTryTrial,
    /// Upgrade screen feature label when no trial is offered
    ProfileFeatureRequires,
    /// Upgrade button label when a free trial is offered
    ProfileStartFreeTrial,
    /// Upgrade button label when no trial is offered
    ProfileUpgradeToPlus,
}

lazy_static! {
    /// English string resource table
    static ref STRINGS: HashMap<StringId, &'static str> = {
        let mut m = HashMap::new();
        m.insert(StringId::SettingsAppIconDefault, "Default");
        m.insert(StringId::SettingsAppIconDark, "Dark");
        m.insert(StringId::SettingsAppIconRoundLight, "Round Light");
        m.insert(StringId::SettingsAppIconRoundDark, "Round Dark");
        m.insert(StringId::SettingsAppIconIndigo, "Indigo");
        m.insert(StringId::SettingsAppIconRose, "Rose");
        m.insert(StringId::SettingsAppIconCat, "Pocket Cats");
        m.insert(StringId::SettingsAppIconRedVelvet, "Red Velvet");
        m.insert(StringId::SettingsAppIconPlus, "Plus");
        m.insert(StringId::SettingsAppIconClassic, "Classic");
        m.insert(StringId::SettingsAppIconElectricBlue, "Electric Blue");
        m.insert(StringId::SettingsAppIconElectricPink, "Electric Pink");
        m.insert(StringId::SettingsAppIconRadioactive, "Radioactivity");
        m.insert(StringId::ProfileFeatureTryTrial, "Try Plus free for {0}");
        m.insert(
            StringId::ProfileFeatureRequires,
            "Requires a Plus subscription",
        );
        m.insert(StringId::ProfileStartFreeTrial, "Start free trial");
        m.insert(StringId::ProfileUpgradeToPlus, "Upgrade to Plus");
        m
    };
}

/// Look up a localized string with no arguments
pub fn localize(id: StringId) -> String {
    template(id).to_string()
}

/// Look up a localized string and substitute positional arguments
pub fn localize_args(id: StringId, args: &[&str]) -> String {
    let mut result = template(id).to_string();
    for (index, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", index), arg);
    }
    result
}

fn template(id: StringId) -> &'static str {
    // Every StringId variant has a table entry; the fallback keeps a missing
    // resource from panicking in release builds.
    STRINGS.get(&id).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_plain() {
        assert_eq!(localize(StringId::SettingsAppIconDefault), "Default");
        assert_eq!(
            localize(StringId::ProfileFeatureRequires),
            "Requires a Plus subscription"
        );
    }

    #[test]
    fn test_localize_with_args() {
        assert_eq!(
            localize_args(StringId::ProfileFeatureTryTrial, &["1 month"]),
            "Try Plus free for 1 month"
        );
    }

    #[test]
    fn test_every_id_has_a_template() {
        let ids = [
            StringId::SettingsAppIconDefault,
            StringId::SettingsAppIconDark,
            StringId::SettingsAppIconRoundLight,
            StringId::SettingsAppIconRoundDark,
            StringId::SettingsAppIconIndigo,
            StringId::SettingsAppIconRose,
            StringId::SettingsAppIconCat,
            StringId::SettingsAppIconRedVelvet,
            StringId::SettingsAppIconPlus,
            StringId::SettingsAppIconClassic,
            StringId::SettingsAppIconElectricBlue,
            StringId::SettingsAppIconElectricPink,
            StringId::SettingsAppIconRadioactive,
            StringId::ProfileFeatureTryTrial,
            StringId::ProfileFeatureRequires,
            StringId::ProfileStartFreeTrial,
            StringId::ProfileUpgradeToPlus,
        ];
        for id in ids {
            assert!(!localize(id).is_empty(), "missing template for {:?}", id);
        }
    }
}
