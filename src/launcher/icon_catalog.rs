//! Fixed catalog of launcher icon variants

use crate::localization::StringId;

/// A launcher icon variant
///
/// The catalog is fixed at compile time; every variant carries static
/// metadata describing how to show it in settings and which launcher
/// component alias it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppIconType {
    /// Standard red icon
    Default,
    /// Dark background icon
    Dark,
    /// Round icon on a light background
    RoundLight,
    /// Round icon on a dark background
    RoundDark,
    /// Indigo icon
    Indigo,
    /// Rose icon
    Rose,
    /// Cat mascot icon
    Cat,
    /// Red velvet icon
    RedVelvet,
    /// Plus-branded icon (premium only)
    Plus,
    /// Classic icon (premium only)
    Classic,
    /// Electric blue icon (premium only)
    ElectricBlue,
    /// Electric pink icon (premium only)
    ElectricPink,
    /// Radioactive icon (premium only)
    Radioactive,
}

/// Static metadata for one icon variant
struct IconMetadata {
    /// Stable id persisted in preferences
    id: &'static str,
    /// Display label resource
    label_id: StringId,
    /// Preview image shown in the settings list
    preview_asset: &'static str,
    /// Whether the variant is restricted to paying subscribers
    is_plus: bool,
    /// Launcher icon image
    launcher_asset: &'static str,
    /// Launcher component alias suffix
    alias_name: &'static str,
}

impl AppIconType {
    /// All icon variants, in settings display order
    pub const ALL: [AppIconType; 13] = [
        AppIconType::Default,
        AppIconType::Dark,
        AppIconType::RoundLight,
        AppIconType::RoundDark,
        AppIconType::Indigo,
        AppIconType::Rose,
        AppIconType::Cat,
        AppIconType::RedVelvet,
        AppIconType::Plus,
        AppIconType::Classic,
        AppIconType::ElectricBlue,
        AppIconType::ElectricPink,
        AppIconType::Radioactive,
    ];

    /// Resolve a persisted id against the catalog
    ///
    /// Unrecognized ids fall back to the default variant rather than failing;
    /// a stale preference must never break startup.
    pub fn from_id(id: &str) -> AppIconType {
        AppIconType::ALL
            .iter()
            .copied()
            .find(|icon| icon.id() == id)
            .unwrap_or_default()
    }

    /// Stable id persisted in preferences
    pub fn id(&self) -> &'static str {
        self.metadata().id
    }

    /// Display label resource
    pub fn label_id(&self) -> StringId {
        self.metadata().label_id
    }

    /// Preview image shown in the settings list
    pub fn preview_asset(&self) -> &'static str {
        self.metadata().preview_asset
    }

    /// Whether the variant is restricted to paying subscribers
    pub fn is_plus(&self) -> bool {
        self.metadata().is_plus
    }

    /// Launcher icon image
    pub fn launcher_asset(&self) -> &'static str {
        self.metadata().launcher_asset
    }

    /// Launcher component alias suffix
    pub fn alias_name(&self) -> &'static str {
        self.metadata().alias_name
    }

    fn metadata(&self) -> &'static IconMetadata {
        match self {
            AppIconType::Default => &IconMetadata {
                id: "default",
                label_id: StringId::SettingsAppIconDefault,
                preview_asset: "icons/appicon_default.png",
                is_plus: false,
                launcher_asset: "launcher/ic_launcher.png",
                alias_name: ".ui.MainActivity_0",
            },
            AppIconType::Dark => &IconMetadata {
                id: "dark",
                label_id: StringId::SettingsAppIconDark,
                preview_asset: "icons/appicon_dark.png",
                is_plus: false,
                launcher_asset: "launcher/ic_launcher_1.png",
                alias_name: ".ui.MainActivity_1",
            },
            AppIconType::RoundLight => &IconMetadata {
                id: "roundedLight",
                label_id: StringId::SettingsAppIconRoundLight,
                preview_asset: "icons/appicon_round_light.png",
                is_plus: false,
                launcher_asset: "launcher/ic_launcher_2.png",
                alias_name: ".ui.MainActivity_2",
            },
            AppIconType::RoundDark => &IconMetadata {
                id: "roundedDark",
                label_id: StringId::SettingsAppIconRoundDark,
                preview_asset: "icons/appicon_round_dark.png",
                is_plus: false,
                launcher_asset: "launcher/ic_launcher_3.png",
                alias_name: ".ui.MainActivity_3",
            },
            AppIconType::Indigo => &IconMetadata {
                id: "indigo",
                label_id: StringId::SettingsAppIconIndigo,
                preview_asset: "icons/appicon_indigo.png",
                is_plus: false,
                launcher_asset: "launcher/ic_launcher_indigo.png",
                alias_name: ".ui.MainActivity_9",
            },
            AppIconType::Rose => &IconMetadata {
                id: "rose",
                label_id: StringId::SettingsAppIconRose,
                preview_asset: "icons/appicon_rose.png",
                is_plus: false,
                launcher_asset: "launcher/ic_launcher_rose.png",
                alias_name: ".ui.MainActivity_12",
            },
            AppIconType::Cat => &IconMetadata {
                id: "cat",
                label_id: StringId::SettingsAppIconCat,
                preview_asset: "icons/appicon_cat.png",
                is_plus: false,
                launcher_asset: "launcher/ic_launcher_cat.png",
                alias_name: ".ui.MainActivity_10",
            },
            AppIconType::RedVelvet => &IconMetadata {
                id: "redvelvet",
                label_id: StringId::SettingsAppIconRedVelvet,
                preview_asset: "icons/appicon_red_velvet.png",
                is_plus: false,
                launcher_asset: "launcher/ic_launcher_redvelvet.png",
                alias_name: ".ui.MainActivity_11",
            },
            AppIconType::Plus => &IconMetadata {
                id: "plus",
                label_id: StringId::SettingsAppIconPlus,
                preview_asset: "icons/appicon_plus.png",
                is_plus: true,
                launcher_asset: "launcher/ic_launcher_4.png",
                alias_name: ".ui.MainActivity_4",
            },
            AppIconType::Classic => &IconMetadata {
                id: "classic",
                label_id: StringId::SettingsAppIconClassic,
                preview_asset: "icons/appicon_classic.png",
                is_plus: true,
                launcher_asset: "launcher/ic_launcher_5.png",
                alias_name: ".ui.MainActivity_5",
            },
            AppIconType::ElectricBlue => &IconMetadata {
                id: "electricBlue",
                label_id: StringId::SettingsAppIconElectricBlue,
                preview_asset: "icons/appicon_electric_blue.png",
                is_plus: true,
                launcher_asset: "launcher/ic_launcher_6.png",
                alias_name: ".ui.MainActivity_6",
            },
            AppIconType::ElectricPink => &IconMetadata {
                id: "electricPink",
                label_id: StringId::SettingsAppIconElectricPink,
                preview_asset: "icons/appicon_electric_pink.png",
                is_plus: true,
                launcher_asset: "launcher/ic_launcher_7.png",
                alias_name: ".ui.MainActivity_7",
            },
            AppIconType::Radioactive => &IconMetadata {
                id: "radioactive",
                label_id: StringId::SettingsAppIconRadioactive,
                preview_asset: "icons/appicon_radioactive.png",
                is_plus: true,
                launcher_asset: "launcher/ic_launcher_radioactive.png",
                alias_name: ".ui.MainActivity_8",
            },
        }
    }
}

impl Default for AppIconType {
    fn default() -> Self {
        AppIconType::Default
    }
}
