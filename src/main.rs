use anyhow::Context;

use rustcasts::config::AppConfig;
use rustcasts::launcher::{AppIcon, AppIconType, LoggingComponentRegistry};
use rustcasts::localization::localize;
use rustcasts::preferences::FilePreferenceStore;
use rustcasts::subscription::{
    BillingPeriod, PeriodUnit, PricingPhase, ProductCatalogState, ProductDetails,
    TEST_FREE_TRIAL_PRODUCT_ID,
};
use rustcasts::ui::UpgradePresenter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    rustcasts::init_logger(config.log_level);

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("icons") => icons_demo(&config, args.get(2).map(String::as_str))?,
        Some("pricing") => pricing_demo().await,
        _ => print_usage(),
    }

    Ok(())
}

/// List the icon catalog; optionally select a new icon by id
fn icons_demo(config: &AppConfig, selected_id: Option<&str>) -> anyhow::Result<()> {
    let store = FilePreferenceStore::with_path(config.preferences_path.clone())
        .context("Failed to open preference store")?;
    let mut app_icon = AppIcon::new(store, LoggingComponentRegistry, config.build_mode);

    if let Some(id) = selected_id {
        let icon = AppIconType::from_id(id);
        app_icon
            .set_active_icon(icon)
            .context("Failed to persist icon selection")?;
        app_icon
            .enable_selected_alias(icon)
            .context("Failed to resync launcher aliases")?;
        println!("Selected icon: {}", icon.id());
    }

    let active = app_icon.active_icon();
    println!("Available icons:");
    for icon in app_icon.all_icons() {
        let marker = if *icon == active { "*" } else { " " };
        let plus = if icon.is_plus() { " (Plus)" } else { "" };
        println!("  {} {} - {}{}", marker, icon.id(), localize(icon.label_id()), plus);
    }

    Ok(())
}

/// Pipe a canned product catalog sequence through the upgrade presenter
async fn pricing_demo() {
    let product = ProductDetails {
        product_id: TEST_FREE_TRIAL_PRODUCT_ID.to_string(),
        pricing_phases: vec![
            PricingPhase {
                formatted_price: "Free".to_string(),
                price_micros: 0,
                period: BillingPeriod::new(1, PeriodUnit::Month),
            },
            PricingPhase {
                formatted_price: "$3.99".to_string(),
                price_micros: 3_990_000,
                period: BillingPeriod::new(1, PeriodUnit::Month),
            },
        ],
    };

    let catalog_stream = tokio_stream::iter(vec![
        ProductCatalogState::Loading,
        ProductCatalogState::Loaded(vec![product]),
    ]);

    let presenter = UpgradePresenter::new(catalog_stream);
    let mut state_rx = presenter.subscribe();

    while state_rx.changed().await.is_ok() {
        match state_rx.borrow().as_ref() {
            Some(state) => println!(
                "Upgrade screen: {} | {} | button={:?}",
                state.feature_label(),
                state.price(),
                state.button_label()
            ),
            None => println!("Upgrade screen: nothing to show"),
        }
    }
}

fn print_usage() {
    println!("RustCasts settings demo");
    println!("\nUsage:");
    println!("  rustcasts icons        - List launcher icon variants");
    println!("  rustcasts icons <id>   - Select a launcher icon by id");
    println!("  rustcasts pricing      - Run the upgrade pricing presenter demo");
}
