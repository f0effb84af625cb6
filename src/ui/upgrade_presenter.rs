//! Upgrade screen pricing presenter
//!
//! Maps the product catalog stream to the small display state the upgrade
//! screen renders: a feature label, a price line, and a button label, in a
//! with-trial or without-trial flavor. The mapping itself is a pure function;
//! [`UpgradePresenter`] wires it to a stream and republishes the latest value
//! through a watch channel.

use futures::{Stream, StreamExt};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::localization::{localize, localize_args, StringId};
use crate::subscription::{ProductCatalogState, Subscription, TEST_FREE_TRIAL_PRODUCT_ID};

/// What the upgrade screen should display for the paid tier offer
#[derive(Debug, Clone, PartialEq)]
pub enum PricingDisplayState {
    /// The offer includes a free trial
    WithTrial {
        /// Feature line, e.g. "Try Plus free for 1 month"
        feature_label: String,
        /// Price line, e.g. "1 month free then $3.99 / month"
        price: String,
        /// Call-to-action button label
        button_label: StringId,
    },
    /// The offer has no free trial
    WithoutTrial {
        /// Feature line, e.g. "Requires a Plus subscription"
        feature_label: String,
        /// Price line, e.g. "$3.99 / month"
        price: String,
        /// Call-to-action button label
        button_label: StringId,
    },
}

impl PricingDisplayState {
    /// Feature line
    pub fn feature_label(&self) -> &str {
        match self {
            Self::WithTrial { feature_label, .. } => feature_label,
            Self::WithoutTrial { feature_label, .. } => feature_label,
        }
    }

    /// Price line
    pub fn price(&self) -> &str {
        match self {
            Self::WithTrial { price, .. } => price,
            Self::WithoutTrial { price, .. } => price,
        }
    }

    /// Call-to-action button label
    pub fn button_label(&self) -> StringId {
        match self {
            Self::WithTrial { button_label, .. } => *button_label,
            Self::WithoutTrial { button_label, .. } => *button_label,
        }
    }
}

/// Derive the upgrade screen display state from one catalog emission
///
/// Anything short of a loaded catalog containing the designated trial product
/// with usable pricing resolves to `None`; absence is never an error here.
pub fn pricing_display_state(catalog: &ProductCatalogState) -> Option<PricingDisplayState> {
    let products = match catalog {
        ProductCatalogState::Loaded(products) => products,
        _ => return None,
    };

    let product = products
        .iter()
        .find(|product| product.product_id == TEST_FREE_TRIAL_PRODUCT_ID)?;
    let subscription = Subscription::from_product(product)?;

    if let (Some(trial), Some(trial_price)) = (
        subscription.trial_phase(),
        subscription.num_free_then_price_per_period(),
    ) {
        return Some(PricingDisplayState::WithTrial {
            feature_label: localize_args(
                StringId::ProfileFeatureTryTrial,
                &[&trial.period.to_string()],
            ),
            price: trial_price,
            button_label: StringId::ProfileStartFreeTrial,
        });
    }

    Some(PricingDisplayState::WithoutTrial {
        feature_label: localize(StringId::ProfileFeatureRequires),
        price: subscription.price_slash_period(),
        button_label: StringId::ProfileUpgradeToPlus,
    })
}

/// Presenter republishing the latest pricing display state
///
/// Consumes the externally owned product catalog stream on a spawned task and
/// keeps only the most recent mapped value; UI code observes it through watch
/// receivers. The task ends when the upstream stream does.
pub struct UpgradePresenter {
    /// Latest-value channel observed by the UI
    state_rx: watch::Receiver<Option<PricingDisplayState>>,

    /// Stream consumer task
    task: JoinHandle<()>,
}

impl UpgradePresenter {
    /// Create a presenter over a product catalog stream
    pub fn new<S>(catalog_stream: S) -> Self
    where
        S: Stream<Item = ProductCatalogState> + Send + 'static,
    {
        let (state_tx, state_rx) = watch::channel(None);

        let task = tokio::spawn(async move {
            let mut catalog_stream = Box::pin(catalog_stream);
            while let Some(catalog) = catalog_stream.next().await {
                state_tx.send_replace(pricing_display_state(&catalog));
            }
            log::debug!("Product catalog stream ended");
        });

        Self { state_rx, task }
    }

    /// Subscribe to display state updates
    pub fn subscribe(&self) -> watch::Receiver<Option<PricingDisplayState>> {
        self.state_rx.clone()
    }

    /// The most recently published display state
    pub fn current(&self) -> Option<PricingDisplayState> {
        self.state_rx.borrow().clone()
    }

    /// Stop consuming the catalog stream
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for UpgradePresenter {
    fn drop(&mut self) {
        self.task.abort();
    }
}
