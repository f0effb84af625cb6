//! Subscription product catalog model
//!
//! Types describing the paid-tier products delivered by the billing backend,
//! plus the [`Subscription`] view the upgrade screen derives from them. The
//! catalog itself arrives over an externally owned stream; nothing in here
//! performs network or billing calls.

mod product;

pub use product::{BillingPeriod, PeriodUnit, PricingPhase, ProductDetails};

/// Product id of the paid tier offer with a free trial attached
pub const TEST_FREE_TRIAL_PRODUCT_ID: &str = "com.rustcasts.plus.testfreetrialoffer";

/// State of the product catalog as delivered by the billing backend
#[derive(Debug, Clone, PartialEq)]
pub enum ProductCatalogState {
    /// Catalog fetch is still in flight
    Loading,
    /// Catalog fetch completed
    Loaded(Vec<ProductDetails>),
    /// Catalog fetch failed
    Failed,
}

/// Pricing view of a single product, split into trial and recurring phases
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    trial_phase: Option<PricingPhase>,
    recurring_phase: PricingPhase,
}

impl Subscription {
    /// Derive a subscription view from product details
    ///
    /// Returns `None` when the product carries no paid recurring phase, since
    /// there is nothing to subscribe to in that case.
    pub fn from_product(product: &ProductDetails) -> Option<Self> {
        let recurring_phase = product
            .pricing_phases
            .iter()
            .find(|phase| !phase.is_free_trial())
            .cloned()?;
        let trial_phase = product
            .pricing_phases
            .iter()
            .find(|phase| phase.is_free_trial())
            .cloned();

        Some(Self {
            trial_phase,
            recurring_phase,
        })
    }

    /// The free trial phase, if the product offers one
    pub fn trial_phase(&self) -> Option<&PricingPhase> {
        self.trial_phase.as_ref()
    }

    /// The paid recurring phase
    pub fn recurring_phase(&self) -> &PricingPhase {
        &self.recurring_phase
    }

    /// Format the trial offer, e.g. "1 month free then $3.99 / month"
    ///
    /// Returns `None` when there is no trial phase.
    pub fn num_free_then_price_per_period(&self) -> Option<String> {
        let trial = self.trial_phase.as_ref()?;
        Some(format!(
            "{} free then {}",
            trial.period,
            self.price_slash_period()
        ))
    }

    /// Format the recurring price, e.g. "$3.99 / month"
    pub fn price_slash_period(&self) -> String {
        format!(
            "{} / {}",
            self.recurring_phase.formatted_price,
            self.recurring_phase.period.unit.singular()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly_phase() -> PricingPhase {
        PricingPhase {
            formatted_price: "$3.99".to_string(),
            price_micros: 3_990_000,
            period: BillingPeriod::new(1, PeriodUnit::Month),
        }
    }

    fn trial_phase() -> PricingPhase {
        PricingPhase {
            formatted_price: "Free".to_string(),
            price_micros: 0,
            period: BillingPeriod::new(1, PeriodUnit::Month),
        }
    }

    #[test]
    fn test_subscription_with_trial() {
        let product = ProductDetails {
            product_id: TEST_FREE_TRIAL_PRODUCT_ID.to_string(),
            pricing_phases: vec![trial_phase(), monthly_phase()],
        };

        let subscription = Subscription::from_product(&product).unwrap();
        assert!(subscription.trial_phase().is_some());
        assert_eq!(
            subscription.num_free_then_price_per_period().unwrap(),
            "1 month free then $3.99 / month"
        );
    }

    #[test]
    fn test_subscription_without_trial() {
        let product = ProductDetails {
            product_id: "com.rustcasts.plus.monthly".to_string(),
            pricing_phases: vec![monthly_phase()],
        };

        let subscription = Subscription::from_product(&product).unwrap();
        assert!(subscription.trial_phase().is_none());
        assert!(subscription.num_free_then_price_per_period().is_none());
        assert_eq!(subscription.price_slash_period(), "$3.99 / month");
    }

    #[test]
    fn test_subscription_requires_recurring_phase() {
        let product = ProductDetails {
            product_id: "com.rustcasts.plus.broken".to_string(),
            pricing_phases: vec![trial_phase()],
        };

        assert!(Subscription::from_product(&product).is_none());
    }
}
