//! Raw product details as delivered by the billing backend

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit of a billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodUnit {
    /// Billed or trialed per day
    Day,
    /// Billed or trialed per week
    Week,
    /// Billed or trialed per month
    Month,
    /// Billed or trialed per year
    Year,
}

impl PeriodUnit {
    /// Singular English label ("month")
    pub fn singular(&self) -> &'static str {
        match self {
            PeriodUnit::Day => "day",
            PeriodUnit::Week => "week",
            PeriodUnit::Month => "month",
            PeriodUnit::Year => "year",
        }
    }

    /// Plural English label ("months")
    pub fn plural(&self) -> &'static str {
        match self {
            PeriodUnit::Day => "days",
            PeriodUnit::Week => "weeks",
            PeriodUnit::Month => "months",
            PeriodUnit::Year => "years",
        }
    }
}

/// Length of a billing or trial period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// Number of units
    pub value: u32,
    /// Unit of measure
    pub unit: PeriodUnit,
}

impl BillingPeriod {
    /// Create a billing period
    pub fn new(value: u32, unit: PeriodUnit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 1 {
            write!(f, "1 {}", self.unit.singular())
        } else {
            write!(f, "{} {}", self.value, self.unit.plural())
        }
    }
}

/// One pricing phase of a product
///
/// A phase with a zero price is a free trial phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPhase {
    /// Price formatted for display in the user's currency ("$3.99")
    pub formatted_price: String,

    /// Price in micro-units of the currency
    pub price_micros: u64,

    /// How long the phase lasts or recurs
    pub period: BillingPeriod,
}

impl PricingPhase {
    /// Whether this phase is a free trial
    pub fn is_free_trial(&self) -> bool {
        self.price_micros == 0
    }
}

/// Details of a single purchasable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    /// Stable product identifier
    pub product_id: String,

    /// Pricing phases in billing order (trial first when present)
    pub pricing_phases: Vec<PricingPhase>,
}
