use serde::{Deserialize, Serialize};

use super::trip::{lenient_number, BudgetType, TravelStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    Standard,
    Premium,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub budget: Option<f64>,
    pub budget_type: Option<BudgetType>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub travelers: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub travel_style: TravelStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyComparison {
    pub min: i64,
    pub max: i64,
    pub savings_min: i64,
    pub savings_max: i64,
    pub savings_percentage: i64,
}

/// Fee shares of the normalized budget, two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub planning_fee_percentage: String,
    pub basic_booking_percentage: String,
    pub advanced_booking_percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingQuote {
    pub total_budget: i64,
    pub tier: PricingTier,
    pub planning_fee: i64,
    pub basic_booking_fee: i64,
    pub advanced_booking_fee: i64,
    pub total_with_basic_booking: i64,
    pub total_with_advanced_booking: i64,
    pub agency_comparison: AgencyComparison,
    pub breakdown: FeeBreakdown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TierPrice {
    Amount(u32),
    Label(&'static str),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<TierPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<&'static str>,
    pub features: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub limitations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierCatalog {
    pub free: TierInfo,
    pub standard: TierInfo,
    pub premium: TierInfo,
}
