use crate::errors::PlannerError;
use crate::models::{
    pricing::{
        AgencyComparison, FeeBreakdown, PricingQuote, PricingRequest, PricingTier, TierCatalog,
        TierInfo, TierPrice,
    },
    trip::{BudgetType, TravelStyle},
};

/// Daily spend per person above which a trip is priced as premium.
pub const PREMIUM_DAILY_THRESHOLD: f64 = 2000.0;
const PREMIUM_FEE_RATE: f64 = 0.01;
const BOOKING_FEE_RATE: f64 = 0.002;
const AGENCY_FEE_MIN_RATE: f64 = 0.10;
const AGENCY_FEE_MAX_RATE: f64 = 0.20;

pub struct PricingService;

impl PricingService {
    /// Convert a budget figure into a whole-trip total
    pub fn normalize_budget(budget: f64, budget_type: BudgetType, travelers: u32, duration: u32) -> f64 {
        match budget_type {
            BudgetType::Total => budget,
            BudgetType::PerPerson => budget * travelers as f64,
            BudgetType::PerDay => budget * duration as f64 * travelers as f64,
        }
    }

    /// Planning fee rate for standard-tier trips
    pub fn standard_fee_rate(style: TravelStyle) -> f64 {
        match style {
            TravelStyle::Budget => 0.003,
            TravelStyle::Balanced => 0.005,
            TravelStyle::Luxury => 0.007,
        }
    }

    /// Price the planning service for a trip.
    ///
    /// Every intermediate figure stays unrounded; only the returned amounts are
    /// rounded to whole currency units.
    pub fn quote(
        budget: f64,
        budget_type: BudgetType,
        travelers: u32,
        duration: u32,
        style: TravelStyle,
    ) -> Result<PricingQuote, PlannerError> {
        let person_days = duration as f64 * travelers as f64;
        if person_days == 0.0 {
            return Err(PlannerError::DivisionUndefined);
        }

        let total = Self::normalize_budget(budget, budget_type, travelers, duration);
        let daily_per_person = total / person_days;

        let (tier, planning_fee) = if daily_per_person > PREMIUM_DAILY_THRESHOLD {
            (PricingTier::Premium, total * PREMIUM_FEE_RATE)
        } else {
            (PricingTier::Standard, total * Self::standard_fee_rate(style))
        };

        let basic_booking_fee = total * BOOKING_FEE_RATE;
        let advanced_booking_fee = total * BOOKING_FEE_RATE;

        let agency_min = total * AGENCY_FEE_MIN_RATE;
        let agency_max = total * AGENCY_FEE_MAX_RATE;
        let savings_min = agency_min - planning_fee;
        let savings_max = agency_max - planning_fee;
        let savings_percentage = if agency_min > 0.0 {
            (savings_min / agency_min * 100.0).round() as i64
        } else {
            0
        };

        Ok(PricingQuote {
            total_budget: total.round() as i64,
            tier,
            planning_fee: planning_fee.round() as i64,
            basic_booking_fee: basic_booking_fee.round() as i64,
            advanced_booking_fee: advanced_booking_fee.round() as i64,
            total_with_basic_booking: (planning_fee + basic_booking_fee).round() as i64,
            total_with_advanced_booking: (planning_fee + basic_booking_fee + advanced_booking_fee)
                .round() as i64,
            agency_comparison: AgencyComparison {
                min: agency_min.round() as i64,
                max: agency_max.round() as i64,
                savings_min: savings_min.round() as i64,
                savings_max: savings_max.round() as i64,
                savings_percentage,
            },
            breakdown: FeeBreakdown {
                planning_fee_percentage: Self::percentage_of(planning_fee, total),
                basic_booking_percentage: Self::percentage_of(basic_booking_fee, total),
                advanced_booking_percentage: Self::percentage_of(advanced_booking_fee, total),
            },
        })
    }

    /// Validate a pricing payload and quote it
    pub fn quote_request(request: &PricingRequest) -> Result<PricingQuote, PlannerError> {
        let budget = request
            .budget
            .filter(|b| b.is_finite() && *b > 0.0)
            .ok_or_else(|| PlannerError::Validation("Budget and budget type are required".to_string()))?;
        let budget_type = request
            .budget_type
            .ok_or_else(|| PlannerError::Validation("Budget and budget type are required".to_string()))?;

        let travelers = Self::whole_count(request.travelers);
        let duration = Self::whole_count(request.duration);

        Self::quote(budget, budget_type, travelers, duration, request.travel_style)
    }

    /// Static description of the pricing tiers
    pub fn tiers() -> TierCatalog {
        TierCatalog {
            free: TierInfo {
                name: "Free Draft",
                price: Some(TierPrice::Amount(0)),
                price_range: None,
                condition: None,
                features: vec![
                    "Basic itinerary outline",
                    "Flight and hotel suggestions",
                    "Daily activity schedule",
                    "Budget estimation",
                ],
                limitations: vec!["No booking assistance", "No detailed maps", "No PDF export"],
            },
            standard: TierInfo {
                name: "Standard",
                price: None,
                price_range: Some("0.3-0.7%"),
                condition: None,
                features: vec![
                    "Everything in Free Draft",
                    "Detailed itinerary with maps",
                    "Budget calculation & breakdown",
                    "Google Maps integration",
                    "Professional PDF export",
                    "Basic booking assistance (+0.2%)",
                ],
                limitations: vec![],
            },
            premium: TierInfo {
                name: "Premium",
                price: Some(TierPrice::Label("1%")),
                price_range: None,
                condition: Some("for trips over $2,000/person/day"),
                features: vec![
                    "Everything in Standard",
                    "Advanced booking (restaurants, events)",
                    "Private transport arrangements",
                    "Concierge support",
                    "Real-time trip adjustments",
                    "24/7 phone support",
                ],
                limitations: vec![],
            },
        }
    }

    fn percentage_of(part: f64, total: f64) -> String {
        if total == 0.0 {
            return "0.00".to_string();
        }
        format!("{:.2}", part / total * 100.0)
    }

    // Missing, negative or fractional counts collapse to whole non-negative numbers
    fn whole_count(value: Option<f64>) -> u32 {
        value
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v.trunc() as u32)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_person_budget_at_threshold_is_standard() {
        let quote =
            PricingService::quote(10000.0, BudgetType::PerPerson, 2, 5, TravelStyle::Budget).unwrap();

        assert_eq!(quote.total_budget, 20000);
        assert_eq!(quote.tier, PricingTier::Standard);
        assert_eq!(quote.planning_fee, 60);
        assert_eq!(quote.basic_booking_fee, 40);
        assert_eq!(quote.advanced_booking_fee, 40);
        assert_eq!(quote.total_with_basic_booking, 100);
        assert_eq!(quote.total_with_advanced_booking, 140);
        assert_eq!(quote.agency_comparison.min, 2000);
        assert_eq!(quote.agency_comparison.max, 4000);
        assert_eq!(quote.agency_comparison.savings_min, 1940);
        assert_eq!(quote.agency_comparison.savings_max, 3940);
        assert_eq!(quote.agency_comparison.savings_percentage, 97);
        assert_eq!(quote.breakdown.planning_fee_percentage, "0.30");
        assert_eq!(quote.breakdown.basic_booking_percentage, "0.20");
    }

    #[test]
    fn test_just_above_threshold_is_premium() {
        // 2000.01 per person per day for one traveler and one day
        let quote =
            PricingService::quote(2000.01, BudgetType::Total, 1, 1, TravelStyle::Budget).unwrap();
        assert_eq!(quote.tier, PricingTier::Premium);
        assert_eq!(quote.planning_fee, 20);

        let at = PricingService::quote(2000.0, BudgetType::Total, 1, 1, TravelStyle::Luxury).unwrap();
        assert_eq!(at.tier, PricingTier::Standard);
        assert_eq!(at.planning_fee, 14);
    }

    #[test]
    fn test_per_day_budget_normalization() {
        let quote =
            PricingService::quote(300.0, BudgetType::PerDay, 2, 4, TravelStyle::Balanced).unwrap();
        assert_eq!(quote.total_budget, 2400);
        assert_eq!(quote.planning_fee, 12);
    }

    #[test]
    fn test_zero_person_days_is_guarded() {
        assert_eq!(
            PricingService::quote(1000.0, BudgetType::Total, 0, 5, TravelStyle::Balanced),
            Err(PlannerError::DivisionUndefined)
        );
        assert_eq!(
            PricingService::quote(1000.0, BudgetType::Total, 3, 0, TravelStyle::Balanced),
            Err(PlannerError::DivisionUndefined)
        );
    }

    #[test]
    fn test_planning_fee_is_monotonic_in_budget() {
        for style in [TravelStyle::Budget, TravelStyle::Balanced, TravelStyle::Luxury] {
            let mut last = 0;
            for step in 0..200 {
                let budget = 500.0 + step as f64 * 250.0;
                let fee = PricingService::quote(budget, BudgetType::Total, 2, 3, style)
                    .unwrap()
                    .planning_fee;
                assert!(fee >= last, "{style:?} fee dropped at {budget}");
                last = fee;
            }
        }
    }

    #[test]
    fn test_quote_request_validation() {
        let missing_budget = PricingRequest {
            budget_type: Some(BudgetType::Total),
            travelers: Some(1.0),
            duration: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            PricingService::quote_request(&missing_budget),
            Err(PlannerError::Validation(_))
        ));

        let missing_duration = PricingRequest {
            budget: Some(1000.0),
            budget_type: Some(BudgetType::Total),
            travelers: Some(2.0),
            ..Default::default()
        };
        assert_eq!(
            PricingService::quote_request(&missing_duration),
            Err(PlannerError::DivisionUndefined)
        );
    }

    #[test]
    fn test_tier_catalog() {
        let tiers = serde_json::to_value(PricingService::tiers()).unwrap();
        assert_eq!(tiers["free"]["price"], 0);
        assert_eq!(tiers["standard"]["priceRange"], "0.3-0.7%");
        assert_eq!(tiers["premium"]["price"], "1%");
        assert!(tiers["standard"].get("limitations").is_none());
    }
}
