use crate::errors::PlannerError;
use crate::models::{
    itinerary::{
        DayPlan, EmergencyInfo, FlightLeg, Flights, Itinerary, Lodging, Meal, Meals,
        ScheduledActivity, Transportation, TripSummary,
    },
    trip::{TravelStyle, TripRequest, DEFAULT_BUDGET},
};
use crate::services::budget_allocator::BudgetAllocator;
use crate::services::destination_catalog::{DestinationCatalog, DestinationProfile};
use crate::services::random_source::{choose, RandomSource};
use chrono::Duration;

const FLIGHT_SHARE: f64 = 0.15;
const LODGING_SHARE: f64 = 0.25;
const ACTIVITY_SHARE: f64 = 0.05;
const AFTERNOON_MULTIPLIER: f64 = 1.4;
const MAX_TRIP_DAYS: i64 = 30;
const MIN_RATING: f64 = 4.2;
const MAX_RATING: f64 = 5.0;

const AIRLINES: [&str; 6] = [
    "Delta",
    "United",
    "American",
    "Lufthansa",
    "Air France",
    "British Airways",
];
const AMENITIES: [&str; 5] = ["WiFi", "Breakfast", "Gym", "Pool", "Spa"];

#[derive(Debug, Clone, PartialEq)]
struct SynthesisConfig {
    /// Share of the budget charged for each flight leg
    flight_share: f64,
    /// Share of the budget spread over all lodging nights
    lodging_share: f64,
    /// Share of the budget for the morning activity
    activity_share: f64,
    afternoon_multiplier: f64,
    max_trip_days: i64,
    /// Used when the request has no usable budget
    fallback_budget: i64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            flight_share: FLIGHT_SHARE,
            lodging_share: LODGING_SHARE,
            activity_share: ACTIVITY_SHARE,
            afternoon_multiplier: AFTERNOON_MULTIPLIER,
            max_trip_days: MAX_TRIP_DAYS,
            fallback_budget: DEFAULT_BUDGET,
        }
    }
}

/// Interest tags that steer activity selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestCategory {
    Culture,
    Food,
    Nature,
    Adventure,
}

impl InterestCategory {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "culture" => Some(InterestCategory::Culture),
            "food" => Some(InterestCategory::Food),
            "nature" => Some(InterestCategory::Nature),
            "adventure" => Some(InterestCategory::Adventure),
            _ => None,
        }
    }

    /// Name fragments that place an activity in this category
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            InterestCategory::Culture => &["Museum", "Temple", "Shrine"],
            InterestCategory::Food => &["Market", "Food"],
            InterestCategory::Nature => &["Park", "Garden"],
            InterestCategory::Adventure => &["Bridge", "Tower"],
        }
    }

    pub fn matches(&self, activity: &str) -> bool {
        self.keywords().iter().any(|k| activity.contains(k))
    }
}

/// Meal cost shares of the total budget: breakfast, lunch, dinner.
fn meal_shares(style: TravelStyle) -> (f64, f64, f64) {
    match style {
        TravelStyle::Budget => (0.02, 0.03, 0.05),
        TravelStyle::Balanced => (0.02, 0.04, 0.06),
        TravelStyle::Luxury => (0.03, 0.05, 0.10),
    }
}

fn round(value: f64) -> i64 {
    value.round() as i64
}

/// Uniform in [4.2, 5.0). Draws close to 1 would otherwise round up to 5.0.
fn draw_rating(rng: &mut dyn RandomSource) -> f64 {
    let rating = MIN_RATING + rng.next_float() * (MAX_RATING - MIN_RATING);
    rating.min(f64::from_bits(MAX_RATING.to_bits() - 1))
}

/// Builds a complete itinerary from local reference data, without any
/// external model.
#[derive(Default)]
pub struct ItineraryGenerator {
    config: SynthesisConfig,
}

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validated trip length in days
    pub fn trip_duration(&self, trip: &TripRequest) -> Result<u32, PlannerError> {
        let days = trip.duration_days();
        if days <= 0 || days > self.config.max_trip_days {
            return Err(PlannerError::InvalidDuration(days));
        }
        Ok(days as u32)
    }

    /// Generate a full day-by-day itinerary for the trip
    pub fn generate_itinerary(
        &self,
        trip: &TripRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<Itinerary, PlannerError> {
        let profile = DestinationCatalog::lookup(&trip.destination);
        let duration = self.trip_duration(trip)?;
        let total_budget = trip.effective_budget(self.config.fallback_budget);
        let budget = total_budget as f64;

        Ok(Itinerary {
            summary: TripSummary {
                destination: trip.destination.clone(),
                duration,
                total_budget,
                budget_breakdown: BudgetAllocator::allocate(budget, trip.travel_style),
            },
            flights: self.generate_flights(&trip.destination, budget, rng),
            accommodation: self.generate_accommodation(profile, trip, budget, duration, rng),
            daily_itinerary: self.generate_daily_schedules(profile, trip, budget, duration, rng),
            tips: self.generate_tips(trip),
            emergency_info: self.generate_emergency_info(),
        })
    }

    fn generate_flights(&self, destination: &str, budget: f64, rng: &mut dyn RandomSource) -> Flights {
        let price = round(budget * self.config.flight_share);
        let duration = DestinationCatalog::flight_duration(destination);

        let mut leg = |notes: &str| FlightLeg {
            airline: choose(rng, &AIRLINES).copied().unwrap_or(AIRLINES[0]).to_string(),
            price,
            duration: duration.to_string(),
            notes: notes.to_string(),
        };

        let outbound = leg("Book 2-3 months in advance for best prices");
        let return_leg = leg("Return flight included");
        Flights { outbound, return_leg }
    }

    fn generate_accommodation(
        &self,
        profile: &DestinationProfile,
        trip: &TripRequest,
        budget: f64,
        duration: u32,
        rng: &mut dyn RandomSource,
    ) -> Vec<Lodging> {
        let price_per_night = round(budget * self.config.lodging_share / duration as f64);
        let rating = draw_rating(rng);
        let name = choose(rng, profile.hotels).copied().unwrap_or("City Center Hotel");

        vec![Lodging {
            name: name.to_string(),
            lodging_type: trip.accommodation_type,
            price_per_night,
            rating,
            location: "City Center".to_string(),
            amenities: AMENITIES.iter().map(|a| a.to_string()).collect(),
        }]
    }

    fn generate_daily_schedules(
        &self,
        profile: &DestinationProfile,
        trip: &TripRequest,
        budget: f64,
        duration: u32,
        rng: &mut dyn RandomSource,
    ) -> Vec<DayPlan> {
        (1..=duration)
            .map(|day| {
                let offset = (day - 1) as usize;
                let theme = profile
                    .themes
                    .get(offset % profile.themes.len().max(1))
                    .copied()
                    .unwrap_or("City Discovery");

                DayPlan {
                    day,
                    date: trip.start_date + Duration::days(offset as i64),
                    theme: theme.to_string(),
                    activities: self.generate_day_activities(profile, trip, budget, rng),
                    meals: self.generate_day_meals(profile, trip.travel_style, budget, rng),
                    transportation: self.generate_transportation(trip.travel_style, budget),
                }
            })
            .collect()
    }

    fn generate_day_activities(
        &self,
        profile: &DestinationProfile,
        trip: &TripRequest,
        budget: f64,
        rng: &mut dyn RandomSource,
    ) -> Vec<ScheduledActivity> {
        let morning_cost = round(budget * self.config.activity_share);
        let afternoon_cost = round(morning_cost as f64 * self.config.afternoon_multiplier);

        vec![
            ScheduledActivity {
                time: "9:00 AM".to_string(),
                activity: self.select_activity(profile.activities, &trip.interests, rng),
                location: format!("{} City Center", trip.destination),
                cost: morning_cost,
                duration: "2-3 hours".to_string(),
                notes: "Start your day with this must-see attraction".to_string(),
            },
            ScheduledActivity {
                time: "2:00 PM".to_string(),
                activity: self.select_activity(profile.activities, &trip.interests, rng),
                location: format!("{} Main District", trip.destination),
                cost: afternoon_cost,
                duration: "3-4 hours".to_string(),
                notes: "Afternoon highlight activity".to_string(),
            },
        ]
    }

    /// Pick from the first interest, in the caller's order, that matches any
    /// activity; otherwise pick from everything.
    pub fn select_activity(
        &self,
        activities: &[&str],
        interests: &[String],
        rng: &mut dyn RandomSource,
    ) -> String {
        let bucket = interests
            .iter()
            .filter_map(|tag| InterestCategory::parse(tag))
            .map(|category| {
                activities
                    .iter()
                    .copied()
                    .filter(|a| category.matches(a))
                    .collect::<Vec<&str>>()
            })
            .find(|bucket| !bucket.is_empty());

        let picked = match bucket {
            Some(bucket) => choose(rng, &bucket).copied(),
            None => choose(rng, activities).copied(),
        };
        picked.unwrap_or("City Walking Tour").to_string()
    }

    fn generate_day_meals(
        &self,
        profile: &DestinationProfile,
        style: TravelStyle,
        budget: f64,
        rng: &mut dyn RandomSource,
    ) -> Meals {
        let (breakfast, lunch, dinner) = meal_shares(style);
        let mut restaurant = || {
            choose(rng, profile.restaurants)
                .copied()
                .unwrap_or("Local Bistro")
                .to_string()
        };

        let lunch_restaurant = restaurant();
        let dinner_restaurant = restaurant();

        Meals {
            breakfast: Meal {
                restaurant: "Local Morning Cafe".to_string(),
                cuisine: "Continental".to_string(),
                cost: round(budget * breakfast),
                location: "Near hotel".to_string(),
            },
            lunch: Meal {
                restaurant: lunch_restaurant,
                cuisine: "Local".to_string(),
                cost: round(budget * lunch),
                location: "City center".to_string(),
            },
            dinner: Meal {
                restaurant: dinner_restaurant,
                cuisine: "Fine Dining".to_string(),
                cost: round(budget * dinner),
                location: "Entertainment district".to_string(),
            },
        }
    }

    fn generate_transportation(&self, style: TravelStyle, budget: f64) -> Transportation {
        let (method, share) = match style {
            TravelStyle::Luxury => ("Private car", 0.02),
            _ => ("Public transport", 0.005),
        };

        Transportation {
            method: method.to_string(),
            cost: round(budget * share),
            notes: "Daily transport within city".to_string(),
        }
    }

    fn generate_tips(&self, trip: &TripRequest) -> Vec<String> {
        let mut tips = vec![
            format!(
                "Best time to visit {} is during shoulder season for fewer crowds",
                trip.destination
            ),
            "Book accommodations early for better rates".to_string(),
            "Learn basic local phrases to enhance your experience".to_string(),
            "Keep copies of important documents in separate locations".to_string(),
            "Check visa requirements well in advance".to_string(),
            "Pack weather-appropriate clothing and comfortable walking shoes".to_string(),
        ];

        match trip.travel_style {
            TravelStyle::Budget => tips.push("Look for free walking tours and museum free days".to_string()),
            TravelStyle::Luxury => tips.push("Consider private guides for exclusive experiences".to_string()),
            TravelStyle::Balanced => {}
        }

        if let Some(custom) = &trip.custom_activities {
            tips.push(format!("Don't forget: {}", custom));
        }

        tips
    }

    fn generate_emergency_info(&self) -> EmergencyInfo {
        EmergencyInfo {
            embassy: "Contact your local embassy for assistance".to_string(),
            hospital_nearby: "Research nearest hospital and medical facilities".to_string(),
            emergency_numbers: "Local emergency numbers: 911 (US), 112 (EU), 110 (Japan)".to_string(),
        }
    }
}
