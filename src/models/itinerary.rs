use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::trip::{AccommodationType, TripRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Flights,
    Accommodation,
    Food,
    Activities,
    Transportation,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 5] = [
        BudgetCategory::Flights,
        BudgetCategory::Accommodation,
        BudgetCategory::Food,
        BudgetCategory::Activities,
        BudgetCategory::Transportation,
    ];
}

/// Amount allocated to each category, rounded per category.
pub type BudgetBreakdown = BTreeMap<BudgetCategory, i64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub destination: String,
    pub duration: u32,
    pub total_budget: i64,
    pub budget_breakdown: BudgetBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub airline: String,
    pub price: i64,
    pub duration: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flights {
    pub outbound: FlightLeg,
    #[serde(rename = "return")]
    pub return_leg: FlightLeg,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lodging {
    pub name: String,
    #[serde(rename = "type")]
    pub lodging_type: AccommodationType,
    pub price_per_night: i64,
    pub rating: f64,
    pub location: String,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledActivity {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub cost: i64,
    pub duration: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub restaurant: String,
    pub cuisine: String,
    pub cost: i64,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transportation {
    pub method: String,
    pub cost: i64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub date: NaiveDate,
    pub theme: String,
    pub activities: Vec<ScheduledActivity>,
    pub meals: Meals,
    pub transportation: Transportation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyInfo {
    pub embassy: String,
    pub hospital_nearby: String,
    pub emergency_numbers: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub summary: TripSummary,
    pub flights: Flights,
    pub accommodation: Vec<Lodging>,
    pub daily_itinerary: Vec<DayPlan>,
    pub tips: Vec<String>,
    pub emergency_info: EmergencyInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItineraryStatus {
    #[default]
    Draft,
    Confirmed,
    Archived,
}

/// A generated itinerary as kept by the store and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredItinerary {
    pub id: String,
    #[serde(flatten)]
    pub itinerary: Itinerary,
    pub original_request: TripRequest,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ItineraryStatus,
}

impl StoredItinerary {
    pub fn new(id: String, itinerary: Itinerary, original_request: TripRequest) -> Self {
        Self {
            id,
            itinerary,
            original_request,
            created_at: Utc::now(),
            updated_at: None,
            status: ItineraryStatus::Draft,
        }
    }

    /// Replaces every field the patch carries and stamps `updated_at`.
    pub fn apply(&mut self, patch: ItineraryPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(tips) = patch.tips {
            self.itinerary.tips = tips;
        }
        if let Some(accommodation) = patch.accommodation {
            self.itinerary.accommodation = accommodation;
        }
        if let Some(flights) = patch.flights {
            self.itinerary.flights = flights;
        }
        if let Some(days) = patch.daily_itinerary {
            self.itinerary.daily_itinerary = days;
        }
        if let Some(info) = patch.emergency_info {
            self.itinerary.emergency_info = info;
        }
        self.updated_at = Some(Utc::now());
    }
}

/// Fields a client may overwrite on a stored itinerary.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItineraryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<Vec<Lodging>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights: Option<Flights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_itinerary: Option<Vec<DayPlan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_info: Option<EmergencyInfo>,
}
