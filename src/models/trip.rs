use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

use crate::errors::PlannerError;

/// Budget used whenever the request carries no usable figure.
pub const DEFAULT_BUDGET: i64 = 5000;

/// Client enum fields arrive as free text, `null` or the wrong JSON type.
/// Anything that is not a string reads as absent.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientText>::deserialize(deserializer)? {
        Some(LenientText::Text(s)) => Some(s),
        Some(LenientText::Other(_)) | None => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Budget,
    #[default]
    Balanced,
    Luxury,
}

impl<'de> Deserialize<'de> for TravelStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_text(deserializer)?
            .map(|s| TravelStyle::parse(&s))
            .unwrap_or_default())
    }
}

impl TravelStyle {
    /// Unrecognized styles fall back to `Balanced`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "budget" => TravelStyle::Budget,
            "luxury" => TravelStyle::Luxury,
            _ => TravelStyle::Balanced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    #[default]
    Total,
    PerPerson,
    PerDay,
}

impl<'de> Deserialize<'de> for BudgetType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_text(deserializer)?
            .map(|s| BudgetType::parse(&s))
            .unwrap_or_default())
    }
}

impl BudgetType {
    /// Unrecognized budget types are treated as a whole-trip figure.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "per_person" => BudgetType::PerPerson,
            "per_day" => BudgetType::PerDay,
            _ => BudgetType::Total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationType {
    #[default]
    Hotel,
    Airbnb,
    Hostel,
    Mixed,
}

impl AccommodationType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "airbnb" => AccommodationType::Airbnb,
            "hostel" => AccommodationType::Hostel,
            "mixed" => AccommodationType::Mixed,
            _ => AccommodationType::Hotel,
        }
    }
}

impl<'de> Deserialize<'de> for AccommodationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_text(deserializer)?
            .map(|s| AccommodationType::parse(&s))
            .unwrap_or_default())
    }
}

/// Web forms post numbers as strings, so numeric fields accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}

/// Trip preferences exactly as they arrive from the client.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequestPayload {
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub travelers: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub budget: Option<f64>,
    #[serde(default)]
    pub budget_type: BudgetType,
    #[serde(default)]
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub food_preferences: Vec<String>,
    #[serde(default)]
    pub accommodation_type: AccommodationType,
    pub custom_activities: Option<String>,
}

/// Validated trip preferences. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget: Option<f64>,
    pub budget_type: BudgetType,
    pub travel_style: TravelStyle,
    pub interests: Vec<String>,
    pub food_preferences: Vec<String>,
    pub accommodation_type: AccommodationType,
    pub custom_activities: Option<String>,
}

impl TripRequest {
    /// Days between start and end. Can be zero or negative.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Integral budget, or `fallback` when missing, non-finite or not positive.
    pub fn effective_budget(&self, fallback: i64) -> i64 {
        match self.budget {
            Some(b) if b.is_finite() && b >= 1.0 => b.trunc() as i64,
            _ => fallback,
        }
    }
}

/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a timestamp without
/// offset (read as UTC).
fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Whole days from `start` to `end`, any partial day counting as a full one.
fn days_rounded_up(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    const DAY_MS: i64 = 86_400_000;
    let ms = (end - start).num_milliseconds();
    ms.div_euclid(DAY_MS) + i64::from(ms.rem_euclid(DAY_MS) > 0)
}

/// Calendar start date and an end date that is a whole number of days after it.
fn trip_dates(start: &str, end: &str) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let start = parse_instant(start);
    let end = parse_instant(end);
    let start_date = start.map(|s| s.date_naive());
    let end_date = match (start, end) {
        (Some(s), Some(e)) => s
            .date_naive()
            .checked_add_signed(Duration::days(days_rounded_up(s, e))),
        (None, Some(e)) => Some(e.date_naive()),
        (_, None) => None,
    };
    (start_date, end_date)
}

impl TryFrom<TripRequestPayload> for TripRequest {
    type Error = PlannerError;

    fn try_from(payload: TripRequestPayload) -> Result<Self, Self::Error> {
        let destination = payload
            .destination
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let (start_date, end_date) = trip_dates(
            payload.start_date.as_deref().unwrap_or_default(),
            payload.end_date.as_deref().unwrap_or_default(),
        );
        let travelers = payload
            .travelers
            .filter(|t| t.is_finite() && *t >= 1.0)
            .map(|t| t.trunc() as u32);

        let mut missing = Vec::new();
        if destination.is_none() {
            missing.push("destination");
        }
        if start_date.is_none() {
            missing.push("startDate");
        }
        if end_date.is_none() {
            missing.push("endDate");
        }
        if travelers.is_none() {
            missing.push("travelers");
        }

        match (destination, start_date, end_date, travelers) {
            (Some(destination), Some(start_date), Some(end_date), Some(travelers)) => {
                Ok(TripRequest {
                    destination,
                    start_date,
                    end_date,
                    travelers,
                    budget: payload.budget,
                    budget_type: payload.budget_type,
                    travel_style: payload.travel_style,
                    interests: payload.interests,
                    food_preferences: payload.food_preferences,
                    accommodation_type: payload.accommodation_type,
                    custom_activities: payload
                        .custom_activities
                        .map(|c| c.trim().to_string())
                        .filter(|c| !c.is_empty()),
                })
            }
            _ => Err(PlannerError::MissingFields(missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> TripRequestPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_enum_fallbacks() {
        assert_eq!(TravelStyle::parse("LUXURY"), TravelStyle::Luxury);
        assert_eq!(TravelStyle::parse("backpacker"), TravelStyle::Balanced);
        assert_eq!(BudgetType::parse("per-person"), BudgetType::PerPerson);
        assert_eq!(BudgetType::parse("per_day"), BudgetType::PerDay);
        assert_eq!(BudgetType::parse("weekly"), BudgetType::Total);
        assert_eq!(
            AccommodationType::parse("castle"),
            AccommodationType::Hotel
        );
    }

    #[test]
    fn test_payload_accepts_form_strings() {
        let p = payload(json!({
            "destination": "Paris",
            "startDate": "2024-06-01",
            "endDate": "2024-06-04T00:00:00.000Z",
            "travelers": "2",
            "budget": "3000",
            "travelStyle": "weird",
            "accommodationType": "hostel"
        }));
        let trip = TripRequest::try_from(p).unwrap();

        assert_eq!(trip.travelers, 2);
        assert_eq!(trip.budget, Some(3000.0));
        assert_eq!(trip.travel_style, TravelStyle::Balanced);
        assert_eq!(trip.accommodation_type, AccommodationType::Hostel);
        assert_eq!(trip.duration_days(), 3);
        assert!(trip.interests.is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let p = payload(json!({ "destination": "  ", "startDate": "2024-06-01" }));
        let err = TripRequest::try_from(p).unwrap_err();
        assert_eq!(
            err,
            PlannerError::MissingFields(vec!["destination", "endDate", "travelers"])
        );
    }

    #[test]
    fn test_effective_budget_defaults() {
        let mut trip = TripRequest::try_from(payload(json!({
            "destination": "Tokyo",
            "startDate": "2024-06-01",
            "endDate": "2024-06-02",
            "travelers": 1,
            "budget": ""
        })))
        .unwrap();
        assert_eq!(trip.budget, None);
        assert_eq!(trip.effective_budget(DEFAULT_BUDGET), DEFAULT_BUDGET);

        trip.budget = Some(0.0);
        assert_eq!(trip.effective_budget(DEFAULT_BUDGET), DEFAULT_BUDGET);
        trip.budget = Some(f64::NAN);
        assert_eq!(trip.effective_budget(DEFAULT_BUDGET), DEFAULT_BUDGET);
        trip.budget = Some(2499.9);
        assert_eq!(trip.effective_budget(DEFAULT_BUDGET), 2499);
        trip.budget = None;
        assert_eq!(trip.effective_budget(1200), 1200);
    }

    #[test]
    fn test_null_and_non_string_enums_fall_back() {
        let p = payload(json!({
            "destination": "Paris",
            "startDate": "2024-06-01",
            "endDate": "2024-06-03",
            "travelers": 1,
            "budgetType": null,
            "travelStyle": null,
            "accommodationType": 7
        }));
        assert_eq!(p.budget_type, BudgetType::Total);
        assert_eq!(p.travel_style, TravelStyle::Balanced);
        assert_eq!(p.accommodation_type, AccommodationType::Hotel);
    }

    #[test]
    fn test_partial_days_round_up() {
        let p = payload(json!({
            "destination": "Paris",
            "startDate": "2024-06-01T00:00:00Z",
            "endDate": "2024-06-03T12:00:00Z",
            "travelers": 1
        }));
        let trip = TripRequest::try_from(p).unwrap();
        assert_eq!(trip.start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(trip.duration_days(), 3);
        assert_eq!(trip.end_date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
    }

    #[test]
    fn test_offsets_are_normalised_to_utc() {
        let p = payload(json!({
            "destination": "Tokyo",
            "startDate": "2024-06-01T08:00:00+09:00",
            "endDate": "2024-06-02T08:00:00+09:00",
            "travelers": 1
        }));
        let trip = TripRequest::try_from(p).unwrap();
        assert_eq!(trip.start_date, NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
        assert_eq!(trip.duration_days(), 1);
    }

    #[test]
    fn test_end_before_start_keeps_negative_span() {
        let p = payload(json!({
            "destination": "Tokyo",
            "startDate": "2024-06-05",
            "endDate": "2024-06-01T06:00:00Z",
            "travelers": 1
        }));
        let trip = TripRequest::try_from(p).unwrap();
        assert_eq!(trip.duration_days(), -3);
    }
}
