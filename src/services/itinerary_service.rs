use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use uuid::Uuid;

use crate::db::ItineraryStore;
use crate::errors::PlannerError;
use crate::models::{
    itinerary::{ItineraryPatch, StoredItinerary},
    trip::{TripRequest, TripRequestPayload},
};
use crate::services::itinerary_generation_service::ItineraryGenerator;

/// Glue between the HTTP handlers, the generator and the store.
pub struct ItineraryService {
    store: Arc<dyn ItineraryStore>,
    generator: ItineraryGenerator,
    seed: Option<u64>,
}

impl ItineraryService {
    pub fn new(store: Arc<dyn ItineraryStore>) -> Self {
        Self {
            store,
            generator: ItineraryGenerator::new(),
            seed: None,
        }
    }

    /// Every generation replays the same random draws.
    pub fn with_seed(store: Arc<dyn ItineraryStore>, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(store)
        }
    }

    pub fn store(&self) -> &Arc<dyn ItineraryStore> {
        &self.store
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub async fn generate(&self, payload: TripRequestPayload) -> Result<StoredItinerary, PlannerError> {
        let trip = TripRequest::try_from(payload)?;
        // The generator borrows the rng only for this call; nothing random crosses an await
        let itinerary = {
            let mut rng = self.rng();
            self.generator.generate_itinerary(&trip, &mut rng)?
        };

        let stored = StoredItinerary::new(Uuid::new_v4().to_string(), itinerary, trip);
        self.store.put(stored.clone()).await?;

        log::info!(
            "Generated itinerary {} for {} ({} days)",
            stored.id,
            stored.itinerary.summary.destination,
            stored.itinerary.summary.duration
        );
        Ok(stored)
    }

    pub async fn get(&self, id: &str) -> Result<StoredItinerary, PlannerError> {
        let id = Self::parse_id(id)?;
        self.store.get(&id).await?.ok_or(PlannerError::NotFound)
    }

    pub async fn update(&self, id: &str, patch: ItineraryPatch) -> Result<StoredItinerary, PlannerError> {
        let id = Self::parse_id(id)?;
        self.store
            .update(&id, patch)
            .await?
            .ok_or(PlannerError::NotFound)
    }

    // Normalizes the id so lookups do not depend on letter case
    fn parse_id(id: &str) -> Result<String, PlannerError> {
        Uuid::parse_str(id.trim())
            .map(|uuid| uuid.to_string())
            .map_err(|_| PlannerError::InvalidId(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::InMemoryItineraryStore;
    use crate::models::itinerary::ItineraryStatus;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> TripRequestPayload {
        serde_json::from_value(value).unwrap()
    }

    fn paris() -> TripRequestPayload {
        payload(json!({
            "destination": "Paris",
            "startDate": "2024-06-01",
            "endDate": "2024-06-04",
            "travelers": 2,
            "budget": 3000,
            "travelStyle": "balanced",
            "interests": ["culture"]
        }))
    }

    #[actix_rt::test]
    async fn test_generate_persists_draft() {
        let store = Arc::new(InMemoryItineraryStore::new());
        let service = ItineraryService::with_seed(store.clone(), 1);

        let stored = service.generate(paris()).await.unwrap();
        assert_eq!(stored.status, ItineraryStatus::Draft);
        assert_eq!(stored.original_request.destination, "Paris");
        assert_eq!(stored.itinerary.daily_itinerary.len(), 3);
        assert_eq!(store.len().await, 1);

        let fetched = service.get(&stored.id).await.unwrap();
        assert_eq!(fetched, stored);
        let upper = service.get(&stored.id.to_uppercase()).await.unwrap();
        assert_eq!(upper.id, stored.id);
    }

    #[actix_rt::test]
    async fn test_invalid_trip_is_not_stored() {
        let store = Arc::new(InMemoryItineraryStore::new());
        let service = ItineraryService::new(store.clone());

        let mut same_day = paris();
        same_day.end_date = Some("2024-06-01".to_string());
        let err = service.generate(same_day).await.unwrap_err();
        assert_eq!(err, PlannerError::InvalidDuration(0));

        let err = service.generate(TripRequestPayload::default()).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len().await, 0);
    }

    #[actix_rt::test]
    async fn test_update_and_lookup_errors() {
        let store = Arc::new(InMemoryItineraryStore::new());
        let service = ItineraryService::new(store);
        let stored = service.generate(paris()).await.unwrap();

        let patch = ItineraryPatch {
            status: Some(ItineraryStatus::Confirmed),
            tips: Some(vec!["Bring an umbrella".to_string()]),
            ..Default::default()
        };
        let updated = service.update(&stored.id, patch).await.unwrap();
        assert_eq!(updated.status, ItineraryStatus::Confirmed);
        assert_eq!(updated.itinerary.tips, vec!["Bring an umbrella"]);
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.itinerary.daily_itinerary, stored.itinerary.daily_itinerary);

        assert_eq!(
            service.get("not-a-uuid").await.unwrap_err(),
            PlannerError::InvalidId("not-a-uuid".to_string())
        );
        let unknown = Uuid::new_v4().to_string();
        assert_eq!(service.get(&unknown).await.unwrap_err(), PlannerError::NotFound);
        assert_eq!(
            service.update(&unknown, ItineraryPatch::default()).await.unwrap_err(),
            PlannerError::NotFound
        );
    }
}
