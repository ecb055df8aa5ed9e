use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ItineraryStore;
use crate::errors::PlannerError;
use crate::models::itinerary::{ItineraryPatch, StoredItinerary};

/// Process-local store, used when no database is configured.
#[derive(Default)]
pub struct InMemoryItineraryStore {
    itineraries: RwLock<HashMap<String, StoredItinerary>>,
}

impl InMemoryItineraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.itineraries.read().await.len()
    }
}

#[async_trait]
impl ItineraryStore for InMemoryItineraryStore {
    async fn put(&self, itinerary: StoredItinerary) -> Result<(), PlannerError> {
        self.itineraries
            .write()
            .await
            .insert(itinerary.id.clone(), itinerary);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<StoredItinerary>, PlannerError> {
        Ok(self.itineraries.read().await.get(id).cloned())
    }

    async fn update(
        &self,
        id: &str,
        patch: ItineraryPatch,
    ) -> Result<Option<StoredItinerary>, PlannerError> {
        let mut itineraries = self.itineraries.write().await;
        Ok(itineraries.get_mut(id).map(|stored| {
            stored.apply(patch);
            stored.clone()
        }))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), PlannerError> {
        Ok(())
    }
}
