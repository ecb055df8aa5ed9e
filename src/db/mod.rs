pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::errors::PlannerError;
use crate::models::itinerary::{ItineraryPatch, StoredItinerary};

/// Keyed storage for generated itineraries, shared by the HTTP handlers.
#[async_trait]
pub trait ItineraryStore: Send + Sync {
    async fn put(&self, itinerary: StoredItinerary) -> Result<(), PlannerError>;

    async fn get(&self, id: &str) -> Result<Option<StoredItinerary>, PlannerError>;

    /// Apply `patch` to the stored record, returning the new version.
    async fn update(
        &self,
        id: &str,
        patch: ItineraryPatch,
    ) -> Result<Option<StoredItinerary>, PlannerError>;

    /// Short name reported by the health check
    fn backend(&self) -> &'static str;

    async fn ping(&self) -> Result<(), PlannerError>;
}
