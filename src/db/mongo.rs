use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{doc, to_bson, to_document, Document},
    options::{ClientOptions, ReturnDocument, ServerApi, ServerApiVersion},
    Client, Collection,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::ItineraryStore;
use crate::errors::PlannerError;
use crate::models::itinerary::{ItineraryPatch, StoredItinerary};

pub async fn create_mongo_client(uri: &str) -> Result<Arc<Client>, PlannerError> {
    log::info!("Connecting to MongoDB...");

    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    // A failed ping is not fatal; the driver reconnects on demand
    match client.database("admin").run_command(doc! {"ping": 1}).await {
        Ok(_) => log::info!("Successfully connected to MongoDB and verified with ping command"),
        Err(e) => {
            log::warn!("Connected to MongoDB but ping test failed: {}", e);
            log::warn!("The API may still work, but some functionality might be impaired");
        }
    }

    Ok(Arc::new(client))
}

/// Stored shape: the record keyed by its own id.
#[derive(Debug, Serialize, Deserialize)]
struct ItineraryDocument {
    #[serde(rename = "_id")]
    key: String,
    #[serde(flatten)]
    record: StoredItinerary,
}

/// `$set` body for a patch: only the fields it carries, plus the update stamp.
fn patch_update(
    patch: &ItineraryPatch,
    updated_at: DateTime<Utc>,
) -> Result<Document, PlannerError> {
    let mut set = to_document(patch).map_err(|e| PlannerError::Storage(e.to_string()))?;
    let stamp = to_bson(&updated_at).map_err(|e| PlannerError::Storage(e.to_string()))?;
    set.insert("updatedAt", stamp);
    Ok(doc! { "$set": set })
}

pub struct MongoItineraryStore {
    client: Arc<Client>,
    collection: Collection<ItineraryDocument>,
}

impl MongoItineraryStore {
    pub fn new(client: Arc<Client>, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection(collection);
        Self { client, collection }
    }
}

#[async_trait]
impl ItineraryStore for MongoItineraryStore {
    async fn put(&self, itinerary: StoredItinerary) -> Result<(), PlannerError> {
        let document = ItineraryDocument {
            key: itinerary.id.clone(),
            record: itinerary,
        };
        self.collection.insert_one(&document).await?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<StoredItinerary>, PlannerError> {
        let found = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(found.map(|d| d.record))
    }

    async fn update(
        &self,
        id: &str,
        patch: ItineraryPatch,
    ) -> Result<Option<StoredItinerary>, PlannerError> {
        let update = patch_update(&patch, Utc::now())?;
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(|d| d.record))
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn ping(&self) -> Result<(), PlannerError> {
        self.client
            .database("admin")
            .run_command(doc! {"ping": 1})
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::ItineraryStatus;

    #[test]
    fn test_patch_update_sets_only_carried_fields() {
        let patch = ItineraryPatch {
            status: Some(ItineraryStatus::Confirmed),
            tips: Some(vec!["Carry cash".to_string()]),
            ..Default::default()
        };
        let update = patch_update(&patch, Utc::now()).unwrap();
        let set = update.get_document("$set").unwrap();

        let mut keys: Vec<&str> = set.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["status", "tips", "updatedAt"]);
        assert_eq!(set.get_str("status").unwrap(), "confirmed");
    }

    #[test]
    fn test_empty_patch_only_stamps() {
        let update = patch_update(&ItineraryPatch::default(), Utc::now()).unwrap();
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.get_str("updatedAt").is_ok());
    }
}
