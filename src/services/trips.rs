//! Trip repository backed by the REST API

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::{AuthToken, Trip, TripId, TripPayload, TripRecord, TripRef, TripSummary};
use crate::services::api::ApiClient;
use crate::utils::errors::Result;

/// Remote trip storage
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Create a trip and return the id assigned by the backend
    async fn create(&self, payload: &TripPayload, token: &AuthToken) -> Result<TripRef>;

    async fn update(&self, id: TripId, payload: &TripPayload, token: &AuthToken) -> Result<()>;

    /// Fetch one trip with its comments. Does not require a session.
    async fn fetch(&self, id: TripId) -> Result<Trip>;

    /// Trips of the logged-in user
    async fn list(&self, token: &AuthToken) -> Result<Vec<TripSummary>>;

    async fn delete(&self, id: TripId, token: &AuthToken) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct TripService {
    api: ApiClient,
}

impl TripService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TripRepository for TripService {
    async fn create(&self, payload: &TripPayload, token: &AuthToken) -> Result<TripRef> {
        let created: TripRef = self.api.post("trips", payload, Some(token)).await?;
        info!(trip_id = created.id, "Trip created");
        Ok(created)
    }

    async fn update(&self, id: TripId, payload: &TripPayload, token: &AuthToken) -> Result<()> {
        self.api.put_empty(&format!("trips/{}", id), payload, Some(token)).await?;
        info!(trip_id = id, "Trip updated");
        Ok(())
    }

    async fn fetch(&self, id: TripId) -> Result<Trip> {
        let record: TripRecord = self.api.get(&format!("trips/{}", id), None).await?;
        let trip = record.decode()?;
        debug!(trip_id = id, comments = trip.comments.len(), "Trip fetched");
        Ok(trip)
    }

    async fn list(&self, token: &AuthToken) -> Result<Vec<TripSummary>> {
        let trips: Vec<TripSummary> = self.api.get("trips", Some(token)).await?;
        debug!(count = trips.len(), "Trips listed");
        Ok(trips)
    }

    async fn delete(&self, id: TripId, token: &AuthToken) -> Result<()> {
        self.api.delete(&format!("trips/{}", id), Some(token)).await?;
        info!(trip_id = id, "Trip deleted");
        Ok(())
    }
}
