//! "My Trips" page

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use crate::models::{TripId, TripStatus, TripSummary};
use crate::pages::track;
use crate::services::{ServiceFactory, SessionStore, TripRepository};
use crate::utils::errors::{Result, SmartAdventuresError};

/// Status filter above the trips table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TripStatus),
}

impl StatusFilter {
    pub fn matches(&self, trip: &TripSummary) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => trip.trip_status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = SmartAdventuresError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

pub struct TripsListPage {
    trips: Arc<dyn TripRepository>,
    session: SessionStore,
    pub is_loading: bool,
    pub user_trips: Vec<TripSummary>,
    pub filter: StatusFilter,
    pub error_message: Option<String>,
}

impl TripsListPage {
    pub fn new(services: &ServiceFactory) -> Self {
        Self {
            trips: services.trips.clone(),
            session: services.session.clone(),
            is_loading: true,
            user_trips: Vec::new(),
            filter: StatusFilter::All,
            error_message: None,
        }
    }

    /// Fetch the user's trips
    pub async fn load(&mut self) -> Result<()> {
        self.is_loading = true;
        let result = self.fetch().await;
        self.is_loading = false;
        self.user_trips = track(&mut self.error_message, result)?;
        Ok(())
    }

    async fn fetch(&self) -> Result<Vec<TripSummary>> {
        let token = self.session.require_token()?;
        self.trips.list(&token).await
    }

    pub fn select_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Trips matching the filter, earliest departure first
    pub fn visible_trips(&self) -> Vec<&TripSummary> {
        let mut visible: Vec<&TripSummary> =
            self.user_trips.iter().filter(|trip| self.filter.matches(trip)).collect();
        visible.sort_by_key(|trip| trip.departure_date);
        visible
    }

    /// Delete a trip and refresh the list
    pub async fn delete_trip(&mut self, id: TripId) -> Result<()> {
        let result = self.delete(id).await;
        track(&mut self.error_message, result)?;
        info!(trip_id = id, "Trip removed from list");
        self.load().await
    }

    async fn delete(&self, id: TripId) -> Result<()> {
        let token = self.session.require_token()?;
        self.trips.delete(id, &token).await
    }
}
