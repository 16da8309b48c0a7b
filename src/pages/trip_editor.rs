//! Add-trip and edit-trip pages
//!
//! Both pages drive the same [`TripForm`]; editing starts from the fetched
//! trip and also sends its status.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::forms::trip::local_now;
use crate::forms::{TripForm, ValidationErrors};
use crate::models::{TripId, TripPayload};
use crate::pages::{track, Route};
use crate::services::{ServiceFactory, SessionStore, TripRepository};
use crate::utils::errors::{Result, SmartAdventuresError};
use crate::utils::logging::log_validation_failure;

/// Validate the form at `now`, remembering field errors for display
fn prepare_payload(
    form: &TripForm,
    field_errors: &mut Option<ValidationErrors>,
    now: NaiveDateTime,
) -> Result<TripPayload> {
    match form.submit_at(now) {
        Ok(payload) => {
            *field_errors = None;
            Ok(payload)
        }
        Err(errors) => {
            log_validation_failure("trip", &errors);
            *field_errors = Some(errors.clone());
            Err(SmartAdventuresError::Validation(errors))
        }
    }
}

pub struct AddTripPage {
    trips: Arc<dyn TripRepository>,
    session: SessionStore,
    pub form: TripForm,
    pub field_errors: Option<ValidationErrors>,
    pub error_message: Option<String>,
}

impl AddTripPage {
    pub fn new(services: &ServiceFactory) -> Self {
        Self::with_form(services, TripForm::new())
    }

    /// Start from a prepared form, e.g. a saved draft
    pub fn with_form(services: &ServiceFactory, form: TripForm) -> Self {
        Self {
            trips: services.trips.clone(),
            session: services.session.clone(),
            form,
            field_errors: None,
            error_message: None,
        }
    }

    pub async fn submit(&mut self) -> Result<Route> {
        self.submit_at(local_now(&Local)).await
    }

    /// Create the trip and return the page to navigate to
    pub async fn submit_at(&mut self, now: NaiveDateTime) -> Result<Route> {
        let payload = prepare_payload(&self.form, &mut self.field_errors, now)?;
        let result = self.create(&payload).await;
        let created = track(&mut self.error_message, result)?;
        Ok(Route::TripDetails(created))
    }

    async fn create(&self, payload: &TripPayload) -> Result<TripId> {
        let token = self.session.require_token()?;
        Ok(self.trips.create(payload, &token).await?.id)
    }
}

pub struct EditTripPage {
    trips: Arc<dyn TripRepository>,
    session: SessionStore,
    pub trip_id: TripId,
    pub is_loading: bool,
    loaded: bool,
    pub form: TripForm,
    pub field_errors: Option<ValidationErrors>,
    pub error_message: Option<String>,
}

impl EditTripPage {
    pub fn new(services: &ServiceFactory, trip_id: TripId) -> Self {
        Self {
            trips: services.trips.clone(),
            session: services.session.clone(),
            trip_id,
            is_loading: true,
            loaded: false,
            form: TripForm::new(),
            field_errors: None,
            error_message: None,
        }
    }

    /// Fetch the trip and pre-populate the form
    pub async fn load(&mut self) -> Result<()> {
        self.is_loading = true;
        let result = self.trips.fetch(self.trip_id).await;
        self.is_loading = false;
        let trip = track(&mut self.error_message, result)?;
        self.form = TripForm::from_trip(&trip);
        self.loaded = true;
        Ok(())
    }

    pub async fn submit(&mut self) -> Result<Route> {
        self.submit_at(local_now(&Local)).await
    }

    pub async fn submit_at(&mut self, now: NaiveDateTime) -> Result<Route> {
        if !self.loaded {
            return Err(SmartAdventuresError::InvalidInput(
                "Trip has not been loaded yet".to_string(),
            ));
        }
        let payload = prepare_payload(&self.form, &mut self.field_errors, now)?;
        let result = self.update(&payload).await;
        track(&mut self.error_message, result)?;
        Ok(Route::TripDetails(self.trip_id))
    }

    async fn update(&self, payload: &TripPayload) -> Result<()> {
        let token = self.session.require_token()?;
        self.trips.update(self.trip_id, payload, &token).await
    }
}
