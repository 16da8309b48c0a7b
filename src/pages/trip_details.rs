//! Trip details page with its comment thread

use std::sync::Arc;

use tracing::debug;

use crate::forms::{CommentForm, ValidationErrors};
use crate::models::{Comment, CommentId, Trip, TripId};
use crate::pages::track;
use crate::services::{CommentRepository, ServiceFactory, TripRepository};
use crate::utils::errors::{Result, SmartAdventuresError};
use crate::utils::helpers::count_label;
use crate::utils::logging::log_validation_failure;

pub struct TripDetailsPage {
    trips: Arc<dyn TripRepository>,
    comments: Arc<dyn CommentRepository>,
    pub trip_id: TripId,
    pub is_loading: bool,
    pub trip: Option<Trip>,
    pub comment_form: CommentForm,
    pub field_errors: Option<ValidationErrors>,
    pub error_message: Option<String>,
}

impl TripDetailsPage {
    pub fn new(services: &ServiceFactory, trip_id: TripId) -> Self {
        Self {
            trips: services.trips.clone(),
            comments: services.comments.clone(),
            trip_id,
            is_loading: true,
            trip: None,
            comment_form: CommentForm::default(),
            field_errors: None,
            error_message: None,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        self.is_loading = true;
        let result = self.trips.fetch(self.trip_id).await;
        self.is_loading = false;
        let trip = track(&mut self.error_message, result)?;
        debug!(trip_id = trip.id, "Trip details loaded");
        self.trip = Some(trip);
        Ok(())
    }

    /// Comments, most recent first
    pub fn comments_newest_first(&self) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .trip
            .as_ref()
            .map(|trip| trip.comments.iter().collect())
            .unwrap_or_default();
        comments.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        comments
    }

    pub fn comments_heading(&self) -> String {
        let count = self.trip.as_ref().map_or(0, |trip| trip.comments.len());
        count_label(count, "Comment", "Comments")
    }

    /// Validate and post the comment form, then reload the trip
    pub async fn post_comment(&mut self) -> Result<()> {
        if let Err(errors) = self.comment_form.validate() {
            log_validation_failure("comment", &errors);
            self.field_errors = Some(errors.clone());
            return Err(SmartAdventuresError::Validation(errors));
        }
        self.field_errors = None;

        let result = self
            .comments
            .create(self.trip_id, &self.comment_form.username, &self.comment_form.text)
            .await;
        track(&mut self.error_message, result)?;

        self.comment_form.reset();
        self.load().await
    }

    pub async fn delete_comment(&mut self, comment_id: CommentId) -> Result<()> {
        let result = self.comments.delete(comment_id).await;
        track(&mut self.error_message, result)?;
        self.load().await
    }
}
