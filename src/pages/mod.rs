//! Page controllers
//!
//! Each page owns its transient view state and talks to the repositories
//! through the [`ServiceFactory`](crate::services::ServiceFactory). Failed
//! calls leave their user-facing message in the page's `error_message`.

pub mod auth;
pub mod profile;
pub mod trip_details;
pub mod trip_editor;
pub mod trips_list;

pub use auth::{LoginPage, RegisterPage};
pub use profile::ProfilePage;
pub use trip_details::TripDetailsPage;
pub use trip_editor::{AddTripPage, EditTripPage};
pub use trips_list::{StatusFilter, TripsListPage};

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::models::TripId;
use crate::services::SessionStore;
use crate::utils::errors::{Result, SmartAdventuresError};

/// Navigation targets of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Register,
    Login,
    Profile,
    Trips,
    AddTrip,
    TripDetails(TripId),
    EditTrip(TripId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Register => "/register".to_string(),
            Route::Login => "/login".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Trips => "/trips".to_string(),
            Route::AddTrip => "/trips/add".to_string(),
            Route::TripDetails(id) => format!("/trips/{}", id),
            Route::EditTrip(id) => format!("/trips/{}/edit", id),
        }
    }

    /// Pages that need a session token
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Profile | Route::Trips | Route::AddTrip | Route::EditTrip(_))
    }

    /// Apply the session redirects: guests are sent to the login page, and
    /// logged-in users skip the home, login and register pages.
    pub fn resolve(self, session: &SessionStore) -> Route {
        let authenticated = session.is_authenticated();
        let resolved = match self {
            Route::Home | Route::Login | Route::Register if authenticated => Route::Trips,
            route if route.requires_auth() && !authenticated => Route::Login,
            route => route,
        };
        if resolved != self {
            debug!(from = %self, to = %resolved, "Redirecting");
        }
        resolved
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = SmartAdventuresError;

    fn from_str(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Route::Home,
            ["register"] => Route::Register,
            ["login"] => Route::Login,
            ["profile"] => Route::Profile,
            ["trips"] => Route::Trips,
            ["trips", "add"] => Route::AddTrip,
            ["trips", id] => Route::TripDetails(parse_trip_id(id, path)?),
            ["trips", id, "edit"] => Route::EditTrip(parse_trip_id(id, path)?),
            _ => return Err(SmartAdventuresError::InvalidInput(format!("Unknown page: {}", path))),
        };
        Ok(route)
    }
}

fn parse_trip_id(segment: &str, path: &str) -> Result<TripId> {
    segment
        .parse()
        .map_err(|_| SmartAdventuresError::InvalidInput(format!("Unknown page: {}", path)))
}

/// Record the outcome of a backend call in a page's error banner
pub(crate) fn track<T>(error_message: &mut Option<String>, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => *error_message = None,
        Err(e) => {
            warn!(error = %e, severity = %e.severity(), "Page action failed");
            *error_message = Some(e.user_message());
        }
    }
    result
}
