//! Trip form shared by the add and edit pages
//!
//! Holds the editable state of a trip as raw input values, validates it and
//! turns it into the payload the backend expects.

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::forms::validation::{
    check_email, check_length, check_phone, check_required, LengthRule, ValidationErrorKind,
    ValidationErrors,
};
use crate::models::catalog;
use crate::models::{Person, Trip, TripPayload, TripStatus};
use crate::utils::date::{parse_input_datetime, to_input_value, to_submission_format};
use crate::utils::errors::{SmartAdventuresError, Result};

const NAME_RULE: LengthRule = LengthRule::new(
    8,
    50,
    "Trip Name must be at least 8 characters",
    "Trip Name must not be longer than 50 characters",
);
const PERSON_NAME_RULE: LengthRule = LengthRule::new(2, 50, "Too short", "Too long");
const ADD_INFO_RULE: LengthRule = LengthRule::new(
    2,
    255,
    "Additional Info must be at least 2 characters",
    "Additional Info must not be longer than 255 characters",
);

/// Which person list of the form an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonList {
    Participants,
    EmergencyContacts,
}

impl PersonList {
    pub fn field(&self) -> &'static str {
        match self {
            PersonList::Participants => "participants",
            PersonList::EmergencyContacts => "emergency_contacts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripForm {
    pub name: String,
    pub participants: Vec<Person>,
    pub emergency_contacts: Vec<Person>,
    /// `YYYY-MM-DDTHH:MM`, the user's local wall-clock time
    pub departure_date: String,
    pub return_date: String,
    pub location: String,
    pub purpose: String,
    pub activities: Vec<String>,
    pub supplies: Vec<String>,
    pub add_info: String,
    /// Only set when editing an existing trip
    pub status: Option<TripStatus>,
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            participants: vec![Person::default()],
            emergency_contacts: vec![Person::default()],
            departure_date: String::new(),
            return_date: String::new(),
            location: String::new(),
            purpose: String::new(),
            activities: Vec::new(),
            supplies: Vec::new(),
            add_info: String::new(),
            status: None,
        }
    }
}

impl TripForm {
    /// Blank form for a new trip
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated form for editing `trip`, dates in local time
    pub fn from_trip(trip: &Trip) -> Self {
        Self::from_trip_in(trip, &Local)
    }

    /// Pre-populated form with dates shown as wall-clock time in `tz`
    pub fn from_trip_in<Tz>(trip: &Trip, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            name: trip.name.clone(),
            participants: trip.participants.clone(),
            emergency_contacts: trip.emergency_contacts.clone(),
            departure_date: to_input_value(&trip.departure_date.with_timezone(tz)),
            return_date: to_input_value(&trip.return_date.with_timezone(tz)),
            location: trip.location.clone().unwrap_or_default(),
            purpose: trip.purpose.clone().unwrap_or_default(),
            activities: trip.activities.clone(),
            supplies: trip.supplies.clone(),
            add_info: trip.add_info.clone().unwrap_or_default(),
            status: Some(trip.status),
        }
    }

    pub fn people(&self, list: PersonList) -> &[Person] {
        match list {
            PersonList::Participants => &self.participants,
            PersonList::EmergencyContacts => &self.emergency_contacts,
        }
    }

    fn people_mut(&mut self, list: PersonList) -> &mut Vec<Person> {
        match list {
            PersonList::Participants => &mut self.participants,
            PersonList::EmergencyContacts => &mut self.emergency_contacts,
        }
    }

    /// Append a blank row and return its index
    pub fn add_person(&mut self, list: PersonList) -> usize {
        let people = self.people_mut(list);
        people.push(Person::default());
        people.len() - 1
    }

    /// Remove the row at `index`; `false` when there is no such row
    pub fn remove_person(&mut self, list: PersonList, index: usize) -> bool {
        let people = self.people_mut(list);
        if index < people.len() {
            people.remove(index);
            true
        } else {
            debug!(list = list.field(), index = index, "Ignoring removal of missing row");
            false
        }
    }

    /// Mutable access to one row, for filling in its fields
    pub fn person_mut(&mut self, list: PersonList, index: usize) -> Option<&mut Person> {
        self.people_mut(list).get_mut(index)
    }

    pub fn add_participant(&mut self) -> usize {
        self.add_person(PersonList::Participants)
    }

    pub fn remove_participant(&mut self, index: usize) -> bool {
        self.remove_person(PersonList::Participants, index)
    }

    pub fn add_emergency_contact(&mut self) -> usize {
        self.add_person(PersonList::EmergencyContacts)
    }

    pub fn remove_emergency_contact(&mut self, index: usize) -> bool {
        self.remove_person(PersonList::EmergencyContacts, index)
    }

    /// Check or uncheck an activity. Returns whether it is now selected.
    pub fn toggle_activity(&mut self, label: &str) -> Result<bool> {
        if !catalog::is_activity(label) {
            return Err(SmartAdventuresError::InvalidInput(format!("Unknown activity: {}", label)));
        }
        Ok(toggle(&mut self.activities, label))
    }

    /// Check or uncheck a supply. Returns whether it is now selected.
    pub fn toggle_supply(&mut self, label: &str) -> Result<bool> {
        if !catalog::is_supply(label) {
            return Err(SmartAdventuresError::InvalidInput(format!("Unknown supply: {}", label)));
        }
        Ok(toggle(&mut self.supplies, label))
    }

    /// Validate against the current local time
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        self.validate_in(&Local)
    }

    /// Validate with the dates read as wall-clock time in `tz`
    pub fn validate_in<Tz: TimeZone>(&self, tz: &Tz) -> std::result::Result<(), ValidationErrors> {
        self.validate_at(local_now(tz))
    }

    /// Validate every field, collecting all errors. `now` is wall-clock time
    /// in the zone the dates were typed in.
    pub fn validate_at(&self, now: NaiveDateTime) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if check_required(&mut errors, "name", &self.name) {
            check_length(&mut errors, "name", &self.name, NAME_RULE);
        }

        for list in [PersonList::Participants, PersonList::EmergencyContacts] {
            for (index, person) in self.people(list).iter().enumerate() {
                validate_person(&mut errors, &format!("{}.{}", list.field(), index), person);
            }
        }

        let departure = self.validate_departure(&mut errors, now);
        self.validate_return(&mut errors, departure);

        check_length(&mut errors, "add_info", &self.add_info, ADD_INFO_RULE);

        errors.into_result()
    }

    fn validate_departure(&self, errors: &mut ValidationErrors, now: NaiveDateTime) -> Option<NaiveDateTime> {
        if !check_required(errors, "departure_date", &self.departure_date) {
            return None;
        }
        let Some(departure) = parse_input_datetime(&self.departure_date) else {
            errors.push("departure_date", ValidationErrorKind::InvalidFormat, "Invalid date");
            return None;
        };
        if departure <= now {
            errors.push(
                "departure_date",
                ValidationErrorKind::NotFuture,
                "Departure Date must be in the future",
            );
        }
        Some(departure)
    }

    fn validate_return(&self, errors: &mut ValidationErrors, departure: Option<NaiveDateTime>) {
        if !check_required(errors, "return_date", &self.return_date) {
            return;
        }
        let Some(return_date) = parse_input_datetime(&self.return_date) else {
            errors.push("return_date", ValidationErrorKind::InvalidFormat, "Invalid date");
            return;
        };
        if departure.is_some_and(|departure| return_date < departure) {
            errors.push(
                "return_date",
                ValidationErrorKind::BeforeDeparture,
                "Return Date must be later than Departure Date",
            );
        }
    }

    /// Serialize without validating; dates are converted to the backend format
    pub fn to_payload(&self) -> TripPayload {
        TripPayload {
            name: self.name.clone(),
            participants: self.participants.clone(),
            emergency_contacts: self.emergency_contacts.clone(),
            departure_date: to_submission_format(&self.departure_date),
            return_date: to_submission_format(&self.return_date),
            location: self.location.clone(),
            purpose: self.purpose.clone(),
            activities: self.activities.clone(),
            supplies: self.supplies.clone(),
            add_info: self.add_info.clone(),
            trip_status: self.status,
        }
    }

    /// Validate at `now` and build the payload only if the form is valid
    pub fn submit_at(&self, now: NaiveDateTime) -> std::result::Result<TripPayload, ValidationErrors> {
        self.validate_at(now)?;
        Ok(self.to_payload())
    }
}

/// Current wall-clock time in `tz`
pub fn local_now<Tz: TimeZone>(tz: &Tz) -> NaiveDateTime {
    Utc::now().with_timezone(tz).naive_local()
}

fn validate_person(errors: &mut ValidationErrors, prefix: &str, person: &Person) {
    check_length(errors, &format!("{}.firstName", prefix), &person.first_name, PERSON_NAME_RULE);
    check_length(errors, &format!("{}.lastName", prefix), &person.last_name, PERSON_NAME_RULE);
    check_email(errors, &format!("{}.email", prefix), &person.email);
    check_phone(errors, &format!("{}.phone", prefix), &person.phone);
}

fn toggle(selected: &mut Vec<String>, label: &str) -> bool {
    if let Some(position) = selected.iter().position(|s| s == label) {
        selected.remove(position);
        false
    } else {
        selected.push(label.to_string());
        true
    }
}
