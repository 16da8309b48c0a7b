//! Trip model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::comment::Comment;
use crate::utils::errors::{SmartAdventuresError, Result};

pub type TripId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Active,
    Inactive,
    Completed,
    Overdue,
}

impl TripStatus {
    /// Options offered by the edit form, in display order
    pub const ALL: [TripStatus; 4] = [
        TripStatus::Active,
        TripStatus::Inactive,
        TripStatus::Completed,
        TripStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Active => "active",
            TripStatus::Inactive => "inactive",
            TripStatus::Completed => "completed",
            TripStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripStatus {
    type Err = SmartAdventuresError;

    fn from_str(s: &str) -> Result<Self> {
        TripStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SmartAdventuresError::InvalidInput(format!("Unknown trip status: {}", s)))
    }
}

/// Participant or emergency contact. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    #[serde(alias = "first_name")]
    pub first_name: String,
    #[serde(alias = "last_name")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Person {
    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// A trip as shown on the details and edit pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub participants: Vec<Person>,
    pub emergency_contacts: Vec<Person>,
    pub departure_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub location: Option<String>,
    pub purpose: Option<String>,
    pub activities: Vec<String>,
    pub supplies: Vec<String>,
    pub add_info: Option<String>,
    pub status: TripStatus,
    pub updated_at: Option<DateTime<Utc>>,
    pub comments: Vec<Comment>,
}

/// Trip as returned by `GET /trips/:id`.
///
/// The backend keeps the array fields as JSON-encoded strings; they are
/// decoded in [`TripRecord::decode`].
#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    pub id: TripId,
    pub name: String,
    #[serde(default)]
    pub participants: Value,
    #[serde(default)]
    pub emergency_contacts: Value,
    pub departure_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub activities: Value,
    #[serde(default)]
    pub supplies: Value,
    #[serde(default)]
    pub add_info: Option<String>,
    pub trip_status: TripStatus,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl TripRecord {
    pub fn decode(self) -> Result<Trip> {
        Ok(Trip {
            id: self.id,
            name: self.name,
            participants: decode_array("participants", self.participants)?,
            emergency_contacts: decode_array("emergency_contacts", self.emergency_contacts)?,
            departure_date: self.departure_date,
            return_date: self.return_date,
            location: self.location,
            purpose: self.purpose,
            activities: decode_array("activities", self.activities)?,
            supplies: decode_array("supplies", self.supplies)?,
            add_info: self.add_info,
            status: self.trip_status,
            updated_at: self.updated_at,
            comments: self.comments,
        })
    }
}

/// Accepts a JSON-encoded string, a plain array, or nothing.
fn decode_array<T: DeserializeOwned>(field: &'static str, value: Value) -> Result<Vec<T>> {
    let decoded = match value {
        Value::Null => return Ok(Vec::new()),
        Value::String(raw) if raw.trim().is_empty() => return Ok(Vec::new()),
        Value::String(raw) => serde_json::from_str(&raw),
        other => serde_json::from_value(other),
    };
    decoded.map_err(|source| SmartAdventuresError::MalformedField { field, source })
}

/// Row of the trips list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub id: TripId,
    pub name: String,
    pub trip_status: TripStatus,
    pub departure_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
}

/// Identifier returned when a trip is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TripRef {
    pub id: TripId,
}

/// Body of `POST /trips` and `PUT /trips/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPayload {
    pub name: String,
    pub participants: Vec<Person>,
    pub emergency_contacts: Vec<Person>,
    pub departure_date: String,
    pub return_date: String,
    pub location: String,
    pub purpose: String,
    pub activities: Vec<String>,
    pub supplies: Vec<String>,
    pub add_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_status: Option<TripStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn record_json() -> Value {
        json!({
            "id": 7,
            "name": "Weekend Hike",
            "participants": "[{\"firstName\":\"Ada\",\"lastName\":\"Lovelace\",\"email\":\"\",\"phone\":\"5551234567\"}]",
            "emergency_contacts": "[]",
            "departure_date": "2024-06-01T09:30:00.000Z",
            "return_date": "2024-06-02T18:00:00.000Z",
            "location": "Yosemite",
            "purpose": null,
            "activities": "[\"Hiking\",\"Camping\"]",
            "supplies": "[\"Map\"]",
            "add_info": "Bring snacks",
            "trip_status": "active",
            "updated_at": "2024-05-20T10:00:00.000Z",
            "comments": [
                {"id": 1, "username": "Sam", "comment": "Have fun!", "trip_id": 7, "posted_at": "2024-05-21T08:00:00.000Z"}
            ]
        })
    }

    #[test]
    fn test_decode_json_encoded_fields() {
        let record: TripRecord = serde_json::from_value(record_json()).unwrap();
        let trip = record.decode().unwrap();

        assert_eq!(trip.participants.len(), 1);
        assert_eq!(trip.participants[0].first_name, "Ada");
        assert_eq!(trip.participants[0].phone, "5551234567");
        assert!(trip.emergency_contacts.is_empty());
        assert_eq!(trip.activities, vec!["Hiking", "Camping"]);
        assert_eq!(trip.supplies, vec!["Map"]);
        assert_eq!(trip.status, TripStatus::Active);
        assert_eq!(trip.purpose, None);
        assert_eq!(trip.comments[0].text, "Have fun!");
    }

    #[test]
    fn test_decode_accepts_plain_arrays() {
        let mut value = record_json();
        value["activities"] = json!(["Kayaking"]);
        value["emergency_contacts"] = Value::Null;
        let trip = serde_json::from_value::<TripRecord>(value).unwrap().decode().unwrap();
        assert_eq!(trip.activities, vec!["Kayaking"]);
        assert!(trip.emergency_contacts.is_empty());
    }

    #[test]
    fn test_decode_reports_malformed_field() {
        let mut value = record_json();
        value["supplies"] = json!("[\"Map\", ");
        let result = serde_json::from_value::<TripRecord>(value).unwrap().decode();
        assert_matches!(result, Err(SmartAdventuresError::MalformedField { field: "supplies", .. }));
    }

    #[test]
    fn test_payload_omits_status_for_new_trips() {
        let payload = TripPayload {
            name: "Weekend Hike".to_string(),
            participants: vec![Person::default()],
            emergency_contacts: vec![],
            departure_date: "2024-06-01 09:30:00".to_string(),
            return_date: "2024-06-02 18:00:00".to_string(),
            location: String::new(),
            purpose: String::new(),
            activities: vec![],
            supplies: vec![],
            add_info: String::new(),
            trip_status: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("trip_status").is_none());
        assert_eq!(value["participants"][0]["firstName"], "");

        let value = serde_json::to_value(TripPayload { trip_status: Some(TripStatus::Overdue), ..payload }).unwrap();
        assert_eq!(value["trip_status"], "overdue");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("Completed".parse::<TripStatus>().unwrap(), TripStatus::Completed);
        assert!("archived".parse::<TripStatus>().is_err());
    }
}
