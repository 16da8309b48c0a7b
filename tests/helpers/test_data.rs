//! Test data helpers
//!
//! Backend payloads and valid form values shared by the integration tests.

use serde_json::{json, Value};

use SmartAdventures::forms::{RegisterForm, TripForm};

pub const TEST_TOKEN: &str = "test.auth.token";

/// Trip record as `GET /trips/:id` returns it, array fields JSON-encoded
pub fn trip_record(id: i64) -> Value {
    json!({
        "id": id,
        "name": "Weekend Hike",
        "participants": "[{\"firstName\":\"Ada\",\"lastName\":\"Lovelace\",\"email\":\"ada@example.com\",\"phone\":\"5551234567\"}]",
        "emergency_contacts": "[{\"firstName\":\"Kim\",\"lastName\":\"Park\",\"email\":\"\",\"phone\":\"5557654321\"}]",
        "departure_date": "2030-06-01T09:30:00.000Z",
        "return_date": "2030-06-02T18:00:00.000Z",
        "location": "Yosemite",
        "purpose": "Fresh air",
        "activities": "[\"Hiking\",\"Camping\"]",
        "supplies": "[\"Map\",\"Compass\"]",
        "add_info": "Back by dinner",
        "trip_status": "active",
        "updated_at": "2030-05-20T10:00:00.000Z",
        "comments": [
            {"id": 1, "username": "Sam", "comment": "Have fun!", "trip_id": id, "posted_at": "2030-05-21T08:00:00.000Z"},
            {"id": 2, "username": "Lee", "comment": "Take a jacket", "trip_id": id, "posted_at": "2030-05-22T08:00:00.000Z"}
        ]
    })
}

/// Rows of `GET /trips`, deliberately out of departure order
pub fn trip_summaries() -> Value {
    json!([
        {"id": 3, "name": "Winter Ski Tour", "trip_status": "completed",
         "departure_date": "2030-12-01T08:00:00.000Z", "return_date": "2030-12-03T18:00:00.000Z"},
        {"id": 1, "name": "Weekend Hike", "trip_status": "active",
         "departure_date": "2030-06-01T09:30:00.000Z", "return_date": "2030-06-02T18:00:00.000Z"},
        {"id": 2, "name": "Canoe the Bay", "trip_status": "overdue",
         "departure_date": "2030-03-15T07:00:00.000Z", "return_date": "2030-03-15T19:00:00.000Z"}
    ])
}

pub fn profile() -> Value {
    json!({"firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com", "phone": "+15551234567"})
}

/// Trip form that passes validation for any `now` before 2030
pub fn valid_trip_form() -> TripForm {
    TripForm {
        name: "Weekend Hike".to_string(),
        departure_date: "2030-06-01T09:30".to_string(),
        return_date: "2030-06-02T18:00".to_string(),
        location: "Yosemite".to_string(),
        ..TripForm::new()
    }
}

/// Body the backend receives for [`valid_trip_form`]
pub fn valid_trip_body() -> Value {
    let blank = json!({"firstName": "", "lastName": "", "email": "", "phone": ""});
    json!({
        "name": "Weekend Hike",
        "participants": [blank.clone()],
        "emergency_contacts": [blank],
        "departure_date": "2030-06-01 09:30:00",
        "return_date": "2030-06-02 18:00:00",
        "location": "Yosemite",
        "purpose": "",
        "activities": [],
        "supplies": [],
        "add_info": ""
    })
}

pub fn valid_registration() -> RegisterForm {
    RegisterForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "5551234567".to_string(),
        password: "analytical".to_string(),
        confirm_password: "analytical".to_string(),
    }
}
