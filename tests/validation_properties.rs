//! Property tests for the trip form rules

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use SmartAdventures::forms::{TripForm, ValidationErrorKind};
use SmartAdventures::utils::date::INPUT_FORMAT;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
}

fn form_with(name: String, departure: NaiveDateTime, return_date: NaiveDateTime) -> TripForm {
    TripForm {
        name,
        departure_date: departure.format(INPUT_FORMAT).to_string(),
        return_date: return_date.format(INPUT_FORMAT).to_string(),
        ..TripForm::new()
    }
}

proptest! {
    #[test]
    fn name_length_decides_name_error(name in "[a-zA-Z ]{1,80}") {
        let departure = now() + Duration::days(1);
        let form = form_with(name.clone(), departure, departure);
        let kind = form.validate_at(now()).err().and_then(|errors| errors.kind_of("name"));

        let length = name.chars().count();
        let expected = if length < 8 {
            Some(ValidationErrorKind::TooShort)
        } else if length > 50 {
            Some(ValidationErrorKind::TooLong)
        } else {
            None
        };
        prop_assert_eq!(kind, expected);
    }

    #[test]
    fn phone_must_be_ten_digits(phone in "[0-9]{1,14}") {
        let departure = now() + Duration::days(1);
        let mut form = form_with("Weekend Hike".to_string(), departure, departure);
        form.participants[0].phone = phone.clone();

        let result = form.validate_at(now());
        if phone.len() == 10 {
            prop_assert!(result.is_ok());
        } else {
            let errors = result.unwrap_err();
            prop_assert_eq!(errors.kind_of("participants.0.phone"), Some(ValidationErrorKind::InvalidFormat));
        }
    }

    #[test]
    fn return_before_departure_is_rejected(
        ahead in 1i64..10_000,
        offset in -10_000i64..10_000,
    ) {
        let departure = now() + Duration::minutes(ahead);
        let return_date = departure + Duration::minutes(offset);
        let form = form_with("Weekend Hike".to_string(), departure, return_date);

        let kind = form.validate_at(now()).err().and_then(|errors| errors.kind_of("return_date"));
        if offset < 0 {
            prop_assert_eq!(kind, Some(ValidationErrorKind::BeforeDeparture));
        } else {
            prop_assert_eq!(kind, None);
        }
    }

    #[test]
    fn departure_in_the_past_is_rejected(behind in 0i64..100_000) {
        let departure = now() - Duration::minutes(behind);
        let form = form_with("Weekend Hike".to_string(), departure, departure + Duration::days(1));
        let errors = form.validate_at(now()).unwrap_err();
        prop_assert_eq!(errors.kind_of("departure_date"), Some(ValidationErrorKind::NotFuture));
    }
}
