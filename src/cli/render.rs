//! Plain-text rendering of page state

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

use crate::forms::ValidationErrors;
use crate::models::catalog::{ACTIVITIES, SUPPLIES};
use crate::models::{Person, TripSummary, UserProfile};
use crate::pages::TripDetailsPage;
use crate::utils::date::{date_to_locale, time_ago_at, time_to_locale, DisplayLocale};
use crate::utils::helpers::{or_placeholder, truncate_text};

const NAME_COLUMN: usize = 30;

fn when(timestamp: &DateTime<Utc>, locale: DisplayLocale) -> String {
    let local = timestamp.with_timezone(&Local);
    format!("{} {}", date_to_locale(&local, locale), time_to_locale(&local, locale))
}

pub fn trip_table(trips: &[&TripSummary], locale: DisplayLocale) -> String {
    if trips.is_empty() {
        return "No trips yet.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:<30} {:<10} {:<24} {}", "ID", "NAME", "STATUS", "DEPARTURE", "RETURN");
    for trip in trips {
        let _ = writeln!(
            out,
            "{:<6} {:<30} {:<10} {:<24} {}",
            trip.id,
            truncate_text(&trip.name, NAME_COLUMN),
            trip.trip_status,
            when(&trip.departure_date, locale),
            when(&trip.return_date, locale),
        );
    }
    out
}

fn people(out: &mut String, title: &str, people: &[Person]) {
    let _ = writeln!(out, "{}:", title);
    if people.is_empty() {
        let _ = writeln!(out, "  -");
    }
    for (index, person) in people.iter().enumerate() {
        let name = person.full_name();
        let _ = writeln!(
            out,
            "  [{}] {}  {}  {}",
            index,
            or_placeholder(Some(&name)),
            or_placeholder(Some(&person.email)),
            or_placeholder(Some(&person.phone)),
        );
    }
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

/// Details of the loaded trip followed by its comments
pub fn trip_page(page: &TripDetailsPage, locale: DisplayLocale, now: DateTime<Utc>) -> String {
    let Some(trip) = &page.trip else {
        return "Loading...\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} (#{}, {})", trip.name, trip.id, trip.status);
    let _ = writeln!(out, "Departure:  {}", when(&trip.departure_date, locale));
    let _ = writeln!(out, "Return:     {}", when(&trip.return_date, locale));
    let _ = writeln!(out, "Location:   {}", or_placeholder(trip.location.as_deref()));
    let _ = writeln!(out, "Purpose:    {}", or_placeholder(trip.purpose.as_deref()));
    let _ = writeln!(out, "Activities: {}", list(&trip.activities));
    let _ = writeln!(out, "Supplies:   {}", list(&trip.supplies));
    let _ = writeln!(out, "Notes:      {}", or_placeholder(trip.add_info.as_deref()));
    if let Some(updated_at) = &trip.updated_at {
        let _ = writeln!(out, "Updated:    {}", time_ago_at(&updated_at.with_timezone(&Local), now, locale));
    }
    people(&mut out, "Participants", &trip.participants);
    people(&mut out, "Emergency contacts", &trip.emergency_contacts);
    out.push('\n');
    out.push_str(&comments(page, locale, now));
    out
}

/// Comment thread, newest first
pub fn comments(page: &TripDetailsPage, locale: DisplayLocale, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", page.comments_heading());
    for comment in page.comments_newest_first() {
        let _ = writeln!(
            out,
            "  #{} {} ({}): {}",
            comment.id,
            comment.username,
            time_ago_at(&comment.posted_at.with_timezone(&Local), now, locale),
            comment.text
        );
    }
    out
}

pub fn profile(profile: &UserProfile) -> String {
    format!(
        "{} {}\n{}\n{}\n",
        profile.first_name,
        profile.last_name,
        profile.email,
        or_placeholder(Some(&profile.phone))
    )
}

pub fn catalog() -> String {
    format!("Activities:\n  {}\nSupplies:\n  {}\n", ACTIVITIES.join("\n  "), SUPPLIES.join("\n  "))
}

pub fn validation_errors(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for error in errors.iter() {
        let _ = writeln!(out, "{}: {}", error.field, error.message);
    }
    out
}
