//! Fixed option lists rendered as checkboxes and selects on the trip forms

/// Activities a trip can include
pub const ACTIVITIES: &[&str] = &[
    "Hiking",
    "Backpacking",
    "Camping",
    "Climbing",
    "Mountaineering",
    "Biking",
    "Canoeing",
    "Kayaking",
    "Fishing",
    "Hunting",
    "Swimming",
    "Skiing",
    "Snowshoeing",
];

/// Supplies a party can carry
pub const SUPPLIES: &[&str] = &[
    "Map",
    "Compass",
    "GPS",
    "First aid kit",
    "Flashlight",
    "Extra food",
    "Extra water",
    "Extra clothing",
    "Fire starter",
    "Knife",
    "Shelter",
    "Sun protection",
    "Whistle",
    "Satellite messenger",
];

pub fn is_activity(label: &str) -> bool {
    ACTIVITIES.contains(&label)
}

pub fn is_supply(label: &str) -> bool {
    SUPPLIES.contains(&label)
}
