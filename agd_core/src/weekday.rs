//! Weekday names as they are shown to users.

use chrono::Weekday;

/// English weekday names and their German counterparts, Monday first.
static WEEKDAYS: [(&str, &str); 7] = [
    ("Monday", "Montag"),
    ("Tuesday", "Dienstag"),
    ("Wednesday", "Mittwoch"),
    ("Thursday", "Donnerstag"),
    ("Friday", "Freitag"),
    ("Saturday", "Samstag"),
    ("Sunday", "Sonntag"),
];

/// Translate an English weekday name to German.
///
/// Unknown names are returned unchanged.
pub fn translate(name: &str) -> &str {
    WEEKDAYS
        .iter()
        .find(|(english, _)| *english == name)
        .map_or(name, |(_, german)| *german)
}

/// The full English name of a weekday.
pub fn english_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize].0
}

pub fn german_name(weekday: Weekday) -> &'static str {
    translate(english_name(weekday))
}
