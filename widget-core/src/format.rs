//! Human-readable sentences derived from a [`WeatherResult`](crate::WeatherResult).
//!
//! All three helpers are pure; the time of day used by [`location_message`]
//! comes from an injected [`Clock`].

use chrono::{Local, Timelike};
use std::fmt;

use crate::model::CELSIUS;

/// Source of the local wall-clock hour.
pub trait Clock {
    /// Hour of the day, `0..=23`.
    fn local_hour(&self) -> u32;
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Always reports the same hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHour(pub u32);

impl Clock for FixedHour {
    fn local_hour(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Day,
    Night,
}

impl DayPart {
    /// Night is `[18, 24)` and `[0, 6)`.
    pub fn from_hour(hour: u32) -> Self {
        if hour >= 18 || hour < 6 { DayPart::Night } else { DayPart::Day }
    }

    pub fn qualifier(self) -> &'static str {
        match self {
            DayPart::Day => "During the Day",
            DayPart::Night => "at Night",
        }
    }
}

pub fn temperature_message(temperature: f64, unit: &str) -> String {
    // -0.0 prints as "-0".
    let temperature = if temperature == 0.0 { 0.0 } else { temperature };

    if unit != CELSIUS {
        return format!("{temperature}°{unit}");
    }

    if temperature < 0.0 {
        format!("It's freezing at {temperature}°C! Bundle up!")
    } else if temperature < 10.0 {
        format!("It's quite cold at {temperature}°C. Wear warm clothes.")
    } else if temperature < 20.0 {
        format!("The temperature is {temperature}°C. Comfortable for a light jacket.")
    } else if temperature < 30.0 {
        format!("It's a pleasant {temperature}°C. Enjoy the nice weather!")
    } else {
        format!("It's hot at {temperature}°C. Stay hydrated!")
    }
}

const CONDITIONS: &[(&str, &str)] = &[
    ("sunny", "It's a beautiful sunny day!"),
    ("partly cloudy", "Expect some clouds and sunshine."),
    ("cloudy", "It's cloudy today."),
    ("overcast", "The sky is overcast."),
    ("rain", "Don't forget your umbrella! It's raining."),
    ("thunderstorm", "Thunderstorms are expected today."),
    ("snow", "Bundle up! It's snowing."),
    ("mist", "It's misty outside."),
    ("fog", "Be careful, there's fog outside."),
];

/// Outcome of looking a condition up in the canned vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionMessage {
    Known(&'static str),
    /// Provider text the table does not cover, returned unchanged.
    Passthrough(String),
}

impl ConditionMessage {
    pub fn as_str(&self) -> &str {
        match self {
            ConditionMessage::Known(s) => s,
            ConditionMessage::Passthrough(s) => s,
        }
    }
}

impl fmt::Display for ConditionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive lookup; never fails.
pub fn weather_message(description: &str) -> ConditionMessage {
    let lower = description.to_lowercase();

    CONDITIONS
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, sentence)| ConditionMessage::Known(*sentence))
        .unwrap_or_else(|| ConditionMessage::Passthrough(description.to_string()))
}

pub fn location_message(location: &str, clock: &dyn Clock) -> String {
    let part = DayPart::from_hour(clock.local_hour());
    format!("{location} {}", part.qualifier())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_bands_inside_each_range() {
        assert_eq!(temperature_message(-5.0, "C"), "It's freezing at -5°C! Bundle up!");
        assert_eq!(temperature_message(5.0, "C"), "It's quite cold at 5°C. Wear warm clothes.");
        assert_eq!(
            temperature_message(15.0, "C"),
            "The temperature is 15°C. Comfortable for a light jacket."
        );
        assert_eq!(
            temperature_message(25.0, "C"),
            "It's a pleasant 25°C. Enjoy the nice weather!"
        );
        assert_eq!(temperature_message(35.0, "C"), "It's hot at 35°C. Stay hydrated!");
    }

    #[test]
    fn temperature_boundaries_fall_into_higher_band() {
        assert!(temperature_message(0.0, "C").starts_with("It's quite cold"));
        assert!(temperature_message(10.0, "C").starts_with("The temperature is"));
        assert!(temperature_message(20.0, "C").starts_with("It's a pleasant"));
        assert!(temperature_message(30.0, "C").starts_with("It's hot"));
    }

    #[test]
    fn temperature_just_below_boundary_stays_in_lower_band() {
        assert!(temperature_message(-0.1, "C").starts_with("It's freezing"));
        assert!(temperature_message(29.9, "C").starts_with("It's a pleasant"));
    }

    #[test]
    fn fractional_temperature_is_interpolated() {
        assert_eq!(
            temperature_message(12.5, "C"),
            "The temperature is 12.5°C. Comfortable for a light jacket."
        );
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(temperature_message(-0.0, "C"), "It's quite cold at 0°C. Wear warm clothes.");
        assert_eq!(temperature_message(-0.0, "F"), "0°F");
    }

    #[test]
    fn other_units_are_bare() {
        assert_eq!(temperature_message(59.0, "F"), "59°F");
        assert_eq!(temperature_message(-40.0, "F"), "-40°F");
    }

    #[test]
    fn condition_lookup_ignores_case() {
        for input in ["sunny", "Sunny", "SUNNY", "sUnNy"] {
            assert_eq!(
                weather_message(input),
                ConditionMessage::Known("It's a beautiful sunny day!")
            );
        }
        assert_eq!(weather_message("Partly Cloudy").as_str(), "Expect some clouds and sunshine.");
        assert_eq!(weather_message("Cloudy").to_string(), "It's cloudy today.");
    }

    #[test]
    fn every_table_entry_is_reachable() {
        for (key, sentence) in CONDITIONS {
            assert_eq!(weather_message(&key.to_uppercase()), ConditionMessage::Known(*sentence));
        }
    }

    #[test]
    fn unknown_condition_passes_through_unchanged() {
        assert_eq!(
            weather_message("Patchy light drizzle"),
            ConditionMessage::Passthrough("Patchy light drizzle".into())
        );
        assert_eq!(weather_message("").as_str(), "");
        assert_eq!(weather_message(" sunny ").as_str(), " sunny ");
    }

    #[test]
    fn night_hours() {
        for hour in (18..24).chain(0..6) {
            let msg = location_message("London", &FixedHour(hour));
            assert_eq!(msg, "London at Night", "hour {hour}");
        }
    }

    #[test]
    fn day_hours() {
        for hour in 6..18 {
            let msg = location_message("London", &FixedHour(hour));
            assert_eq!(msg, "London During the Day", "hour {hour}");
        }
    }

    #[test]
    fn system_clock_reports_a_valid_hour() {
        assert!(SystemClock.local_hour() < 24);
    }
}
