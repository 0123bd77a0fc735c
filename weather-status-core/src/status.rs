use chrono::NaiveTime;

use crate::model::{UnitSystem, WeatherSnapshot};

/// Credit appended to every status.
pub const MADE_USING: &str = "Rust";

/// 12-hour clock used for the "Last update" stamp and log prefixes.
pub const CLOCK_FORMAT: &str = "%I:%M %p";

/// Build the custom status text shown on the profile.
pub fn format_status(
    city: &str,
    units: UnitSystem,
    weather: &WeatherSnapshot,
    now: NaiveTime,
) -> String {
    let symbol = units.symbol();

    format!(
        "Current weather in {city}: {temp}{symbol}. Feels like {feels}{symbol}. {desc} | Last update: {time} | Made using {MADE_USING}",
        temp = round_temperature(weather.temperature),
        feels = round_temperature(weather.feels_like),
        desc = weather.description.to_uppercase(),
        time = now.format(CLOCK_FORMAT),
    )
}

/// Nearest integer, halves to even (20.5 -> 20, 21.5 -> 22).
fn round_temperature(value: f64) -> i64 {
    // The cast also folds -0.0 into 0.
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(description: &str, temperature: f64, feels_like: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            description: description.to_string(),
            temperature,
            feels_like,
        }
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn paris_metric_example() {
        let text = format_status(
            "Paris",
            UnitSystem::Metric,
            &snapshot("clear sky", 20.4, 19.6),
            at(14, 5),
        );

        assert_eq!(
            text,
            "Current weather in Paris: 20°C. Feels like 20°C. CLEAR SKY | Last update: 02:05 PM | Made using Rust"
        );
    }

    #[test]
    fn imperial_and_kelvin_symbols() {
        let w = snapshot("rain", 50.0, 48.0);

        let text = format_status("Austin", UnitSystem::Imperial, &w, at(9, 0));
        assert!(text.contains("50°F. Feels like 48°F."));

        let text = format_status("Austin", UnitSystem::Kelvin, &w, at(9, 0));
        assert!(text.contains("50K. Feels like 48K."));
    }

    #[test]
    fn morning_and_midnight_clock() {
        let w = snapshot("mist", 1.0, 1.0);

        assert!(format_status("Oslo", UnitSystem::Metric, &w, at(9, 7)).contains("Last update: 09:07 AM"));
        assert!(format_status("Oslo", UnitSystem::Metric, &w, at(0, 30)).contains("Last update: 12:30 AM"));
    }

    #[test]
    fn description_is_fully_uppercased() {
        let w = snapshot("Light Intensity Drizzle, überall", 3.0, 1.0);
        let text = format_status("Berlin", UnitSystem::Metric, &w, at(12, 0));

        let desc = text
            .split(". ")
            .nth(2)
            .and_then(|s| s.split(" | ").next())
            .unwrap();
        assert_eq!(desc, "LIGHT INTENSITY DRIZZLE, ÜBERALL");
        assert!(!desc.chars().any(char::is_lowercase));
    }

    #[test]
    fn rounding_goes_to_nearest_with_ties_to_even() {
        assert_eq!(round_temperature(20.4), 20);
        assert_eq!(round_temperature(19.6), 20);
        assert_eq!(round_temperature(20.5), 20);
        assert_eq!(round_temperature(21.5), 22);
        assert_eq!(round_temperature(-3.7), -4);
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        let text = format_status("Reykjavik", UnitSystem::Metric, &snapshot("snow", -0.4, -0.2), at(6, 0));
        assert!(text.contains(": 0°C. Feels like 0°C."));
    }
}
