use serde::Deserialize;

/// Measurement convention used both for the weather query and for display.
///
/// Anything other than `metric` or `imperial` falls back to Kelvin, which is
/// also what OpenWeather returns when no known unit is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum UnitSystem {
    Metric,
    Imperial,
    Kelvin,
}

impl UnitSystem {
    /// Value for the OpenWeather `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::Kelvin => "standard",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
            UnitSystem::Kelvin => "K",
        }
    }
}

impl From<&str> for UnitSystem {
    fn from(value: &str) -> Self {
        match value {
            "metric" => UnitSystem::Metric,
            "imperial" => UnitSystem::Imperial,
            _ => UnitSystem::Kelvin,
        }
    }
}

impl From<String> for UnitSystem {
    fn from(value: String) -> Self {
        UnitSystem::from(value.as_str())
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Current conditions for one city, as needed by the status formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_units_parse() {
        assert_eq!(UnitSystem::from("metric"), UnitSystem::Metric);
        assert_eq!(UnitSystem::from("imperial"), UnitSystem::Imperial);
    }

    #[test]
    fn unknown_units_fall_back_to_kelvin() {
        for raw in ["kelvin", "standard", "", "Metric", "celsius"] {
            assert_eq!(UnitSystem::from(raw), UnitSystem::Kelvin, "input {raw:?}");
        }
    }

    #[test]
    fn symbol_mapping_is_total() {
        assert_eq!(UnitSystem::Metric.symbol(), "°C");
        assert_eq!(UnitSystem::Imperial.symbol(), "°F");
        assert_eq!(UnitSystem::Kelvin.symbol(), "K");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let unit: UnitSystem = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(unit, UnitSystem::Imperial);

        let unit: UnitSystem = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(unit, UnitSystem::Kelvin);
    }
}
