//! Static lookup tables for WMO weather codes, wind bearings and UV readings.
//!
//! Every function here is total: unmapped inputs fall back to a fixed default
//! instead of failing.

/// Icon bucket for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeatherIcon {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    Snow,
    Thunder,
}

impl WeatherIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherIcon::Clear => "clear",
            WeatherIcon::PartlyCloudy => "partly-cloudy",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
            WeatherIcon::Thunder => "thunder",
        }
    }

    /// Emoji rendered on the weather card.
    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherIcon::Clear => "☀️",
            WeatherIcon::PartlyCloudy => "⛅",
            WeatherIcon::Cloudy => "☁️",
            WeatherIcon::Rain => "🌧️",
            WeatherIcon::Snow => "❄️",
            WeatherIcon::Thunder => "⛈️",
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Code 3 sits in the partly-cloudy bucket even though its description is
// "Overcast". Shower codes 80..=82 belong to no bucket and fall back to clear.
const ICON_BUCKETS: &[(WeatherIcon, &[i32])] = &[
    (WeatherIcon::Clear, &[0]),
    (WeatherIcon::PartlyCloudy, &[1, 2, 3]),
    (WeatherIcon::Cloudy, &[45, 48]),
    (WeatherIcon::Rain, &[51, 53, 55, 56, 57, 61, 63, 65, 66, 67]),
    (WeatherIcon::Snow, &[71, 73, 75, 77, 85, 86]),
    (WeatherIcon::Thunder, &[95, 96, 99]),
];

const DESCRIPTIONS: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Foggy"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (77, "Snow grains"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Map a WMO code to its icon bucket, defaulting to [`WeatherIcon::Clear`].
pub fn icon_for(code: i32) -> WeatherIcon {
    ICON_BUCKETS
        .iter()
        .find(|(_, codes)| codes.contains(&code))
        .map(|(icon, _)| *icon)
        .unwrap_or_default()
}

/// Human-readable text for a WMO code, or `"Unknown"`.
pub fn description_for(code: i32) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, text)| *text)
        .unwrap_or("Unknown")
}

/// One of the 16 compass points for a bearing in degrees, or `"N/A"`.
pub fn compass_label_for(degrees: Option<i32>) -> &'static str {
    let Some(degrees) = degrees else {
        return "N/A";
    };

    let sector = crate::model::round_half_up(f64::from(degrees) / 22.5) as i64;
    COMPASS_POINTS[sector.rem_euclid(16) as usize]
}

/// Severity level of a UV reading, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UvSeverity {
    None,
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvCategory {
    pub label: &'static str,
    pub severity: UvSeverity,
}

/// Bucket a UV index; each upper bound is inclusive (2.0 is still "Low").
pub fn uv_category_for(uv: Option<f64>) -> UvCategory {
    let (label, severity) = match uv {
        None => ("N/A", UvSeverity::None),
        Some(uv) if uv <= 2.0 => ("Low", UvSeverity::Low),
        Some(uv) if uv <= 5.0 => ("Moderate", UvSeverity::Moderate),
        Some(uv) if uv <= 7.0 => ("High", UvSeverity::High),
        Some(uv) if uv <= 10.0 => ("Very High", UvSeverity::VeryHigh),
        Some(_) => ("Extreme", UvSeverity::Extreme),
    };

    UvCategory { label, severity }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thunderstorm_codes_map_to_thunder() {
        for code in [95, 96, 99] {
            assert_eq!(icon_for(code), WeatherIcon::Thunder, "code {code}");
        }
    }

    #[test]
    fn unmapped_codes_default_to_clear() {
        assert_eq!(icon_for(100), WeatherIcon::Clear);
        assert_eq!(icon_for(-1), WeatherIcon::Clear);
        assert_eq!(icon_for(80), WeatherIcon::Clear);
    }

    #[test]
    fn icon_buckets() {
        assert_eq!(icon_for(0), WeatherIcon::Clear);
        assert_eq!(icon_for(2), WeatherIcon::PartlyCloudy);
        assert_eq!(icon_for(48), WeatherIcon::Cloudy);
        assert_eq!(icon_for(57), WeatherIcon::Rain);
        assert_eq!(icon_for(67), WeatherIcon::Rain);
        assert_eq!(icon_for(77), WeatherIcon::Snow);
        assert_eq!(icon_for(86), WeatherIcon::Snow);
    }

    #[test]
    fn overcast_keeps_partly_cloudy_icon() {
        assert_eq!(description_for(3), "Overcast");
        assert_eq!(icon_for(3), WeatherIcon::PartlyCloudy);
    }

    #[test]
    fn descriptions() {
        assert_eq!(description_for(61), "Slight rain");
        assert_eq!(description_for(0), "Clear sky");
        assert_eq!(description_for(99), "Thunderstorm with heavy hail");
        assert_eq!(description_for(9999), "Unknown");
        assert_eq!(description_for(81), "Unknown");
    }

    #[test]
    fn every_described_code_has_an_icon_bucket() {
        for (code, _) in DESCRIPTIONS {
            assert!(
                ICON_BUCKETS.iter().any(|(_, codes)| codes.contains(code)),
                "code {code} has no bucket"
            );
        }
    }

    #[test]
    fn compass_labels() {
        assert_eq!(compass_label_for(Some(0)), "N");
        assert_eq!(compass_label_for(Some(359)), "N");
        assert_eq!(compass_label_for(Some(360)), "N");
        assert_eq!(compass_label_for(Some(90)), "E");
        assert_eq!(compass_label_for(Some(180)), "S");
        assert_eq!(compass_label_for(Some(270)), "W");
        assert_eq!(compass_label_for(Some(22)), "NNE");
        assert_eq!(compass_label_for(Some(11)), "N");
        assert_eq!(compass_label_for(None), "N/A");
    }

    #[test]
    fn uv_categories() {
        assert_eq!(uv_category_for(Some(0.0)).label, "Low");
        assert_eq!(uv_category_for(Some(2.0)).label, "Low");
        assert_eq!(uv_category_for(Some(2.1)).label, "Moderate");
        assert_eq!(uv_category_for(Some(5.0)).label, "Moderate");
        assert_eq!(uv_category_for(Some(7.0)).label, "High");
        assert_eq!(uv_category_for(Some(10.0)).label, "Very High");
        assert_eq!(uv_category_for(Some(11.0)).label, "Extreme");
        assert_eq!(uv_category_for(Some(11.0)).severity, UvSeverity::Extreme);

        let none = uv_category_for(None);
        assert_eq!(none.label, "N/A");
        assert_eq!(none.severity, UvSeverity::None);
    }
}
