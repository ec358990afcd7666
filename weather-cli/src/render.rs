use chrono::{DateTime, Local, TimeZone};
use weather_now_core::{RecentSearches, WeatherView};

pub const WELCOME: &str = "🌤️ Enter a city name to get started!";

/// Render the weather card with `captured_at` shown in the local timezone.
pub fn card(view: &WeatherView) -> String {
    card_in(view, &Local)
}

/// Same as [`card`], but with an explicit timezone for the "Last updated" line.
pub fn card_in<Tz: TimeZone>(view: &WeatherView, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let updated: DateTime<Tz> = view.captured_at.with_timezone(tz);
    let uv = view.uv_category();
    let uv_value = view.uv_index.map_or_else(|| "N/A".to_string(), |uv| format!("{uv:.1}"));

    let lines = [
        format!("{}  {}", view.icon().symbol(), view.city),
        view.place_line(),
        String::new(),
        format!("{}°C  {}", view.temperature_c, view.description()),
        String::new(),
        format!("Feels like  {}°C", view.apparent_temperature_c),
        format!("Humidity    {}%", view.humidity_pct),
        format!("Wind        {} km/h {}", view.wind_speed_kmh, view.compass()),
        format!("UV Index    {uv_value} ({})", uv.label),
        String::new(),
        format!("Last updated: {}", updated.format("%H:%M:%S")),
    ];

    lines.join("\n")
}

pub fn history(recent: &RecentSearches) -> String {
    if recent.is_empty() {
        return String::new();
    }

    let mut out = String::from("Recent searches:");
    for label in recent.iter() {
        out.push_str("\n  - ");
        out.push_str(label);
    }
    out
}

pub fn searching(query: &str) -> String {
    format!("Searching for {}...", query.trim())
}

pub fn error(message: &str) -> String {
    format!("⚠️ {message}")
}
