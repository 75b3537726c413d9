use crate::feed::FlightRecord;
use crate::scoring::ScoredFlight;

/// Tracking link for a flight, keyed by its hex identifier.
pub fn fr24_url(flight: &FlightRecord) -> String {
    match flight.hex.as_deref().filter(|hex| !hex.is_empty()) {
        Some(hex) => format!("https://www.flightradar24.com/{}", hex),
        None => "No link available".to_string(),
    }
}

/// Prompt context handed to the text-generation provider.
pub fn flight_context(top: &ScoredFlight) -> String {
    format!(
        "Aircraft: {}\n\
         Callsign: {}\n\
         Origin: {}\n\
         FR24 Link: {}\n\n\
         Write 1-2 short, engaging sentences like a tweet for aviation \
         watchers explaining why this flight might be interesting.",
        display_type(&top.flight.aircraft_type),
        display_value(&top.flight.callsign),
        display_value(&top.flight.orig_iata),
        fr24_url(&top.flight),
    )
}

/// Deterministic summary used when no text-generation provider is usable.
pub fn fallback_summary(top: &ScoredFlight) -> String {
    format!(
        "{} ({}) is the most interesting flight in this snapshot with an interest score of {}.",
        display_type(&top.flight.aircraft_type),
        display_value(&top.flight.callsign),
        top.total_score,
    )
}

/// Final message delivered over the chat channel.
pub fn message_body(summary: &str, fr24_url: &str) -> String {
    format!("{}\n\nTrack it live: {}", summary, fr24_url)
}

fn display_value(value: &Option<String>) -> String {
    match value.as_deref().filter(|v| !v.is_empty()) {
        Some(v) => v.to_string(),
        None => "Unknown".to_string(),
    }
}

// Type codes are matched case-insensitively, so present them in the
// canonical uppercase form whatever the feed sent
fn display_type(value: &Option<String>) -> String {
    display_value(value).to_uppercase()
}

fn table_rows(top: &ScoredFlight) -> Vec<(&'static str, String)> {
    vec![
        ("Plane Type", display_type(&top.flight.aircraft_type)),
        ("Aircraft Score", top.aircraft_score.to_string()),
        ("Location Score", top.location_score.to_string()),
        ("Total Score", top.total_score.to_string()),
        ("Callsign", display_value(&top.flight.callsign)),
        ("Origin", display_value(&top.flight.orig_iata)),
        ("FR24 URL", fr24_url(&top.flight)),
    ]
}

/// Render the field/value breakdown as a GitHub-style table.
pub fn render_table(top: &ScoredFlight) -> String {
    let rows = table_rows(top);

    let field_width = rows
        .iter()
        .map(|(field, _)| field.len())
        .chain(std::iter::once("Field".len()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.len())
        .chain(std::iter::once("Value".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "| {:<field_width$} | {:<value_width$} |\n",
        "Field", "Value"
    ));
    out.push_str(&format!(
        "|{}|{}|\n",
        "-".repeat(field_width + 2),
        "-".repeat(value_width + 2)
    ));
    for (field, value) in rows {
        out.push_str(&format!(
            "| {:<field_width$} | {:<value_width$} |\n",
            field, value
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_flight;

    fn sample_flight() -> ScoredFlight {
        score_flight(FlightRecord {
            aircraft_type: Some("F22".to_string()),
            callsign: Some("RAGE11".to_string()),
            lat: Some(24.0),
            lon: Some(120.0),
            hex: Some("ae01ce".to_string()),
            orig_iata: Some("OKA".to_string()),
        })
    }

    #[test]
    fn test_fr24_url_with_and_without_hex() {
        let top = sample_flight();
        assert_eq!(fr24_url(&top.flight), "https://www.flightradar24.com/ae01ce");

        let mut no_hex = top.flight.clone();
        no_hex.hex = None;
        assert_eq!(fr24_url(&no_hex), "No link available");

        no_hex.hex = Some(String::new());
        assert_eq!(fr24_url(&no_hex), "No link available");
    }

    #[test]
    fn test_flight_context_names_the_aircraft() {
        let context = flight_context(&sample_flight());
        assert!(context.contains("Aircraft: F22"));
        assert!(context.contains("Callsign: RAGE11"));
        assert!(context.contains("https://www.flightradar24.com/ae01ce"));
        assert!(context.contains("1-2 short, engaging sentences"));
    }

    #[test]
    fn test_fallback_summary_mentions_score() {
        let summary = fallback_summary(&sample_flight());
        assert!(summary.contains("F22"));
        assert!(summary.contains("RAGE11"));
        assert!(summary.contains("10"));
    }

    #[test]
    fn test_message_body_ends_with_tracking_link() {
        let body = message_body("Something is up.", "https://www.flightradar24.com/ae01ce");
        assert!(body.starts_with("Something is up."));
        assert!(body.ends_with("Track it live: https://www.flightradar24.com/ae01ce"));
    }

    #[test]
    fn test_render_table_lists_every_field() {
        let table = render_table(&sample_flight());

        for field in [
            "Plane Type",
            "Aircraft Score",
            "Location Score",
            "Total Score",
            "Callsign",
            "Origin",
            "FR24 URL",
        ] {
            assert!(table.contains(field), "missing row: {}", field);
        }

        // Header plus separator plus seven rows, all pipe-aligned
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 9);
        let width = lines[0].len();
        for line in &lines {
            assert_eq!(line.len(), width);
            assert!(line.starts_with('|') && line.ends_with('|'));
        }
    }

    #[test]
    fn test_lowercase_feed_type_renders_uppercase() {
        let mut flight = sample_flight().flight;
        flight.aircraft_type = Some("f22".to_string());
        let top = score_flight(flight);

        assert!(render_table(&top).contains("| F22"));
        assert!(flight_context(&top).contains("Aircraft: F22"));
        assert!(fallback_summary(&top).starts_with("F22"));
    }

    #[test]
    fn test_render_table_handles_missing_fields() {
        let top = score_flight(FlightRecord {
            aircraft_type: None,
            callsign: None,
            lat: None,
            lon: None,
            hex: None,
            orig_iata: None,
        });
        let table = render_table(&top);
        assert!(table.contains("Unknown"));
        assert!(table.contains("No link available"));
    }
}
