use crate::feed::FlightRecord;

/// A named rectangular latitude/longitude region with an interest score.
#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub name: &'static str,
    /// (lat_min, lat_max, lon_min, lon_max), all four edges inclusive.
    pub bounds: (f64, f64, f64, f64),
    pub score: u32,
}

/// Scanned in declaration order; overlapping zones resolve to the first match.
pub const ZONES: [Zone; 10] = [
    Zone { name: "Taiwan Strait", bounds: (22.0, 26.0, 118.0, 122.5), score: 5 },
    Zone { name: "South China Sea", bounds: (5.0, 20.0, 110.0, 122.0), score: 5 },
    Zone { name: "Black Sea / Crimea", bounds: (40.0, 47.0, 27.0, 38.0), score: 4 },
    Zone { name: "Kaliningrad / Baltic Sea", bounds: (53.0, 57.0, 19.0, 23.0), score: 4 },
    Zone { name: "Persian Gulf", bounds: (23.0, 28.0, 50.0, 58.0), score: 5 },
    Zone { name: "Korean DMZ", bounds: (37.0, 39.5, 125.0, 128.0), score: 4 },
    Zone { name: "Syria / East Med", bounds: (32.0, 38.0, 34.0, 42.0), score: 4 },
    Zone { name: "Barents Sea", bounds: (68.0, 78.0, 15.0, 50.0), score: 4 },
    Zone { name: "GIUK Gap", bounds: (58.0, 70.0, -30.0, 0.0), score: 4 },
    Zone { name: "Diego Garcia", bounds: (-10.0, -5.0, 70.0, 75.0), score: 3 },
];

/// Aircraft type tiers, scanned in declaration order.
///
/// P3 is listed in both tier 3 and tier 2 upstream; the scan order means it
/// always scores 3. Kept verbatim until the scoring policy owner resolves
/// which tier is right.
const TIERS: [(u32, &[&str]); 5] = [
    (5, &["B52", "F22", "F35", "U2", "E3TF", "RC135"]),
    (4, &["P8", "EUFI", "F16", "F15", "F18", "C5", "C5M", "Q4"]),
    (3, &["K35R", "C130", "C30J", "P3", "C17"]),
    (2, &["P3", "B762"]),
    (1, &["TEX2"]),
];

/// Score a position against the zone table. First matching zone wins,
/// 0 when the point is outside every zone. Bounds are axis-aligned
/// rectangles with no longitude wraparound.
pub fn score_location(lat: f64, lon: f64) -> u32 {
    for zone in &ZONES {
        let (lat_min, lat_max, lon_min, lon_max) = zone.bounds;
        if lat_min <= lat && lat <= lat_max && lon_min <= lon && lon <= lon_max {
            return zone.score;
        }
    }
    0
}

/// Map an aircraft type code to its tier score, case-insensitively.
/// Unrecognized or empty types score 0.
pub fn score_aircraft(aircraft_type: &str) -> u32 {
    let normalized = aircraft_type.to_uppercase();
    for (score, types) in &TIERS {
        if types.contains(&normalized.as_str()) {
            return *score;
        }
    }
    0
}

/// One flight with its score breakdown. Lives for a single run only.
#[derive(Debug, Clone)]
pub struct ScoredFlight {
    pub aircraft_score: u32,
    pub location_score: u32,
    pub total_score: u32,
    pub flight: FlightRecord,
}

/// Score a single observation. Missing coordinates short-circuit the
/// location score to 0 without consulting the zone table.
pub fn score_flight(flight: FlightRecord) -> ScoredFlight {
    let aircraft_score = flight
        .aircraft_type
        .as_deref()
        .map(score_aircraft)
        .unwrap_or(0);

    let location_score = match (flight.lat, flight.lon) {
        (Some(lat), Some(lon)) => score_location(lat, lon),
        _ => 0,
    };

    ScoredFlight {
        aircraft_score,
        location_score,
        total_score: aircraft_score + location_score,
        flight,
    }
}

/// Stable maximum by total score: ties keep the earliest flight in
/// input order. Empty input yields `None`.
pub fn top_flight(scored: Vec<ScoredFlight>) -> Option<ScoredFlight> {
    let mut best: Option<ScoredFlight> = None;
    for candidate in scored {
        match &best {
            Some(current) if candidate.total_score <= current.total_score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(aircraft_type: &str, lat: Option<f64>, lon: Option<f64>) -> FlightRecord {
        FlightRecord {
            aircraft_type: Some(aircraft_type.to_string()),
            callsign: None,
            lat,
            lon,
            hex: None,
            orig_iata: None,
        }
    }

    #[test]
    fn test_zone_interior_points() {
        // One point strictly inside each zone, none shadowed by an earlier zone
        assert_eq!(score_location(24.0, 120.0), 5); // Taiwan Strait
        assert_eq!(score_location(12.0, 115.0), 5); // South China Sea
        assert_eq!(score_location(44.0, 33.0), 4); // Black Sea / Crimea
        assert_eq!(score_location(55.0, 21.0), 4); // Kaliningrad / Baltic Sea
        assert_eq!(score_location(26.0, 54.0), 5); // Persian Gulf
        assert_eq!(score_location(38.0, 126.5), 4); // Korean DMZ
        assert_eq!(score_location(35.0, 38.0), 4); // Syria / East Med
        assert_eq!(score_location(72.0, 30.0), 4); // Barents Sea
        assert_eq!(score_location(62.0, -15.0), 4); // GIUK Gap
        assert_eq!(score_location(-7.0, 72.0), 3); // Diego Garcia
    }

    #[test]
    fn test_outside_every_zone() {
        assert_eq!(score_location(0.0, 0.0), 0);
        assert_eq!(score_location(-45.0, -60.0), 0);
        assert_eq!(score_location(51.0, -0.1), 0); // London, outside all boxes
    }

    #[test]
    fn test_zone_edges_are_inclusive() {
        // Taiwan Strait bounds: (22.0, 26.0, 118.0, 122.5)
        assert_eq!(score_location(22.0, 120.0), 5);
        assert_eq!(score_location(26.0, 120.0), 5);
        assert_eq!(score_location(24.0, 118.0), 5);
        assert_eq!(score_location(24.0, 122.5), 5);
        // Just past an edge
        assert_eq!(score_location(21.999, 120.0), 0);
    }

    #[test]
    fn test_point_between_adjacent_zones() {
        // (20.0, 120.0) sits on the South China Sea's lat_max edge, below
        // the Taiwan Strait's lat_min
        assert_eq!(score_location(20.0, 120.0), 5);
        // 21.0 falls in the gap between the two boxes
        assert_eq!(score_location(21.0, 120.0), 0);
    }

    #[test]
    fn test_aircraft_tiers() {
        assert_eq!(score_aircraft("B52"), 5);
        assert_eq!(score_aircraft("RC135"), 5);
        assert_eq!(score_aircraft("P8"), 4);
        assert_eq!(score_aircraft("Q4"), 4);
        assert_eq!(score_aircraft("C130"), 3);
        assert_eq!(score_aircraft("B762"), 2);
        assert_eq!(score_aircraft("TEX2"), 1);
        assert_eq!(score_aircraft("A320"), 0);
        assert_eq!(score_aircraft(""), 0);
    }

    #[test]
    fn test_aircraft_type_is_case_insensitive() {
        assert_eq!(score_aircraft("f22"), 5);
        assert_eq!(score_aircraft("eUfI"), 4);
        assert_eq!(score_aircraft("tex2"), 1);
    }

    #[test]
    fn test_p3_duplicate_tier_scores_three() {
        // P3 appears in tier 3 and tier 2; declaration order pins it to 3.
        // Open question for whoever owns the tier table, do not change
        // silently.
        assert_eq!(score_aircraft("P3"), 3);
        assert_eq!(score_aircraft("p3"), 3);
    }

    #[test]
    fn test_score_flight_sums_components() {
        let scored = score_flight(record("F22", Some(24.0), Some(120.0)));
        assert_eq!(scored.aircraft_score, 5);
        assert_eq!(scored.location_score, 5);
        assert_eq!(scored.total_score, 10);
    }

    #[test]
    fn test_score_flight_without_coordinates() {
        let scored = score_flight(record("C130", None, None));
        assert_eq!(scored.aircraft_score, 3);
        assert_eq!(scored.location_score, 0);
        assert_eq!(scored.total_score, 3);

        // One missing coordinate is also no location score
        let scored = score_flight(record("C130", Some(24.0), None));
        assert_eq!(scored.location_score, 0);
    }

    #[test]
    fn test_score_flight_unknown_everything() {
        let scored = score_flight(record("A320", Some(0.0), Some(0.0)));
        assert_eq!(scored.total_score, 0);
    }

    #[test]
    fn test_score_flight_without_type() {
        let mut flight = record("X", None, None);
        flight.aircraft_type = None;
        let scored = score_flight(flight);
        assert_eq!(scored.aircraft_score, 0);
        assert_eq!(scored.total_score, 0);
    }

    #[test]
    fn test_top_flight_empty_input() {
        assert!(top_flight(Vec::new()).is_none());
    }

    #[test]
    fn test_top_flight_unique_maximum() {
        let scored = vec![
            score_flight(record("TEX2", None, None)),
            score_flight(record("F22", Some(24.0), Some(120.0))),
            score_flight(record("C130", None, None)),
        ];
        let top = top_flight(scored).unwrap();
        assert_eq!(top.flight.aircraft_type.as_deref(), Some("F22"));
        assert_eq!(top.total_score, 10);
    }

    #[test]
    fn test_top_flight_tie_keeps_earliest() {
        let mut first = record("F22", None, None);
        first.callsign = Some("FIRST".to_string());
        let mut second = record("B52", None, None);
        second.callsign = Some("SECOND".to_string());

        let scored = vec![score_flight(first), score_flight(second)];
        let top = top_flight(scored).unwrap();
        assert_eq!(top.flight.callsign.as_deref(), Some("FIRST"));
    }

    #[test]
    fn test_total_score_invariant_across_table() {
        for (aircraft, lat, lon) in [
            ("F22", Some(24.0), Some(120.0)),
            ("P3", Some(72.0), Some(30.0)),
            ("A320", None, None),
            ("B762", Some(0.0), Some(0.0)),
        ] {
            let scored = score_flight(record(aircraft, lat, lon));
            assert_eq!(scored.total_score, scored.aircraft_score + scored.location_score);
        }
    }
}
