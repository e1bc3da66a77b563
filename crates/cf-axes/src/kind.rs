//! Axis classification from attribute metadata.
//!
//! An axis's geophysical role is inferred only from its `units` and
//! `positive` attributes, never from its name or position. Rules are checked
//! in a fixed priority order and the first match wins, so classification is
//! total and deterministic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// The role a coordinate axis plays in a gridded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Longitude,
    Latitude,
    Vertical,
    Time,
    Unknown,
}

impl AxisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisKind::Longitude => "longitude",
            AxisKind::Latitude => "latitude",
            AxisKind::Vertical => "vertical",
            AxisKind::Time => "time",
            AxisKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted longitude units, compared case-insensitively.
pub const LONGITUDE_UNITS: &[&str] = &[
    "degrees_east",
    "degree_east",
    "degrees_e",
    "degree_e",
    "degreese",
    "degreee",
];

/// Accepted latitude units, compared case-insensitively.
pub const LATITUDE_UNITS: &[&str] = &[
    "degrees_north",
    "degree_north",
    "degrees_n",
    "degree_n",
    "degreesn",
    "degreen",
];

/// Pressure units that mark a vertical axis. Matched exactly.
pub const PRESSURE_UNITS: &[&str] = &["Pa", "hPa", "pascal", "Pascal"];

/// Values of the `positive` attribute that mark a vertical axis.
pub const POSITIVE_DIRECTIONS: &[&str] = &["up", "down"];

type Rule = fn(&Attributes) -> bool;

/// Classification rules in priority order.
const RULES: &[(Rule, AxisKind)] = &[
    (is_longitude, AxisKind::Longitude),
    (is_latitude, AxisKind::Latitude),
    (is_vertical, AxisKind::Vertical),
    (is_time, AxisKind::Time),
];

fn units_in(attrs: &Attributes, vocabulary: &[&str]) -> bool {
    attrs
        .units()
        .map(|u| vocabulary.iter().any(|v| u.eq_ignore_ascii_case(v)))
        .unwrap_or(false)
}

fn is_longitude(attrs: &Attributes) -> bool {
    units_in(attrs, LONGITUDE_UNITS)
}

fn is_latitude(attrs: &Attributes) -> bool {
    units_in(attrs, LATITUDE_UNITS)
}

fn is_vertical(attrs: &Attributes) -> bool {
    let pressure = attrs
        .units()
        .map(|u| PRESSURE_UNITS.contains(&u))
        .unwrap_or(false);
    pressure
        || attrs
            .get_str("positive")
            .map(|p| POSITIVE_DIRECTIONS.iter().any(|d| p.eq_ignore_ascii_case(d)))
            .unwrap_or(false)
}

// Heuristic only: "<unit> since <reference>" is not parsed here.
fn is_time(attrs: &Attributes) -> bool {
    attrs.units().map(|u| u.contains("since")).unwrap_or(false)
}

/// Classify an axis from its attributes.
pub fn classify(attrs: &Attributes) -> AxisKind {
    RULES
        .iter()
        .find(|(rule, _)| rule(attrs))
        .map(|(_, kind)| *kind)
        .unwrap_or(AxisKind::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(u: &str) -> Attributes {
        Attributes::new().with("units", u)
    }

    #[test]
    fn test_longitude_synonyms() {
        for u in ["degrees_east", "degree_east", "degree_E", "degrees_E", "degreeE", "degreesE", "Degrees_East"] {
            assert_eq!(classify(&units(u)), AxisKind::Longitude, "units = {}", u);
        }
    }

    #[test]
    fn test_latitude_synonyms() {
        for u in ["degrees_north", "degree_north", "degree_N", "degrees_N", "degreeN", "degreesN"] {
            assert_eq!(classify(&units(u)), AxisKind::Latitude, "units = {}", u);
        }
    }

    #[test]
    fn test_vertical_by_pressure_or_positive() {
        for u in ["Pa", "hPa", "pascal", "Pascal"] {
            assert_eq!(classify(&units(u)), AxisKind::Vertical, "units = {}", u);
        }
        let depth = Attributes::new().with("units", "m").with("positive", "down");
        assert_eq!(classify(&depth), AxisKind::Vertical);
        let height = Attributes::new().with("positive", "up");
        assert_eq!(classify(&height), AxisKind::Vertical);
        assert_eq!(classify(&units("hpa")), AxisKind::Unknown);
    }

    #[test]
    fn test_positive_ignores_case() {
        for p in ["UP", "Down", "up"] {
            let attrs = Attributes::new().with("positive", p);
            assert_eq!(classify(&attrs), AxisKind::Vertical, "positive = {}", p);
        }
    }

    #[test]
    fn test_time_since_heuristic() {
        assert_eq!(classify(&units("days since 1981-01-01")), AxisKind::Time);
        assert_eq!(classify(&units("seconds since 1970-01-01 00:00:00")), AxisKind::Time);
        // Case-sensitive substring.
        assert_eq!(classify(&units("days SINCE 1981-01-01")), AxisKind::Unknown);
    }

    #[test]
    fn test_unknown_defaults() {
        assert_eq!(classify(&Attributes::new()), AxisKind::Unknown);
        assert_eq!(classify(&units("K")), AxisKind::Unknown);
        assert_eq!(classify(&Attributes::new().with("units", 1.0)), AxisKind::Unknown);
        assert_eq!(classify(&Attributes::new().with("positive", "sideways")), AxisKind::Unknown);
    }

    #[test]
    fn test_priority_longitude_over_vertical() {
        let attrs = Attributes::new()
            .with("units", "degrees_east")
            .with("positive", "up");
        assert_eq!(classify(&attrs), AxisKind::Longitude);
    }
}
