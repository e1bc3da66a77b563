//! Descriptive metadata derived from axis attributes.

use crate::attributes::AttributeValue;
use crate::axis::CoordinateAxis;
use crate::kind::PRESSURE_UNITS;

/// Whether values on a vertical axis increase upwards.
///
/// Pressure axes increase downwards. Otherwise the `positive` attribute
/// decides, compared ignoring case; a missing attribute means down.
pub fn is_positive_up(axis: &CoordinateAxis) -> bool {
    let attrs = &axis.attributes;
    if attrs.units().map_or(false, |u| PRESSURE_UNITS.contains(&u)) {
        return false;
    }
    attrs
        .get_str("positive")
        .map_or(false, |p| p.eq_ignore_ascii_case("up"))
}

/// A display title of the form `"<standard_name> (<units>)"`.
///
/// Falls back to the axis name when there is no `standard_name`, and to
/// `no units` when there are no units.
pub fn title(axis: &CoordinateAxis) -> String {
    let attrs = &axis.attributes;
    let name = attrs
        .get("standard_name")
        .map(display_value)
        .unwrap_or_else(|| axis.name.clone());
    let units = attrs
        .get("units")
        .map(display_value)
        .unwrap_or_else(|| "no units".to_string());
    format!("{} ({})", name, units)
}

fn display_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Text(s) => s.clone(),
        AttributeValue::Number(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;

    fn axis(attrs: Attributes) -> CoordinateAxis {
        CoordinateAxis::new("z", vec![0.0, 10.0], attrs)
    }

    #[test]
    fn test_pressure_is_never_up() {
        let attrs = Attributes::new().with("units", "hPa").with("positive", "up");
        assert!(!is_positive_up(&axis(attrs)));
    }

    #[test]
    fn test_positive_attribute() {
        assert!(is_positive_up(&axis(Attributes::new().with("positive", "up"))));
        assert!(is_positive_up(&axis(Attributes::new().with("positive", "Up"))));
        assert!(!is_positive_up(&axis(
            Attributes::new().with("units", "m").with("positive", "down")
        )));
        assert!(!is_positive_up(&axis(Attributes::new().with("units", "m"))));
    }

    #[test]
    fn test_title_uses_standard_name_and_units() {
        let attrs = Attributes::new()
            .with("standard_name", "depth")
            .with("units", "m");
        assert_eq!(title(&axis(attrs)), "depth (m)");
    }

    #[test]
    fn test_title_fallbacks() {
        assert_eq!(title(&axis(Attributes::new())), "z (no units)");
        assert_eq!(
            title(&axis(Attributes::new().with("units", "hPa"))),
            "z (hPa)"
        );
        assert_eq!(
            title(&axis(Attributes::new().with("standard_name", "height"))),
            "height (no units)"
        );
        assert_eq!(title(&axis(Attributes::new().with("units", 1.0))), "z (1)");
    }
}
