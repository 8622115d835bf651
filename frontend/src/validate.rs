use std::collections::HashMap;

use crate::schema::{lookup, Field, FieldKind, SensorForm};

/// Validates a single field. `None` means valid. Enum fields only need a
/// non-empty selection; numeric fields must parse and sit inside the
/// registry's inclusive bounds.
pub fn validate_field(field: Field, raw: &str) -> Option<String> {
    let schema = lookup(field);

    if raw.trim().is_empty() {
        return Some(format!("{} is required", schema.label));
    }

    let (min, max) = match schema.kind {
        FieldKind::Enum => return None,
        FieldKind::Numeric { min, max } => (min, max),
    };

    let Ok(value) = raw.trim().parse::<f64>() else {
        return Some(format!("{} must be a valid number", schema.label));
    };
    if value.is_nan() {
        return Some(format!("{} must be a valid number", schema.label));
    }

    if value < min || value > max {
        return Some(format!("{} must be between {} and {}", schema.label, min, max));
    }

    None
}

/// Validates the whole form; only fields that fail appear in the result.
/// The form is submittable iff the returned map is empty.
pub fn validate_form(form: &SensorForm) -> HashMap<Field, String> {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, form.value(field)).map(|error| (field, error)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SensorForm {
        SensorForm {
            voltage: "400".into(),
            current: "50".into(),
            temp_battery: "25".into(),
            soh: "90".into(),
            vibration: "2".into(),
            motor_temp: "60".into(),
            inverter_temp: "40".into(),
            charging_cycles: "500".into(),
            odometer_km: "10000".into(),
            ambient_temp: "20".into(),
            road_condition: "Smooth".into(),
        }
    }

    #[test]
    fn empty_input_is_required() {
        assert_eq!(
            validate_field(Field::Voltage, ""),
            Some("Voltage (V) is required".to_string())
        );
        assert_eq!(
            validate_field(Field::Voltage, "   "),
            Some("Voltage (V) is required".to_string())
        );
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert_eq!(
            validate_field(Field::Current, "abc"),
            Some("Current (A) must be a valid number".to_string())
        );
        assert_eq!(
            validate_field(Field::Current, "NaN"),
            Some("Current (A) must be a valid number".to_string())
        );
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        assert_eq!(
            validate_field(Field::Voltage, "600"),
            Some("Voltage (V) must be between 0 and 500".to_string())
        );
        assert_eq!(
            validate_field(Field::AmbientTemp, "-41"),
            Some("Ambient Temperature (°C) must be between -40 and 50".to_string())
        );
    }

    #[test]
    fn inclusive_bounds_pass() {
        assert_eq!(validate_field(Field::Voltage, "0"), None);
        assert_eq!(validate_field(Field::Voltage, "500"), None);
        assert_eq!(validate_field(Field::TempBattery, "-20"), None);
        assert_eq!(validate_field(Field::TempBattery, "80"), None);
    }

    #[test]
    fn decimals_and_surrounding_whitespace_are_accepted() {
        assert_eq!(validate_field(Field::Vibration, "2.5"), None);
        assert_eq!(validate_field(Field::Vibration, " 2.5 "), None);
    }

    #[test]
    fn road_condition_skips_numeric_rules() {
        assert_eq!(
            validate_field(Field::RoadCondition, ""),
            Some("Road Condition is required".to_string())
        );
        assert_eq!(validate_field(Field::RoadCondition, "Rough"), None);
        // Any non-empty selection passes; encoding handles unknown labels.
        assert_eq!(validate_field(Field::RoadCondition, "Gravel"), None);
    }

    #[test]
    fn valid_form_produces_no_errors() {
        assert!(validate_form(&filled_form()).is_empty());
    }

    #[test]
    fn form_errors_match_per_field_validation() {
        let mut form = filled_form();
        form.voltage = "600".into();
        form.soh.clear();

        let errors = validate_form(&form);
        assert_eq!(errors.len(), 2);
        for field in Field::ALL {
            assert_eq!(
                errors.get(&field).cloned(),
                validate_field(field, form.value(field))
            );
        }
    }
}
