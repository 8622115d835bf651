/// The eleven sensor readings the prediction service scores, in the order
/// the form renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Voltage,
    Current,
    TempBattery,
    Soh,
    Vibration,
    MotorTemp,
    InverterTemp,
    ChargingCycles,
    OdometerKm,
    AmbientTemp,
    RoadCondition,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Numeric { min: f64, max: f64 },
    Enum,
}

/// Per-field metadata. Bounds are inclusive and match the ranges the models
/// were trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSchema {
    pub label: &'static str,
    pub unit: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Voltage,
        Field::Current,
        Field::TempBattery,
        Field::Soh,
        Field::Vibration,
        Field::MotorTemp,
        Field::InverterTemp,
        Field::ChargingCycles,
        Field::OdometerKm,
        Field::AmbientTemp,
        Field::RoadCondition,
    ];

    /// snake_case key used for DOM ids and log lines.
    pub fn key(self) -> &'static str {
        match self {
            Field::Voltage => "voltage",
            Field::Current => "current",
            Field::TempBattery => "temp_battery",
            Field::Soh => "soh",
            Field::Vibration => "vibration",
            Field::MotorTemp => "motor_temp",
            Field::InverterTemp => "inverter_temp",
            Field::ChargingCycles => "charging_cycles",
            Field::OdometerKm => "odometer_km",
            Field::AmbientTemp => "ambient_temp",
            Field::RoadCondition => "road_condition",
        }
    }
}

/// Static registry lookup, total over every `Field`. The table is fixed at
/// compile time and never mutated.
pub fn lookup(field: Field) -> &'static FieldSchema {
    match field {
        Field::Voltage => &FieldSchema {
            label: "Voltage (V)",
            unit: "V",
            kind: FieldKind::Numeric { min: 0.0, max: 500.0 },
        },
        Field::Current => &FieldSchema {
            label: "Current (A)",
            unit: "A",
            kind: FieldKind::Numeric { min: 0.0, max: 200.0 },
        },
        Field::TempBattery => &FieldSchema {
            label: "Battery Temperature (°C)",
            unit: "°C",
            kind: FieldKind::Numeric { min: -20.0, max: 80.0 },
        },
        Field::Soh => &FieldSchema {
            label: "State of Health (%)",
            unit: "%",
            kind: FieldKind::Numeric { min: 0.0, max: 100.0 },
        },
        Field::Vibration => &FieldSchema {
            label: "Vibration Level",
            unit: "",
            kind: FieldKind::Numeric { min: 0.0, max: 10.0 },
        },
        Field::MotorTemp => &FieldSchema {
            label: "Motor Temperature (°C)",
            unit: "°C",
            kind: FieldKind::Numeric { min: -20.0, max: 150.0 },
        },
        Field::InverterTemp => &FieldSchema {
            label: "Inverter Temperature (°C)",
            unit: "°C",
            kind: FieldKind::Numeric { min: -20.0, max: 120.0 },
        },
        Field::ChargingCycles => &FieldSchema {
            label: "Charging Cycles",
            unit: "",
            kind: FieldKind::Numeric { min: 0.0, max: 10000.0 },
        },
        Field::OdometerKm => &FieldSchema {
            label: "Odometer (km)",
            unit: "km",
            kind: FieldKind::Numeric { min: 0.0, max: 500000.0 },
        },
        Field::AmbientTemp => &FieldSchema {
            label: "Ambient Temperature (°C)",
            unit: "°C",
            kind: FieldKind::Numeric { min: -40.0, max: 50.0 },
        },
        Field::RoadCondition => &FieldSchema {
            label: "Road Condition",
            unit: "",
            kind: FieldKind::Enum,
        },
    }
}

/// Raw form state. Every field stays a string until validation so the exact
/// keystrokes survive round trips through the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorForm {
    pub voltage: String,
    pub current: String,
    pub temp_battery: String,
    pub soh: String,
    pub vibration: String,
    pub motor_temp: String,
    pub inverter_temp: String,
    pub charging_cycles: String,
    pub odometer_km: String,
    pub ambient_temp: String,
    pub road_condition: String,
}

impl SensorForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Voltage => &self.voltage,
            Field::Current => &self.current,
            Field::TempBattery => &self.temp_battery,
            Field::Soh => &self.soh,
            Field::Vibration => &self.vibration,
            Field::MotorTemp => &self.motor_temp,
            Field::InverterTemp => &self.inverter_temp,
            Field::ChargingCycles => &self.charging_cycles,
            Field::OdometerKm => &self.odometer_km,
            Field::AmbientTemp => &self.ambient_temp,
            Field::RoadCondition => &self.road_condition,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Voltage => &mut self.voltage,
            Field::Current => &mut self.current,
            Field::TempBattery => &mut self.temp_battery,
            Field::Soh => &mut self.soh,
            Field::Vibration => &mut self.vibration,
            Field::MotorTemp => &mut self.motor_temp,
            Field::InverterTemp => &mut self.inverter_temp,
            Field::ChargingCycles => &mut self.charging_cycles,
            Field::OdometerKm => &mut self.odometer_km,
            Field::AmbientTemp => &mut self.ambient_temp,
            Field::RoadCondition => &mut self.road_condition,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_is_total_and_well_formed() {
        for field in Field::ALL {
            let schema = lookup(field);
            assert!(!schema.label.is_empty());
            if let FieldKind::Numeric { min, max } = schema.kind {
                assert!(min < max, "{} has inverted bounds", schema.label);
            }
        }
    }

    #[test]
    fn road_condition_is_the_only_enum_field() {
        for field in Field::ALL {
            let is_enum = lookup(field).kind == FieldKind::Enum;
            assert_eq!(is_enum, field == Field::RoadCondition);
        }
    }

    #[test]
    fn keys_are_distinct() {
        let keys: HashSet<&str> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), Field::ALL.len());
    }

    #[test]
    fn form_accessors_round_trip() {
        let mut form = SensorForm::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            form.set(field, i.to_string());
        }
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(form.value(field), i.to_string());
        }
    }
}
