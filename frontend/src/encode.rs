use shared::{PredictionPayload, RoadCondition, TimePeriod};

use crate::schema::{Field, SensorForm};

fn numeric(form: &SensorForm, field: Field) -> f64 {
    // Input is validated before encoding; the fallback keeps this total.
    form.value(field).trim().parse().unwrap_or(0.0)
}

/// Maps validated form state onto the service's wire schema. Unknown road
/// condition labels encode as 0 (Smooth), matching the training encoding.
/// `period` is only supplied for windowed requests.
pub fn encode(form: &SensorForm, period: Option<TimePeriod>) -> PredictionPayload {
    PredictionPayload {
        voltage: numeric(form, Field::Voltage),
        current: numeric(form, Field::Current),
        temp_battery: numeric(form, Field::TempBattery),
        soh: numeric(form, Field::Soh),
        vibration: numeric(form, Field::Vibration),
        motor_temp: numeric(form, Field::MotorTemp),
        inverter_temp: numeric(form, Field::InverterTemp),
        charging_cycles: numeric(form, Field::ChargingCycles),
        odometer_km: numeric(form, Field::OdometerKm),
        ambient_temp: numeric(form, Field::AmbientTemp),
        road_condition: RoadCondition::encode_str(form.value(Field::RoadCondition)),
        time_period_days: period.map(TimePeriod::days),
    }
}
