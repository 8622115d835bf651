use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Road surface category. The service consumes this as the same integer code
/// the training data used, so `code` must never change meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum RoadCondition {
    Smooth,
    Rough,
    Extreme,
}

impl RoadCondition {
    pub const ALL: [RoadCondition; 3] = [
        RoadCondition::Smooth,
        RoadCondition::Rough,
        RoadCondition::Extreme,
    ];

    pub fn code(self) -> i64 {
        match self {
            RoadCondition::Smooth => 0,
            RoadCondition::Rough => 1,
            RoadCondition::Extreme => 2,
        }
    }

    /// Encodes a raw selection string. Unknown or empty values fall back to
    /// Smooth (0), the label the training set treated as baseline.
    pub fn encode_str(raw: &str) -> i64 {
        raw.parse::<RoadCondition>().map(Self::code).unwrap_or(0)
    }
}

/// Horizon for a windowed prediction. `days` is the wire value; the display
/// impl is the option label shown in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum TimePeriod {
    #[default]
    #[display(fmt = "1 Month")]
    OneMonth,
    #[display(fmt = "3 Months")]
    ThreeMonths,
    #[display(fmt = "6 Months")]
    SixMonths,
    #[display(fmt = "1 Year")]
    OneYear,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::OneMonth,
        TimePeriod::ThreeMonths,
        TimePeriod::SixMonths,
        TimePeriod::OneYear,
    ];

    pub fn days(self) -> i64 {
        match self {
            TimePeriod::OneMonth => 30,
            TimePeriod::ThreeMonths => 90,
            TimePeriod::SixMonths => 180,
            TimePeriod::OneYear => 365,
        }
    }

    pub fn from_days(days: i64) -> Option<TimePeriod> {
        Self::ALL.into_iter().find(|period| period.days() == days)
    }
}

/// Request body for both prediction endpoints. `time_period_days` is only
/// serialized for the windowed endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPayload {
    pub voltage: f64,
    pub current: f64,
    pub temp_battery: f64,
    pub soh: f64,
    pub vibration: f64,
    pub motor_temp: f64,
    pub inverter_temp: f64,
    pub charging_cycles: f64,
    pub odometer_km: f64,
    pub ambient_temp: f64,
    pub road_condition: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_period_days: Option<i64>,
}

/// Response of `POST /predict`. The service sends `rul: null` together with
/// a `No_Failure` classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinglePredictionResponse {
    pub failure_type: String,
    pub rul: Option<f64>,
}

/// Response of `POST /predict-all-failures-and-ruls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPredictionResponse {
    pub failures: Vec<String>,
    pub rul: f64,
}
