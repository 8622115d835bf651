use shared::BatchPredictionResponse;

use crate::api::SinglePrediction;

/// Phase of one request kind. `Failed` keeps the transport message for
/// logging and tests even when the UI renders nothing for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestPhase<T> {
    #[default]
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> RequestPhase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestPhase::Loading)
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            RequestPhase::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Both request kinds plus the shared busy gate. `begin_*` is the only way
/// into `Loading`, so a second submit while either kind is pending is
/// refused instead of toggling a shared boolean.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionState {
    pub single: RequestPhase<SinglePrediction>,
    pub batch: RequestPhase<BatchPredictionResponse>,
}

impl PredictionState {
    pub fn busy(&self) -> bool {
        self.single.is_loading() || self.batch.is_loading()
    }

    /// Enters `Loading` for the single kind, clearing the batch slot so at
    /// most one settled result renders. Refused while either kind is
    /// pending.
    pub fn begin_single(&mut self) -> bool {
        if self.busy() {
            return false;
        }
        self.single = RequestPhase::Loading;
        self.batch = RequestPhase::Idle;
        true
    }

    pub fn begin_batch(&mut self) -> bool {
        if self.busy() {
            return false;
        }
        self.batch = RequestPhase::Loading;
        self.single = RequestPhase::Idle;
        true
    }

    pub fn finish_single(&mut self, outcome: Result<SinglePrediction, String>) {
        self.single = settle(outcome);
    }

    pub fn finish_batch(&mut self, outcome: Result<BatchPredictionResponse, String>) {
        self.batch = settle(outcome);
    }

    /// Back to the initial state; both result slots are dropped.
    pub fn reset(&mut self) {
        self.single = RequestPhase::Idle;
        self.batch = RequestPhase::Idle;
    }

    pub fn transport_failure(&self) -> Option<&str> {
        self.single.failure().or_else(|| self.batch.failure())
    }
}

fn settle<T>(outcome: Result<T, String>) -> RequestPhase<T> {
    match outcome {
        Ok(value) => RequestPhase::Succeeded(value),
        Err(message) => RequestPhase::Failed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_failure() -> SinglePrediction {
        SinglePrediction {
            failure_type: "No_Failure".to_string(),
            rul: None,
        }
    }

    fn battery_window() -> BatchPredictionResponse {
        BatchPredictionResponse {
            failures: vec!["Battery_Failure".to_string()],
            rul: 45.3,
        }
    }

    #[test]
    fn starts_idle_and_not_busy() {
        let state = PredictionState::default();
        assert!(!state.busy());
        assert_eq!(state.single, RequestPhase::Idle);
        assert_eq!(state.batch, RequestPhase::Idle);
    }

    #[test]
    fn begin_is_refused_while_either_kind_is_loading() {
        let mut state = PredictionState::default();
        assert!(state.begin_single());
        assert!(!state.begin_single());
        assert!(!state.begin_batch());

        state.finish_single(Ok(no_failure()));
        assert!(state.begin_batch());
        assert!(!state.begin_single());
    }

    #[test]
    fn loading_settles_into_succeeded_or_failed() {
        let mut state = PredictionState::default();
        state.begin_single();
        state.finish_single(Ok(no_failure()));
        assert_eq!(state.single.succeeded(), Some(&no_failure()));
        assert!(!state.busy());

        state.begin_batch();
        state.finish_batch(Err("Network error: connection refused".to_string()));
        assert_eq!(
            state.batch.failure(),
            Some("Network error: connection refused")
        );
        assert_eq!(
            state.transport_failure(),
            Some("Network error: connection refused")
        );
        assert!(!state.busy());
    }

    #[test]
    fn starting_one_kind_clears_the_other_result() {
        let mut state = PredictionState::default();
        state.begin_single();
        state.finish_single(Ok(no_failure()));

        state.begin_batch();
        assert_eq!(state.single, RequestPhase::Idle);
        state.finish_batch(Ok(battery_window()));

        state.begin_single();
        assert_eq!(state.batch, RequestPhase::Idle);
    }

    #[test]
    fn reset_returns_both_kinds_to_idle() {
        let mut state = PredictionState::default();
        state.begin_batch();
        state.finish_batch(Ok(battery_window()));
        state.reset();
        assert_eq!(state, PredictionState::default());
    }
}
