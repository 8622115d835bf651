use shared::BatchPredictionResponse;
use yew::prelude::*;

use super::super::{Model, SURFACE_TRANSPORT_ERRORS};
use super::utils::{display_label, format_rul, inspection_window_days};
use crate::api::SinglePrediction;

pub fn render_results(model: &Model) -> Html {
    html! {
        <div class="results-section">
            <h2>{"Prediction Results"}</h2>
            { render_transport_error(model) }
            { render_body(model) }
        </div>
    }
}

// A batch result with no failures renders the same as "no result yet".
fn render_body(model: &Model) -> Html {
    if model.predictions.busy() {
        return html! {
            <div class="results-placeholder">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Processing sensor data..."}</p>
                <p class="hint">{"Running MLP models for prediction"}</p>
            </div>
        };
    }

    if let Some(batch) = model.predictions.batch.succeeded() {
        if !batch.failures.is_empty() {
            return render_batch_result(model, batch);
        }
    }

    if let Some(result) = model.predictions.single.succeeded() {
        return render_single_result(result);
    }

    html! {
        <div class="results-placeholder">
            <i class="fa-solid fa-wave-square fa-2x"></i>
            <p>{"Enter sensor readings to get predictions"}</p>
            <p class="hint">{"Fill out the form and click any prediction button"}</p>
        </div>
    }
}

fn render_batch_result(model: &Model, batch: &BatchPredictionResponse) -> Html {
    html! {
        <div class="batch-result">
            <h3>{ format!("{} Prediction", model.time_period) }</h3>
            <div>
                <span class="result-label">{"Possible Failures:"}</span>
                <ul class="failure-list">
                    { for batch.failures.iter().map(|failure| {
                        html! { <li>{ display_label(failure) }</li> }
                    })}
                </ul>
            </div>
            <div class="rul-line">
                <span class="result-label">{"RUL:"}</span>{ " " }{ format_rul(batch.rul) }
            </div>
        </div>
    }
}

fn render_single_result(result: &SinglePrediction) -> Html {
    let healthy = result.failure_type == "No_Failure";

    html! {
        <div class="single-result">
            <div class={classes!("failure-panel", if healthy { "healthy" } else { "at-risk" })}>
                <h3>
                    { if healthy {
                        html! { <><i class="fa-solid fa-circle-check"></i>{" Failure Type Prediction"}</> }
                    } else {
                        html! { <><i class="fa-solid fa-triangle-exclamation"></i>{" Failure Type Prediction"}</> }
                    }}
                </h3>
                <p class="failure-label">{ display_label(&result.failure_type) }</p>
                <p class="hint">{"MLP Classifier Result"}</p>
            </div>

            { match result.rul {
                // RUL only carries meaning alongside a predicted failure.
                Some(rul) if !healthy => html! {
                    <div class="rul-panel">
                        <h3><i class="fa-solid fa-heart-pulse"></i>{" Remaining Useful Life"}</h3>
                        <p class="rul-value">{ format!("{} days", rul) }</p>
                        <p class="hint">{"MLP Regressor Result"}</p>
                        <div class="recommendation">
                            <p>{"Maintenance Recommendation"}</p>
                            <p class="hint">
                                { format!("Schedule inspection within {} days", inspection_window_days(rul)) }
                            </p>
                        </div>
                    </div>
                },
                _ if healthy => html! {
                    <div class="healthy-panel">
                        <h3><i class="fa-solid fa-circle-check"></i>{" System Status"}</h3>
                        <p>{"All systems operating normally"}</p>
                        <p class="hint">{"No immediate maintenance required"}</p>
                    </div>
                },
                _ => html! {},
            }}
        </div>
    }
}

fn render_transport_error(model: &Model) -> Html {
    if !SURFACE_TRANSPORT_ERRORS {
        return html! {};
    }

    if let Some(message) = model.predictions.transport_failure() {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ message }</p>
            </div>
        }
    } else {
        html! {}
    }
}
