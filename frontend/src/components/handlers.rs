use gloo_console::error;
use gloo_storage::{LocalStorage, Storage};
use shared::{BatchPredictionResponse, TimePeriod};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::super::{Model, Msg};
use crate::api::{self, SinglePrediction};
use crate::encode::encode;
use crate::schema::{Field, SensorForm};
use crate::validate::validate_form;

pub fn handle_input_changed(model: &mut Model, field: Field, value: String) -> bool {
    model.form.set(field, value);

    // Clear error when user starts typing
    model.errors.remove(&field);

    true
}

pub fn handle_set_time_period(model: &mut Model, period: TimePeriod) -> bool {
    if model.time_period == period {
        return false;
    }
    model.time_period = period;
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.form = SensorForm::default();
    model.errors.clear();
    model.predictions.reset();
    true
}

pub fn handle_submit_single(model: &mut Model, ctx: &Context<Model>) -> bool {
    if !prepare_submit(model) {
        return true;
    }
    if !model.predictions.begin_single() {
        log::warn!("Ignoring submit: a prediction request is already in flight");
        return false;
    }

    let payload = encode(&model.form, None);
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::SingleResult(api::predict_single(&payload).await));
    });

    true
}

pub fn handle_submit_batch(model: &mut Model, ctx: &Context<Model>) -> bool {
    if !prepare_submit(model) {
        return true;
    }
    if !model.predictions.begin_batch() {
        log::warn!("Ignoring submit: a prediction request is already in flight");
        return false;
    }

    let payload = encode(&model.form, Some(model.time_period));
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::BatchResult(api::predict_batch(&payload).await));
    });

    true
}

pub fn handle_single_result(model: &mut Model, outcome: Result<SinglePrediction, String>) -> bool {
    if let Err(message) = &outcome {
        error!(format!("Prediction error: {}", message));
    }
    model.predictions.finish_single(outcome);
    true
}

pub fn handle_batch_result(
    model: &mut Model,
    outcome: Result<BatchPredictionResponse, String>,
) -> bool {
    if let Err(message) = &outcome {
        error!(format!("Batch prediction error: {}", message));
    }
    model.predictions.finish_batch(outcome);
    true
}

// Validates the whole form before either request kind goes out; a failed
// validation replaces the error map and blocks the submit.
fn prepare_submit(model: &mut Model) -> bool {
    let errors = validate_form(&model.form);
    if !errors.is_empty() {
        model.errors = errors;
        return false;
    }
    model.errors.clear();
    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = if model.theme == "light" {
        "dark".to_string()
    } else {
        "light".to_string()
    };
    apply_theme(&model.theme);

    if let Err(e) = LocalStorage::set("theme", model.theme.clone()) {
        log::warn!("Failed to persist theme: {:?}", e);
    }

    true
}

pub fn apply_theme(theme: &str) {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    if theme == "dark" {
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        body.class_list().remove_1("dark-mode").unwrap();
    }
}
