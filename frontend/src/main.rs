use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};
use shared::{BatchPredictionResponse, TimePeriod};
use yew::prelude::*;

mod api;
mod components;
mod encode;
mod lifecycle;
mod schema;
mod validate;

use api::SinglePrediction;
use components::{handlers, header, results, sensor_form, theme_toggle};
use lifecycle::PredictionState;
use schema::{Field, SensorForm};

/// Transport failures are kept on the request phase and logged; rendering
/// them as a banner is opt-in so an unreachable service degrades to "no
/// result shown".
pub const SURFACE_TRANSPORT_ERRORS: bool = false;

// Yew msg components
pub enum Msg {
    // Form operations
    InputChanged(Field, String),
    SetTimePeriod(TimePeriod),
    ResetForm,

    // Prediction operations
    SubmitSingle,
    SubmitBatch,
    SingleResult(Result<SinglePrediction, String>),
    BatchResult(Result<BatchPredictionResponse, String>),

    // UI states
    ToggleTheme,
}

// Main component
pub struct Model {
    pub form: SensorForm,
    pub errors: HashMap<Field, String>,
    pub predictions: PredictionState,
    pub time_period: TimePeriod,
    pub theme: String,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let theme: String = LocalStorage::get("theme").unwrap_or_else(|_| "light".to_string());
        handlers::apply_theme(&theme);

        Self {
            form: SensorForm::default(),
            errors: HashMap::new(),
            predictions: PredictionState::default(),
            time_period: TimePeriod::default(),
            theme,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Form operations
            Msg::InputChanged(field, value) => handlers::handle_input_changed(self, field, value),
            Msg::SetTimePeriod(period) => handlers::handle_set_time_period(self, period),
            Msg::ResetForm => handlers::handle_reset(self),

            // Prediction operations
            Msg::SubmitSingle => handlers::handle_submit_single(self, ctx),
            Msg::SubmitBatch => handlers::handle_submit_batch(self, ctx),
            Msg::SingleResult(outcome) => handlers::handle_single_result(self, outcome),
            Msg::BatchResult(outcome) => handlers::handle_batch_result(self, outcome),

            // UI states
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                    { sensor_form::render_sensor_form(self, ctx) }
                    { results::render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"EV Component Failure Prediction | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
