use shared::{RoadCondition, TimePeriod};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::super::{Model, Msg};
use super::utils::debounce;
use crate::schema::{lookup, Field, FieldKind};

pub fn render_sensor_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let busy = model.predictions.busy();

    html! {
        <div class="form-section">
            <h2><i class="fa-solid fa-wave-square"></i>{" Sensor Readings"}</h2>

            <div class="field-grid">
                { for Field::ALL.iter().map(|&field| render_field(model, ctx, field)) }
            </div>

            <div class="button-container">
                <button
                    id="predict-button"
                    class="analyze-btn"
                    disabled={busy}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::SubmitSingle)
                    })}
                >
                    { if busy {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { <>{"Predict Failure"}</> }
                    }}
                </button>
                <button
                    id="reset-button"
                    class="analyze-btn"
                    style="background-color: var(--clear-color);"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ResetForm)
                    })}
                >
                    {"Reset"}
                </button>
            </div>

            { render_time_period_selector(model, ctx) }

            <div class="button-container">
                <button
                    id="batch-predict-button"
                    class="analyze-btn"
                    style="background-color: var(--primary-color);"
                    disabled={busy}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::SubmitBatch)
                    })}
                >
                    { if busy {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Processing..."}</> }
                    } else {
                        html! { <>{"Predict Failures in Period"}</> }
                    }}
                </button>
            </div>
        </div>
    }
}

fn render_field(model: &Model, ctx: &Context<Model>, field: Field) -> Html {
    let schema = lookup(field);
    let error = model.errors.get(&field);

    let control = match schema.kind {
        FieldKind::Enum => render_enum_select(model, ctx, field, error.is_some()),
        FieldKind::Numeric { min, max } => {
            render_numeric_input(model, ctx, field, min, max, error.is_some())
        }
    };

    html! {
        <div class="form-field" key={field.key()}>
            <label for={field.key()}>{ schema.label }</label>
            { control }
            { if let Some(message) = error {
                html! { <p class="field-error">{ message }</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_numeric_input(
    model: &Model,
    ctx: &Context<Model>,
    field: Field,
    min: f64,
    max: f64,
    invalid: bool,
) -> Html {
    let schema = lookup(field);
    let oninput = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::InputChanged(field, input.value())
    });

    html! {
        <div class="input-wrapper">
            <input
                type="number"
                id={field.key()}
                class={classes!("field-input", invalid.then_some("invalid"))}
                step="0.1"
                min={min.to_string()}
                max={max.to_string()}
                value={model.form.value(field).to_string()}
                placeholder={format!("Enter {}", schema.label.to_lowercase())}
                oninput={oninput}
            />
            { if schema.unit.is_empty() {
                html! {}
            } else {
                html! { <span class="unit-label">{ schema.unit }</span> }
            }}
        </div>
    }
}

fn render_enum_select(model: &Model, ctx: &Context<Model>, field: Field, invalid: bool) -> Html {
    let selected = model.form.value(field);
    let onchange = ctx.link().callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::InputChanged(field, select.value())
    });

    html! {
        <select
            id={field.key()}
            class={classes!("field-input", invalid.then_some("invalid"))}
            onchange={onchange}
        >
            <option value="" selected={selected.is_empty()}>{"Select Road Condition"}</option>
            { for RoadCondition::ALL.iter().map(|condition| {
                let label = condition.to_string();
                html! {
                    <option value={label.clone()} selected={selected == label}>
                        { label.clone() }
                    </option>
                }
            })}
        </select>
    }
}

fn render_time_period_selector(model: &Model, ctx: &Context<Model>) -> Html {
    let onchange = ctx.link().callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let days = select.value().parse::<i64>().unwrap_or(30);
        Msg::SetTimePeriod(TimePeriod::from_days(days).unwrap_or_default())
    });

    html! {
        <div class="time-period-selector">
            <label for="time-period">{"Predictive Maintenance Time Period"}</label>
            <select id="time-period" class="field-input" onchange={onchange}>
                { for TimePeriod::ALL.iter().map(|&period| {
                    html! {
                        <option
                            value={period.days().to_string()}
                            selected={period == model.time_period}
                        >
                            { period.to_string() }
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
