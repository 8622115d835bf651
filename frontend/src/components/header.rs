use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-bolt"></i> {" EV Component Failure Prediction"}</h1>
            <p class="subtitle">{"Advanced ML-powered diagnostics for electric vehicle components"}</p>
        </header>
    }
}
