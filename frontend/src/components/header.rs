use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Iris Predictor"}</h1>
            <h2>{"Predict Iris Species"}</h2>
        </header>
    }
}
