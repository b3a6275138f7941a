use super::super::Model;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    match model.form.prediction() {
        Some(prediction) => html! {
            <p class="prediction-result">{ format!("Prediction: {}", prediction) }</p>
        },
        None => html! {},
    }
}
