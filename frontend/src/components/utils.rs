use super::super::Model;
use yew::prelude::*;

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = model.form.error() {
        html! {
            <div class="error-message">
                <p>{ format!("Error: {}", error_msg) }</p>
            </div>
        }
    } else {
        html! {}
    }
}
