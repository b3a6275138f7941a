use super::super::{Model, Msg};
use shared::Field;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_form_section(model: &Model, ctx: &Context<Model>) -> Html {
    let handle_submit = ctx.link().callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let loading = model.form.is_loading();

    html! {
        <form onsubmit={handle_submit}>
            { for Field::ALL.into_iter().map(|field| render_field(model, ctx, field)) }
            <button type="submit" class="predict-btn" disabled={loading}>
                { if loading { "Predicting..." } else { "Predict" } }
            </button>
        </form>
    }
}

fn render_field(model: &Model, ctx: &Context<Model>, field: Field) -> Html {
    let handle_input = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });
    let name = field.to_string();

    html! {
        <div class="form-group" key={name.clone()}>
            <label for={name.clone()}>{ field.label() }</label>
            <input
                type="number"
                id={name.clone()}
                name={name}
                step="0.1"
                required=true
                value={model.form.input(field).to_string()}
                oninput={handle_input}
            />
        </div>
    }
}
