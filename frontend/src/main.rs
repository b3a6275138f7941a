mod api;
mod components;
mod config;

use api::GlooClient;
use components::{form_section, handlers, header, results, utils};
use shared::{Field, FormState, Settlement, SubmissionController};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Input events
    UpdateField(Field, String),

    // Prediction cycle
    Submit,
    Settled(Settlement),
}

// Main component
pub struct Model {
    form: FormState,
    controller: SubmissionController<GlooClient>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let endpoint = config::endpoint();
        log::info!("Prediction endpoint: {}", endpoint);

        Self {
            form: FormState::new(),
            controller: SubmissionController::new(GlooClient::new(endpoint)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateField(field, raw) => {
                self.form.update(field, &raw);
                true
            }
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Settled(settlement) => handlers::handle_settled(self, settlement),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }

                <main class="main-content iris-form">
                    { utils::render_error_message(self) }
                    { results::render_results(self) }
                    { form_section::render_form_section(self, ctx) }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
