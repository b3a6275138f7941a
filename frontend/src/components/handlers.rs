use super::super::{Model, Msg};
use shared::{Measurement, PredictionClient, Settlement};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::GlooClient;

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    // The button is disabled while loading, but a queued submit event can
    // still arrive; begin() drops it.
    let Some(measurement) = model.controller.begin(&mut model.form) else {
        return !model.form.is_loading();
    };

    send_prediction_request(ctx, model.controller.client().clone(), measurement);
    true
}

pub fn handle_settled(model: &mut Model, settlement: Settlement) -> bool {
    model.controller.finish(&mut model.form, settlement);
    true
}

pub fn send_prediction_request(ctx: &Context<Model>, client: GlooClient, measurement: Measurement) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let settlement = client.send(&measurement).await;
            link.send_message(Msg::Settled(settlement));
        }
    });
}
