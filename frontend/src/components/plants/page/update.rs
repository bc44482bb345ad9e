//! Message handling for the plant page.
//!
//! Requests are spawned on the local executor and report back through
//! `Msg::LoadFinished` / `Msg::AddFinished`, so the controller is only ever
//! touched from here. Returns `true` when the view should re-render.

use common::inventory::PlantApi;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PlantPage;

pub fn update(component: &mut PlantPage, ctx: &Context<PlantPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            gloo_console::log!("Loading plants from", component.api.url().to_string());
            component.controller.begin_load();

            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.list().await;
                link.send_message(Msg::LoadFinished(result));
            });
            true
        }
        Msg::LoadFinished(result) => {
            component.controller.finish_load(result, &component.notifier);
            true
        }
        Msg::AddPlant(candidate) => {
            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.create(&candidate).await;
                link.send_message(Msg::AddFinished(result));
            });
            false
        }
        Msg::AddFinished(result) => component.controller.finish_create(result, &component.notifier),
        Msg::SetQuery(query) => {
            if component.controller.query() == query {
                return false;
            }
            component.controller.set_query(query);
            true
        }
        Msg::ToggleStock(id) => component.controller.toggle_stock(id.as_ref()),
    }
}
