//! Renders the form, the search box, the load status, the error banner and
//! the filtered list.

use common::inventory::PlantPageController;
use common::model::plant::Plant;
use yew::prelude::*;

use crate::components::plants::new_plant_form::NewPlantForm;
use crate::components::plants::plant_list::PlantList;
use crate::components::plants::search::Search;

use super::messages::Msg;
use super::state::PlantPage;

pub fn view(component: &PlantPage, ctx: &Context<PlantPage>) -> Html {
    let link = ctx.link();
    let controller = &component.controller;
    let plants: Vec<Plant> = controller.filtered().into_iter().cloned().collect();

    html! {
        <main>
            <NewPlantForm on_add={link.callback(Msg::AddPlant)} />
            <Search
                query={controller.query().to_string()}
                on_change={link.callback(Msg::SetQuery)}
            />
            { build_loading(controller) }
            { build_error_banner(controller) }
            <PlantList plants={plants} on_toggle_stock={link.callback(Msg::ToggleStock)} />
        </main>
    }
}

fn build_loading(controller: &PlantPageController) -> Html {
    if controller.is_loading() {
        html! { <p>{"Loading ..."}</p> }
    } else {
        html! {}
    }
}

/// Persistent banner; stays up next to the (empty) list after a failed load.
fn build_error_banner(controller: &PlantPageController) -> Html {
    match controller.error() {
        Some(message) => html! { <div class="error-message">{ message.to_string() }</div> },
        None => html! {},
    }
}
