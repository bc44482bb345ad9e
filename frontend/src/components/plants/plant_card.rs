use common::model::plant::{Plant, PlantId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlantCardProps {
    pub plant: Plant,
    pub on_toggle_stock: Callback<Option<PlantId>>,
}

pub struct PlantCard;

impl Component for PlantCard {
    type Message = ();
    type Properties = PlantCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlantCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let plant = &props.plant;
        let name = plant.name.clone().unwrap_or_default();

        let id = plant.id.clone();
        let on_toggle_stock = props.on_toggle_stock.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_toggle_stock.emit(id.clone()));

        html! {
            <li class="card" data-testid="plant-item">
                {
                    match plant.image() {
                        Some(src) => html! { <img src={src.to_string()} alt={name.clone()} /> },
                        None => html! {},
                    }
                }
                <h4>{ name.clone() }</h4>
                {
                    match plant.price() {
                        Some(price) => html! { <p>{ format!("Price: {}", price) }</p> },
                        None => html! {},
                    }
                }
                {
                    if plant.stock.is_in_stock() {
                        html! { <button class="primary" onclick={onclick}>{"In Stock"}</button> }
                    } else {
                        html! { <button onclick={onclick}>{"Out of Stock"}</button> }
                    }
                }
            </li>
        }
    }
}
