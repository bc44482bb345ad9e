//! Creation form for new plants.
//!
//! Keeps its own draft (name, image URL, price) and hands a `NewPlant` to the
//! page on submit. A submit with an empty name is swallowed; that is the only
//! validation the page performs.

use common::model::plant::NewPlant;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum Msg {
    SetName(String),
    SetImage(String),
    SetPrice(String),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct NewPlantFormProps {
    pub on_add: Callback<NewPlant>,
}

#[derive(Default)]
pub struct NewPlantForm {
    name: String,
    image: String,
    price: String,
}

impl NewPlantForm {
    /// Builds the candidate, or `None` while the name is empty.
    fn candidate(&self) -> Option<NewPlant> {
        if self.name.is_empty() {
            return None;
        }
        let image = Some(self.image.trim())
            .filter(|image| !image.is_empty())
            .map(str::to_string);
        Some(NewPlant {
            name: self.name.clone(),
            image,
            price: self.price.trim().parse().ok(),
            ..Default::default()
        })
    }
}

fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

impl Component for NewPlantForm {
    type Message = Msg;
    type Properties = NewPlantFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => self.name = name,
            Msg::SetImage(image) => self.image = image,
            Msg::SetPrice(price) => self.price = price,
            Msg::Submit => {
                let Some(candidate) = self.candidate() else {
                    return false;
                };
                ctx.props().on_add.emit(candidate);
                *self = Self::default();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="new-plant-form">
                <h2>{"New Plant"}</h2>
                <form onsubmit={onsubmit}>
                    <input
                        type="text"
                        name="name"
                        placeholder="Plant name"
                        value={self.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(e)))}
                    />
                    <input
                        type="text"
                        name="image"
                        placeholder="Image URL"
                        value={self.image.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetImage(input_value(e)))}
                    />
                    <input
                        type="number"
                        name="price"
                        step="0.01"
                        placeholder="Price"
                        value={self.price.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetPrice(input_value(e)))}
                    />
                    <button type="submit">{"Add Plant"}</button>
                </form>
            </div>
        }
    }
}
