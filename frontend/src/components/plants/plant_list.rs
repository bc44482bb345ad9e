use common::model::plant::{Plant, PlantId};
use yew::prelude::*;

use super::plant_card::PlantCard;

#[derive(Properties, PartialEq)]
pub struct PlantListProps {
    /// Already filtered, in collection order.
    pub plants: Vec<Plant>,
    pub on_toggle_stock: Callback<Option<PlantId>>,
}

pub struct PlantList;

/// Reconciliation key for a card. The prefix keeps numeric ids, text ids and
/// id-less records (keyed by position) from colliding.
fn card_key(plant: &Plant, index: usize) -> String {
    match &plant.id {
        Some(PlantId::Number(n)) => format!("n:{}", n),
        Some(PlantId::Text(s)) => format!("s:{}", s),
        None => format!("idx:{}", index),
    }
}

impl Component for PlantList {
    type Message = ();
    type Properties = PlantListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlantList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <ul class="cards">
                {
                    for props.plants.iter().enumerate().map(|(index, plant)| {
                        html! {
                            <PlantCard
                                key={card_key(plant, index)}
                                plant={plant.clone()}
                                on_toggle_stock={props.on_toggle_stock.clone()}
                            />
                        }
                    })
                }
            </ul>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_get_distinct_keys() {
        let numeric = Plant::new(1u64, "Fern");
        let text = Plant::new("1", "Fern");
        assert_eq!(card_key(&numeric, 0), "n:1");
        assert_eq!(card_key(&text, 0), "s:1");
    }

    #[test]
    fn id_less_records_do_not_collide_with_text_ids() {
        let id_less = Plant {
            id: None,
            ..Plant::new(1u64, "Moss")
        };
        let lookalike = Plant::new("idx:0", "Moss");
        assert_eq!(card_key(&id_less, 0), "idx:0");
        assert_ne!(card_key(&id_less, 0), card_key(&lookalike, 1));
    }
}
