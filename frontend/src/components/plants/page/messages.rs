use common::inventory::ApiError;
use common::model::plant::{NewPlant, Plant, PlantId};

#[derive(Clone)]
pub enum Msg {
    Load,
    LoadFinished(Result<Option<Vec<Plant>>, ApiError>),
    AddPlant(NewPlant),
    AddFinished(Result<Plant, ApiError>),
    SetQuery(String),
    ToggleStock(Option<PlantId>),
}
