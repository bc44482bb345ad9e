use crate::model::plant::{Plant, PlantId};

/// Client-side copy of the plant collection, in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantStore {
    plants: Vec<Plant>,
}

impl PlantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Replaces the whole collection with a freshly loaded one.
    pub fn replace(&mut self, plants: Vec<Plant>) {
        self.plants = plants;
    }

    pub fn clear(&mut self) {
        self.plants.clear();
    }

    /// Appends a record returned by the server after a create.
    pub fn append(&mut self, plant: Plant) {
        self.plants.push(plant);
    }

    /// Flips the stock flag of every record carrying `id`.
    ///
    /// Returns `false` and leaves the collection untouched when `id` is falsy
    /// or unknown.
    pub fn toggle_stock(&mut self, id: &PlantId) -> bool {
        if id.is_falsy() {
            return false;
        }
        let mut changed = false;
        for plant in self.plants.iter_mut().filter(|p| p.id.as_ref() == Some(id)) {
            plant.stock = plant.stock.toggled();
            changed = true;
        }
        changed
    }
}
