pub mod new_plant_form;
pub mod page;
pub mod plant_card;
pub mod plant_list;
pub mod search;
