//! Plant inventory page logic, independent of any UI toolkit.
//!
//! - `api`: capability traits (`PlantApi`, `Notifier`) and `ApiError`.
//! - `store`: the client-side collection.
//! - `filter`: the search filter over the collection.
//! - `controller`: load, create, toggle and the filtered view.

pub mod api;
pub mod controller;
pub mod filter;
pub mod store;

pub use api::{ApiError, Notifier, PlantApi};
pub use controller::{PlantPageController, CREATE_ERROR_MESSAGE, LOAD_ERROR_MESSAGE};
