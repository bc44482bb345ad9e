//! State and operations behind the plant inventory page.
//!
//! `PlantPageController` owns the collection, the search query and the
//! loading/error flags. Network-bound operations come in two shapes:
//!
//! - `load_all` / `create` run the whole operation against a `PlantApi`.
//! - `begin_load` / `finish_load` / `finish_create` split them around the
//!   request for hosts that cannot hold `&mut self` across an await (the Yew
//!   page sends the result back as a message instead).
//!
//! Flow: `idle -> loading -> {loaded, error}`. A failed load leaves an empty
//! collection next to a persistent error message; a failed create leaves the
//! collection untouched and only raises an alert.

use crate::model::plant::{NewPlant, Plant, PlantId};

use super::api::{ApiError, Notifier, PlantApi};
use super::filter::filter_plants;
use super::store::PlantStore;

/// Message shown in the page banner when the collection cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load plants.";

/// Message shown in the blocking alert when a plant cannot be created.
pub const CREATE_ERROR_MESSAGE: &str = "Failed to add plant.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantPageController {
    store: PlantStore,
    query: String,
    loading: bool,
    error: Option<String>,
}

impl PlantPageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plants(&self) -> &[Plant] {
        self.store.plants()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Banner text of the last failed load, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Plants matching the current query, recomputed on every call.
    pub fn filtered(&self) -> Vec<&Plant> {
        filter_plants(self.store.plants(), &self.query)
    }

    /// Marks a load as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Applies the outcome of a `GET` on the collection.
    ///
    /// The loading flag is cleared whatever the outcome.
    pub fn finish_load(
        &mut self,
        result: Result<Option<Vec<Plant>>, ApiError>,
        notifier: &impl Notifier,
    ) {
        match result {
            Ok(plants) => {
                self.store.replace(plants.unwrap_or_default());
                self.error = None;
            }
            Err(err) => {
                notifier.trace_error("Error fetching plants", &err);
                self.store.clear();
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Applies the outcome of a `POST` on the collection.
    ///
    /// Returns `true` if a record was appended.
    pub fn finish_create(&mut self, result: Result<Plant, ApiError>, notifier: &impl Notifier) -> bool {
        match result {
            Ok(plant) => {
                self.store.append(plant);
                true
            }
            Err(err) => {
                notifier.trace_error("Error adding plant", &err);
                notifier.alert(CREATE_ERROR_MESSAGE);
                false
            }
        }
    }

    /// Loads the whole collection from `api`, replacing the current one.
    pub async fn load_all(&mut self, api: &impl PlantApi, notifier: &impl Notifier) {
        self.begin_load();
        let result = api.list().await;
        self.finish_load(result, notifier);
    }

    /// Creates `candidate` through `api` and appends the stored record.
    pub async fn create(
        &mut self,
        api: &impl PlantApi,
        notifier: &impl Notifier,
        candidate: &NewPlant,
    ) -> bool {
        let result = api.create(candidate).await;
        self.finish_create(result, notifier)
    }

    /// Flips the stock flag of the plant with `id`; local only.
    ///
    /// A missing or falsy id is ignored. Returns `true` if a record changed.
    pub fn toggle_stock(&mut self, id: Option<&PlantId>) -> bool {
        match id {
            Some(id) => self.store.toggle_stock(id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::api::decode_listing;
    use crate::model::plant::StockStatus;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned responses in order.
    #[derive(Default)]
    struct ScriptedApi {
        lists: RefCell<VecDeque<Result<Option<Vec<Plant>>, ApiError>>>,
        creates: RefCell<VecDeque<Result<Plant, ApiError>>>,
        sent: RefCell<Vec<NewPlant>>,
    }

    impl ScriptedApi {
        fn listing(result: Result<Option<Vec<Plant>>, ApiError>) -> Self {
            let api = Self::default();
            api.lists.borrow_mut().push_back(result);
            api
        }

        fn creating(result: Result<Plant, ApiError>) -> Self {
            let api = Self::default();
            api.creates.borrow_mut().push_back(result);
            api
        }
    }

    impl PlantApi for ScriptedApi {
        async fn list(&self) -> Result<Option<Vec<Plant>>, ApiError> {
            self.lists.borrow_mut().pop_front().expect("unexpected list call")
        }

        async fn create(&self, candidate: &NewPlant) -> Result<Plant, ApiError> {
            self.sent.borrow_mut().push(candidate.clone());
            self.creates.borrow_mut().pop_front().expect("unexpected create call")
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        alerts: RefCell<Vec<String>>,
        traces: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn trace_error(&self, context: &str, error: &ApiError) {
            self.traces.borrow_mut().push(format!("{}: {}", context, error));
        }
    }

    fn fern_and_cactus() -> Vec<Plant> {
        vec![Plant::new(1u64, "Fern"), Plant::new(2u64, "Cactus")]
    }

    async fn loaded_controller() -> PlantPageController {
        let mut controller = PlantPageController::new();
        let api = ScriptedApi::listing(Ok(Some(fern_and_cactus())));
        controller.load_all(&api, &RecordingNotifier::default()).await;
        controller
    }

    #[test]
    fn starts_idle_and_empty() {
        let controller = PlantPageController::new();
        assert!(!controller.is_loading());
        assert!(controller.error().is_none());
        assert!(controller.plants().is_empty());
        assert_eq!(controller.query(), "");
    }

    #[test]
    fn begin_load_sets_loading() {
        let mut controller = PlantPageController::new();
        controller.begin_load();
        assert!(controller.is_loading());
    }

    #[tokio::test]
    async fn load_replaces_collection_in_order() {
        let controller = loaded_controller().await;
        assert_eq!(controller.plants(), fern_and_cactus().as_slice());
        assert!(!controller.is_loading());
        assert!(controller.error().is_none());
    }

    #[tokio::test]
    async fn null_entries_in_listing_do_not_fail_the_load() {
        let mut controller = PlantPageController::new();
        let notifier = RecordingNotifier::default();
        let listing = decode_listing(r#"[null, {"id":1,"name":"Fern"}]"#);
        controller.load_all(&ScriptedApi::listing(listing), &notifier).await;

        assert!(controller.error().is_none());
        assert!(notifier.traces.borrow().is_empty());
        assert_eq!(controller.filtered(), vec![&Plant::new(1u64, "Fern")]);
    }

    #[tokio::test]
    async fn load_with_null_body_yields_empty_collection() {
        let mut controller = PlantPageController::new();
        let api = ScriptedApi::listing(Ok(None));
        controller.load_all(&api, &RecordingNotifier::default()).await;
        assert!(controller.plants().is_empty());
        assert!(controller.error().is_none());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn failed_load_empties_collection_and_sets_error() {
        for failure in [
            ApiError::Transport("connection refused".to_string()),
            ApiError::Status(500),
            ApiError::Decode("expected array".to_string()),
        ] {
            let mut controller = loaded_controller().await;
            let notifier = RecordingNotifier::default();
            let api = ScriptedApi::listing(Err(failure));

            controller.load_all(&api, &notifier).await;

            assert!(controller.plants().is_empty());
            assert_eq!(controller.error(), Some(LOAD_ERROR_MESSAGE));
            assert!(!controller.is_loading());
            assert_eq!(notifier.traces.borrow().len(), 1);
            assert!(notifier.alerts.borrow().is_empty());
        }
    }

    #[tokio::test]
    async fn status_failure_trace_names_the_status() {
        let mut controller = PlantPageController::new();
        let notifier = RecordingNotifier::default();
        controller
            .load_all(&ScriptedApi::listing(Err(ApiError::Status(404))), &notifier)
            .await;
        assert_eq!(
            notifier.traces.borrow()[0],
            "Error fetching plants: HTTP error! Status: 404"
        );
    }

    #[tokio::test]
    async fn successful_load_clears_previous_error() {
        let mut controller = PlantPageController::new();
        let notifier = RecordingNotifier::default();
        controller
            .load_all(&ScriptedApi::listing(Err(ApiError::Status(503))), &notifier)
            .await;
        controller
            .load_all(&ScriptedApi::listing(Ok(Some(fern_and_cactus()))), &notifier)
            .await;
        assert!(controller.error().is_none());
        assert_eq!(controller.plants().len(), 2);
    }

    #[tokio::test]
    async fn create_appends_server_record() {
        let mut controller = loaded_controller().await;
        let mut stored = Plant::new(3u64, "Aloe");
        stored.stock = StockStatus::InStock;
        let api = ScriptedApi::creating(Ok(stored.clone()));
        let candidate = NewPlant::named("Aloe");

        let appended = controller
            .create(&api, &RecordingNotifier::default(), &candidate)
            .await;

        assert!(appended);
        let mut expected = fern_and_cactus();
        expected.push(stored);
        assert_eq!(controller.plants(), expected.as_slice());
        assert_eq!(api.sent.borrow().as_slice(), &[candidate]);
    }

    #[tokio::test]
    async fn failed_create_leaves_collection_and_alerts() {
        let mut controller = loaded_controller().await;
        let before = controller.clone();
        let notifier = RecordingNotifier::default();
        let api = ScriptedApi::creating(Err(ApiError::Status(400)));

        let appended = controller
            .create(&api, &notifier, &NewPlant::named("Aloe"))
            .await;

        assert!(!appended);
        assert_eq!(controller, before);
        assert_eq!(notifier.alerts.borrow().as_slice(), &[CREATE_ERROR_MESSAGE.to_string()]);
        assert_eq!(notifier.traces.borrow().len(), 1);
    }

    #[tokio::test]
    async fn create_after_failed_load_operates_on_empty_list() {
        let mut controller = PlantPageController::new();
        let notifier = RecordingNotifier::default();
        controller
            .load_all(&ScriptedApi::listing(Err(ApiError::Status(500))), &notifier)
            .await;
        let api = ScriptedApi::creating(Ok(Plant::new(9u64, "Moss")));
        controller.create(&api, &notifier, &NewPlant::named("Moss")).await;

        assert_eq!(controller.plants(), &[Plant::new(9u64, "Moss")]);
        assert_eq!(controller.error(), Some(LOAD_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn toggle_without_id_is_a_no_op() {
        let mut controller = loaded_controller().await;
        let before = controller.clone();
        assert!(!controller.toggle_stock(None));
        assert!(!controller.toggle_stock(Some(&PlantId::from(42u64))));
        assert_eq!(controller, before);
    }

    #[tokio::test]
    async fn toggle_twice_flips_unknown_to_true_then_false() {
        let mut controller = loaded_controller().await;
        let id = PlantId::from(1u64);

        controller.toggle_stock(Some(&id));
        assert_eq!(controller.plants()[0].stock, StockStatus::InStock);

        controller.toggle_stock(Some(&id));
        assert_eq!(controller.plants()[0].stock, StockStatus::OutOfStock);
        assert_eq!(controller.plants()[1].stock, StockStatus::Unknown);
    }

    #[tokio::test]
    async fn filtered_follows_query() {
        let mut controller = loaded_controller().await;
        assert_eq!(controller.filtered().len(), 2);

        controller.set_query("fe");
        let names: Vec<_> = controller
            .filtered()
            .into_iter()
            .filter_map(|p| p.name.as_deref())
            .collect();
        assert_eq!(names, vec!["Fern"]);
    }
}
