//! What a mounted plant page holds between messages.

use common::inventory::PlantPageController;

use crate::api::HttpPlantApi;
use crate::config::resolve_api_url;
use crate::notify::BrowserNotifier;

use super::props::PlantPageProps;

/// A mounted plant page: the controller plus the handles it needs to reach
/// the endpoint and the user.
pub struct PlantPage {
    /// Collection, query and loading/error flags.
    pub controller: PlantPageController,

    /// Client for the collection endpoint; cloned into each spawned request.
    pub api: HttpPlantApi,

    /// Alerts and console diagnostics.
    pub notifier: BrowserNotifier,

    /// Guard so the initial load runs once, on the first render only.
    pub loaded: bool,
}

impl PlantPage {
    pub fn new(props: &PlantPageProps) -> Self {
        Self {
            controller: PlantPageController::new(),
            api: HttpPlantApi::new(resolve_api_url(props.api_url.as_deref())),
            notifier: BrowserNotifier,
            loaded: false,
        }
    }
}
