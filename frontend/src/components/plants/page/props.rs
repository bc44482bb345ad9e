use yew::prelude::*;

/// What a parent can configure on a `PlantPage`.
#[derive(Properties, PartialEq, Clone)]
pub struct PlantPageProps {
    /// Collection endpoint to load from and post to.
    ///
    /// - `None` (the default) uses `config::DEFAULT_API_URL`.
    /// - Read once, when the component is created; changing it later does not
    ///   reload the page.
    #[prop_or_default]
    pub api_url: Option<String>,
}
