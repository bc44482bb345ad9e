//! The plant inventory page.
//!
//! On first render the page asks the collection endpoint for every plant;
//! afterwards it reacts to the form (create), the search box (query) and the
//! list (stock toggle).

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PlantPageProps;
pub use state::PlantPage;

impl Component for PlantPage {
    type Message = Msg;
    type Properties = PlantPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        PlantPage::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
