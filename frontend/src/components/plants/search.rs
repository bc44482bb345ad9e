use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchProps {
    pub query: String,
    pub on_change: Callback<String>,
}

/// Controlled search box; the page owns the query.
pub struct Search;

impl Component for Search {
    type Message = ();
    type Properties = SearchProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Search
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        });

        html! {
            <div class="searchbar">
                <label for="search">{"Search Plants:"}</label>
                <input
                    type="text"
                    id="search"
                    placeholder="Type a name to search..."
                    value={props.query.clone()}
                    oninput={oninput}
                />
            </div>
        }
    }
}
