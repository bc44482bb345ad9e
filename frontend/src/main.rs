use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod notify;

fn main() {
    yew::Renderer::<App>::new().render();
}
