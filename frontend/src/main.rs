use log::info;

mod animation;
mod app;
mod booking;
mod config;
mod dom;
mod events;
mod fragment;
mod gallery;
mod port;
mod random;
mod route;
mod state;
mod components {
    pub mod confetti;
    pub mod gallery_grid;
    pub mod lightbox;
    pub mod nav;
}

use app::App;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
