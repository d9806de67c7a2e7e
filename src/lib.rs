#![allow(non_snake_case)]

pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod models;
pub mod services;
pub mod state;
pub mod views;

use dioxus::prelude::*;

use state::MapStateProvider;
use views::home::Home;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
}

pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        MapStateProvider {
            Router::<Route> {}
        }
    }
}

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracing_subscriber::fmt::try_init();
    }
}

pub fn run_app() {
    init_logging();
    tracing::info!("Starting map, topology from {}", config::settings().topology_url);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::new()
            .with_window(
                WindowBuilder::new()
                    .with_title("United States")
                    .with_inner_size(LogicalSize::new(1024.0, 768.0)),
            )
            .with_menu(None)
            .with_resource_directory(".");

        LaunchBuilder::new().with_cfg(config).launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    LaunchBuilder::new().launch(App);
}
