#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::{debug, error};

use crate::{
    components::spinner::Spinner,
    config::{get_api_base_url, get_app_config, APP_CONFIG},
    model::UI_MODEL,
    route::Route,
    services::{
        drawing_service::{drawing_service, DRAWINGS_PAGE},
        toast_service::{toast_service, TOASTS},
    },
};

pub mod components;
pub mod config;
pub mod layouts;
pub mod model;
pub mod pages;
pub mod route;
pub mod services;
pub mod theme;
pub mod utils;

#[component]
pub fn App() -> Element {
    let api_base_url = use_memo(move || get_api_base_url().unwrap());

    let toast_service_handle = use_coroutine(move |rx| toast_service(rx, TOASTS.signal()));
    let _drawing_service_handle = use_coroutine(move |rx| {
        drawing_service(
            rx,
            api_base_url(),
            DRAWINGS_PAGE.signal(),
            UI_MODEL.signal(),
            toast_service_handle,
        )
    });

    use_future(move || async move {
        match get_app_config().await {
            Ok(app_config) => {
                APP_CONFIG.write().replace(app_config);
            }
            Err(err) => error!("Failed to load the front configuration: {err}"),
        }
    });

    debug!("Rendering app");
    if APP_CONFIG.read().is_some() {
        rsx! {
            div {
                class: "h-full flex flex-col text-sm",

                Router::<Route> {}
            }
        }
    } else {
        rsx! {
            div {
                class: "h-full flex justify-center items-center",

                Spinner {}
                "Loading Drawspace..."
            }
        }
    }
}
