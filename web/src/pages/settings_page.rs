#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
    config::APP_CONFIG,
    theme::{toggle_dark_mode, IS_DARK_MODE},
};

pub fn SettingsPage() -> Element {
    let app_config = APP_CONFIG.read().clone();

    rsx! {
        main {
            class: "flex-1 overflow-auto p-4",

            h1 { class: "text-2xl font-semibold", "Settings" }

            div {
                class: "card bg-base-200 my-4 max-w-xl",

                div {
                    class: "card-body",

                    h2 { class: "card-title", "Appearance" }
                    label {
                        class: "label cursor-pointer justify-start gap-4",

                        span { class: "label-text", "Dark mode" }
                        input {
                            class: "toggle",
                            "type": "checkbox",
                            checked: "{IS_DARK_MODE}",
                            onclick: move |_| {
                                *IS_DARK_MODE.write() = toggle_dark_mode(true)
                                    .expect("Failed to switch the theme");
                            }
                        }
                    }
                }
            }

            if let Some(app_config) = app_config {
                div {
                    class: "card bg-base-200 my-4 max-w-xl",

                    div {
                        class: "card-body",

                        h2 { class: "card-title", "About" }
                        p { "{app_config.app_name}" }
                        p { class: "text-xs text-gray-400", "API: {app_config.api_base_url}" }

                        if let Some(support_href) = app_config.support_href {
                            a {
                                class: "link link-primary text-sm",
                                href: "{support_href}",
                                "Contact support"
                            }
                        }
                    }
                }
            }
        }
    }
}
