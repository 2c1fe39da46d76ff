#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsBrush, BsGear, BsGrid, BsImages, BsMoon, BsQuestionLg, BsSun},
    Icon,
};

use crate::{
    config::APP_CONFIG,
    route::Route,
    services::drawing_service::DRAWINGS_PAGE,
    theme::{toggle_dark_mode, IS_DARK_MODE},
};

pub fn NavBar() -> Element {
    let app_name = APP_CONFIG
        .read()
        .as_ref()
        .map(|config| config.app_name.clone())
        .unwrap_or_else(|| "Drawspace".to_string());
    let support_href = APP_CONFIG
        .read()
        .as_ref()
        .and_then(|config| config.support_href.clone());

    rsx! {
        div {
            class: "navbar shadow-lg z-10 h-12",

            div {
                class: "navbar-start",

                Link {
                    class: "btn btn-ghost px-2 text-lg font-semibold",
                    to: Route::DashboardPage {},
                    "{app_name}"
                }

                Link {
                    class: "btn btn-ghost px-2 min-h-10 h-10 mx-2",
                    active_class: "btn-active",
                    to: Route::DashboardPage {},
                    Icon { class: "w-5 h-5", icon: BsGrid }
                    p { "Dashboard" }
                }

                div {
                    class: "indicator mx-2",
                    Link {
                        class: "btn btn-ghost px-2 min-h-10 h-10",
                        active_class: "btn-active",
                        to: Route::DrawingsPage {},
                        Icon { class: "w-5 h-5", icon: BsImages }
                        p { "Drawings" }
                    }
                    if DRAWINGS_PAGE().total > 0 {
                      span { class: "indicator-item indicator-top badge badge-primary text-xs", "{DRAWINGS_PAGE().total}" }
                    }
                }

                Link {
                    class: "btn btn-ghost px-2 min-h-10 h-10 mx-2",
                    active_class: "btn-active",
                    to: Route::VectorDrawPage {},
                    Icon { class: "w-5 h-5", icon: BsBrush }
                    p { "New drawing" }
                }
            }

            div {
                class: "navbar-end",

                if let Some(support_href) = support_href {
                    a {
                        class: "btn btn-ghost btn-square",
                        href: "{support_href}",
                        title: "Contact support",
                        Icon { class: "w-5 h-5", icon: BsQuestionLg }
                    }
                }

                label {
                    class: "btn btn-ghost btn-square swap swap-rotate",
                    input {
                        class: "hidden",
                        "type": "checkbox",
                        checked: "{IS_DARK_MODE}",
                        onclick: move |_| {
                            *IS_DARK_MODE.write() = toggle_dark_mode(true).expect("Failed to switch the theme");
                        }
                    }
                    Icon { class: "swap-on w-5 h-5", icon: BsSun }
                    Icon { class: "swap-off w-5 h-5", icon: BsMoon }
                }

                Link {
                    class: "btn btn-ghost btn-square",
                    active_class: "btn-active",
                    to: Route::SettingsPage {},
                    Icon { class: "w-5 h-5", icon: BsGear }
                }
            }
        }
    }
}
