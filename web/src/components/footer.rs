#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{model::UI_MODEL, services::drawing_service::DrawingCommand};

pub fn Footer() -> Element {
    let drawing_service = use_coroutine_handle::<DrawingCommand>();

    rsx! {
        footer {
            class: "w-full",

            hr {}
            div {
                class: "w-full flex gap-2 p-1 justify-end items-center",

                div {
                    class: "grow",
                }

                if UI_MODEL.read().is_syncing_drawings {
                    div {
                        class: "flex gap-1 items-center text-xs text-gray-400",
                        span { class: "loading loading-ring loading-xs" }
                        "Syncing drawings..."
                    }
                }

                div { class: "divider divider-horizontal" }

                match &UI_MODEL.read().drawings_count {
                    Some(Ok(count)) => rsx! {
                        div {
                            class: "tooltip tooltip-left",
                            "data-tip": "{count} drawings loaded",
                            button {
                                class: "badge badge-success text-xs",
                                onclick: move |_| drawing_service.send(DrawingCommand::Refresh),
                                "{count}"
                            }
                        }
                    },
                    Some(Err(error)) => rsx! {
                        div {
                            class: "tooltip tooltip-left tooltip-error",
                            "data-tip": "{error}",
                            button {
                                class: "badge badge-error text-xs",
                                onclick: move |_| drawing_service.send(DrawingCommand::Refresh),
                                "0"
                            }
                        }
                    },
                    None => rsx! { span { class: "loading loading-ring loading-xs" } },
                }

                div { class: "w-2" }
            }
        }
    }
}
