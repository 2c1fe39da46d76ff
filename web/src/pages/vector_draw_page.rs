#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsArrowLeft, BsCircle, BsPencil, BsSlashLg, BsSquare},
    Icon,
};

use drawspace::drawing::DrawingId;

use crate::{
    components::spinner::Spinner,
    route::Route,
    services::drawing_service::{DrawingCommand, DRAWINGS_PAGE},
};

/// Editor page for a new drawing. Rendered full width, without the admin
/// shell.
pub fn VectorDrawPage() -> Element {
    rsx! {
        VectorDrawCanvas { title: "Untitled drawing" }
    }
}

/// Editor page for an existing drawing, full width as well.
#[component]
pub fn VectorDrawEditPage(drawing_id: DrawingId) -> Element {
    let drawing_service = use_coroutine_handle::<DrawingCommand>();

    use_future(move || async move {
        if DRAWINGS_PAGE.peek().content.is_empty() {
            drawing_service.send(DrawingCommand::Refresh);
        }
    });

    let Some(drawing) = DRAWINGS_PAGE()
        .content
        .iter()
        .find(|drawing| drawing.id == drawing_id)
        .cloned()
    else {
        return rsx! {
            div {
                class: "h-full flex justify-center items-center",

                Spinner {}
                "Loading drawing..."
            }
        };
    };

    rsx! {
        VectorDrawCanvas { title: drawing.title }
    }
}

#[component]
fn VectorDrawCanvas(title: String) -> Element {
    rsx! {
        div {
            class: "w-screen h-screen bg-base-100 relative overflow-hidden",

            div {
                class: "absolute top-4 left-4 z-10 flex gap-2 items-center",

                Link {
                    class: "btn btn-ghost btn-square",
                    title: "Back to drawings",
                    to: Route::DrawingsPage {},
                    Icon { class: "w-5 h-5", icon: BsArrowLeft }
                }
                span { class: "font-semibold", "{title}" }
            }

            div {
                class: "absolute top-4 right-4 z-10 join join-vertical shadow",

                button {
                    class: "btn btn-square join-item",
                    title: "Freehand",
                    Icon { class: "w-5 h-5", icon: BsPencil }
                }
                button {
                    class: "btn btn-square join-item",
                    title: "Line",
                    Icon { class: "w-5 h-5", icon: BsSlashLg }
                }
                button {
                    class: "btn btn-square join-item",
                    title: "Rectangle",
                    Icon { class: "w-5 h-5", icon: BsSquare }
                }
                button {
                    class: "btn btn-square join-item",
                    title: "Ellipse",
                    Icon { class: "w-5 h-5", icon: BsCircle }
                }
            }

            svg {
                class: "w-full h-full",
                view_box: "0 0 1920 1080",

                defs {
                    pattern {
                        id: "canvas-grid",
                        width: "24",
                        height: "24",
                        pattern_units: "userSpaceOnUse",

                        path {
                            d: "M 24 0 L 0 0 0 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_opacity: "0.1",
                        }
                    }
                }

                rect {
                    width: "100%",
                    height: "100%",
                    fill: "url(#canvas-grid)",
                }
            }
        }
    }
}
