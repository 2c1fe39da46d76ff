#![allow(non_snake_case)]

use chrono::{Local, SecondsFormat};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsPlusLg, BsTrash},
    Icon,
};

use drawspace::drawing::{Drawing, DrawingStatus};

use crate::{
    route::Route,
    services::drawing_service::{DrawingCommand, DRAWINGS_PAGE},
};

pub fn DrawingsPage() -> Element {
    let drawing_service = use_coroutine_handle::<DrawingCommand>();

    use_future(move || async move {
        drawing_service.send(DrawingCommand::Refresh);
    });

    rsx! {
        main {
            class: "flex-1 overflow-auto p-4",

            div {
                class: "flex items-center justify-between",

                h1 { class: "text-2xl font-semibold", "Drawings" }
                Link {
                    class: "btn btn-primary btn-sm",
                    to: Route::VectorDrawPage {},
                    Icon { class: "w-4 h-4", icon: BsPlusLg }
                    "New drawing"
                }
            }

            if DRAWINGS_PAGE().content.is_empty() {
                div { class: "py-8 text-center text-gray-400", "No drawings yet" }
            } else {
                table {
                    class: "table table-zebra my-4",

                    thead {
                        tr {
                            th { "Title" }
                            th { "Status" }
                            th { "Shapes" }
                            th { "Updated" }
                            th {}
                        }
                    }
                    tbody {
                        for drawing in DRAWINGS_PAGE().content {
                            DrawingRow { key: "{drawing.id}", drawing: drawing.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DrawingRow(drawing: ReadOnlySignal<Drawing>) -> Element {
    let drawing_service = use_coroutine_handle::<DrawingCommand>();
    let drawing = drawing();
    let drawing_id = drawing.id;
    let updated_at = drawing
        .updated_at
        .with_timezone(&Local)
        .to_rfc3339_opts(SecondsFormat::Secs, true);
    let status_style = match drawing.status {
        DrawingStatus::Draft => "badge-ghost",
        DrawingStatus::Published => "badge-success",
        DrawingStatus::Archived => "badge-neutral",
    };

    rsx! {
        tr {
            td {
                Link {
                    to: Route::VectorDrawEditPage { drawing_id },
                    "{drawing.title}"
                }
            }
            td { span { class: "badge {status_style}", "{drawing.status}" } }
            td { "{drawing.shape_count}" }
            td { "{updated_at}" }
            td {
                button {
                    class: "btn btn-ghost btn-xs",
                    title: "Delete drawing",
                    onclick: move |_| drawing_service.send(DrawingCommand::Delete(drawing_id)),
                    Icon { class: "w-4 h-4", icon: BsTrash }
                }
            }
        }
    }
}
