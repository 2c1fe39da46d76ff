#![allow(non_snake_case)]

use dioxus::prelude::*;

use drawspace::drawing::DrawingStatus;

use crate::{
    route::Route,
    services::drawing_service::{DrawingCommand, DRAWINGS_PAGE},
};

pub fn DashboardPage() -> Element {
    let drawing_service = use_coroutine_handle::<DrawingCommand>();

    use_future(move || async move {
        drawing_service.send(DrawingCommand::Refresh);
    });

    let drawings_page = DRAWINGS_PAGE();
    let draft_count = drawings_page
        .content
        .iter()
        .filter(|drawing| drawing.status == DrawingStatus::Draft)
        .count();
    let published_count = drawings_page
        .content
        .iter()
        .filter(|drawing| drawing.status == DrawingStatus::Published)
        .count();

    rsx! {
        main {
            class: "flex-1 overflow-auto p-4",

            h1 { class: "text-2xl font-semibold", "Dashboard" }

            div {
                class: "stats shadow my-4",

                div {
                    class: "stat",
                    div { class: "stat-title", "Drawings" }
                    div { class: "stat-value", "{drawings_page.total}" }
                }
                div {
                    class: "stat",
                    div { class: "stat-title", "Drafts" }
                    div { class: "stat-value", "{draft_count}" }
                }
                div {
                    class: "stat",
                    div { class: "stat-title", "Published" }
                    div { class: "stat-value", "{published_count}" }
                }
            }

            h2 { class: "text-lg font-semibold mt-6", "Recently updated" }
            ul {
                class: "menu",

                for drawing in drawings_page.content.iter().take(5) {
                    li {
                        key: "{drawing.id}",
                        Link {
                            to: Route::VectorDrawEditPage { drawing_id: drawing.id },
                            "{drawing.title}"
                        }
                    }
                }
            }
        }
    }
}
