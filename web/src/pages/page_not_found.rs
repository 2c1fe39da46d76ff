#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        main {
            class: "flex-1 flex flex-col items-center justify-center gap-2",

            h1 { class: "text-2xl font-semibold", "Page not found" }
            p { class: "text-gray-400", "The page `/{path}` does not exist." }
            Link {
                class: "btn btn-primary btn-sm",
                to: Route::DashboardPage {},
                "Back to the dashboard"
            }
        }
    }
}
