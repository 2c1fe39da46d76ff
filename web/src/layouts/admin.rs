#![allow(non_snake_case)]

use dioxus::prelude::*;

use drawspace::layout::{chrome_mode, ChromeMode};

use crate::{layouts::shell::AdminShellLayout, route::Route};

/// Layout selector for the admin area.
///
/// The vector drawing editor routes take over the whole viewport, so their
/// pages are rendered without the shell. Everything else goes through
/// [`AdminShellLayout`]. The decision itself lives in
/// [`drawspace::layout::chrome_mode`] and only depends on the current path.
#[component]
pub fn AdminLayout() -> Element {
    let route: Route = use_route();
    let path = route.to_string();

    match chrome_mode(Some(&path)) {
        ChromeMode::FullWidth => rsx! { Outlet::<Route> {} },
        ChromeMode::Wrapped => rsx! { AdminShellLayout {} },
    }
}

#[cfg(test)]
mod chrome_mode_tests {
    use super::*;
    use wasm_bindgen_test::*;

    mod full_width_routes {
        use super::*;
        use pretty_assertions::assert_eq;
        use uuid::Uuid;

        #[wasm_bindgen_test]
        fn test_vector_draw_route_renders_full_width() {
            assert_eq!(
                chrome_mode(Some(&Route::VectorDrawPage {}.to_string())),
                ChromeMode::FullWidth
            );
        }

        #[wasm_bindgen_test]
        fn test_vector_draw_edit_route_renders_full_width() {
            let route = Route::VectorDrawEditPage {
                drawing_id: Uuid::new_v4().into(),
            };

            assert_eq!(chrome_mode(Some(&route.to_string())), ChromeMode::FullWidth);
        }
    }

    mod wrapped_routes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[wasm_bindgen_test]
        fn test_admin_routes_render_inside_the_shell() {
            for route in [
                Route::DashboardPage {},
                Route::DrawingsPage {},
                Route::SettingsPage {},
            ] {
                assert_eq!(chrome_mode(Some(&route.to_string())), ChromeMode::Wrapped);
            }
        }

        #[wasm_bindgen_test]
        fn test_not_found_route_renders_inside_the_shell() {
            let route = Route::PageNotFound {
                route: vec!["admin".to_string(), "unknown".to_string()],
            };

            assert_eq!(chrome_mode(Some(&route.to_string())), ChromeMode::Wrapped);
        }
    }
}
