#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
    components::{footer::Footer, nav_bar::NavBar, toast_zone::ToastZone},
    route::Route,
};

/// The shared admin chrome: navigation bar on top, page content in the
/// middle, sync status footer at the bottom.
#[component]
pub fn AdminShellLayout() -> Element {
    rsx! {
        NavBar {}
        Outlet::<Route> {}
        Footer {}
        ToastZone {}
    }
}
