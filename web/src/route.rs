use dioxus::prelude::*;

use drawspace::drawing::DrawingId;

use crate::{
    layouts::admin::AdminLayout,
    pages::{
        dashboard_page::DashboardPage,
        drawings_page::DrawingsPage,
        page_not_found::PageNotFound,
        settings_page::SettingsPage,
        vector_draw_page::{VectorDrawEditPage, VectorDrawPage},
    },
};

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::DashboardPage {})]
    #[layout(AdminLayout)]
      #[route("/admin")]
      DashboardPage {},
      #[route("/admin/drawings")]
      DrawingsPage {},
      #[route("/admin/settings")]
      SettingsPage {},
      #[route("/admin/vector-draw")]
      VectorDrawPage {},
      #[route("/admin/vector-draw/:drawing_id")]
      VectorDrawEditPage { drawing_id: DrawingId },
    #[end_layout]
    #[route("/:..route")]
    PageNotFound {
        route: Vec<String>
    },
}
