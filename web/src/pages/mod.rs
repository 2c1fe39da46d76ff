pub mod dashboard_page;
pub mod drawings_page;
pub mod page_not_found;
pub mod settings_page;
pub mod vector_draw_page;
