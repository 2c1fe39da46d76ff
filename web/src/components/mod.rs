pub mod footer;
pub mod nav_bar;
pub mod spinner;
pub mod toast_zone;
