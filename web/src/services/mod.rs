pub mod api;
pub mod drawing_service;
pub mod toast_service;
