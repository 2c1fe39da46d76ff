pub mod admin;
pub mod shell;
