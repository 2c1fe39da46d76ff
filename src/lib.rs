use serde::{Deserialize, Serialize};

#[macro_use]
extern crate macro_attr;

#[macro_use]
extern crate enum_derive;

pub mod drawing;
pub mod layout;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct FrontConfig {
    pub app_name: String,
    pub support_href: Option<String>,
    pub show_changelog: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct Page<T> {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub content: Vec<T>,
}

// Manual impl to avoid the derive's implicit `T: Default` bound.
impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 0,
            total: 0,
            content: Vec::new(),
        }
    }
}
