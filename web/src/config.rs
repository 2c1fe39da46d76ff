use anyhow::Result;
use dioxus::prelude::*;
use reqwest::Method;
use url::Url;
use wasm_bindgen::prelude::*;

use drawspace::FrontConfig;

use crate::{services::api::call_api, utils::current_origin};

#[derive(Debug, PartialEq, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub api_base_url: Url,
    pub support_href: Option<String>,
    pub show_changelog: bool,
}

#[wasm_bindgen(module = "/js/api.js")]
extern "C" {
    fn api_base_url() -> String;
}

pub static APP_CONFIG: GlobalSignal<Option<AppConfig>> = Signal::global(|| None);

pub fn get_api_base_url() -> Result<Url> {
    match Url::parse(&api_base_url()) {
        Ok(url) => Ok(url),
        Err(err) => match current_origin()?.join(&api_base_url()) {
            Ok(url) => Ok(url),
            Err(_) => Err(anyhow::anyhow!("Failed to parse api_base_url: {}", err)),
        },
    }
}

pub async fn get_app_config() -> Result<AppConfig> {
    let api_base_url = get_api_base_url()?;
    let front_config: FrontConfig =
        call_api(Method::GET, &api_base_url, "front_config", None::<i32>).await?;

    Ok(AppConfig {
        api_base_url,
        app_name: front_config.app_name,
        support_href: front_config.support_href,
        show_changelog: front_config.show_changelog,
    })
}
