use anyhow::{Context, Result};
use dioxus::prelude::*;
use gloo_utils::errors::JsError;
use log::debug;

use crate::utils::get_local_storage;

const COLOR_THEME_KEY: &str = "color-theme";

pub static IS_DARK_MODE: GlobalSignal<bool> = Signal::global(|| false);

/// Applies the dark or light theme, flipping the current one when `toggle`
/// is set. The choice is persisted in local storage and wins over the
/// browser's `prefers-color-scheme` on the next load.
pub fn toggle_dark_mode(toggle: bool) -> Result<bool> {
    let local_storage = get_local_storage()?;
    let window = web_sys::window().context("Unable to get the window object")?;

    let dark_mode = match local_storage.get_item(COLOR_THEME_KEY) {
        Ok(Some(value)) => value == "dark",
        _ => matches!(
            window.match_media("(prefers-color-scheme: dark)"),
            Ok(Some(_))
        ),
    };
    let dark_mode = dark_mode != toggle;

    debug!("Switching to {} mode", if dark_mode { "dark" } else { "light" });
    apply_color_theme(dark_mode)?;
    local_storage
        .set_item(COLOR_THEME_KEY, if dark_mode { "dark" } else { "light" })
        .map_err(|err| JsError::try_from(err).unwrap())?;

    Ok(dark_mode)
}

fn apply_color_theme(dark_mode: bool) -> Result<()> {
    let document_element = web_sys::window()
        .context("Unable to get the window object")?
        .document()
        .context("Unable to get the document object")?
        .document_element()
        .context("Unable to get the document element")?;

    document_element
        .set_attribute(
            "data-theme",
            if dark_mode {
                "drawspacedark"
            } else {
                "drawspacelight"
            },
        )
        .map_err(|err| JsError::try_from(err).unwrap())?;

    let class_list = document_element.class_list();
    if dark_mode {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    }
    .map_err(|err| JsError::try_from(err).unwrap())?;

    Ok(())
}
