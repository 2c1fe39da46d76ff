use anyhow::Result;
use dioxus::prelude::*;
use futures_util::StreamExt;
use log::{debug, error};
use reqwest::Method;
use url::Url;

use drawspace::{
    drawing::{Drawing, DrawingId},
    Page, SuccessResponse,
};

use crate::{
    model::DrawspaceUiModel,
    services::{
        api::{call_api, call_api_and_notify},
        toast_service::ToastCommand,
    },
};

pub enum DrawingCommand {
    Refresh,
    Delete(DrawingId),
}

pub static DRAWINGS_PAGE: GlobalSignal<Page<Drawing>> = Signal::global(Default::default);

pub async fn drawing_service(
    mut rx: UnboundedReceiver<DrawingCommand>,
    api_base_url: Url,
    drawings_page: Signal<Page<Drawing>>,
    ui_model: Signal<DrawspaceUiModel>,
    toast_service: Coroutine<ToastCommand>,
) {
    loop {
        let msg = rx.next().await;
        match msg {
            Some(DrawingCommand::Refresh) => {
                refresh_drawings(&api_base_url, drawings_page, ui_model).await;
            }

            Some(DrawingCommand::Delete(drawing_id)) => {
                let result: Result<SuccessResponse> = call_api_and_notify(
                    Method::DELETE,
                    &api_base_url,
                    &format!("drawings/{drawing_id}"),
                    None::<i32>,
                    &toast_service,
                    "Deleting drawing...",
                    "Drawing deleted",
                )
                .await;

                if result.is_ok() {
                    refresh_drawings(&api_base_url, drawings_page, ui_model).await;
                }
            }

            None => {}
        }
    }
}

async fn refresh_drawings(
    api_base_url: &Url,
    mut drawings_page: Signal<Page<Drawing>>,
    mut ui_model: Signal<DrawspaceUiModel>,
) {
    debug!("Refreshing drawings");
    ui_model.write().is_syncing_drawings = true;

    let result: Result<Page<Drawing>> =
        call_api(Method::GET, api_base_url, "drawings", None::<i32>).await;

    let mut ui_model = ui_model.write();
    ui_model.is_syncing_drawings = false;
    match result {
        Ok(page) => {
            ui_model.drawings_count = Some(Ok(page.total));
            *drawings_page.write() = page;
        }
        Err(err) => {
            error!("Failed to load drawings: {err:?}");
            ui_model.drawings_count = Some(Err(err.to_string()));
        }
    }
}
