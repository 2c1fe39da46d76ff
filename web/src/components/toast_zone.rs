#![allow(non_snake_case)]

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;

use crate::{
    components::spinner::Spinner,
    services::toast_service::{ToastCommand, TOASTS},
};

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub timeout: Option<u128>,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            message: Default::default(),
            kind: Default::default(),
            timeout: Default::default(),
        }
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum ToastKind {
    #[default]
    Message,
    Loading,
    Success,
    Failure,
}

#[component]
pub fn ToastZone() -> Element {
    let toast_service = use_coroutine_handle::<ToastCommand>();

    rsx! {
        div {
            class: "toast toast-end z-50",

            for (id, toast) in TOASTS() {
                ToastElement {
                    key: "{id}",
                    message: toast.message.clone(),
                    kind: toast.kind,
                    timeout: toast.timeout,
                    on_close: move |_| {
                        toast_service.send(ToastCommand::Close(id))
                    }
                }
            }
        }
    }
}

#[component]
fn ToastElement(
    message: ReadOnlySignal<String>,
    kind: ReadOnlySignal<ToastKind>,
    timeout: ReadOnlySignal<Option<u128>>,
    on_close: EventHandler,
) -> Element {
    let toast_style = use_memo(move || match kind() {
        ToastKind::Message | ToastKind::Loading => "alert-info",
        ToastKind::Success => "alert-success",
        ToastKind::Failure => "alert-error",
    })();

    let _ = use_resource(move || async move {
        if let Some(time) = timeout() {
            TimeoutFuture::new(time as u32).await;
            on_close.call(());
        }
    });

    rsx! {
        div {
            class: "alert {toast_style} shadow-lg",

            match kind() {
                ToastKind::Message => rsx! {},
                ToastKind::Loading => rsx! { Spinner { class: "loading-xs" } },
                ToastKind::Success => rsx! { span { class: "text-success", "✓" } },
                ToastKind::Failure => rsx! { span { class: "text-error", "✗" } },
            }

            p { class: "text-sm", "{message}" }

            button {
                "type": "button",
                class: "btn btn-ghost btn-xs",
                onclick: move |_| on_close.call(()),
                "✕"
            }
        }
    }
}
