use dioxus::prelude::*;

pub static UI_MODEL: GlobalSignal<DrawspaceUiModel> = Signal::global(Default::default);

#[derive(Debug, Default)]
pub struct DrawspaceUiModel {
    pub drawings_count: Option<Result<usize, String>>,
    pub is_syncing_drawings: bool,
}
