//! Loading modal component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingModalProps {
    #[props(default = "Loading...".to_string())]
    pub message: String,
}

/// The `.modal` element. Always rendered; the stylesheet shows it while the
/// body carries the loading class.
#[component]
pub fn LoadingModal(props: LoadingModalProps) -> Element {
    rsx! {
        div {
            class: "modal",
            "{props.message}"
        }
    }
}
