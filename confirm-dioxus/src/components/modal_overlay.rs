//! Reusable modal overlay component.
//!
//! Encapsulates the overlay+backdrop+container pattern of a modal widget.

use dioxus::prelude::*;

/// Modal overlay that provides a backdrop and centered container.
///
/// Pressing on the backdrop triggers `on_backdrop_click`. Presses inside the
/// container are stopped from propagating to the backdrop. Key presses inside
/// the container bubble to `on_keydown`.
#[component]
pub fn ModalOverlay(
    id: String,
    class: Option<&'static str>,
    z_index: Option<&'static str>,
    on_backdrop_click: EventHandler<MouseEvent>,
    on_keydown: EventHandler<KeyboardEvent>,
    children: Element,
) -> Element {
    let z = z_index.unwrap_or("--z-modal");
    let container_class = match class {
        Some(c) => format!("modal-container {c}"),
        None => "modal-container".to_string(),
    };

    rsx! {
        div {
            id: "{id}",
            class: "modal-overlay",
            role: "dialog",
            aria_modal: "true",
            tabindex: "-1",
            style: "z-index: var({z});",
            onmousedown: move |evt| on_backdrop_click.call(evt),
            onkeydown: move |evt| on_keydown.call(evt),

            div {
                class: "{container_class}",
                onmousedown: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
