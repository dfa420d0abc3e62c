//! Inline SVG icons used by dialog controls.

use dioxus::prelude::*;

use crate::builder::Icon;

const TRASH_PATH: &str = "M9 2a1 1 0 00-.894.553L7.382 4H4a1 1 0 000 2v10a2 2 0 002 2h8a2 2 0 002-2V6a1 1 0 100-2h-3.382l-.724-1.447A1 1 0 0011 2H9zM7 8a1 1 0 012 0v6a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v6a1 1 0 102 0V8a1 1 0 00-1-1z";

const CROSS_PATH: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";

/// A decorative control icon.
#[component]
pub fn DialogIcon(icon: Icon) -> Element {
    let (class, path) = match icon {
        Icon::Warning => ("dialog-icon dialog-icon-warning", TRASH_PATH),
        Icon::Close => ("dialog-icon dialog-icon-close", CROSS_PATH),
    };

    rsx! {
        svg {
            class: "{class}",
            "aria-hidden": "true",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 20 20",
            fill: "currentColor",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "{path}",
            }
        }
    }
}
