//! Theme switch for light/dark modes.

use dioxus::prelude::*;

use crate::app::shell_context::use_shell;
use crate::app::theme::ThemeMode;

/// Checkbox switch: checked means dark.
#[component]
pub fn ThemeSwitch() -> Element {
    let shell = use_shell();
    let dark = shell.theme_mode() == ThemeMode::Dark;

    rsx! {
        label { class: "ui-switch", title: "Toggle dark mode",
            input {
                class: "input",
                r#type: "checkbox",
                checked: dark,
                onchange: move |e| {
                    let mode = if e.checked() { ThemeMode::Dark } else { ThemeMode::Light };
                    shell.change_theme(mode);
                },
            }
            div { class: "circle" }
        }
    }
}
