use yew::prelude::*;

use crate::hooks::use_theme::use_theme;

/// Button flipping between light and dark mode
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = match use_theme() {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("{e}");
            return html! { <p class="theme-error">{e.to_string()}</p> };
        }
    };

    let mode = theme.mode();
    let label = mode.toggle_label();
    let onclick = theme.toggle.reform(|_: MouseEvent| None);

    html! {
        <button class="theme-toggle" {onclick} aria-label={label} title={label}>
            {mode.toggle_icon()}
        </button>
    }
}
