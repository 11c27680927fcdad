use yew::prelude::*;

use crate::hooks::use_theme::use_theme;

/// Shows which mode is active
#[function_component(ThemeStatus)]
pub fn theme_status() -> Html {
    match use_theme() {
        Ok(handle) => html! {
            <p class={classes!("theme-status", handle.mode().css_class())}>
                {handle.mode().label()}
            </p>
        },
        Err(e) => {
            log::error!("{e}");
            html! { <p class="theme-error">{e.to_string()}</p> }
        }
    }
}
