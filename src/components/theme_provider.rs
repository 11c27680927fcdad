use std::rc::Rc;

use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_theme::ThemeHandle;
use crate::services::browser::watch_system_preference;
use crate::services::store::ThemePreferenceStore;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
    /// Store to share; defaults to one backed by the browser
    #[prop_or_default]
    pub store: Option<Rc<ThemePreferenceStore>>,
}

/// Owns the application's theme store and shares a [`ThemeHandle`] with its subtree
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    // Resolved once per provider; the state handle keeps the same Rc across renders.
    let store = use_state(|| {
        props
            .store
            .clone()
            .unwrap_or_else(|| Rc::new(ThemePreferenceStore::browser()))
    });
    let is_dark = use_state_eq(|| store.preference());

    // Effect: Re-render consumers whenever the store changes
    {
        let store = Rc::clone(&*store);
        let setter = is_dark.setter();
        use_effect_with((), move |_| {
            // Catch changes made between the first render and this subscription
            setter.set(store.preference());
            let subscription = store.on_change(move |dark| setter.set(dark));
            move || drop(subscription)
        });
    }

    // Effect: Listen to system preference changes
    {
        let store = Rc::clone(&*store);
        use_effect_with((), move |_| {
            let listener = if Config::FOLLOW_SYSTEM_CHANGES {
                watch_system_preference(move |dark| {
                    store.follow_system(dark);
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let toggle = {
        let store = Rc::clone(&*store);
        Callback::from(move |explicit: Option<bool>| {
            store.toggle(explicit);
        })
    };

    let handle = ThemeHandle {
        is_dark: *is_dark,
        toggle,
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<ThemeHandle>>
    }
}
