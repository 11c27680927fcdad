use theme_preference::components::{ThemeProvider, ThemeStatus, ThemeToggle};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Theme Preference"}</h1>
                    <ThemeToggle />
                </header>

                <main class="app-main">
                    <ThemeStatus />
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ThemeProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
