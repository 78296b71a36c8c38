use formdeck::config::Settings;
use formdeck::routes::ROUTES;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use wasm_bindgen::JsValue;

mod components;
mod state;

use components::demo_form::{DemoForm1, DemoForm2};
use components::home::Home;
use state::FormState;

const SETTINGS_TOML: &str = include_str!("../formdeck.toml");

#[component]
pub fn App(settings: Settings) -> impl IntoView {
    // One store per session, shared by every view
    provide_context(FormState::new());
    let title = settings.app.title.clone();
    let base = settings.app.base_path.clone();
    provide_context(settings);

    // Route paths and nav hrefs stay relative to `base`
    view! {
        <Router base=base>
            <div class="flex h-screen bg-gray-100">
                // Sidebar
                <div class="w-64 bg-gray-800 text-white p-4 flex flex-col">
                    <h1 class="text-2xl font-bold mb-8">{title}</h1>
                    <nav class="space-y-1 flex-1">
                        {ROUTES
                            .iter()
                            .map(|route| view! { <NavLink href=route.path label=route.view.title() /> })
                            .collect_view()}
                    </nav>
                </div>

                // Main Content
                <div class="flex-1 overflow-y-auto">
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=Home/>
                        <Route path=path!("/demo1") view=DemoForm1/>
                        <Route path=path!("/demo2") view=DemoForm2/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="block p-2 hover:bg-gray-700 rounded transition-colors">
            {label}
        </A>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let settings = Settings::from_toml(SETTINGS_TOML)
        .map_err(|e| JsValue::from_str(&format!("Failed to load settings: {:#}", e)))?;

    let level = settings
        .log
        .level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Info);
    console_log::init_with_level(level).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("Starting {}", settings.app.title);

    leptos::mount::mount_to_body(move || view! { <App settings=settings /> });
    Ok(())
}
