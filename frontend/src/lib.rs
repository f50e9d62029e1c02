use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::{DashboardPage, LeavePage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path="/dashboard" view=DashboardPage/>
                <Route path="/leave" view=LeavePage/>
            </Routes>
        </Router>
    }
}

/// Browser entry point: installs the panic hook and logger, starts loading
/// the runtime config, and mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already initialised: {}", err).into());
        }
        log::info!("Starting WorkHub frontend");

        wasm_bindgen_futures::spawn_local(async move {
            config::init().await;
        });

        mount_to_body(App);
    }
}
