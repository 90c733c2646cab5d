pub mod api;
pub mod components;
pub mod config;
pub mod export;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("starting hrdesk frontend");

    // Config may arrive after mount; early callers fall back to defaults.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
