mod api;
mod components;
pub mod config;
mod pages;
mod roles;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {}", err).into());
    }
    log::info!("starting {}", config::APP_NAME);

    wasm_bindgen_futures::spawn_local(async {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    router::mount_app();
}
