use web_sys::console;

mod app;
mod components;
mod pages;
mod test_support;

pub use app::{app_root, mount_app};

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting TwinMart storefront (wasm)".into());

    mount_app();
    log::info!("welcome screen mounted");
}
