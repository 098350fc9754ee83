use web_sys::console;

mod app;
mod components;
mod pages;
mod test_support;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting TwinMart storefront: mounting welcome screen".into());

    app::mount_app();
}
