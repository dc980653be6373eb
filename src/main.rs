//! Card Stack Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod data;
mod models;
mod motion;
mod mount;
mod stack;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = mount::mount_card_stack(mount::HOST_ELEMENT_ID) {
        web_sys::console::error_1(&format!("[MOUNT] {}", err).into());
        // Leave the failure to the host page
        wasm_bindgen::throw_str(&err.to_string());
    }
}
