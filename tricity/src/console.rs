//! Diagnostics output: the browser console on wasm, stdio elsewhere.

pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());

    #[cfg(not(target_arch = "wasm32"))]
    println!("{message}");
}

pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}
