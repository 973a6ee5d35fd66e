/// Routes the `log` facade to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn init(level: log::Level) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(level);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(_level: log::Level) {}
